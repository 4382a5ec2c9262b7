// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::blob::MemoryBlobStore;
use crate::repository::Repository;
use crate::store::SnapshotStore;
use staffdesk::{AccountFields, DepartmentFields, EmployeeFields, ServiceRequestFields};
use staffdesk_domain::{EmailAddress, RequestStatus, Role};

pub fn email(raw: &str) -> EmailAddress {
    EmailAddress::new(raw).unwrap()
}

/// A store backed by a fresh in-memory blob; the second return value
/// shares the blob map and can reopen the same data.
pub fn memory_store() -> (SnapshotStore, MemoryBlobStore) {
    let blob: MemoryBlobStore = MemoryBlobStore::new();
    (SnapshotStore::new(Box::new(blob.clone())), blob)
}

pub fn open_repository() -> (Repository, MemoryBlobStore) {
    let (store, blob) = memory_store();
    (Repository::open(store), blob)
}

pub fn account_fields(raw_email: &str) -> AccountFields {
    AccountFields {
        first_name: String::from("Test"),
        last_name: String::from("User"),
        email: email(raw_email),
        password: String::from("Password123!"),
        role: Role::User,
        verified: false,
    }
}

pub fn department_fields(name: &str) -> DepartmentFields {
    DepartmentFields {
        name: String::from(name),
        description: format!("{name} description"),
    }
}

pub fn employee_fields(user_id: i64, department_id: i64) -> EmployeeFields {
    EmployeeFields {
        employee_id: String::from("EMP-100"),
        user_id,
        department_id,
        position: String::from("Engineer"),
        hire_date: String::from("2024-03-15"),
    }
}

pub fn request_fields(user_id: i64) -> ServiceRequestFields {
    ServiceRequestFields {
        user_id,
        subject: String::from("Laptop upgrade"),
        details: String::from("Requesting a RAM upgrade"),
        status: RequestStatus::Pending,
    }
}
