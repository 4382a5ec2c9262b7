// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Snapshot;
use staffdesk_domain::{
    Account, Department, EmailAddress, Employee, RequestStatus, Role, ServiceRequest,
};

pub fn email(raw: &str) -> EmailAddress {
    EmailAddress::new(raw).unwrap()
}

pub fn create_test_account(id: i64, raw_email: &str, role: Role, verified: bool) -> Account {
    Account::new(
        id,
        String::from("Test"),
        format!("User{id}"),
        email(raw_email),
        String::from("Password123!"),
        role,
        verified,
    )
}

pub fn create_test_snapshot() -> Snapshot {
    let mut snapshot: Snapshot = Snapshot::new();
    snapshot
        .accounts
        .push(create_test_account(1, "admin@example.com", Role::Admin, true));
    snapshot
        .accounts
        .push(create_test_account(2, "user@example.com", Role::User, false));
    snapshot.departments.push(Department::new(
        1,
        String::from("Engineering"),
        String::from("Software development and IT"),
    ));
    snapshot.departments.push(Department::new(
        2,
        String::from("HR"),
        String::from("Human Resources"),
    ));
    snapshot.employees.push(
        Employee::new(
            1,
            String::from("EMP-001"),
            1,
            1,
            String::from("Engineer"),
            String::from("2024-03-15"),
        )
        .unwrap(),
    );
    snapshot.requests.push(ServiceRequest::new(
        1,
        1,
        String::from("Laptop upgrade"),
        String::from("Requesting a RAM upgrade"),
        RequestStatus::Pending,
    ));
    snapshot
}
