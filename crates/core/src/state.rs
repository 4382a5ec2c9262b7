// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use staffdesk_domain::{
    Account, Department, EmailAddress, Employee, RequestStatus, Role, ServiceRequest,
};

/// Assigns the next id for a collection.
///
/// Ids are `max(existing) + 1`, or `1` for an empty collection. This is
/// NOT a monotonic counter: deleting the record with the highest id makes
/// that id eligible for reuse.
pub fn next_id<I>(ids: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    ids.into_iter().max().map_or(1, |max| max + 1)
}

/// The complete system state: every entity collection, in insertion
/// order.
///
/// The snapshot is the atomic unit of persistence; the store serializes
/// and replaces it wholesale on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// All login accounts.
    pub accounts: Vec<Account>,
    /// All departments.
    pub departments: Vec<Department>,
    /// All employee records.
    pub employees: Vec<Employee>,
    /// All service requests.
    pub requests: Vec<ServiceRequest>,
}

impl Snapshot {
    /// Creates a new empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accounts: Vec::new(),
            departments: Vec::new(),
            employees: Vec::new(),
            requests: Vec::new(),
        }
    }

    /// Finds an account by id.
    #[must_use]
    pub fn account_by_id(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Finds an account by normalized email (case-insensitive by
    /// construction of `EmailAddress`).
    #[must_use]
    pub fn account_by_email(&self, email: &EmailAddress) -> Option<&Account> {
        self.accounts.iter().find(|account| account.email == *email)
    }

    /// Finds a department by id.
    #[must_use]
    pub fn department_by_id(&self, id: i64) -> Option<&Department> {
        self.departments.iter().find(|dept| dept.id == id)
    }

    /// Finds an employee by id.
    #[must_use]
    pub fn employee_by_id(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|emp| emp.id == id)
    }

    /// Finds a service request by id.
    #[must_use]
    pub fn request_by_id(&self, id: i64) -> Option<&ServiceRequest> {
        self.requests.iter().find(|req| req.id == id)
    }

    /// Returns the id the next created account would receive.
    #[must_use]
    pub fn next_account_id(&self) -> i64 {
        next_id(self.accounts.iter().map(|account| account.id))
    }

    /// Returns the id the next created department would receive.
    #[must_use]
    pub fn next_department_id(&self) -> i64 {
        next_id(self.departments.iter().map(|dept| dept.id))
    }

    /// Returns the id the next created employee would receive.
    #[must_use]
    pub fn next_employee_id(&self) -> i64 {
        next_id(self.employees.iter().map(|emp| emp.id))
    }

    /// Returns the id the next created service request would receive.
    #[must_use]
    pub fn next_request_id(&self) -> i64 {
        next_id(self.requests.iter().map(|req| req.id))
    }
}

/// Field payload for creating or editing an account.
///
/// Create and edit set every field, matching the account form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFields {
    /// The account holder's first name.
    pub first_name: String,
    /// The account holder's last name.
    pub last_name: String,
    /// The login email (normalized).
    pub email: EmailAddress,
    /// The login password.
    pub password: String,
    /// The account's role.
    pub role: Role,
    /// Whether the email is verified.
    pub verified: bool,
}

/// Field payload for creating or editing a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentFields {
    /// The department name.
    pub name: String,
    /// A free-text description.
    pub description: String,
}

/// Field payload for creating or editing an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    /// External employee identifier.
    pub employee_id: String,
    /// The referenced account id (not checked for existence).
    pub user_id: i64,
    /// The referenced department id (not checked for existence).
    pub department_id: i64,
    /// The position title.
    pub position: String,
    /// The hire date, `YYYY-MM-DD`.
    pub hire_date: String,
}

/// Field payload for creating or editing a service request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequestFields {
    /// The submitting account id (not checked for existence).
    pub user_id: i64,
    /// A short subject line.
    pub subject: String,
    /// Free-text details.
    pub details: String,
    /// The workflow state.
    pub status: RequestStatus,
}
