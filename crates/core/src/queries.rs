// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Snapshot;
use staffdesk_domain::{Account, EmailAddress};

/// Label substituted for a dangling reference at read time.
///
/// Deletions do not cascade, so an employee may reference an account or
/// department that no longer exists. Reads resolve such references to
/// this label instead of failing.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// An employee joined with its referenced account and department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    /// The employee record id.
    pub id: i64,
    /// The external employee identifier.
    pub employee_id: String,
    /// The referenced account's email, or `UNKNOWN_LABEL`.
    pub user_email: String,
    /// The position title.
    pub position: String,
    /// The referenced department's name, or `UNKNOWN_LABEL`.
    pub department_name: String,
    /// The hire date.
    pub hire_date: String,
}

/// A service request joined with its submitting account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRow {
    /// The request record id.
    pub id: i64,
    /// The submitting account's email, or `UNKNOWN_LABEL`.
    pub user_email: String,
    /// The subject line.
    pub subject: String,
    /// The free-text details.
    pub details: String,
    /// The workflow state as a display string.
    pub status: String,
}

/// Resolves every employee with its account email and department name.
///
/// Rows come back in insertion order. Dangling references resolve to
/// `UNKNOWN_LABEL`, never an error.
#[must_use]
pub fn employee_rows(snapshot: &Snapshot) -> Vec<EmployeeRow> {
    snapshot
        .employees
        .iter()
        .map(|emp| {
            let user_email: String = snapshot
                .account_by_id(emp.user_id)
                .map_or_else(|| String::from(UNKNOWN_LABEL), |acc| acc.email.to_string());
            let department_name: String = snapshot
                .department_by_id(emp.department_id)
                .map_or_else(|| String::from(UNKNOWN_LABEL), |dept| dept.name.clone());
            EmployeeRow {
                id: emp.id,
                employee_id: emp.employee_id.clone(),
                user_email,
                position: emp.position.clone(),
                department_name,
                hire_date: emp.hire_date.clone(),
            }
        })
        .collect()
}

/// Resolves every service request with its submitting account email.
#[must_use]
pub fn request_rows(snapshot: &Snapshot) -> Vec<RequestRow> {
    snapshot
        .requests
        .iter()
        .map(|req| {
            let user_email: String = snapshot
                .account_by_id(req.user_id)
                .map_or_else(|| String::from(UNKNOWN_LABEL), |acc| acc.email.to_string());
            RequestRow {
                id: req.id,
                user_email,
                subject: req.subject.clone(),
                details: req.details.clone(),
                status: req.status.to_string(),
            }
        })
        .collect()
}

/// Finds the account matching a full set of login credentials.
///
/// All three conditions must hold: the email matches (case-insensitively,
/// via the normalized newtype), the password matches exactly, and the
/// account is verified. Returns `None` otherwise; the caller decides how
/// to report the failure.
#[must_use]
pub fn authenticate<'a>(
    snapshot: &'a Snapshot,
    email: &EmailAddress,
    password: &str,
) -> Option<&'a Account> {
    snapshot
        .accounts
        .iter()
        .find(|account| account.email == *email && account.password == password && account.verified)
}
