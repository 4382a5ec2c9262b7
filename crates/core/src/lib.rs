// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod queries;
mod state;

#[cfg(test)]
mod tests;

use staffdesk_domain::EmailAddress;

// Re-export public types and functions
pub use error::{CoreError, EntityKind};
pub use queries::{
    EmployeeRow, RequestRow, UNKNOWN_LABEL, authenticate, employee_rows, request_rows,
};
pub use state::{
    AccountFields, DepartmentFields, EmployeeFields, ServiceRequestFields, Snapshot, next_id,
};

/// Validates that an email address is not already taken by another account.
///
/// This is a read-only validation that supports both creation (no
/// exclusion) and edits (the edited account's own address is not a
/// conflict).
///
/// # Arguments
///
/// * `snapshot` - The snapshot to check against
/// * `email` - The candidate address (already normalized)
/// * `exclude_id` - An account id to ignore, for edits
///
/// # Errors
///
/// Returns `CoreError::DuplicateEmail` if another account holds the
/// address.
pub fn validate_email_available(
    snapshot: &Snapshot,
    email: &EmailAddress,
    exclude_id: Option<i64>,
) -> Result<(), CoreError> {
    let taken: bool = snapshot
        .accounts
        .iter()
        .any(|account| account.email == *email && Some(account.id) != exclude_id);
    if taken {
        return Err(CoreError::DuplicateEmail {
            email: email.value().to_string(),
        });
    }
    Ok(())
}
