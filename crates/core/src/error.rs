// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::DomainError;

/// Names the entity collections, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The accounts collection.
    Account,
    /// The departments collection.
    Department,
    /// The employees collection.
    Employee,
    /// The service requests collection.
    Request,
}

impl EntityKind {
    /// Converts this kind to its display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Department => "Department",
            Self::Employee => "Employee",
            Self::Request => "Request",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The email address is already registered to another account.
    DuplicateEmail {
        /// The conflicting address.
        email: String,
    },
    /// No record with the given id exists in the collection.
    NotFound {
        /// The collection that was searched.
        kind: EntityKind,
        /// The id that was not found.
        id: i64,
    },
    /// No account with the given email exists.
    AccountNotFound {
        /// The address that was looked up.
        email: String,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail { email } => {
                write!(f, "Email '{email}' is already registered")
            }
            Self::NotFound { kind, id } => write!(f, "{kind} with id {id} not found"),
            Self::AccountNotFound { email } => {
                write!(f, "Account with email '{email}' not found")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
