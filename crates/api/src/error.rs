// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use staffdesk::{CoreError, EntityKind};

/// Authentication flow errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No account matched the email, password and verified state.
    ///
    /// The three conditions are deliberately not distinguished so that
    /// the failure message never reveals which one was wrong.
    InvalidCredentials,
    /// Verification was requested but no registration is pending.
    NoPendingVerification,
    /// The pending-verification marker points at an account that no
    /// longer exists.
    AccountNotFound {
        /// The address the marker referenced.
        email: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => {
                write!(f, "Invalid email or password, or email not verified.")
            }
            Self::NoPendingVerification => write!(f, "No pending verification found"),
            Self::AccountNotFound { .. } => write!(f, "Account not found"),
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Display strings are the user-facing notification texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Login failed.
    InvalidCredentials,
    /// Verification was requested but no registration is pending.
    NoPendingVerification,
    /// No account holds the given email.
    AccountNotFound {
        /// The address that was looked up.
        email: String,
    },
    /// The email address is already registered to another account.
    DuplicateEmail {
        /// The conflicting address.
        email: String,
    },
    /// No record with the given id exists in the collection.
    ResourceNotFound {
        /// The collection that was searched.
        kind: EntityKind,
        /// The id that was not found.
        id: i64,
    },
    /// Invalid input was provided.
    ValidationFailed {
        /// A human-readable description of the error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An account may not delete itself.
    SelfDeletionForbidden,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => {
                write!(f, "Invalid email or password, or email not verified.")
            }
            Self::NoPendingVerification => write!(f, "No pending verification found"),
            Self::AccountNotFound { .. } => write!(f, "Account not found"),
            Self::DuplicateEmail { .. } => write!(f, "Email already registered"),
            Self::ResourceNotFound { kind, id } => {
                write!(f, "{kind} with id {id} not found")
            }
            Self::ValidationFailed { message } | Self::PasswordPolicyViolation { message } => {
                write!(f, "{message}")
            }
            Self::SelfDeletionForbidden => {
                write!(f, "You cannot delete your own account")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::NoPendingVerification => Self::NoPendingVerification,
            AuthError::AccountNotFound { email } => Self::AccountNotFound { email },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a core error into the API error contract.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DuplicateEmail { email } => ApiError::DuplicateEmail { email },
        CoreError::NotFound { kind, id } => ApiError::ResourceNotFound { kind, id },
        CoreError::AccountNotFound { email } => ApiError::AccountNotFound { email },
        CoreError::DomainViolation(violation) => ApiError::ValidationFailed {
            message: violation.to_string(),
        },
    }
}
