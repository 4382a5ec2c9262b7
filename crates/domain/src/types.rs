// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_hire_date;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role assigned to an account.
///
/// Roles gate access to the administrative screens. They apply to
/// accounts only; employees are plain records without authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account. May view its own profile and submit requests.
    #[default]
    User,
    /// Administrator. May manage accounts, departments, and employees.
    Admin,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// A normalized email address.
///
/// Emails are the login key and must be unique across accounts.
/// Normalization (trim + lowercase) happens once at construction so that
/// equality is the case-insensitive comparison the rest of the system
/// relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress {
    /// The normalized address.
    value: String,
}

impl EmailAddress {
    /// Creates a new `EmailAddress`, trimming and lowercasing the input.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw address as entered
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the trimmed value is empty
    /// or contains no `@`.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let normalized: String = value.trim().to_lowercase();
        if normalized.is_empty() || !normalized.contains('@') {
            return Err(DomainError::InvalidEmail(value.to_string()));
        }
        Ok(Self { value: normalized })
    }

    /// Returns the normalized address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Compares against a raw string using the same normalization.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        self.value == raw.trim().to_lowercase()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A login account.
///
/// Accounts are created through self-registration (unverified, `User`
/// role) or by an administrator (role and verified flag settable).
/// The password is stored as entered; hashing is out of scope for this
/// demo-grade system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier within the accounts collection.
    pub id: i64,
    /// The account holder's first name.
    pub first_name: String,
    /// The account holder's last name.
    pub last_name: String,
    /// The login email (unique, case-insensitive).
    pub email: EmailAddress,
    /// The login password, stored as a plain value.
    pub password: String,
    /// The account's role.
    pub role: Role,
    /// Whether the email has been verified. Unverified accounts may not
    /// log in.
    pub verified: bool,
}

impl Account {
    /// Creates a new `Account`.
    #[must_use]
    pub const fn new(
        id: i64,
        first_name: String,
        last_name: String,
        email: EmailAddress,
        password: String,
        role: Role,
        verified: bool,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            password,
            role,
            verified,
        }
    }

    /// Returns the display name, `"First Last"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns whether this account holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// An organizational department.
///
/// Deleting a department does not cascade: employees keep their
/// `department_id` and the reference resolves to "Unknown" at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier within the departments collection.
    pub id: i64,
    /// The department name.
    pub name: String,
    /// A free-text description.
    pub description: String,
}

impl Department {
    /// Creates a new `Department`.
    #[must_use]
    pub const fn new(id: i64, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

/// An employee record.
///
/// `user_id` and `department_id` are foreign ids that are deliberately
/// NOT checked against existence at write time; dangling references are
/// tolerated and resolved with a fallback label on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier within the employees collection.
    pub id: i64,
    /// External employee identifier (free text, not enforced unique).
    pub employee_id: String,
    /// The id of the `Account` this employee corresponds to.
    pub user_id: i64,
    /// The id of the `Department` this employee belongs to.
    pub department_id: i64,
    /// The employee's position title.
    pub position: String,
    /// The hire date as an ISO 8601 `YYYY-MM-DD` string.
    pub hire_date: String,
}

impl Employee {
    /// Creates a new `Employee`, validating the hire date format.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if `hire_date` is not a
    /// valid `YYYY-MM-DD` date.
    pub fn new(
        id: i64,
        employee_id: String,
        user_id: i64,
        department_id: i64,
        position: String,
        hire_date: String,
    ) -> Result<Self, DomainError> {
        validate_hire_date(&hire_date)?;
        Ok(Self {
            id,
            employee_id,
            user_id,
            department_id,
            position,
            hire_date,
        })
    }
}

/// The workflow state of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Submitted and awaiting review.
    #[default]
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Rejected by an administrator.
    Rejected,
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RequestStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A personnel service request (leave, equipment, and similar).
///
/// Requests follow the same CRUD contract as employees. `user_id` refers
/// to an `Account` and is resolved with the same dangling-reference
/// policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    /// Unique identifier within the requests collection.
    pub id: i64,
    /// The id of the submitting `Account`.
    pub user_id: i64,
    /// A short subject line.
    pub subject: String,
    /// Free-text details.
    pub details: String,
    /// The workflow state.
    pub status: RequestStatus,
}

impl ServiceRequest {
    /// Creates a new `ServiceRequest`.
    #[must_use]
    pub const fn new(
        id: i64,
        user_id: i64,
        subject: String,
        details: String,
        status: RequestStatus,
    ) -> Self {
        Self {
            id,
            user_id,
            subject,
            details,
            status,
        }
    }
}
