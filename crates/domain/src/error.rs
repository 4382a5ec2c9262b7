// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An email address is empty or malformed.
    InvalidEmail(String),
    /// A required text field is empty.
    MissingField(&'static str),
    /// A role string is not recognized.
    InvalidRole(String),
    /// A request status string is not recognized.
    InvalidRequestStatus(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(value) => write!(f, "Invalid email address: '{value}'"),
            Self::MissingField(field) => write!(f, "Field '{field}' must not be empty"),
            Self::InvalidRole(value) => write!(f, "Unknown role: {value}"),
            Self::InvalidRequestStatus(value) => {
                write!(f, "Unknown request status: {value}")
            }
            Self::DateParseError { date_string } => {
                write!(f, "Failed to parse date '{date_string}': expected YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for DomainError {}
