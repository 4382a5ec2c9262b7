// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// Validates that a hire date string is a real `YYYY-MM-DD` date.
///
/// Dates are stored as strings; this check runs once at record
/// construction so downstream readers never see an unparseable value.
///
/// # Arguments
///
/// * `value` - The date string to validate
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string does not parse.
pub fn validate_hire_date(value: &str) -> Result<(), DomainError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|_| {
        DomainError::DateParseError {
            date_string: value.to_string(),
        }
    })?;
    Ok(())
}

/// Validates that a required text field is non-empty after trimming.
///
/// # Arguments
///
/// * `field` - The field name, used in the error
/// * `value` - The value to check
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the trimmed value is empty.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}
