// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form payloads as they arrive from the display surface.
//!
//! Emails arrive as raw strings and are normalized inside the
//! handlers; an `id` of `None` means "create", `Some` means "edit".

use staffdesk_domain::{RequestStatus, Role};

/// The self-service registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    /// First name, trimmed by the handler.
    pub first_name: String,
    /// Last name, trimmed by the handler.
    pub last_name: String,
    /// Raw email input.
    pub email: String,
    /// Chosen password.
    pub password: String,
}

/// The admin account create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountForm {
    /// `None` to create, `Some` to edit.
    pub id: Option<i64>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Raw email input.
    pub email: String,
    /// Password (the form shows and edits the stored value).
    pub password: String,
    /// Assigned role.
    pub role: Role,
    /// Verified flag.
    pub verified: bool,
}

/// The department create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentForm {
    /// `None` to create, `Some` to edit.
    pub id: Option<i64>,
    /// Department name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

/// The employee create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    /// `None` to create, `Some` to edit.
    pub id: Option<i64>,
    /// External identifier, free text.
    pub employee_id: String,
    /// Referenced account id, not checked for existence.
    pub user_id: i64,
    /// Referenced department id, not checked for existence.
    pub department_id: i64,
    /// Job title.
    pub position: String,
    /// Hire date, `YYYY-MM-DD`.
    pub hire_date: String,
}

/// The service request create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequestForm {
    /// `None` to create, `Some` to edit.
    pub id: Option<i64>,
    /// Referenced account id, not checked for existence.
    pub user_id: i64,
    /// One-line summary.
    pub subject: String,
    /// Free-text body.
    pub details: String,
    /// Workflow status.
    pub status: RequestStatus,
}
