// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One handler per user-facing flow.
//!
//! Handlers glue the auth service, repository and route guard to the
//! collaborator contracts: every outcome is reported through the
//! [`Notifier`] with the user-facing message, and navigation targets
//! are returned rather than performed. No error crosses a handler
//! boundary unreported.

use staffdesk::{AccountFields, DepartmentFields, EmployeeFields, ServiceRequestFields};
use staffdesk_domain::{DomainError, EmailAddress, validate_required};
use staffdesk_persistence::Repository;

use crate::auth::{AuthService, AuthSession};
use crate::error::{ApiError, translate_core_error};
use crate::forms::{
    AccountForm, DepartmentForm, EmployeeForm, RegistrationForm, ServiceRequestForm,
};
use crate::notifier::{Notifier, Severity};
use crate::password_policy::PasswordPolicy;
use crate::router::{RedirectReason, Resolution, Route, resolve};
use crate::view::{ViewData, ViewRenderer, view_data};

/// Resolves a route token against the session and returns the route to
/// display, notifying on redirect.
pub fn navigate(token: &str, session: &AuthSession, notifier: &dyn Notifier) -> Route {
    let requested: Route = Route::parse(token);
    match resolve(requested, session) {
        Resolution::Allow(route) => route,
        Resolution::Redirect { target, reason } => {
            match reason {
                RedirectReason::AuthRequired => {
                    notifier.notify("Please login to access this page", Severity::Warning);
                }
                RedirectReason::Forbidden => {
                    notifier.notify(
                        "Access denied. Admin privileges required.",
                        Severity::Danger,
                    );
                }
            }
            target
        }
    }
}

/// Renders the data payload for an already-resolved route.
pub fn show(
    route: Route,
    session: &AuthSession,
    repository: &Repository,
    renderer: &mut dyn ViewRenderer,
) {
    let data: ViewData = view_data(route, session, repository);
    renderer.render(&data);
}

/// Handles the registration form.
///
/// # Errors
///
/// Returns the underlying failure after notifying; on success the
/// caller navigates to the verification page.
pub fn register(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    form: RegistrationForm,
) -> Result<Route, ApiError> {
    match AuthService::register(repository, form) {
        Ok(_) => {
            notifier.notify(
                "Registration successful! Please verify your email.",
                Severity::Success,
            );
            Ok(Route::VerifyEmail)
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}

/// Handles the "simulate verification" button.
///
/// # Errors
///
/// Returns the underlying failure after notifying; a missing pending
/// marker is a warning, a dangling one a danger.
pub fn simulate_verify(
    repository: &mut Repository,
    notifier: &dyn Notifier,
) -> Result<Route, ApiError> {
    match AuthService::simulate_verify(repository) {
        Ok(_) => {
            notifier.notify(
                "Email verified successfully! You can now login.",
                Severity::Success,
            );
            Ok(Route::Login)
        }
        Err(err) => {
            let api_err: ApiError = err.into();
            let severity: Severity = if api_err == ApiError::NoPendingVerification {
                Severity::Warning
            } else {
                Severity::Danger
            };
            notifier.notify(&api_err.to_string(), severity);
            Err(api_err)
        }
    }
}

/// Handles the login form.
///
/// # Errors
///
/// Returns `InvalidCredentials` after notifying; the session stays
/// `Anonymous`.
pub fn login(
    repository: &mut Repository,
    session: &mut AuthSession,
    notifier: &dyn Notifier,
    email: &str,
    password: &str,
) -> Result<Route, ApiError> {
    match AuthService::login(repository, session, email, password) {
        Ok(account) => {
            notifier.notify(
                &format!("Welcome back, {}!", account.first_name),
                Severity::Success,
            );
            Ok(Route::Profile)
        }
        Err(err) => {
            let api_err: ApiError = err.into();
            notifier.notify(&api_err.to_string(), Severity::Danger);
            Err(api_err)
        }
    }
}

/// Handles the logout action.
pub fn logout(
    repository: &mut Repository,
    session: &mut AuthSession,
    notifier: &dyn Notifier,
) -> Route {
    AuthService::logout(repository, session);
    notifier.notify("Logged out successfully", Severity::Info);
    Route::Home
}

/// Handles the admin account form, creating or editing by id.
///
/// # Errors
///
/// Returns the underlying failure after notifying.
pub fn save_account(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    form: AccountForm,
) -> Result<(), ApiError> {
    let updating: bool = form.id.is_some();
    match apply_account_form(repository, form) {
        Ok(()) => {
            let message: &str = if updating {
                "Account updated successfully"
            } else {
                "Account created successfully"
            };
            notifier.notify(message, Severity::Success);
            Ok(())
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}

fn invalid_input(err: &DomainError) -> ApiError {
    ApiError::ValidationFailed {
        message: err.to_string(),
    }
}

fn apply_account_form(repository: &mut Repository, form: AccountForm) -> Result<(), ApiError> {
    PasswordPolicy::default().validate(&form.password)?;
    validate_required("first name", &form.first_name)
        .and_then(|()| validate_required("last name", &form.last_name))
        .map_err(|err| invalid_input(&err))?;
    let email: EmailAddress =
        EmailAddress::new(&form.email).map_err(|err| invalid_input(&err))?;
    let fields: AccountFields = AccountFields {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email,
        password: form.password,
        role: form.role,
        verified: form.verified,
    };
    match form.id {
        Some(id) => repository
            .update_account(id, fields)
            .map_err(translate_core_error),
        None => {
            repository
                .create_account(fields)
                .map_err(translate_core_error)?;
            Ok(())
        }
    }
}

/// Handles an admin password reset.
///
/// # Errors
///
/// Returns the underlying failure after notifying.
pub fn reset_password(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    id: i64,
    new_password: String,
) -> Result<(), ApiError> {
    let result: Result<(), ApiError> = PasswordPolicy::default()
        .validate(&new_password)
        .map_err(ApiError::from)
        .and_then(|()| {
            repository
                .set_password(id, new_password)
                .map_err(translate_core_error)
        });
    match result {
        Ok(()) => {
            notifier.notify("Password reset successfully", Severity::Success);
            Ok(())
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}

/// Handles an admin account deletion.
///
/// The currently authenticated account may not delete itself; this is
/// rejected before the repository is touched.
///
/// # Errors
///
/// Returns `SelfDeletionForbidden` or the underlying failure after
/// notifying.
pub fn delete_account(
    repository: &mut Repository,
    session: &AuthSession,
    notifier: &dyn Notifier,
    id: i64,
) -> Result<(), ApiError> {
    if session.identity().is_some_and(|account| account.id == id) {
        let err: ApiError = ApiError::SelfDeletionForbidden;
        notifier.notify(&err.to_string(), Severity::Danger);
        return Err(err);
    }
    match repository.delete_account(id).map_err(translate_core_error) {
        Ok(()) => {
            notifier.notify("Account deleted successfully", Severity::Success);
            Ok(())
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}

/// Handles the department form, creating or editing by id.
///
/// # Errors
///
/// Returns the underlying failure after notifying.
pub fn save_department(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    form: DepartmentForm,
) -> Result<(), ApiError> {
    let updating: bool = form.id.is_some();
    match apply_department_form(repository, form) {
        Ok(()) => {
            let message: &str = if updating {
                "Department updated successfully"
            } else {
                "Department created successfully"
            };
            notifier.notify(message, Severity::Success);
            Ok(())
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}

fn apply_department_form(
    repository: &mut Repository,
    form: DepartmentForm,
) -> Result<(), ApiError> {
    validate_required("department name", &form.name).map_err(|err| invalid_input(&err))?;
    let fields: DepartmentFields = DepartmentFields {
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
    };
    match form.id {
        Some(id) => repository
            .update_department(id, fields)
            .map_err(translate_core_error),
        None => {
            repository.create_department(fields);
            Ok(())
        }
    }
}

/// Handles a department deletion.
///
/// Deletion does not cascade; employee records referencing the
/// department resolve to "Unknown" afterwards.
///
/// # Errors
///
/// Returns the underlying failure after notifying.
pub fn delete_department(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    id: i64,
) -> Result<(), ApiError> {
    match repository
        .delete_department(id)
        .map_err(translate_core_error)
    {
        Ok(()) => {
            notifier.notify("Department deleted successfully", Severity::Success);
            Ok(())
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}

/// Handles the employee form, creating or editing by id.
///
/// # Errors
///
/// Returns the underlying failure after notifying.
pub fn save_employee(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    form: EmployeeForm,
) -> Result<(), ApiError> {
    let fields: EmployeeFields = EmployeeFields {
        employee_id: form.employee_id.trim().to_string(),
        user_id: form.user_id,
        department_id: form.department_id,
        position: form.position.trim().to_string(),
        hire_date: form.hire_date,
    };
    let result: Result<&str, ApiError> = match form.id {
        Some(id) => repository
            .update_employee(id, fields)
            .map_err(translate_core_error)
            .map(|()| "Employee updated successfully"),
        None => repository
            .create_employee(fields)
            .map_err(translate_core_error)
            .map(|_| "Employee created successfully"),
    };
    match result {
        Ok(message) => {
            notifier.notify(message, Severity::Success);
            Ok(())
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}

/// Handles an employee deletion.
///
/// # Errors
///
/// Returns the underlying failure after notifying.
pub fn delete_employee(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    id: i64,
) -> Result<(), ApiError> {
    match repository.delete_employee(id).map_err(translate_core_error) {
        Ok(()) => {
            notifier.notify("Employee deleted successfully", Severity::Success);
            Ok(())
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}

/// Handles the service request form, creating or editing by id.
///
/// # Errors
///
/// Returns the underlying failure after notifying.
pub fn save_request(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    form: ServiceRequestForm,
) -> Result<(), ApiError> {
    let fields: ServiceRequestFields = ServiceRequestFields {
        user_id: form.user_id,
        subject: form.subject.trim().to_string(),
        details: form.details.trim().to_string(),
        status: form.status,
    };
    match form.id {
        Some(id) => match repository
            .update_request(id, fields)
            .map_err(translate_core_error)
        {
            Ok(()) => {
                notifier.notify("Request updated successfully", Severity::Success);
                Ok(())
            }
            Err(err) => {
                notifier.notify(&err.to_string(), Severity::Danger);
                Err(err)
            }
        },
        None => {
            repository.create_request(fields);
            notifier.notify("Request submitted successfully", Severity::Success);
            Ok(())
        }
    }
}

/// Handles a service request deletion.
///
/// # Errors
///
/// Returns the underlying failure after notifying.
pub fn delete_request(
    repository: &mut Repository,
    notifier: &dyn Notifier,
    id: i64,
) -> Result<(), ApiError> {
    match repository.delete_request(id).map_err(translate_core_error) {
        Ok(()) => {
            notifier.notify("Request deleted successfully", Severity::Success);
            Ok(())
        }
        Err(err) => {
            notifier.notify(&err.to_string(), Severity::Danger);
            Err(err)
        }
    }
}
