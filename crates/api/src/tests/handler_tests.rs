// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    RecordingNotifier, admin_session, open_repository, registration_form, user_session,
};
use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::forms::{AccountForm, DepartmentForm, EmployeeForm, ServiceRequestForm};
use crate::handlers;
use crate::notifier::Severity;
use crate::router::Route;
use staffdesk::UNKNOWN_LABEL;
use staffdesk_domain::{RequestStatus, Role};
use staffdesk_persistence::Repository;

fn account_form(id: Option<i64>, email: &str) -> AccountForm {
    AccountForm {
        id,
        first_name: String::from("Test"),
        last_name: String::from("User"),
        email: String::from(email),
        password: String::from("Password123!"),
        role: Role::User,
        verified: true,
    }
}

fn employee_form(id: Option<i64>) -> EmployeeForm {
    EmployeeForm {
        id,
        employee_id: String::from("EMP-001"),
        user_id: 1,
        department_id: 1,
        position: String::from("Engineer"),
        hire_date: String::from("2024-03-15"),
    }
}

#[test]
fn test_navigate_allows_public_route() {
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let route: Route = handlers::navigate("/register", &AuthSession::Anonymous, &notifier);
    assert_eq!(route, Route::Register);
    assert!(notifier.messages().is_empty());
}

#[test]
fn test_navigate_anonymous_to_protected_route() {
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let route: Route = handlers::navigate("/profile", &AuthSession::Anonymous, &notifier);
    assert_eq!(route, Route::Login);
    assert_eq!(
        notifier.last(),
        (
            String::from("Please login to access this page"),
            Severity::Warning
        )
    );
}

#[test]
fn test_navigate_plain_user_to_admin_route() {
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let session: AuthSession = user_session(2, "user@example.com");
    let route: Route = handlers::navigate("/accounts", &session, &notifier);
    assert_eq!(route, Route::Home);
    assert_eq!(
        notifier.last(),
        (
            String::from("Access denied. Admin privileges required."),
            Severity::Danger
        )
    );
}

#[test]
fn test_register_handler_navigates_to_verification() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let route: Route =
        handlers::register(&mut repo, &notifier, registration_form("jane@example.com")).unwrap();
    assert_eq!(route, Route::VerifyEmail);
    assert_eq!(
        notifier.last(),
        (
            String::from("Registration successful! Please verify your email."),
            Severity::Success
        )
    );
}

#[test]
fn test_register_handler_reports_duplicate_email() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let result = handlers::register(&mut repo, &notifier, registration_form("admin@example.com"));
    assert!(result.is_err());
    assert_eq!(
        notifier.last(),
        (String::from("Email already registered"), Severity::Danger)
    );
}

#[test]
fn test_verify_handler_navigates_to_login() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    handlers::register(&mut repo, &notifier, registration_form("jane@example.com")).unwrap();
    let route: Route = handlers::simulate_verify(&mut repo, &notifier).unwrap();
    assert_eq!(route, Route::Login);
    assert_eq!(
        notifier.last(),
        (
            String::from("Email verified successfully! You can now login."),
            Severity::Success
        )
    );
}

#[test]
fn test_verify_handler_warns_without_pending_marker() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let result = handlers::simulate_verify(&mut repo, &notifier);
    assert_eq!(result, Err(ApiError::NoPendingVerification));
    assert_eq!(
        notifier.last(),
        (
            String::from("No pending verification found"),
            Severity::Warning
        )
    );
}

#[test]
fn test_login_handler_greets_by_first_name() {
    let mut repo: Repository = open_repository();
    let mut session: AuthSession = AuthSession::Anonymous;
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let route: Route = handlers::login(
        &mut repo,
        &mut session,
        &notifier,
        "admin@example.com",
        "Password123!",
    )
    .unwrap();
    assert_eq!(route, Route::Profile);
    assert_eq!(
        notifier.last(),
        (String::from("Welcome back, Admin!"), Severity::Success)
    );
}

#[test]
fn test_login_handler_reports_failure() {
    let mut repo: Repository = open_repository();
    let mut session: AuthSession = AuthSession::Anonymous;
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let result = handlers::login(
        &mut repo,
        &mut session,
        &notifier,
        "admin@example.com",
        "wrong",
    );
    assert_eq!(result, Err(ApiError::InvalidCredentials));
    assert_eq!(
        notifier.last(),
        (
            String::from("Invalid email or password, or email not verified."),
            Severity::Danger
        )
    );
}

#[test]
fn test_logout_handler_navigates_home() {
    let mut repo: Repository = open_repository();
    let mut session: AuthSession = admin_session();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let route: Route = handlers::logout(&mut repo, &mut session, &notifier);
    assert_eq!(route, Route::Home);
    assert_eq!(session, AuthSession::Anonymous);
    assert_eq!(
        notifier.last(),
        (String::from("Logged out successfully"), Severity::Info)
    );
}

#[test]
fn test_save_account_create_and_update() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    handlers::save_account(&mut repo, &notifier, account_form(None, "new@example.com")).unwrap();
    assert_eq!(
        notifier.last(),
        (
            String::from("Account created successfully"),
            Severity::Success
        )
    );
    let id: i64 = repo.accounts()[1].id;
    handlers::save_account(&mut repo, &notifier, account_form(Some(id), "new@example.com"))
        .unwrap();
    assert_eq!(
        notifier.last(),
        (
            String::from("Account updated successfully"),
            Severity::Success
        )
    );
}

#[test]
fn test_save_account_rejects_short_password() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let mut form: AccountForm = account_form(None, "new@example.com");
    form.password = String::from("short");
    let result = handlers::save_account(&mut repo, &notifier, form);
    assert!(matches!(
        result,
        Err(ApiError::PasswordPolicyViolation { .. })
    ));
    assert_eq!(
        notifier.last(),
        (
            String::from("Password must be at least 6 characters"),
            Severity::Danger
        )
    );
}

#[test]
fn test_save_account_rejects_taken_email_on_update() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    handlers::save_account(&mut repo, &notifier, account_form(None, "new@example.com")).unwrap();
    let id: i64 = repo.accounts()[1].id;
    let result =
        handlers::save_account(&mut repo, &notifier, account_form(Some(id), "admin@example.com"));
    assert!(matches!(result, Err(ApiError::DuplicateEmail { .. })));
}

#[test]
fn test_reset_password_handler() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    handlers::reset_password(&mut repo, &notifier, 1, String::from("NewSecret1")).unwrap();
    assert_eq!(repo.account_by_id(1).unwrap().password, "NewSecret1");
    assert_eq!(
        notifier.last(),
        (
            String::from("Password reset successfully"),
            Severity::Success
        )
    );

    let result = handlers::reset_password(&mut repo, &notifier, 1, String::from("tiny"));
    assert!(result.is_err());
    assert_eq!(repo.account_by_id(1).unwrap().password, "NewSecret1");
}

#[test]
fn test_delete_account_rejects_self_deletion() {
    let mut repo: Repository = open_repository();
    let session: AuthSession = admin_session();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let result = handlers::delete_account(&mut repo, &session, &notifier, 1);
    assert_eq!(result, Err(ApiError::SelfDeletionForbidden));
    assert_eq!(repo.accounts().len(), 1);
    assert_eq!(
        notifier.last(),
        (
            String::from("You cannot delete your own account"),
            Severity::Danger
        )
    );
}

#[test]
fn test_delete_account_other_account() {
    let mut repo: Repository = open_repository();
    let session: AuthSession = admin_session();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    handlers::save_account(&mut repo, &notifier, account_form(None, "new@example.com")).unwrap();
    let id: i64 = repo.accounts()[1].id;
    handlers::delete_account(&mut repo, &session, &notifier, id).unwrap();
    assert!(repo.account_by_id(id).is_none());
    assert_eq!(
        notifier.last(),
        (
            String::from("Account deleted successfully"),
            Severity::Success
        )
    );
}

#[test]
fn test_department_handlers() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    handlers::save_department(
        &mut repo,
        &notifier,
        DepartmentForm {
            id: None,
            name: String::from("Finance"),
            description: String::from("Money"),
        },
    )
    .unwrap();
    assert_eq!(repo.departments().len(), 3);
    let id: i64 = repo.departments()[2].id;
    handlers::save_department(
        &mut repo,
        &notifier,
        DepartmentForm {
            id: Some(id),
            name: String::from("Accounting"),
            description: String::from("Money"),
        },
    )
    .unwrap();
    assert_eq!(repo.department_by_id(id).unwrap().name, "Accounting");
    handlers::delete_department(&mut repo, &notifier, id).unwrap();
    assert_eq!(
        notifier.last(),
        (
            String::from("Department deleted successfully"),
            Severity::Success
        )
    );
}

#[test]
fn test_save_department_rejects_blank_name() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let result = handlers::save_department(
        &mut repo,
        &notifier,
        DepartmentForm {
            id: None,
            name: String::from("  "),
            description: String::new(),
        },
    );
    assert!(matches!(result, Err(ApiError::ValidationFailed { .. })));
    assert_eq!(repo.departments().len(), 2);
}

#[test]
fn test_employee_handlers_and_dangling_department() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    handlers::save_employee(&mut repo, &notifier, employee_form(None)).unwrap();
    assert_eq!(repo.employees().len(), 1);

    handlers::delete_department(&mut repo, &notifier, 1).unwrap();
    let rows = repo.employee_rows();
    assert_eq!(rows[0].department_name, UNKNOWN_LABEL);
}

#[test]
fn test_save_employee_reports_invalid_hire_date() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let mut form: EmployeeForm = employee_form(None);
    form.hire_date = String::from("last tuesday");
    let result = handlers::save_employee(&mut repo, &notifier, form);
    assert!(matches!(result, Err(ApiError::ValidationFailed { .. })));
    assert_eq!(notifier.last().1, Severity::Danger);
}

#[test]
fn test_request_handlers() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    handlers::save_request(
        &mut repo,
        &notifier,
        ServiceRequestForm {
            id: None,
            user_id: 1,
            subject: String::from("Laptop upgrade"),
            details: String::from("More RAM"),
            status: RequestStatus::Pending,
        },
    )
    .unwrap();
    let id: i64 = repo.requests()[0].id;
    handlers::save_request(
        &mut repo,
        &notifier,
        ServiceRequestForm {
            id: Some(id),
            user_id: 1,
            subject: String::from("Laptop upgrade"),
            details: String::from("More RAM"),
            status: RequestStatus::Approved,
        },
    )
    .unwrap();
    assert_eq!(
        repo.request_by_id(id).unwrap().status,
        RequestStatus::Approved
    );
    handlers::delete_request(&mut repo, &notifier, id).unwrap();
    assert!(repo.requests().is_empty());
}

#[test]
fn test_delete_missing_record_reports_not_found() {
    let mut repo: Repository = open_repository();
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let result = handlers::delete_employee(&mut repo, &notifier, 42);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
    assert_eq!(notifier.last().1, Severity::Danger);
}
