// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session, routing and handler layer for the Staffdesk personnel
//! directory.
//!
//! This crate sits between a display surface and the repository:
//!
//! - [`AuthSession`] / [`AuthService`] — the login state machine
//!   (register, verify, login, logout, session restoration)
//! - [`Route`] / [`resolve`] — pure route resolution with
//!   authentication and role gating
//! - [`Notifier`] / [`ViewRenderer`] — collaborator contracts for
//!   toasts and view output; the core only supplies data
//! - [`handlers`] — one function per user-facing flow, reporting
//!   outcomes through the notifier

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod forms;
pub mod handlers;
mod notifier;
mod password_policy;
mod router;
mod view;

#[cfg(test)]
mod tests;

pub use auth::{AuthService, AuthSession};
pub use error::{ApiError, AuthError, translate_core_error};
pub use forms::{
    AccountForm, DepartmentForm, EmployeeForm, RegistrationForm, ServiceRequestForm,
};
pub use notifier::{Notifier, Severity, TracingNotifier};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use router::{RedirectReason, Resolution, Route, resolve};
pub use view::{ViewData, ViewRenderer, view_data};
