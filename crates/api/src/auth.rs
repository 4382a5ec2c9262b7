// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The authentication session state machine.

use staffdesk::{AccountFields, authenticate};
use staffdesk_domain::{Account, EmailAddress, Role, validate_required};
use staffdesk_persistence::Repository;
use tracing::{debug, info};

use crate::error::{ApiError, AuthError, translate_core_error};
use crate::forms::RegistrationForm;
use crate::password_policy::PasswordPolicy;

/// The current authentication state.
///
/// There are exactly two states: nobody is logged in, or one account
/// is. The authenticated account is held by value; it is a copy taken
/// at login or restore time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthSession {
    /// No identity is established.
    #[default]
    Anonymous,
    /// The given account is logged in.
    Authenticated(Account),
}

impl AuthSession {
    /// Returns the logged-in account, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&Account> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(account) => Some(account),
        }
    }

    /// Whether an identity is established.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether the logged-in account holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(Account::is_admin)
    }
}

/// Authentication service driving the session transitions.
pub struct AuthService;

impl AuthService {
    /// Registers a new unverified user account.
    ///
    /// The session stays `Anonymous`; the new address is recorded as
    /// the pending verification. A second registration before the
    /// first is verified overwrites the marker (single slot).
    ///
    /// # Errors
    ///
    /// Returns an error if the password fails policy, the email is
    /// malformed, or the address is already registered.
    pub fn register(
        repository: &mut Repository,
        form: RegistrationForm,
    ) -> Result<Account, ApiError> {
        PasswordPolicy::default().validate(&form.password)?;
        validate_required("first name", &form.first_name)
            .and_then(|()| validate_required("last name", &form.last_name))
            .map_err(|err| ApiError::ValidationFailed {
                message: err.to_string(),
            })?;
        let email: EmailAddress =
            EmailAddress::new(&form.email).map_err(|err| ApiError::ValidationFailed {
                message: err.to_string(),
            })?;
        let account: Account = repository
            .create_account(AccountFields {
                first_name: form.first_name.trim().to_string(),
                last_name: form.last_name.trim().to_string(),
                email,
                password: form.password,
                role: Role::User,
                verified: false,
            })
            .map_err(translate_core_error)?;
        repository
            .store_mut()
            .set_pending_verification(account.email.value());
        info!(email = %account.email, "registered new account");
        Ok(account)
    }

    /// Completes the pending verification, if any.
    ///
    /// The marker is cleared only on success; if the account it points
    /// at has been deleted, the marker survives. Verifying does not
    /// log in.
    ///
    /// # Errors
    ///
    /// Returns `NoPendingVerification` if no registration is pending,
    /// or `AccountNotFound` if the referenced account no longer
    /// exists.
    pub fn simulate_verify(repository: &mut Repository) -> Result<Account, AuthError> {
        let pending: String = repository
            .store()
            .pending_verification()
            .ok_or(AuthError::NoPendingVerification)?;
        let email: EmailAddress =
            EmailAddress::new(&pending).map_err(|_| AuthError::AccountNotFound {
                email: pending.clone(),
            })?;
        let account: Account =
            repository
                .mark_verified(&email)
                .map_err(|_| AuthError::AccountNotFound {
                    email: pending.clone(),
                })?;
        repository.store_mut().clear_pending_verification();
        info!(email = %account.email, "email verified");
        Ok(account)
    }

    /// Attempts to log in.
    ///
    /// Success requires a matching email (case-insensitive), an exact
    /// password match, and a verified account; on success the session
    /// becomes `Authenticated` and the identity is remembered for
    /// restoration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` on any failure; the session stays
    /// `Anonymous`.
    pub fn login(
        repository: &mut Repository,
        session: &mut AuthSession,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthError> {
        let address: EmailAddress =
            EmailAddress::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let account: Account = authenticate(repository.snapshot(), &address, password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        repository
            .store_mut()
            .set_remembered_login(account.email.value());
        info!(email = %account.email, "login succeeded");
        *session = AuthSession::Authenticated(account.clone());
        Ok(account)
    }

    /// Logs out and forgets the remembered identity.
    pub fn logout(repository: &mut Repository, session: &mut AuthSession) {
        repository.store_mut().clear_remembered_login();
        *session = AuthSession::Anonymous;
        debug!("session ended");
    }

    /// Restores a previous session from the remembered-login marker.
    ///
    /// Called once at startup. A marker pointing at a deleted or
    /// unverified account is cleared silently; this never fails.
    pub fn restore_session(repository: &mut Repository, session: &mut AuthSession) {
        let Some(remembered) = repository.store().remembered_login() else {
            return;
        };
        let account: Option<Account> = EmailAddress::new(&remembered)
            .ok()
            .and_then(|address| repository.account_by_email(&address))
            .filter(|account| account.verified)
            .cloned();
        match account {
            Some(account) => {
                debug!(email = %account.email, "session restored");
                *session = AuthSession::Authenticated(account);
            }
            None => {
                debug!("stale remembered login cleared");
                repository.store_mut().clear_remembered_login();
                *session = AuthSession::Anonymous;
            }
        }
    }
}
