// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route tokens and the pure route-resolution function.

use crate::auth::AuthSession;

/// A navigable view, parsed from a route token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The landing page, `/`.
    Home,
    /// The login form, `/login`.
    Login,
    /// The registration form, `/register`.
    Register,
    /// The verification page, `/verify-email`.
    VerifyEmail,
    /// The current user's profile, `/profile`. Requires authentication.
    Profile,
    /// The employee directory, `/employees`. Admin only.
    Employees,
    /// Account administration, `/accounts`. Admin only.
    Accounts,
    /// Department administration, `/departments`. Admin only.
    Departments,
    /// Service requests, `/requests`. Requires authentication.
    Requests,
}

impl Route {
    /// Parses a route token. Unrecognized tokens resolve to the home
    /// route. A leading `#` fragment marker and the `/` separator are
    /// both accepted.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token: &str = token.strip_prefix('#').unwrap_or(token);
        let token: &str = token.strip_prefix('/').unwrap_or(token);
        match token {
            "login" => Self::Login,
            "register" => Self::Register,
            "verify-email" => Self::VerifyEmail,
            "profile" => Self::Profile,
            "employees" => Self::Employees,
            "accounts" => Self::Accounts,
            "departments" => Self::Departments,
            "requests" => Self::Requests,
            _ => Self::Home,
        }
    }

    /// Returns the canonical token for this route.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::VerifyEmail => "/verify-email",
            Self::Profile => "/profile",
            Self::Employees => "/employees",
            Self::Accounts => "/accounts",
            Self::Departments => "/departments",
            Self::Requests => "/requests",
        }
    }

    /// Whether the route requires an authenticated session.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        matches!(self, Self::Profile | Self::Requests) || self.requires_admin()
    }

    /// Whether the route additionally requires the admin role.
    #[must_use]
    pub const fn requires_admin(&self) -> bool {
        matches!(self, Self::Employees | Self::Accounts | Self::Departments)
    }
}

/// Why a route request was redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// The route requires an authenticated session.
    AuthRequired,
    /// The route requires the admin role.
    Forbidden,
}

/// The outcome of resolving a route against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The requested route may be shown.
    Allow(Route),
    /// The request was denied and navigation goes elsewhere.
    Redirect {
        /// Where to navigate instead.
        target: Route,
        /// Why the request was denied.
        reason: RedirectReason,
    },
}

/// Resolves a route request against the current session.
///
/// This is a deterministic, side-effect-free decision; the caller
/// performs the navigation and notification.
#[must_use]
pub fn resolve(route: Route, session: &AuthSession) -> Resolution {
    if route.requires_auth() && !session.is_authenticated() {
        return Resolution::Redirect {
            target: Route::Login,
            reason: RedirectReason::AuthRequired,
        };
    }
    if route.requires_admin() && !session.is_admin() {
        return Resolution::Redirect {
            target: Route::Home,
            reason: RedirectReason::Forbidden,
        };
    }
    Resolution::Allow(route)
}
