// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{admin_session, user_session};
use crate::auth::AuthSession;
use crate::router::{RedirectReason, Resolution, Route, resolve};

#[test]
fn test_parse_known_tokens() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse("/login"), Route::Login);
    assert_eq!(Route::parse("/register"), Route::Register);
    assert_eq!(Route::parse("/verify-email"), Route::VerifyEmail);
    assert_eq!(Route::parse("/profile"), Route::Profile);
    assert_eq!(Route::parse("/employees"), Route::Employees);
    assert_eq!(Route::parse("/accounts"), Route::Accounts);
    assert_eq!(Route::parse("/departments"), Route::Departments);
    assert_eq!(Route::parse("/requests"), Route::Requests);
}

#[test]
fn test_parse_accepts_fragment_form() {
    assert_eq!(Route::parse("#/login"), Route::Login);
    assert_eq!(Route::parse("#/"), Route::Home);
}

#[test]
fn test_parse_unknown_token_is_home() {
    assert_eq!(Route::parse("/no-such-page"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
}

#[test]
fn test_token_round_trip() {
    for route in [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::VerifyEmail,
        Route::Profile,
        Route::Employees,
        Route::Accounts,
        Route::Departments,
        Route::Requests,
    ] {
        assert_eq!(Route::parse(route.token()), route);
    }
}

#[test]
fn test_public_routes_allowed_anonymous() {
    for route in [Route::Home, Route::Login, Route::Register, Route::VerifyEmail] {
        assert_eq!(
            resolve(route, &AuthSession::Anonymous),
            Resolution::Allow(route)
        );
    }
}

#[test]
fn test_protected_route_anonymous_redirects_to_login() {
    for route in [Route::Profile, Route::Requests] {
        assert_eq!(
            resolve(route, &AuthSession::Anonymous),
            Resolution::Redirect {
                target: Route::Login,
                reason: RedirectReason::AuthRequired,
            }
        );
    }
}

#[test]
fn test_admin_route_anonymous_redirects_to_login() {
    for route in [Route::Employees, Route::Accounts, Route::Departments] {
        assert_eq!(
            resolve(route, &AuthSession::Anonymous),
            Resolution::Redirect {
                target: Route::Login,
                reason: RedirectReason::AuthRequired,
            }
        );
    }
}

#[test]
fn test_admin_route_plain_user_redirects_home() {
    let session: AuthSession = user_session(2, "user@example.com");
    for route in [Route::Employees, Route::Accounts, Route::Departments] {
        assert_eq!(
            resolve(route, &session),
            Resolution::Redirect {
                target: Route::Home,
                reason: RedirectReason::Forbidden,
            }
        );
    }
}

#[test]
fn test_admin_route_admin_allowed() {
    let session: AuthSession = admin_session();
    assert_eq!(
        resolve(Route::Employees, &session),
        Resolution::Allow(Route::Employees)
    );
}

#[test]
fn test_protected_route_plain_user_allowed() {
    let session: AuthSession = user_session(2, "user@example.com");
    assert_eq!(
        resolve(Route::Profile, &session),
        Resolution::Allow(Route::Profile)
    );
    assert_eq!(
        resolve(Route::Requests, &session),
        Resolution::Allow(Route::Requests)
    );
}
