// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The view-rendering collaborator contract.
//!
//! The core never constructs display markup; it supplies per-route
//! data payloads and leaves presentation to a [`ViewRenderer`].

use staffdesk::{EmployeeRow, RequestRow};
use staffdesk_domain::{Account, Department};
use staffdesk_persistence::Repository;

use crate::auth::AuthSession;
use crate::router::Route;

/// The data payload for a resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewData {
    /// The landing page carries no data.
    Home,
    /// The login form carries no data.
    Login,
    /// The registration form carries no data.
    Register,
    /// The verification page shows which address is pending, if any.
    VerifyEmail {
        /// The address awaiting verification.
        pending_email: Option<String>,
    },
    /// The profile page shows the logged-in account.
    Profile {
        /// The current identity.
        account: Account,
    },
    /// The employee directory, with references resolved.
    Employees {
        /// One row per employee record.
        rows: Vec<EmployeeRow>,
    },
    /// The account administration list.
    Accounts {
        /// All accounts in insertion order.
        accounts: Vec<Account>,
    },
    /// The department administration list.
    Departments {
        /// All departments in insertion order.
        departments: Vec<Department>,
    },
    /// The service request list, with references resolved.
    Requests {
        /// One row per request.
        rows: Vec<RequestRow>,
    },
}

/// Produces display output from a view payload.
pub trait ViewRenderer {
    /// Renders one resolved view.
    fn render(&mut self, data: &ViewData);
}

/// Builds the data payload for an already-resolved route.
///
/// Callers resolve the route through the guard first; an unguarded
/// `Profile` request without an identity falls back to the login
/// payload.
#[must_use]
pub fn view_data(route: Route, session: &AuthSession, repository: &Repository) -> ViewData {
    match route {
        Route::Home => ViewData::Home,
        Route::Login => ViewData::Login,
        Route::Register => ViewData::Register,
        Route::VerifyEmail => ViewData::VerifyEmail {
            pending_email: repository.store().pending_verification(),
        },
        Route::Profile => session.identity().map_or(ViewData::Login, |account| {
            ViewData::Profile {
                account: account.clone(),
            }
        }),
        Route::Employees => ViewData::Employees {
            rows: repository.employee_rows(),
        },
        Route::Accounts => ViewData::Accounts {
            accounts: repository.accounts().to_vec(),
        },
        Route::Departments => ViewData::Departments {
            departments: repository.departments().to_vec(),
        },
        Route::Requests => ViewData::Requests {
            rows: repository.request_rows(),
        },
    }
}
