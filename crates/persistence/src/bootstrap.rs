// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk::Snapshot;
use staffdesk_domain::{Account, Department, EmailAddress, Role};

/// Builds the deterministic seed snapshot used when no stored snapshot
/// exists (or the stored one fails to parse).
///
/// The seed contains one verified administrator account and two
/// departments; employees and requests start empty.
#[must_use]
#[allow(clippy::expect_used)]
pub fn seed_snapshot() -> Snapshot {
    let mut snapshot: Snapshot = Snapshot::new();
    snapshot.accounts.push(Account::new(
        1,
        String::from("Admin"),
        String::from("User"),
        EmailAddress::new("admin@example.com").expect("seed email is valid"),
        String::from("Password123!"),
        Role::Admin,
        true,
    ));
    snapshot.departments.push(Department::new(
        1,
        String::from("Engineering"),
        String::from("Software development and IT"),
    ));
    snapshot.departments.push(Department::new(
        2,
        String::from("HR"),
        String::from("Human Resources"),
    ));
    snapshot
}
