// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::RefCell;

use staffdesk_domain::{Account, EmailAddress, Role};
use staffdesk_persistence::{MemoryBlobStore, Repository, SnapshotStore};

use crate::auth::AuthSession;
use crate::forms::RegistrationForm;
use crate::notifier::{Notifier, Severity};
use crate::view::{ViewData, ViewRenderer};

/// A notifier that records every message for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> (String, Severity) {
        self.messages.borrow().last().cloned().expect("no messages")
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .borrow_mut()
            .push((message.to_string(), severity));
    }
}

/// A renderer that keeps the payloads it was given.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rendered: Vec<ViewData>,
}

impl ViewRenderer for RecordingRenderer {
    fn render(&mut self, data: &ViewData) {
        self.rendered.push(data.clone());
    }
}

pub fn open_repository() -> Repository {
    Repository::open(SnapshotStore::new(Box::new(MemoryBlobStore::new())))
}

pub fn registration_form(email: &str) -> RegistrationForm {
    RegistrationForm {
        first_name: String::from("Jane"),
        last_name: String::from("Doe"),
        email: String::from(email),
        password: String::from("Password123!"),
    }
}

pub fn user_session(id: i64, raw_email: &str) -> AuthSession {
    AuthSession::Authenticated(account(id, raw_email, Role::User))
}

pub fn admin_session() -> AuthSession {
    AuthSession::Authenticated(account(1, "admin@example.com", Role::Admin))
}

pub fn account(id: i64, raw_email: &str, role: Role) -> Account {
    Account::new(
        id,
        String::from("Test"),
        String::from("User"),
        EmailAddress::new(raw_email).unwrap(),
        String::from("Password123!"),
        role,
        true,
    )
}
