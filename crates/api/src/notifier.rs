// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The notification collaborator contract.

use tracing::{error, info, warn};

/// Notification severity, mirroring the four toast styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An operation completed.
    Success,
    /// An operation was rejected or failed.
    Danger,
    /// Something needs the user's attention.
    Warning,
    /// Neutral information.
    Info,
}

/// Receives user-facing messages. Fire-and-forget; no return value is
/// consumed and implementations must not fail.
pub trait Notifier {
    /// Delivers one message at the given severity.
    fn notify(&self, message: &str, severity: Severity);
}

/// A notifier that routes messages onto the tracing subscriber.
///
/// The default collaborator when no display surface is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => info!("{message}"),
            Severity::Warning => warn!("{message}"),
            Severity::Danger => error!("{message}"),
        }
    }
}
