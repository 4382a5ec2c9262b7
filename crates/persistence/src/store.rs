// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::blob::BlobStore;
use crate::bootstrap::seed_snapshot;
use staffdesk::Snapshot;
use tracing::{debug, error, info, warn};

/// Blob key holding the serialized snapshot.
pub const SNAPSHOT_KEY: &str = "ipt_demo_v1";

/// Blob key holding the email awaiting verification (single slot).
pub const PENDING_VERIFICATION_KEY: &str = "unverified_email";

/// Blob key holding the remembered-login email.
pub const REMEMBERED_LOGIN_KEY: &str = "auth_token";

/// Loads and saves the whole-database snapshot, plus the two single-slot
/// email markers.
///
/// Persistence is best-effort: every failure is logged and swallowed
/// here, so callers never receive or handle a storage error. A missing
/// or corrupt snapshot is replaced by the deterministic seed.
pub struct SnapshotStore {
    blob: Box<dyn BlobStore>,
}

impl SnapshotStore {
    /// Creates a store over the given blob backend.
    #[must_use]
    pub fn new(blob: Box<dyn BlobStore>) -> Self {
        Self { blob }
    }

    /// Loads the persisted snapshot.
    ///
    /// Returns the stored snapshot if present and parseable; otherwise
    /// seeds default data, persists it, and returns the seed.
    pub fn load(&mut self) -> Snapshot {
        match self.blob.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) => {
                    debug!(
                        accounts = snapshot.accounts.len(),
                        departments = snapshot.departments.len(),
                        employees = snapshot.employees.len(),
                        requests = snapshot.requests.len(),
                        "loaded snapshot"
                    );
                    snapshot
                }
                Err(err) => {
                    warn!(%err, "stored snapshot failed to parse, reseeding");
                    self.seed()
                }
            },
            Ok(None) => {
                info!("no stored snapshot, seeding default data");
                self.seed()
            }
            Err(err) => {
                error!(%err, "failed to read stored snapshot, reseeding");
                self.seed()
            }
        }
    }

    /// Serializes and persists the full snapshot, replacing the previous
    /// blob. Failures are logged and swallowed; there is no retry.
    pub fn save(&mut self, snapshot: &Snapshot) {
        let raw: String = match serde_json::to_string(snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                error!(%err, "failed to serialize snapshot, skipping save");
                return;
            }
        };
        if let Err(err) = self.blob.put(SNAPSHOT_KEY, &raw) {
            error!(%err, "failed to persist snapshot");
        }
    }

    fn seed(&mut self) -> Snapshot {
        let snapshot: Snapshot = seed_snapshot();
        self.save(&snapshot);
        snapshot
    }

    /// Returns the email awaiting verification, if any.
    #[must_use]
    pub fn pending_verification(&self) -> Option<String> {
        self.read_marker(PENDING_VERIFICATION_KEY)
    }

    /// Records `email` as awaiting verification, overwriting any
    /// previous marker (the slot holds one email at a time).
    pub fn set_pending_verification(&mut self, email: &str) {
        self.write_marker(PENDING_VERIFICATION_KEY, email);
    }

    /// Clears the pending-verification marker.
    pub fn clear_pending_verification(&mut self) {
        self.clear_marker(PENDING_VERIFICATION_KEY);
    }

    /// Returns the remembered-login email, if any.
    #[must_use]
    pub fn remembered_login(&self) -> Option<String> {
        self.read_marker(REMEMBERED_LOGIN_KEY)
    }

    /// Records `email` as the remembered login for session restoration.
    pub fn set_remembered_login(&mut self, email: &str) {
        self.write_marker(REMEMBERED_LOGIN_KEY, email);
    }

    /// Clears the remembered-login marker.
    pub fn clear_remembered_login(&mut self) {
        self.clear_marker(REMEMBERED_LOGIN_KEY);
    }

    fn read_marker(&self, key: &str) -> Option<String> {
        match self.blob.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, key, "failed to read marker");
                None
            }
        }
    }

    fn write_marker(&mut self, key: &str, value: &str) {
        if let Err(err) = self.blob.put(key, value) {
            warn!(%err, key, "failed to write marker");
        }
    }

    fn clear_marker(&mut self, key: &str) {
        if let Err(err) = self.blob.remove(key) {
            warn!(%err, key, "failed to clear marker");
        }
    }
}

impl std::fmt::Debug for SnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotStore").finish_non_exhaustive()
    }
}
