// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Staffdesk personnel directory.
//!
//! This crate persists the complete [`staffdesk::Snapshot`] as one
//! serialized blob in a scoped key-value store, alongside two single-slot
//! markers (pending-verification email, remembered-login email).
//!
//! ## Storage model
//!
//! - Every save replaces the entire blob; there are no partial writes and
//!   no schema versioning.
//! - A missing or unparseable blob triggers a reseed with deterministic
//!   default data.
//! - Save failures are logged and swallowed at this boundary: persistence
//!   is best-effort and callers never handle a save error.
//!
//! ## Backends
//!
//! The [`BlobStore`] trait abstracts the transport. Two backends ship:
//!
//! - [`FileBlobStore`] — one file per key under a data directory
//! - [`MemoryBlobStore`] — a shared in-memory map, used by tests and
//!   ephemeral sessions
//!
//! ## Repository
//!
//! [`Repository`] couples the in-memory snapshot with the store: every
//! create/update/delete mutates the snapshot and synchronously saves it
//! before returning.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]

mod blob;
mod bootstrap;
mod error;
mod repository;
mod store;

#[cfg(test)]
mod tests;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use bootstrap::seed_snapshot;
pub use error::PersistenceError;
pub use repository::Repository;
pub use store::{
    PENDING_VERIFICATION_KEY, REMEMBERED_LOGIN_KEY, SNAPSHOT_KEY, SnapshotStore,
};
