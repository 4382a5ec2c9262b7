// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

/// Trait for scoped string-keyed blob storage.
///
/// This is the transport seam of the persistence layer: the snapshot
/// store works against this trait so the file backend and the in-memory
/// backend are interchangeable. The system is single-threaded by design,
/// so no `Send`/`Sync` bounds are required.
pub trait BlobStore {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Writes `value` under `key`, replacing any previous value wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Removes the value stored under `key`. Removing an absent key is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to delete.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// A blob store backed by one file per key under a data directory.
#[derive(Debug)]
pub struct FileBlobStore {
    /// The directory holding one file per key.
    dir: PathBuf,
}

impl FileBlobStore {
    /// Creates a file store rooted at `dir`, creating the directory if
    /// needed.
    ///
    /// # Arguments
    ///
    /// * `dir` - The data directory
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InitializationError` if the directory
    /// cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir: PathBuf = dir.into();
        fs::create_dir_all(&dir).map_err(|err| {
            PersistenceError::InitializationError(format!(
                "failed to create data directory '{}': {err}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// An in-memory blob store.
///
/// Clones share the same underlying map, which lets a test hold a handle
/// onto storage that outlives the store handed to a `SnapshotStore`.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
