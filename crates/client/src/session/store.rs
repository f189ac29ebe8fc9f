//! Key-value slot stores.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Errors from slot store operations.
#[derive(Debug, Error)]
pub enum SlotError {
    /// The backing storage failed.
    #[error("slot io error: {0}")]
    Io(#[from] io::Error),
}

/// A client-local key-value slot holding JSON documents.
///
/// Removal is idempotent: removing an absent key succeeds.
pub trait SlotStore {
    /// Read the raw document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::Io` if the backing storage fails.
    fn get(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Write `value` under `key`, replacing any existing document.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::Io` if the backing storage fails.
    fn insert(&self, key: &str, value: &str) -> Result<(), SlotError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::Io` if the backing storage fails.
    fn remove(&self, key: &str) -> Result<(), SlotError>;
}

/// File-backed slot store: one `<key>.json` document per key under a
/// directory. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileSlotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::Io(e)),
        }
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), SlotError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SlotError::Io(e)),
        }
    }
}

/// In-memory slot store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlotStore for MemorySlotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.entries().get(key).cloned())
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), SlotError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        self.entries().remove(key);
        Ok(())
    }
}
