//! In-memory key-value storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{StorageError, StorageResult, TaskStorage};

/// Shared in-memory storage, the headless stand-in for browser local storage.
///
/// Clones share the same slots, so a harness can keep a handle and inspect
/// what the board wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<InMemoryStorageState>>,
}

#[derive(Debug, Default)]
struct InMemoryStorageState {
    values: HashMap<String, String>,
    write_count: usize,
    reject_writes: bool,
}

impl InMemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with `value` already present under `key`.
    #[must_use]
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut state) = storage.state.write() {
            state.values.insert(key.to_owned(), value.into());
        }
        storage
    }

    /// Returns the number of successful writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state.read().map_or(0, |state| state.write_count)
    }

    /// Makes subsequent writes fail as if the quota were exhausted.
    pub fn reject_writes(&self, reject: bool) {
        if let Ok(mut state) = self.state.write() {
            state.reject_writes = reject;
        }
    }

    /// Returns the raw value under `key`, bypassing the port.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.values.get(key).cloned())
    }
}

impl TaskStorage for InMemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| StorageError::read(key, std::io::Error::other(err.to_string())))?;
        Ok(state.values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| StorageError::write(key, std::io::Error::other(err.to_string())))?;
        if state.reject_writes {
            return Err(StorageError::write(
                key,
                std::io::Error::new(std::io::ErrorKind::StorageFull, "storage quota exceeded"),
            ));
        }
        state.values.insert(key.to_owned(), value.to_owned());
        state.write_count += 1;
        Ok(())
    }
}
