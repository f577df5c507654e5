//! JSON persistence of the task collection with seed fallback.

use crate::board::{
    domain::{Board, Task, seed_board},
    ports::{StorageError, StorageResult, TaskStorage},
};
use tracing::{debug, error, warn};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "kanban-tasks";

/// Reads and writes the whole task collection under one storage key.
#[derive(Debug, Clone)]
pub struct PersistentStore<S>
where
    S: TaskStorage,
{
    storage: S,
    key: String,
}

impl<S> PersistentStore<S>
where
    S: TaskStorage,
{
    /// Creates a store over `storage` using `key`.
    #[must_use]
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the stored board, degrading to the seed board.
    ///
    /// Missing values fall back silently; read, parse and integrity failures
    /// are logged before falling back.
    #[must_use]
    pub fn load(&self) -> Board {
        match self.try_load() {
            Ok(Some(board)) => board,
            Ok(None) => {
                debug!(key = %self.key, "no stored tasks, using seed board");
                seed_board()
            }
            Err(err) => {
                error!(key = %self.key, error = %err, "failed to load tasks, using seed board");
                seed_board()
            }
        }
    }

    /// Loads the stored board without fallback.
    ///
    /// Returns `Ok(None)` when nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the slot cannot be read, does not hold
    /// a JSON task array, or contains duplicate task identifiers.
    pub fn try_load(&self) -> StorageResult<Option<Board>> {
        let Some(raw) = self.storage.read(&self.key)? else {
            return Ok(None);
        };
        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(StorageError::serialization)?;
        let board = Board::from_tasks(tasks).map_err(StorageError::serialization)?;
        Ok(Some(board))
    }

    /// Writes `tasks`, logging and swallowing any failure.
    pub fn save(&self, tasks: &[Task]) {
        if let Err(err) = self.try_save(tasks) {
            warn!(key = %self.key, error = %err, "failed to save tasks");
        }
    }

    /// Writes `tasks` as a JSON array, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when encoding or the write fails.
    pub fn try_save(&self, tasks: &[Task]) -> StorageResult<()> {
        let encoded = serde_json::to_string(tasks).map_err(StorageError::serialization)?;
        self.storage.write(&self.key, &encoded)
    }
}
