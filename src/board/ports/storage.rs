//! Key-value storage port backing board persistence.

use std::sync::Arc;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Single-slot key-value storage contract.
///
/// Implementations hold opaque string values under string keys and replace
/// any prior value on write. Calls are synchronous.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStorage {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been written under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the backing medium fails.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the backing medium rejects the
    /// write (for example when a quota is exceeded).
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by storage implementations and the persistence codec.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Reading the slot failed.
    #[error("failed to read storage key '{key}': {source}")]
    Read {
        /// Storage key being read.
        key: String,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// Writing the slot failed.
    #[error("failed to write storage key '{key}': {source}")]
    Write {
        /// Storage key being written.
        key: String,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The stored value could not be encoded or decoded.
    #[error("invalid stored task data: {0}")]
    Serialization(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a read failure.
    pub fn read(key: &str, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read {
            key: key.to_owned(),
            source: Arc::new(err),
        }
    }

    /// Wraps a write failure.
    pub fn write(key: &str, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write {
            key: key.to_owned(),
            source: Arc::new(err),
        }
    }

    /// Wraps an encoding or decoding failure.
    pub fn serialization(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Serialization(Arc::new(err))
    }
}

impl<T: TaskStorage + ?Sized> TaskStorage for &T {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}
