//! Error types for board domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or merging task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The task title is empty after trimming.
    #[error("Title is required")]
    EmptyTitle,
}

/// Error returned while parsing a task status from a drop target or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned when a task collection violates board invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardIntegrityError {
    /// Two tasks share the same identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}
