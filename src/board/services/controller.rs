//! Board state controller: the sole mutator of board state.

use crate::board::{
    domain::{
        Board, BoardIntegrityError, NewTask, ParseTaskStatusError, Task, TaskId, TaskPatch,
        TaskStatus, ValidationError,
    },
    ports::TaskStorage,
    services::PersistentStore,
};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Input failed validation; the board is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No task has the referenced identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// A move named a status outside the three workflow columns.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The resulting board would violate an invariant.
    #[error(transparent)]
    Integrity(#[from] BoardIntegrityError),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Request payload for moving a task to another column.
///
/// The target arrives as the raw drop-target identifier and is parsed when
/// the move is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    id: TaskId,
    target_status: String,
}

impl MoveTaskRequest {
    /// Creates a move request.
    #[must_use]
    pub fn new(id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            id,
            target_status: target_status.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the raw target status.
    #[must_use]
    pub fn target_status(&self) -> &str {
        &self.target_status
    }
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task changed column.
    Moved(Task),
    /// The task was already in the target column; nothing was written.
    Unchanged(Task),
}

impl MoveOutcome {
    /// Returns the task after the operation.
    #[must_use]
    pub const fn task(&self) -> &Task {
        match self {
            Self::Moved(task) | Self::Unchanged(task) => task,
        }
    }

    /// Returns `true` when the board changed.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Handle returned by [`BoardController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Board)>;

/// Owns the in-memory board and writes every change through to storage.
pub struct BoardController<S>
where
    S: TaskStorage,
{
    store: PersistentStore<S>,
    board: Board,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S> BoardController<S>
where
    S: TaskStorage,
{
    /// Creates a controller initialized from `store`.
    #[must_use]
    pub fn open(store: PersistentStore<S>) -> Self {
        let board = store.load();
        info!(tasks = board.len(), "board loaded");
        Self::with_board(store, board)
    }

    /// Creates a controller over an explicit starting board.
    #[must_use]
    pub const fn with_board(store: PersistentStore<S>, board: Board) -> Self {
        Self {
            store,
            board,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.board.tasks()
    }

    /// Returns the persistence adapter.
    #[must_use]
    pub const fn store(&self) -> &PersistentStore<S> {
        &self.store
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.board.find(id)
    }

    /// Returns the tasks in `status`, preserving insertion order.
    #[must_use]
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.board.by_status(status)
    }

    /// Creates a task in the `todo` column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the title is empty. The board
    /// is unchanged on failure.
    pub fn create(&mut self, input: NewTask) -> BoardResult<Task> {
        let task = Task::new(input)?;
        let next = self.board.with_appended(task.clone())?;
        self.commit(next);
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Merges `patch` onto the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when no task has `id`, or
    /// [`BoardError::Validation`] when the merged title is empty.
    pub fn update(&mut self, id: &TaskId, patch: &TaskPatch) -> BoardResult<Task> {
        let current = self.require(id)?;
        let updated = current.patched(patch)?;
        let next = self
            .board
            .with_replaced(updated.clone())
            .ok_or_else(|| BoardError::NotFound(id.clone()))?;
        self.commit(next);
        info!(task_id = %id, "task updated");
        Ok(updated)
    }

    /// Removes the task with `id` and returns it.
    ///
    /// Callers are expected to have obtained the user's consent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when no task has `id`.
    pub fn delete(&mut self, id: &TaskId) -> BoardResult<Task> {
        let (next, removed) = self
            .board
            .without(id)
            .ok_or_else(|| BoardError::NotFound(id.clone()))?;
        self.commit(next);
        info!(task_id = %id, "task deleted");
        Ok(removed)
    }

    /// Moves a task to the column named by the request.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidStatus`] when the target is not a
    /// workflow status, or [`BoardError::NotFound`] when no task has the
    /// requested identifier.
    pub fn move_task(&mut self, request: &MoveTaskRequest) -> BoardResult<MoveOutcome> {
        let status = TaskStatus::try_from(request.target_status())?;
        self.move_to_status(request.id(), status)
    }

    /// Moves a task to `status`.
    ///
    /// Moving a task into the column it already occupies is a no-op that
    /// neither writes storage nor notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when no task has `id`.
    pub fn move_to_status(&mut self, id: &TaskId, status: TaskStatus) -> BoardResult<MoveOutcome> {
        let current = self.require(id)?;
        if current.status() == status {
            debug!(task_id = %id, status = status.as_str(), "move skipped, same column");
            return Ok(MoveOutcome::Unchanged(current.clone()));
        }
        let moved = current.with_status(status);
        let next = self
            .board
            .with_replaced(moved.clone())
            .ok_or_else(|| BoardError::NotFound(id.clone()))?;
        self.commit(next);
        info!(task_id = %id, status = status.as_str(), "task moved");
        Ok(MoveOutcome::Moved(moved))
    }

    /// Registers `listener` to receive every new board snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&Board) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _)| *candidate != id);
        self.listeners.len() != before
    }

    fn require(&self, id: &TaskId) -> BoardResult<&Task> {
        self.board
            .find(id)
            .ok_or_else(|| BoardError::NotFound(id.clone()))
    }

    fn commit(&mut self, next: Board) {
        self.store.save(next.tasks());
        self.board = next;
        for (_, listener) in &mut self.listeners {
            listener(&self.board);
        }
    }
}

impl<S> fmt::Debug for BoardController<S>
where
    S: TaskStorage,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardController")
            .field("key", &self.store.key())
            .field("board", &self.board)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
