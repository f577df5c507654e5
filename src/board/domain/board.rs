//! Immutable board snapshot.

use super::{BoardIntegrityError, Task, TaskId, TaskStatus};
use std::collections::HashSet;

/// Ordered collection of every task on the board.
///
/// Tasks are kept in insertion order. Column views are stable filters over
/// that order. Mutating operations return a new snapshot and leave `self`
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    tasks: Vec<Task>,
}

impl Board {
    /// Builds a board, rejecting duplicate task identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`BoardIntegrityError::DuplicateTaskId`] for the first
    /// identifier seen twice.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, BoardIntegrityError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(BoardIntegrityError::DuplicateTaskId(task.id().clone()));
            }
        }
        Ok(Self { tasks })
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the tasks in `status`, preserving insertion order.
    #[must_use]
    pub fn by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect()
    }

    /// Returns a snapshot with `task` appended.
    ///
    /// # Errors
    ///
    /// Returns [`BoardIntegrityError::DuplicateTaskId`] when the identifier
    /// is already present.
    pub fn with_appended(&self, task: Task) -> Result<Self, BoardIntegrityError> {
        if self.find(task.id()).is_some() {
            return Err(BoardIntegrityError::DuplicateTaskId(task.id().clone()));
        }
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Ok(Self { tasks })
    }

    /// Returns a snapshot with the task sharing `task`'s identifier replaced
    /// in place, or `None` when no such task exists.
    #[must_use]
    pub fn with_replaced(&self, task: Task) -> Option<Self> {
        let position = self.position(task.id())?;
        let mut tasks = self.tasks.clone();
        if let Some(slot) = tasks.get_mut(position) {
            *slot = task;
        }
        Some(Self { tasks })
    }

    /// Returns a snapshot without `id` and the removed task, or `None` when
    /// no such task exists.
    #[must_use]
    pub fn without(&self, id: &TaskId) -> Option<(Self, Task)> {
        let position = self.position(id)?;
        let mut tasks = self.tasks.clone();
        let removed = tasks.remove(position);
        Some((Self { tasks }, removed))
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}
