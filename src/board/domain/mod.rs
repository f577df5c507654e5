//! Domain model for the task board.
//!
//! The board domain models tasks, their workflow status and priority, and
//! immutable board snapshots while keeping storage concerns outside of the
//! domain boundary.

mod board;
mod error;
mod ids;
mod seed;
mod task;

pub use board::Board;
pub use error::{BoardIntegrityError, ParseTaskStatusError, ValidationError};
pub use ids::TaskId;
pub use seed::{seed_board, seed_tasks};
pub use task::{NewTask, PersistedTaskData, Priority, Task, TaskPatch, TaskStatus};
