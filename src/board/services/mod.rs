//! Application services for board state and persistence.

mod controller;
mod persistence;

pub use controller::{
    BoardController, BoardError, BoardResult, MoveOutcome, MoveTaskRequest, SubscriptionId,
};
pub use persistence::{DEFAULT_STORAGE_KEY, PersistentStore};
