//! Kanban: headless core of a single-user task board.
//!
//! Tasks are organized into three workflow columns (To Do, In Progress,
//! Done) and moved between them with drag gestures. The whole collection is
//! persisted as one JSON array under a single storage key.
//!
//! # Architecture
//!
//! The board follows hexagonal architecture principles:
//!
//! - **Domain**: tasks, statuses, priorities and board snapshots
//! - **Ports**: the key-value storage contract
//! - **Adapters**: in-memory and directory-backed storage
//! - **Services**: the board controller and JSON persistence
//!
//! # Modules
//!
//! - [`board`]: task model, board state controller and persistence
//! - [`drag`]: pointer sensor, drop targets and drag state machine
//! - [`editor`]: create/edit form flow
//! - [`view`]: column and card view models with text rendering
//! - [`app`]: facade wiring the pieces together for a UI shell
//! - [`config`]: board settings

pub mod app;
pub mod board;
pub mod config;
pub mod drag;
pub mod editor;
pub mod view;

pub use app::{DELETE_PROMPT, DeleteConfirmation, KanbanBoard, PointerOutcome};
pub use config::BoardConfig;
