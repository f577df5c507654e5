//! Drag-and-drop interaction handling.
//!
//! A [`PointerSensor`] turns raw pointer input into gestures, distinguishing
//! clicks from drags with an activation distance. [`DropTargets`] resolves a
//! release point to a droppable column identifier, and the
//! [`DragCoordinator`] state machine turns a finished drag into a move on
//! the board controller.

mod coordinator;
mod geometry;
mod sensor;
mod targets;

pub use coordinator::{
    ActiveDrag, DEFAULT_OVERLAY_OPACITY_PERCENT, DragCoordinator, DragOutcome, DragOverlay,
    DragState, SOURCE_CARD_OPACITY_PERCENT,
};
pub use geometry::{Point, Rect};
pub use sensor::{DEFAULT_ACTIVATION_DISTANCE, PointerSensor, SensorEvent};
pub use targets::DropTargets;
