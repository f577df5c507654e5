//! Pointer sensor separating drag intent from clicks.

use super::Point;
use crate::board::domain::TaskId;
use tracing::trace;

/// Default distance a pointer must travel before a drag activates.
pub const DEFAULT_ACTIVATION_DISTANCE: u32 = 8;

/// Gesture recognized from raw pointer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorEvent {
    /// The pointer travelled past the activation distance on a card.
    DragStart {
        /// Card being dragged.
        task_id: TaskId,
        /// Pointer position at activation.
        pointer: Point,
    },
    /// The pointer moved during an active drag.
    DragMove {
        /// Current pointer position.
        pointer: Point,
    },
    /// The pointer was released during an active drag.
    DragEnd {
        /// Release position.
        pointer: Point,
    },
    /// The active drag was aborted by the platform.
    DragCancel,
    /// The pointer was released before activation.
    Click {
        /// Card that was clicked.
        task_id: TaskId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum SensorState {
    #[default]
    Idle,
    Pressed {
        task_id: TaskId,
        origin: Point,
    },
    Active,
}

/// Turns pointer down/move/up sequences on cards into gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerSensor {
    activation_distance: u32,
    state: SensorState,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl PointerSensor {
    /// Creates a sensor that activates once the pointer travels strictly
    /// more than `activation_distance` pixels.
    #[must_use]
    pub const fn new(activation_distance: u32) -> Self {
        Self {
            activation_distance,
            state: SensorState::Idle,
        }
    }

    /// Returns the activation distance.
    #[must_use]
    pub const fn activation_distance(&self) -> u32 {
        self.activation_distance
    }

    /// Records a press on a card's draggable surface.
    ///
    /// A press while another gesture is in progress is ignored.
    pub fn pointer_down(&mut self, task_id: TaskId, at: Point) {
        if self.state == SensorState::Idle {
            self.state = SensorState::Pressed {
                task_id,
                origin: at,
            };
        }
    }

    /// Feeds pointer movement.
    pub fn pointer_move(&mut self, at: Point) -> Option<SensorEvent> {
        match &self.state {
            SensorState::Idle => None,
            SensorState::Active => Some(SensorEvent::DragMove { pointer: at }),
            SensorState::Pressed { task_id, origin } => {
                if !self.exceeds_threshold(*origin, at) {
                    return None;
                }
                let event = SensorEvent::DragStart {
                    task_id: task_id.clone(),
                    pointer: at,
                };
                trace!(task_id = %task_id, "drag activated");
                self.state = SensorState::Active;
                Some(event)
            }
        }
    }

    /// Feeds a pointer release.
    pub fn pointer_up(&mut self, at: Point) -> Option<SensorEvent> {
        match std::mem::take(&mut self.state) {
            SensorState::Idle => None,
            SensorState::Active => Some(SensorEvent::DragEnd { pointer: at }),
            SensorState::Pressed { task_id, .. } => Some(SensorEvent::Click { task_id }),
        }
    }

    /// Aborts the current gesture.
    pub fn pointer_cancel(&mut self) -> Option<SensorEvent> {
        match std::mem::take(&mut self.state) {
            SensorState::Active => Some(SensorEvent::DragCancel),
            SensorState::Idle | SensorState::Pressed { .. } => None,
        }
    }

    fn exceeds_threshold(&self, origin: Point, at: Point) -> bool {
        let limit = i64::from(self.activation_distance);
        origin.distance_squared(at) > limit * limit
    }
}
