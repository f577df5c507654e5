//! Drag state machine turning drag gestures into board moves.

use super::Point;
use crate::board::{
    domain::{Board, Task, TaskId},
    ports::TaskStorage,
    services::{BoardController, BoardError, MoveOutcome, MoveTaskRequest},
};
use tracing::{debug, warn};

/// Opacity of the floating overlay following the pointer.
pub const DEFAULT_OVERLAY_OPACITY_PERCENT: u8 = 75;

/// Opacity of the card left behind in its column while dragged.
pub const SOURCE_CARD_OPACITY_PERCENT: u8 = 50;

const OPAQUE_PERCENT: u8 = 100;

/// The task being dragged and where the pointer currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    task: Task,
    pointer: Point,
}

impl ActiveDrag {
    /// Returns the snapshot of the dragged task taken at drag start.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the latest pointer position.
    #[must_use]
    pub const fn pointer(&self) -> Point {
        self.pointer
    }
}

/// Coordinator state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged. It stays in its original column until the
    /// drag ends.
    Dragging(ActiveDrag),
}

/// What ending a drag did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// No drag was active.
    NotDragging,
    /// Released outside every drop target.
    Cancelled,
    /// Released over the task's current column.
    Unchanged(Task),
    /// The task changed column.
    Moved(Task),
    /// The controller refused the move; the error was logged.
    Rejected(BoardError),
}

/// Floating card rendered under the pointer while dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOverlay {
    /// Task rendered in the overlay.
    pub task: Task,
    /// Pointer position the overlay tracks.
    pub pointer: Point,
    /// Overlay opacity in percent.
    pub opacity_percent: u8,
}

/// Tracks the active drag and resolves its release into a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragCoordinator {
    state: DragState,
    overlay_opacity_percent: u8,
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_OPACITY_PERCENT)
    }
}

impl DragCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub const fn new(overlay_opacity_percent: u8) -> Self {
        Self {
            state: DragState::Idle,
            overlay_opacity_percent,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Returns the dragged task, if any.
    #[must_use]
    pub const fn active_task(&self) -> Option<&Task> {
        match &self.state {
            DragState::Dragging(active) => Some(&active.task),
            DragState::Idle => None,
        }
    }

    /// Starts dragging `task_id`.
    ///
    /// Returns `false` and stays idle when the task is not on `board` or a
    /// drag is already active.
    pub fn drag_start(&mut self, task_id: &TaskId, board: &Board, pointer: Point) -> bool {
        if self.is_dragging() {
            warn!(task_id = %task_id, "drag start ignored, another drag is active");
            return false;
        }
        let Some(task) = board.find(task_id) else {
            warn!(task_id = %task_id, "drag start ignored, unknown task");
            return false;
        };
        debug!(task_id = %task_id, status = task.status().as_str(), "drag started");
        self.state = DragState::Dragging(ActiveDrag {
            task: task.clone(),
            pointer,
        });
        true
    }

    /// Tracks pointer movement during a drag.
    pub const fn drag_move(&mut self, pointer: Point) {
        if let DragState::Dragging(active) = &mut self.state {
            active.pointer = pointer;
        }
    }

    /// Ends the drag over the droppable `over`, moving the task when the
    /// target differs from its column.
    ///
    /// The coordinator returns to idle whatever the outcome.
    pub fn drag_end<S>(
        &mut self,
        over: Option<&str>,
        controller: &mut BoardController<S>,
    ) -> DragOutcome
    where
        S: TaskStorage,
    {
        let DragState::Dragging(active) = std::mem::take(&mut self.state) else {
            return DragOutcome::NotDragging;
        };
        let task_id = active.task.id();
        let Some(target) = over else {
            debug!(task_id = %task_id, "drag released outside drop targets");
            return DragOutcome::Cancelled;
        };
        match controller.move_task(&MoveTaskRequest::new(task_id.clone(), target)) {
            Ok(MoveOutcome::Moved(task)) => DragOutcome::Moved(task),
            Ok(MoveOutcome::Unchanged(task)) => DragOutcome::Unchanged(task),
            Err(err) => {
                warn!(task_id = %task_id, drop_target = target, error = %err, "drop rejected");
                DragOutcome::Rejected(err)
            }
        }
    }

    /// Aborts the drag without touching the board.
    ///
    /// Returns `false` when no drag was active.
    pub fn drag_cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Returns the overlay to render, if a drag is active.
    #[must_use]
    pub fn overlay(&self) -> Option<DragOverlay> {
        match &self.state {
            DragState::Dragging(active) => Some(DragOverlay {
                task: active.task.clone(),
                pointer: active.pointer,
                opacity_percent: self.overlay_opacity_percent,
            }),
            DragState::Idle => None,
        }
    }

    /// Returns the opacity of `task_id`'s card in its column.
    #[must_use]
    pub fn source_opacity(&self, task_id: &TaskId) -> u8 {
        match self.active_task() {
            Some(task) if task.id() == task_id => SOURCE_CARD_OPACITY_PERCENT,
            _ => OPAQUE_PERCENT,
        }
    }
}
