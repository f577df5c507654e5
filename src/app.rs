//! Board facade wiring controller, drag handling and the task form.
//!
//! A UI shell forwards user intents here: pointer input on cards, form
//! edits and delete requests. It reads back [`BoardView`]s to render.

use crate::board::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskStorage,
    services::{BoardController, PersistentStore},
};
use crate::config::BoardConfig;
use crate::drag::{DragCoordinator, DragOutcome, DropTargets, Point, PointerSensor, Rect, SensorEvent};
use crate::editor::{EditorError, EditorOutcome, TaskEditor};
use crate::view::{BoardView, ColumnView};
use tracing::{debug, warn};

/// Prompt shown before a task is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// Asks the user to confirm a deletion.
pub trait DeleteConfirmation {
    /// Returns `true` when the user agrees to delete `task`.
    fn confirm_delete(&self, task: &Task, prompt: &str) -> bool;
}

impl<F> DeleteConfirmation for F
where
    F: Fn(&Task, &str) -> bool,
{
    fn confirm_delete(&self, task: &Task, prompt: &str) -> bool {
        self(task, prompt)
    }
}

/// Effect of a pointer event on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The event did not change anything.
    Ignored,
    /// A drag started on the task.
    DragStarted(TaskId),
    /// The drag overlay followed the pointer.
    DragMoved,
    /// A drag ended.
    Dropped(DragOutcome),
    /// The drag was aborted.
    DragCancelled,
    /// A card was clicked and its edit form opened.
    EditOpened(TaskId),
}

/// A task board session.
#[derive(Debug)]
pub struct KanbanBoard<S>
where
    S: TaskStorage,
{
    controller: BoardController<S>,
    sensor: PointerSensor,
    targets: DropTargets,
    drag: DragCoordinator,
    editor: TaskEditor,
}

impl<S> KanbanBoard<S>
where
    S: TaskStorage,
{
    /// Opens a board over `storage`, loading saved tasks or the seed set.
    #[must_use]
    pub fn open(storage: S, config: &BoardConfig) -> Self {
        let store = PersistentStore::new(storage, config.storage_key.clone());
        Self {
            controller: BoardController::open(store),
            sensor: PointerSensor::new(config.activation_distance),
            targets: DropTargets::new(),
            drag: DragCoordinator::new(config.overlay_opacity_percent),
            editor: TaskEditor::new(),
        }
    }

    /// Returns the board controller.
    #[must_use]
    pub const fn controller(&self) -> &BoardController<S> {
        &self.controller
    }

    /// Returns the board controller for direct operations.
    pub const fn controller_mut(&mut self) -> &mut BoardController<S> {
        &mut self.controller
    }

    /// Returns the drag coordinator.
    #[must_use]
    pub const fn drag(&self) -> &DragCoordinator {
        &self.drag
    }

    /// Returns the task form.
    #[must_use]
    pub const fn editor(&self) -> &TaskEditor {
        &self.editor
    }

    /// Returns the task form for field edits.
    pub const fn editor_mut(&mut self) -> &mut TaskEditor {
        &mut self.editor
    }

    /// Returns the tasks in `status`.
    #[must_use]
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.controller.list_by_status(status)
    }

    /// Returns the three columns in display order.
    #[must_use]
    pub fn columns(&self) -> Vec<ColumnView> {
        self.view().columns
    }

    /// Returns the current view of all columns.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::build(self.controller.board(), &self.drag)
    }

    /// Records where the `status` column is laid out so drops over it
    /// resolve to that status.
    pub fn set_column_bounds(&mut self, status: TaskStatus, bounds: Rect) {
        self.targets.register(status.as_str(), bounds);
    }

    /// Feeds a press on the card of `task_id`.
    pub fn pointer_down(&mut self, task_id: TaskId, at: Point) {
        self.sensor.pointer_down(task_id, at);
    }

    /// Feeds pointer movement.
    pub fn pointer_move(&mut self, at: Point) -> PointerOutcome {
        self.sensor
            .pointer_move(at)
            .map_or(PointerOutcome::Ignored, |event| self.dispatch(event))
    }

    /// Feeds a pointer release.
    pub fn pointer_up(&mut self, at: Point) -> PointerOutcome {
        self.sensor
            .pointer_up(at)
            .map_or(PointerOutcome::Ignored, |event| self.dispatch(event))
    }

    /// Aborts the current pointer gesture.
    pub fn pointer_cancel(&mut self) -> PointerOutcome {
        self.sensor
            .pointer_cancel()
            .map_or(PointerOutcome::Ignored, |event| self.dispatch(event))
    }

    /// Opens an empty form for a new task.
    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    /// Opens the edit form for `id`. Returns `false` for unknown tasks.
    pub fn open_edit(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.controller.find(id) else {
            warn!(task_id = %id, "edit requested for unknown task");
            return false;
        };
        self.editor.open_edit(task);
        true
    }

    /// Submits the task form.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError`] when the form is closed or the submission is
    /// rejected; validation failures leave the form open.
    pub fn submit_editor(&mut self) -> Result<EditorOutcome, EditorError> {
        self.editor.submit(&mut self.controller)
    }

    /// Closes the task form, discarding pending edits.
    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Deletes `id` once `confirm` agrees.
    ///
    /// Returns the removed task, or `None` when the user declined or the
    /// task does not exist.
    pub fn request_delete(
        &mut self,
        id: &TaskId,
        confirm: &impl DeleteConfirmation,
    ) -> Option<Task> {
        let Some(task) = self.controller.find(id) else {
            warn!(task_id = %id, "delete requested for unknown task");
            return None;
        };
        if !confirm.confirm_delete(task, DELETE_PROMPT) {
            debug!(task_id = %id, "delete declined");
            return None;
        }
        match self.controller.delete(id) {
            Ok(removed) => Some(removed),
            Err(err) => {
                warn!(task_id = %id, error = %err, "delete rejected");
                None
            }
        }
    }

    fn dispatch(&mut self, event: SensorEvent) -> PointerOutcome {
        match event {
            SensorEvent::DragStart { task_id, pointer } => {
                if self
                    .drag
                    .drag_start(&task_id, self.controller.board(), pointer)
                {
                    PointerOutcome::DragStarted(task_id)
                } else {
                    PointerOutcome::Ignored
                }
            }
            SensorEvent::DragMove { pointer } => {
                if !self.drag.is_dragging() {
                    return PointerOutcome::Ignored;
                }
                self.drag.drag_move(pointer);
                PointerOutcome::DragMoved
            }
            SensorEvent::DragEnd { pointer } => {
                let over = self.targets.resolve(pointer);
                PointerOutcome::Dropped(self.drag.drag_end(over, &mut self.controller))
            }
            SensorEvent::DragCancel => {
                if self.drag.drag_cancel() {
                    PointerOutcome::DragCancelled
                } else {
                    PointerOutcome::Ignored
                }
            }
            SensorEvent::Click { task_id } => {
                if self.open_edit(&task_id) {
                    PointerOutcome::EditOpened(task_id)
                } else {
                    PointerOutcome::Ignored
                }
            }
        }
    }
}
