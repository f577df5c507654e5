//! Modal create/edit form flow.
//!
//! The editor holds pending field values while the form is open. Cancelling
//! discards them without touching the board; submitting validates the input
//! and forwards it to the controller.

use crate::board::{
    domain::{NewTask, Priority, Task, TaskId, TaskPatch, ValidationError},
    ports::TaskStorage,
    services::{BoardController, BoardError},
};
use thiserror::Error;
use tracing::{debug, warn};

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Form creates a new task in the first column.
    Create,
    /// Form edits the task with this identifier.
    Edit(TaskId),
}

/// Pending form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    mode: EditorMode,
    title: String,
    description: String,
    priority: Priority,
    error: Option<ValidationError>,
}

impl EditorSession {
    /// Returns the form mode.
    #[must_use]
    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Returns the pending title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the pending description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the pending priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the validation error shown after the last rejected submit.
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// A new task was created.
    Created(Task),
    /// An existing task was updated.
    Updated(Task),
}

/// Errors returned when submitting the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    /// Submit was called while the form was closed.
    #[error("task form is not open")]
    Closed,
    /// The controller rejected the submission.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Create/edit form state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEditor {
    session: Option<EditorSession>,
}

impl TaskEditor {
    /// Creates a closed editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the form is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the open session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&EditorSession> {
        self.session.as_ref()
    }

    /// Opens an empty form for a new task.
    pub fn open_create(&mut self) {
        self.session = Some(EditorSession {
            mode: EditorMode::Create,
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            error: None,
        });
    }

    /// Opens the form pre-filled with `task`.
    pub fn open_edit(&mut self, task: &Task) {
        self.session = Some(EditorSession {
            mode: EditorMode::Edit(task.id().clone()),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            error: None,
        });
    }

    /// Returns the dialog heading, or `None` when closed.
    #[must_use]
    pub fn heading(&self) -> Option<&'static str> {
        self.session.as_ref().map(|session| match session.mode {
            EditorMode::Create => "Add New Task",
            EditorMode::Edit(_) => "Edit Task",
        })
    }

    /// Returns the submit button label, or `None` when closed.
    #[must_use]
    pub fn submit_label(&self) -> Option<&'static str> {
        self.session.as_ref().map(|session| match session.mode {
            EditorMode::Create => "Create",
            EditorMode::Edit(_) => "Update",
        })
    }

    /// Replaces the pending title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(session) = &mut self.session {
            session.title = title.into();
        }
    }

    /// Replaces the pending description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        if let Some(session) = &mut self.session {
            session.description = description.into();
        }
    }

    /// Replaces the pending priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        if let Some(session) = &mut self.session {
            session.priority = priority;
        }
    }

    /// Closes the form, discarding pending values.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("task form cancelled");
        }
    }

    /// Validates the pending values and forwards them to `controller`.
    ///
    /// The form closes on success. A validation failure keeps it open with
    /// the error recorded on the session. A missing edit target closes it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Closed`] when the form is not open, or
    /// [`EditorError::Board`] when the controller rejects the submission.
    pub fn submit<S>(
        &mut self,
        controller: &mut BoardController<S>,
    ) -> Result<EditorOutcome, EditorError>
    where
        S: TaskStorage,
    {
        let session = self.session.as_mut().ok_or(EditorError::Closed)?;
        let title = session.title.trim().to_owned();
        if title.is_empty() {
            session.error = Some(ValidationError::EmptyTitle);
            return Err(BoardError::Validation(ValidationError::EmptyTitle).into());
        }
        let description = session.description.trim().to_owned();
        let result = match &session.mode {
            EditorMode::Create => controller
                .create(
                    NewTask::new(title)
                        .with_description(description)
                        .with_priority(session.priority),
                )
                .map(EditorOutcome::Created),
            EditorMode::Edit(id) => controller
                .update(
                    id,
                    &TaskPatch::new()
                        .with_title(title)
                        .with_description(description)
                        .with_priority(session.priority),
                )
                .map(EditorOutcome::Updated),
        };
        match result {
            Ok(outcome) => {
                self.session = None;
                Ok(outcome)
            }
            Err(BoardError::Validation(err)) => {
                session.error = Some(err.clone());
                Err(BoardError::Validation(err).into())
            }
            Err(err) => {
                warn!(error = %err, "task form submit rejected");
                self.session = None;
                Err(err.into())
            }
        }
    }
}
