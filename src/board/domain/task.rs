//! Task entity and its workflow status and priority variants.

use super::{ParseTaskStatusError, TaskId, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Workflow column a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has not been started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// All statuses in column display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical storage and drop-target representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task urgency.
///
/// Absent, non-string or unrecognized stored values resolve to
/// [`Priority::Medium`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Default urgency.
    #[default]
    Medium,
    /// High urgency.
    High,
}

impl Priority {
    /// All priorities in selector order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses a priority, falling back to [`Priority::Medium`].
    #[must_use]
    pub fn from_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl From<Value> for Priority {
    fn from(value: Value) -> Self {
        value.as_str().map(Self::from_lenient).unwrap_or_default()
    }
}

/// Raw user input for a new task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    /// Title as typed; trimmed during construction.
    pub title: String,
    /// Optional description; trimmed during construction.
    pub description: Option<String>,
    /// Optional priority; defaults to medium.
    pub priority: Option<Priority>,
}

impl NewTask {
    /// Creates input with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Shallow patch applied to an existing task.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A single workflow item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, deserialize_with = "nullable_text")]
    description: String,
    #[serde(default)]
    priority: Priority,
    status: TaskStatus,
}

/// Parameter object for reconstructing a stored or seeded task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: String,
    /// Stored description.
    pub description: String,
    /// Stored priority.
    pub priority: Priority,
    /// Stored status.
    pub status: TaskStatus,
}

impl Task {
    /// Builds a new `todo` task from raw input, filling defaults once.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when the trimmed title is
    /// empty.
    pub fn new(input: NewTask) -> Result<Self, ValidationError> {
        let NewTask {
            title,
            description,
            priority,
        } = input;
        Ok(Self {
            id: TaskId::generate(),
            title: normalize_title(&title)?,
            description: normalize_description(description.as_deref()),
            priority: priority.unwrap_or_default(),
            status: TaskStatus::Todo,
        })
    }

    /// Reconstructs a task from persisted or seeded data without validation.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns a copy with `patch` merged on top, re-validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when the merged title is
    /// empty.
    pub fn patched(&self, patch: &TaskPatch) -> Result<Self, ValidationError> {
        let title = normalize_title(patch.title.as_deref().unwrap_or(&self.title))?;
        let description = patch
            .description
            .as_deref()
            .map_or_else(|| self.description.clone(), |text| text.trim().to_owned());
        Ok(Self {
            id: self.id.clone(),
            title,
            description,
            priority: patch.priority.unwrap_or(self.priority),
            status: self.status,
        })
    }

    /// Returns a copy placed in the `status` column.
    #[must_use]
    pub fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

fn normalize_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

fn normalize_description(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_owned()
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned).unwrap_or_default())
}
