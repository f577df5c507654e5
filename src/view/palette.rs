//! Display attributes per status and priority, resolved at the
//! presentation boundary.

use crate::board::domain::{Priority, TaskStatus};

/// Display attributes of a workflow column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Status the column shows and accepts as a drop target.
    pub status: TaskStatus,
    /// Column heading.
    pub title: &'static str,
    /// Accent colour as a CSS hex string.
    pub accent: &'static str,
    /// Whether the column offers the add-task affordance.
    pub accepts_new: bool,
}

/// Display attributes of a priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    /// Priority described.
    pub priority: Priority,
    /// Badge label.
    pub label: &'static str,
    /// Accent colour as a CSS hex string.
    pub accent: &'static str,
}

const COLUMNS: [ColumnSpec; 3] = [
    ColumnSpec {
        status: TaskStatus::Todo,
        title: "To Do",
        accent: "#3b82f6",
        accepts_new: true,
    },
    ColumnSpec {
        status: TaskStatus::InProgress,
        title: "In Progress",
        accent: "#eab308",
        accepts_new: false,
    },
    ColumnSpec {
        status: TaskStatus::Done,
        title: "Done",
        accent: "#22c55e",
        accepts_new: false,
    },
];

const PRIORITIES: [PriorityStyle; 3] = [
    PriorityStyle {
        priority: Priority::Low,
        label: "Low",
        accent: "#22c55e",
    },
    PriorityStyle {
        priority: Priority::Medium,
        label: "Medium",
        accent: "#eab308",
    },
    PriorityStyle {
        priority: Priority::High,
        label: "High",
        accent: "#ef4444",
    },
];

/// Returns every column in display order.
#[must_use]
pub const fn columns() -> &'static [ColumnSpec; 3] {
    &COLUMNS
}

/// Returns the column attributes for `status`.
#[must_use]
pub const fn column_spec(status: TaskStatus) -> &'static ColumnSpec {
    match status {
        TaskStatus::Todo => &COLUMNS[0],
        TaskStatus::InProgress => &COLUMNS[1],
        TaskStatus::Done => &COLUMNS[2],
    }
}

/// Returns the badge attributes for `priority`.
#[must_use]
pub const fn priority_style(priority: Priority) -> &'static PriorityStyle {
    match priority {
        Priority::Low => &PRIORITIES[0],
        Priority::Medium => &PRIORITIES[1],
        Priority::High => &PRIORITIES[2],
    }
}
