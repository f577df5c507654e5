//! Column and card view models derived from the board.

use super::palette::{ColumnSpec, column_spec, columns, priority_style};
use crate::board::domain::{Board, Task, TaskStatus};
use crate::drag::DragCoordinator;
use serde::Serialize;

/// A task card as rendered inside a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Task identifier, also the draggable identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description; cards hide it when empty.
    pub description: String,
    /// Priority label.
    pub priority_label: &'static str,
    /// Priority accent colour.
    pub priority_accent: &'static str,
    /// Card opacity in percent; reduced while the card is dragged.
    pub opacity_percent: u8,
    /// Whether the card is the drag source.
    pub dragging: bool,
}

/// One workflow column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Droppable identifier (the status string).
    pub status: &'static str,
    /// Column heading.
    pub title: &'static str,
    /// Accent colour.
    pub accent: &'static str,
    /// Whether the column offers the add-task affordance.
    pub accepts_new: bool,
    /// Number of cards.
    pub count: usize,
    /// Cards in insertion order.
    pub cards: Vec<CardView>,
}

/// The three columns of a board ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Columns in display order.
    pub columns: Vec<ColumnView>,
    /// Title of the task in the drag overlay, if a drag is active.
    pub dragging: Option<String>,
}

impl BoardView {
    /// Builds the view of `board` with no drag in progress.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self::build(board, &DragCoordinator::default())
    }

    /// Builds the view of `board`, reflecting the drag tracked by `drag`.
    #[must_use]
    pub fn build(board: &Board, drag: &DragCoordinator) -> Self {
        let columns = columns()
            .iter()
            .map(|spec| column_view(spec, board, drag))
            .collect();
        Self {
            columns,
            dragging: drag.active_task().map(|task| task.title().to_owned()),
        }
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        let wanted = column_spec(status).status.as_str();
        self.columns.iter().find(|column| column.status == wanted)
    }
}

fn column_view(spec: &ColumnSpec, board: &Board, drag: &DragCoordinator) -> ColumnView {
    let cards: Vec<CardView> = board
        .by_status(spec.status)
        .iter()
        .map(|task| card_view(task, drag))
        .collect();
    ColumnView {
        status: spec.status.as_str(),
        title: spec.title,
        accent: spec.accent,
        accepts_new: spec.accepts_new,
        count: cards.len(),
        cards,
    }
}

fn card_view(task: &Task, drag: &DragCoordinator) -> CardView {
    let style = priority_style(task.priority());
    let opacity_percent = drag.source_opacity(task.id());
    CardView {
        id: task.id().to_string(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        priority_label: style.label,
        priority_accent: style.accent,
        opacity_percent,
        dragging: drag
            .active_task()
            .is_some_and(|active| active.id() == task.id()),
    }
}
