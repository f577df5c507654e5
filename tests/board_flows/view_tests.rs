//! Column views and text rendering.

use super::helpers::{BoardHarness, harness};
use kanban::{
    board::domain::{Priority, TaskId, TaskStatus},
    drag::Point,
    view::{BoardView, column_spec, priority_style, render_text},
};
use rstest::rstest;

#[rstest]
fn view_lists_three_columns_with_counts(harness: BoardHarness) {
    let view = harness.board.view();

    let summary: Vec<(&str, &str, usize, bool)> = view
        .columns
        .iter()
        .map(|column| (column.status, column.title, column.count, column.accepts_new))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("todo", "To Do", 3, true),
            ("in-progress", "In Progress", 2, false),
            ("done", "Done", 2, false),
        ]
    );
    assert_eq!(view.dragging, None);
}

#[rstest]
fn cards_carry_priority_styles(harness: BoardHarness) {
    let view = harness.board.view();
    let todo = view.column(TaskStatus::Todo).expect("todo column");
    let first = todo.cards.first().expect("seed card");

    assert_eq!(first.id, "1");
    assert_eq!(first.priority_label, "High");
    assert_eq!(first.priority_accent, priority_style(Priority::High).accent);
    assert_eq!(first.opacity_percent, 100);
    assert_eq!(todo.accent, column_spec(TaskStatus::Todo).accent);
}

#[rstest]
fn dragged_card_is_dimmed_and_overlaid(mut harness: BoardHarness) {
    harness.board.pointer_down(TaskId::new("5"), Point::new(350, 10));
    let _ = harness.board.pointer_move(Point::new(380, 10));

    let view = harness.board.view();
    let card = view
        .column(TaskStatus::InProgress)
        .and_then(|column| column.cards.iter().find(|card| card.id == "5"))
        .expect("card stays in its column while dragged");

    assert!(card.dragging);
    assert_eq!(card.opacity_percent, 50);
    assert_eq!(view.dragging.as_deref(), Some("Fix responsive layout"));
}

#[rstest]
fn text_rendering_lists_columns_and_cards(harness: BoardHarness) {
    let rendered = render_text(&BoardView::from_board(harness.board.controller().board()))
        .expect("render should succeed");

    assert!(rendered.starts_with("Kanban Board"));
    assert!(rendered.contains("== To Do (3) [+ Add]"));
    assert!(rendered.contains("== In Progress (2)"));
    assert!(rendered.contains("== Done (2)"));
    assert!(rendered.contains("- [High] Design landing page"));
    assert!(rendered.contains("Create mockups for the new landing page design"));
    assert!(!rendered.contains("dragging"));
}

#[rstest]
fn columns_follow_board_changes(mut harness: BoardHarness) {
    harness
        .board
        .controller_mut()
        .delete(&TaskId::new("6"))
        .expect("delete");

    let counts: Vec<usize> = harness
        .board
        .columns()
        .iter()
        .map(|column| column.count)
        .collect();
    assert_eq!(counts, vec![3, 2, 1]);
    assert_eq!(harness.board.controller().tasks().len(), 6);
}
