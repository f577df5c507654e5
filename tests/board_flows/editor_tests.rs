//! Create/edit form flow through the board facade.

use super::helpers::{BoardHarness, column_ids, harness};
use kanban::{
    board::{
        domain::{Priority, TaskId, TaskStatus, ValidationError},
        services::BoardError,
    },
    editor::{EditorError, EditorMode, EditorOutcome},
};
use rstest::rstest;

#[rstest]
fn create_form_adds_trimmed_task_to_todo(mut harness: BoardHarness) {
    harness.board.open_create();
    assert_eq!(harness.board.editor().heading(), Some("Add New Task"));
    assert_eq!(harness.board.editor().submit_label(), Some("Create"));

    let editor = harness.board.editor_mut();
    editor.set_title("  Write tests ");
    editor.set_description("  for the drag flow  ");
    editor.set_priority(Priority::High);
    let outcome = harness.board.submit_editor().expect("submit should succeed");

    let EditorOutcome::Created(task) = outcome else {
        panic!("expected a created task");
    };
    assert_eq!(task.title(), "Write tests");
    assert_eq!(task.description(), "for the drag flow");
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(harness.board.list_by_status(TaskStatus::Todo).len(), 4);
    assert!(!harness.board.editor().is_open());
}

#[rstest]
fn blank_title_keeps_form_open_with_error(mut harness: BoardHarness) {
    harness.board.open_create();
    harness.board.editor_mut().set_title("   ");

    let result = harness.board.submit_editor();

    assert_eq!(
        result,
        Err(EditorError::Board(BoardError::Validation(
            ValidationError::EmptyTitle
        )))
    );
    let session = harness.board.editor().session().expect("form stays open");
    assert_eq!(
        session.error().map(ToString::to_string),
        Some("Title is required".to_owned())
    );
    assert_eq!(harness.board.controller().board().len(), 7);
    assert_eq!(harness.storage.write_count(), 0);
}

#[rstest]
fn edit_form_updates_existing_task(mut harness: BoardHarness) {
    assert!(harness.board.open_edit(&TaskId::new("4")));
    assert_eq!(harness.board.editor().submit_label(), Some("Update"));
    assert_eq!(
        harness.board.editor().session().map(|session| session.mode().clone()),
        Some(EditorMode::Edit(TaskId::new("4")))
    );

    harness.board.editor_mut().set_priority(Priority::Low);
    let outcome = harness.board.submit_editor().expect("submit should succeed");

    let EditorOutcome::Updated(task) = outcome else {
        panic!("expected an updated task");
    };
    assert_eq!(task.priority(), Priority::Low);
    assert_eq!(task.title(), "Implement authentication");
    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(harness.storage.write_count(), 1);
}

#[rstest]
fn cancel_discards_pending_edits(mut harness: BoardHarness) {
    assert!(harness.board.open_edit(&TaskId::new("1")));
    harness.board.editor_mut().set_title("Something else");

    harness.board.cancel_editor();

    assert!(!harness.board.editor().is_open());
    assert_eq!(
        harness
            .board
            .controller()
            .find(&TaskId::new("1"))
            .map(|task| task.title().to_owned()),
        Some("Design landing page".to_owned())
    );
    assert_eq!(harness.storage.write_count(), 0);
}

#[rstest]
fn submit_while_closed_is_rejected(mut harness: BoardHarness) {
    assert_eq!(harness.board.submit_editor(), Err(EditorError::Closed));
}

#[rstest]
fn editing_a_deleted_task_closes_the_form(mut harness: BoardHarness) {
    assert!(harness.board.open_edit(&TaskId::new("3")));
    harness
        .board
        .controller_mut()
        .delete(&TaskId::new("3"))
        .expect("delete");

    let result = harness.board.submit_editor();

    assert_eq!(
        result,
        Err(EditorError::Board(BoardError::NotFound(TaskId::new("3"))))
    );
    assert!(!harness.board.editor().is_open());
    assert_eq!(column_ids(&harness.board, TaskStatus::Todo), vec!["1", "2"]);
}

#[rstest]
fn open_edit_for_unknown_task_is_refused(mut harness: BoardHarness) {
    assert!(!harness.board.open_edit(&TaskId::new("999")));
    assert!(!harness.board.editor().is_open());
}
