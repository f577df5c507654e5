//! When steps for board state change scenarios.

use super::world::BoardWorld;
use kanban::{
    board::domain::{Priority, TaskId, TaskPatch, TaskStatus},
    drag::Point,
};
use rstest_bdd_macros::when;

const OUTSIDE_COLUMNS: Point = Point::new(5_000, 100);

fn drop_point(column_name: &str) -> Result<Point, eyre::Report> {
    let status = TaskStatus::try_from(column_name)
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let column = match status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 1,
        TaskStatus::Done => 2,
    };
    Ok(Point::new(column * 300 + 150, 100))
}

fn drag(world: &mut BoardWorld, id: &str, release: Point) -> Result<(), eyre::Report> {
    world.mark_before(id)?;
    let board = world.board_mut()?;
    board.pointer_down(TaskId::new(id), Point::new(10, 10));
    let _ = board.pointer_move(Point::new(40, 10));
    let _ = board.pointer_move(release);
    let _ = board.pointer_up(release);
    Ok(())
}

#[when(r#"task "{id}" is dragged onto the "{column}" column"#)]
fn dragged_onto_column(
    world: &mut BoardWorld,
    id: String,
    column: String,
) -> Result<(), eyre::Report> {
    let release = drop_point(&column)?;
    drag(world, &id, release)
}

#[when(r#"task "{id}" is dragged and released outside every column"#)]
fn released_outside(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    drag(world, &id, OUTSIDE_COLUMNS)
}

#[when(r#"a task titled "{title}" is submitted from the form"#)]
fn submitted_from_form(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    board.open_create();
    board.editor_mut().set_title(title);
    board
        .submit_editor()
        .map_err(|err| eyre::eyre!("form submit failed: {err}"))?;
    Ok(())
}

#[when(r#"task "{id}" is given priority "{priority}""#)]
fn given_priority(world: &mut BoardWorld, id: String, priority: String) -> Result<(), eyre::Report> {
    world.mark_before(&id)?;
    let patch = TaskPatch::new().with_priority(Priority::from_lenient(&priority));
    let result = world
        .board_mut()?
        .controller_mut()
        .update(&TaskId::new(id), &patch);
    if let Err(err) = result {
        world.last_error = Some(err);
    }
    Ok(())
}
