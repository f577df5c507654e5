//! Then steps for board state change scenarios.

use super::world::BoardWorld;
use kanban::board::{
    domain::{Priority, TaskId, TaskStatus},
    services::BoardError,
};
use rstest_bdd_macros::then;

#[then(r#"task "{id}" has status "{status}""#)]
fn task_has_status(world: &BoardWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world
        .board()?
        .controller()
        .find(&TaskId::new(id.as_str()))
        .ok_or_else(|| eyre::eyre!("task {id} missing from board"))?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {}, found {}",
        expected.as_str(),
        task.status().as_str()
    );
    Ok(())
}

#[then(r#"task "{id}" has priority "{priority}""#)]
fn task_has_priority(world: &BoardWorld, id: String, priority: String) -> Result<(), eyre::Report> {
    let expected = Priority::from_lenient(&priority);
    let task = world
        .board()?
        .controller()
        .find(&TaskId::new(id.as_str()))
        .ok_or_else(|| eyre::eyre!("task {id} missing from board"))?;
    eyre::ensure!(
        task.priority() == expected,
        "expected priority {}, found {}",
        expected.as_str(),
        task.priority().as_str()
    );
    Ok(())
}

#[then("no other task changed")]
fn no_other_task_changed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .before
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board snapshot in scenario world"))?;
    let touched = world
        .touched
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing touched task in scenario world"))?;
    let controller = world.board()?.controller();
    for task in before.tasks().iter().filter(|task| task.id() != touched) {
        eyre::ensure!(
            controller.find(task.id()) == Some(task),
            "task {} changed unexpectedly",
            task.id()
        );
    }
    eyre::ensure!(
        controller.board().len() == before.len(),
        "board size changed from {} to {}",
        before.len(),
        controller.board().len()
    );
    Ok(())
}

#[then("the storage write count is {count:usize}")]
fn storage_write_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.storage.write_count();
    eyre::ensure!(actual == count, "expected {count} writes, found {actual}");
    Ok(())
}

#[then(r#"the "{column}" column holds {count:usize} tasks"#)]
fn column_holds(world: &BoardWorld, column: String, count: usize) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let actual = world.board()?.list_by_status(status).len();
    eyre::ensure!(actual == count, "expected {count} tasks in {column}, found {actual}");
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board()?.controller().board().len();
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then("the update fails with a not found error")]
fn update_fails_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update error in scenario world"))?;
    if !matches!(error, BoardError::NotFound(_)) {
        return Err(eyre::eyre!("expected NotFound error, got {error:?}"));
    }
    Ok(())
}
