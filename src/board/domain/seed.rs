//! Fixed starter board used when storage holds nothing usable.

use super::{Board, PersistedTaskData, Priority, Task, TaskId, TaskStatus};

const SEED: [(&str, &str, &str, Priority, TaskStatus); 7] = [
    (
        "1",
        "Design landing page",
        "Create mockups for the new landing page design",
        Priority::High,
        TaskStatus::Todo,
    ),
    (
        "2",
        "Set up database",
        "Configure PostgreSQL database and create initial schema",
        Priority::High,
        TaskStatus::Todo,
    ),
    ("3", "Write documentation", "", Priority::Low, TaskStatus::Todo),
    (
        "4",
        "Implement authentication",
        "Add user login and registration functionality",
        Priority::High,
        TaskStatus::InProgress,
    ),
    (
        "5",
        "Fix responsive layout",
        "Resolve mobile view issues on the dashboard",
        Priority::Medium,
        TaskStatus::InProgress,
    ),
    (
        "6",
        "Update dependencies",
        "Upgrade all npm packages to latest versions",
        Priority::Low,
        TaskStatus::Done,
    ),
    (
        "7",
        "Add unit tests",
        "Write tests for user service module",
        Priority::Medium,
        TaskStatus::Done,
    ),
];

/// Returns the seed tasks in insertion order.
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    SEED.iter()
        .map(|&(id, title, description, priority, status)| {
            Task::from_persisted(PersistedTaskData {
                id: TaskId::new(id),
                title: title.to_owned(),
                description: description.to_owned(),
                priority,
                status,
            })
        })
        .collect()
}

/// Returns the seed board.
#[must_use]
pub fn seed_board() -> Board {
    // Seed identifiers are distinct literals.
    Board::from_tasks(seed_tasks()).unwrap_or_default()
}
