//! Shared fixtures for board facade integration tests.

use kanban::{
    BoardConfig, KanbanBoard,
    board::{adapters::InMemoryStorage, domain::TaskStatus},
    drag::Rect,
};
use rstest::fixture;

/// Width of each laid-out column.
pub const COLUMN_WIDTH: u32 = 300;

/// A board session plus a handle on the storage it writes to.
pub struct BoardHarness {
    pub storage: InMemoryStorage,
    pub board: KanbanBoard<InMemoryStorage>,
}

/// Opens a seeded board with the three columns laid out side by side.
#[fixture]
pub fn harness() -> BoardHarness {
    let storage = InMemoryStorage::new();
    let mut board = KanbanBoard::open(storage.clone(), &BoardConfig::default());
    for (index, status) in (0_i32..).zip(TaskStatus::ALL) {
        board.set_column_bounds(status, Rect::new(index * 300, 0, COLUMN_WIDTH, 800));
    }
    BoardHarness { storage, board }
}

/// Returns the identifiers in `status` as strings.
pub fn column_ids(board: &KanbanBoard<InMemoryStorage>, status: TaskStatus) -> Vec<String> {
    board
        .list_by_status(status)
        .iter()
        .map(|task| task.id().to_string())
        .collect()
}
