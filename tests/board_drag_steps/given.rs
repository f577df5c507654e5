//! Given steps for board state change scenarios.

use super::world::BoardWorld;
use kanban::{board::domain::TaskStatus, drag::Rect};
use rstest_bdd_macros::given;

/// Column width used when laying out drop targets.
pub const COLUMN_WIDTH: u32 = 300;

#[given("a seeded board with columns laid out side by side")]
fn seeded_board(world: &mut BoardWorld) {
    let board = world.open_board();
    for (index, status) in (0_i32..).zip(TaskStatus::ALL) {
        board.set_column_bounds(status, Rect::new(index * 300, 0, COLUMN_WIDTH, 800));
    }
}
