//! Shared world state for board state change scenarios.

use kanban::{
    BoardConfig, KanbanBoard,
    board::{
        adapters::InMemoryStorage,
        domain::{Board, TaskId},
        services::BoardError,
    },
};
use rstest::fixture;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub storage: InMemoryStorage,
    pub board: Option<KanbanBoard<InMemoryStorage>>,
    pub before: Option<Board>,
    pub touched: Option<TaskId>,
    pub last_error: Option<BoardError>,
}

impl BoardWorld {
    /// Creates a world with no board opened yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
            board: None,
            before: None,
            touched: None,
            last_error: None,
        }
    }

    /// Opens the board over the world's storage.
    pub fn open_board(&mut self) -> &mut KanbanBoard<InMemoryStorage> {
        self.board
            .insert(KanbanBoard::open(self.storage.clone(), &BoardConfig::default()))
    }

    /// Returns the opened board.
    pub fn board_mut(&mut self) -> Result<&mut KanbanBoard<InMemoryStorage>, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board has not been opened in scenario world"))
    }

    /// Returns the opened board.
    pub fn board(&self) -> Result<&KanbanBoard<InMemoryStorage>, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board has not been opened in scenario world"))
    }

    /// Remembers the current board and the task about to change.
    pub fn mark_before(&mut self, id: &str) -> Result<(), eyre::Report> {
        let snapshot = self.board()?.controller().board().clone();
        self.before = Some(snapshot);
        self.touched = Some(TaskId::new(id));
        Ok(())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
