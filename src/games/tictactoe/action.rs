//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark went
//! where so the console can report them after the board has changed.

use super::Mark;

/// A move in tic-tac-toe: a mark placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The cell index (0-8) receiving the mark.
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: usize) -> Self {
        Self { mark, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// Error raised when a move cannot be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// No empty cell is left to choose from.
    #[display("No moves available")]
    NoMovesAvailable,
}
