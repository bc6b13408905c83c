//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use super::win::has_won;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board where neither mark holds a line.
///
/// A full board with a winning line is a win, never a tie.
#[instrument(level = "trace", skip(board))]
pub fn is_tied(board: &Board) -> bool {
    is_full(board) && !has_won(board, Mark::X) && !has_won(board, Mark::O)
}
