//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The 8 index triples that win the game when held by one mark.
pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `mark` holds all three cells of any winning combination.
#[instrument(level = "trace", skip(board))]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    WINNING_COMBINATIONS
        .iter()
        .any(|line| line.iter().all(|&cell| board.get(cell) == Some(Square::Occupied(mark))))
}

/// Returns the mark with three in a row, if any.
///
/// X is checked first; on a legal board at most one mark can hold a line.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}
