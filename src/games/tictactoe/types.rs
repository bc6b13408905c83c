//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Symbol placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display name of the player holding this mark.
    pub fn player_name(self) -> &'static str {
        match self {
            Mark::X => "Player 1",
            Mark::O => "Player 2",
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns true when a mark occupies the cell.
    pub fn is_occupied(self) -> bool {
        matches!(self, Square::Occupied(_))
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed 0-8 in row-major order. The board is `Copy`, so
/// hypothetical moves are evaluated on snapshots rather than by mutating
/// and restoring the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from a cell snapshot.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the cell at the given index, `None` when out of range.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Returns all cells in row-major order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Checks if a cell is in range and empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// True iff `cell` is within 0-8 and not yet taken.
    #[instrument(level = "trace", skip(self))]
    pub fn is_valid_move(&self, cell: usize) -> bool {
        self.is_empty(cell)
    }

    /// Places `mark` at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::Occupied`] and
    /// leaves the board untouched when the move is not valid.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        match self.get(cell) {
            None => Err(MoveError::OutOfRange(cell)),
            Some(Square::Occupied(_)) => Err(MoveError::Occupied(cell)),
            Some(Square::Empty) => {
                self.squares[cell] = Square::Occupied(mark);
                trace!(cell, %mark, "Mark placed");
                Ok(())
            }
        }
    }

    /// Returns a copy of this board with `mark` placed at `cell`.
    ///
    /// # Errors
    ///
    /// Same as [`Board::apply_move`].
    pub fn with_move(&self, cell: usize, mark: Mark) -> Result<Self, MoveError> {
        let mut next = *self;
        next.apply_move(cell, mark)?;
        Ok(next)
    }

    /// Every empty cell, in ascending index order.
    pub fn available_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&cell| self.is_empty(cell)).collect()
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_occupied()).count()
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_cells(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_valid_move_bounds() {
        let board = Board::new();
        assert!(board.is_valid_move(0));
        assert!(board.is_valid_move(8));
        assert!(!board.is_valid_move(9));
        assert!(!board.is_valid_move(usize::MAX));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut board = Board::new();
        board.apply_move(4, Mark::X).unwrap();
        let before = board;

        assert_eq!(board.apply_move(4, Mark::O), Err(MoveError::Occupied(4)));
        assert_eq!(board, before);
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9, Mark::X), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_with_move_leaves_original() {
        let board = Board::new();
        let next = board.with_move(2, Mark::O).unwrap();
        assert!(board.is_empty(2));
        assert_eq!(next.get(2), Some(Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_available_cells_ascending() {
        let mut board = Board::new();
        board.apply_move(0, Mark::X).unwrap();
        board.apply_move(5, Mark::O).unwrap();
        assert_eq!(board.available_cells(), vec![1, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::new();
        board.apply_move(3, Mark::X).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_player_names() {
        assert_eq!(Mark::X.player_name(), "Player 1");
        assert_eq!(Mark::O.player_name(), "Player 2");
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
