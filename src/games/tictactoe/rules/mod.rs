//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage; the `Board` methods below are thin wrappers over them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tied};
pub use win::{WINNING_COMBINATIONS, has_won, winner};

use super::{Board, Mark};

impl Board {
    /// True iff `mark` holds any winning combination.
    pub fn has_won(&self, mark: Mark) -> bool {
        has_won(self, mark)
    }

    /// Returns the mark holding a winning combination, if any.
    pub fn winner(&self) -> Option<Mark> {
        winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    /// Full board with no winner.
    pub fn is_tied(&self) -> bool {
        is_tied(self)
    }

    /// True when `current` has won or the game is tied.
    pub fn is_over(&self, current: Mark) -> bool {
        self.has_won(current) || self.is_tied()
    }
}
