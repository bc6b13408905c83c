//! Result of a finished round.

use super::{Board, Mark};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The mark completed a winning combination.
    Won(Mark),
    /// The board filled up with no winner.
    Tied,
}

impl Outcome {
    /// Evaluates the board after `current` has moved.
    ///
    /// Returns `None` while the round is still in progress.
    pub fn evaluate(board: &Board, current: Mark) -> Option<Self> {
        if board.has_won(current) {
            Some(Outcome::Won(current))
        } else if board.is_tied() {
            Some(Outcome::Tied)
        } else {
            None
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::Tied => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tied)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "{} wins!", mark.player_name()),
            Outcome::Tied => write!(f, "It's a tie!"),
        }
    }
}
