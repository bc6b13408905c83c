//! Tic-tac-toe board and rules engine.

mod action;
mod outcome;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use outcome::Outcome;
pub use rules::WINNING_COMBINATIONS;
pub use types::{Board, CELL_COUNT, Mark, Square};
