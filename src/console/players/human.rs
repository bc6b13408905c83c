//! Human player that types moves on the console.

use super::Player;
use crate::config::PlayerType;
use crate::console::io::{Console, ConsoleError};
use crate::console::orchestrator::GameEvent;
use crate::games::tictactoe::{Board, Mark};
use anyhow::Result;
use tracing::{debug, instrument};

const MOVE_PROMPT: &str = "Enter your move (0-8): ";

/// Human player using line input.
#[derive(Debug, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new() -> Self {
        Self
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, board, console))]
    fn get_move(&mut self, board: &Board, mark: Mark, console: &mut dyn Console) -> Result<usize> {
        loop {
            let line = console
                .read_line(MOVE_PROMPT)?
                .ok_or(ConsoleError::InputClosed)?;

            match line.trim().parse::<usize>() {
                Ok(cell) if board.is_valid_move(cell) => {
                    debug!(cell, "Human chose cell");
                    return Ok(cell);
                }
                _ => {
                    debug!(input = %line, "Rejected move input");
                    console.emit(&GameEvent::InvalidMove)?;
                }
            }
        }
    }

    fn player_type(&self) -> PlayerType {
        PlayerType::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::io::ScriptedConsole;

    #[test]
    fn test_reprompts_until_valid() {
        let mut board = Board::new();
        board.apply_move(2, Mark::X).unwrap();
        let mut console = ScriptedConsole::new(["abc", "-1", "9", "2", " 7 "]);

        let cell = HumanPlayer::new()
            .get_move(&board, Mark::O, &mut console)
            .unwrap();

        assert_eq!(cell, 7);
        assert_eq!(console.prompts().len(), 5);
        assert_eq!(
            console
                .events()
                .iter()
                .filter(|e| **e == GameEvent::InvalidMove)
                .count(),
            4
        );
    }

    #[test]
    fn test_eof_is_error() {
        let mut console = ScriptedConsole::new(["x"]);
        let err = HumanPlayer::new()
            .get_move(&Board::new(), Mark::X, &mut console)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConsoleError>(),
            Some(ConsoleError::InputClosed)
        ));
    }
}
