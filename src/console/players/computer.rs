//! Computer player and its move-selection policy.
//!
//! Easy plays a uniformly random empty cell. Hard scans the empty cells in
//! ascending order and takes the first one that wins on the spot, falling
//! back to a random cell. Hard never blocks the opponent and never looks
//! further than its own next move.

use super::Player;
use crate::config::{Difficulty, PlayerType};
use crate::console::io::Console;
use crate::games::tictactoe::{Board, Mark, MoveError};
use anyhow::Result;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks a uniformly random empty cell, `None` on a full board.
pub fn pick_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.available_cells().choose(rng).copied()
}

/// First empty cell, by index, where `mark` completes a winning combination.
///
/// Each candidate is tried on a copy of the board; `board` is never touched.
#[instrument(level = "debug", skip(board))]
pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board.available_cells().into_iter().find(|&cell| {
        board
            .with_move(cell, mark)
            .is_ok_and(|next| next.has_won(mark))
    })
}

/// Immediate win if there is one, otherwise a random empty cell.
pub fn pick_best_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<usize> {
    winning_move(board, mark).or_else(|| pick_random_move(board, rng))
}

/// Computer-controlled player.
#[derive(Debug)]
pub struct ComputerPlayer<R> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player drawing randomness from `rng`.
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    /// Configured strength.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    #[instrument(skip(self, board, _console), fields(difficulty = %self.difficulty))]
    fn get_move(&mut self, board: &Board, mark: Mark, _console: &mut dyn Console) -> Result<usize> {
        let choice = match self.difficulty {
            Difficulty::Easy => pick_random_move(board, &mut self.rng),
            Difficulty::Hard => pick_best_move(board, mark, &mut self.rng),
        };
        let cell = choice.ok_or(MoveError::NoMovesAvailable)?;
        debug!(cell, "Computer chose cell");
        Ok(cell)
    }

    fn player_type(&self) -> PlayerType {
        PlayerType::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::io::ScriptedConsole;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(x: &[usize], o: &[usize]) -> Board {
        let mut board = Board::new();
        for &cell in x {
            board.apply_move(cell, Mark::X).unwrap();
        }
        for &cell in o {
            board.apply_move(cell, Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn test_hard_takes_the_only_win() {
        let board = board_from(&[0, 4], &[1, 2]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_best_move(&board, Mark::X, &mut rng), Some(8));
    }

    #[test]
    fn test_hard_takes_lowest_winning_cell() {
        let board = board_from(&[3, 4, 6, 7], &[0, 1, 2]);
        assert_eq!(winning_move(&board, Mark::X), Some(5));
    }

    #[test]
    fn test_hard_does_not_block() {
        // O threatens 0-1-2; X has no win of its own.
        let board = board_from(&[4], &[0, 1]);
        assert_eq!(winning_move(&board, Mark::X), None);
        let leaves_threat_open = (0..50u64).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            pick_best_move(&board, Mark::X, &mut rng) != Some(2)
        });
        assert!(leaves_threat_open);
    }

    #[test]
    fn test_hard_fallback_is_valid_and_pure() {
        let board = board_from(&[0], &[4]);
        let before = board;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cell = pick_best_move(&board, Mark::X, &mut rng).unwrap();
            assert!(before.available_cells().contains(&cell));
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_easy_picks_available_cell() {
        let board = board_from(&[0, 1, 5, 6], &[2, 3, 4, 8]);
        let mut player = ComputerPlayer::new(Difficulty::Easy, StdRng::seed_from_u64(9));
        assert_eq!(player.difficulty(), Difficulty::Easy);
        let mut console = ScriptedConsole::default();
        assert_eq!(player.get_move(&board, Mark::X, &mut console).unwrap(), 7);
        assert!(console.events().is_empty());
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        let mut player = ComputerPlayer::new(Difficulty::Hard, StdRng::seed_from_u64(1));
        let err = player
            .get_move(&board, Mark::O, &mut ScriptedConsole::default())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoveError>(),
            Some(&MoveError::NoMovesAvailable)
        );
    }
}
