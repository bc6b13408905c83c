//! Player trait and implementations.

mod computer;
mod human;

pub use computer::{ComputerPlayer, pick_best_move, pick_random_move, winning_move};
pub use human::HumanPlayer;

use super::io::Console;
use crate::config::{GameConfig, PlayerType};
use crate::games::tictactoe::{Board, Mark};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move for `mark` on `board`.
    ///
    /// Returns a cell index (0-8) that is valid on `board`.
    fn get_move(&mut self, board: &Board, mark: Mark, console: &mut dyn Console) -> Result<usize>;

    /// Whether a human or the computer is behind this player.
    fn player_type(&self) -> PlayerType;
}

/// Builds the player controlling `mark` under `config`.
///
/// With a seed, each mark gets its own deterministic RNG stream.
pub fn for_mark(config: &GameConfig, mark: Mark) -> Box<dyn Player> {
    match config.mode().player_type(mark) {
        PlayerType::Human => Box::new(HumanPlayer::new()),
        PlayerType::Computer => {
            let rng = match config.seed() {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(mark as u64)),
                None => StdRng::from_os_rng(),
            };
            Box::new(ComputerPlayer::new(*config.difficulty(), rng))
        }
    }
}
