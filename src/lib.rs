//! Console tic-tac-toe with human and computer players.
//!
//! # Architecture
//!
//! - **Games**: the board and rules engine (cells, moves, win/tie detection)
//! - **Config**: difficulty and game mode, from flags, TOML or prompts
//! - **Console**: players, the round/replay loop and the I/O collaborators
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{
//!     Difficulty, GameConfig, GameMode, Orchestrator, Outcome, ScriptedConsole,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GameConfig::new(Difficulty::Hard, GameMode::HumanVsHuman, None);
//! let console = ScriptedConsole::new(["0", "3", "1", "4", "2"]);
//! let mut game = Orchestrator::new(config, console);
//! assert_eq!(game.play_round()?, Outcome::Won(tictactoe_console::Mark::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, Difficulty, GameConfig, GameMode, PartialConfig, PlayerType};

// Crate-level exports - Console front end
pub use console::players::{ComputerPlayer, HumanPlayer, Player};
pub use console::{
    Console, ConsoleError, GameEvent, Orchestrator, ScriptedConsole, StdConsole, resolve_config,
};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, CELL_COUNT, Mark, Move, MoveError, Outcome, Square, WINNING_COMBINATIONS, rules,
};
