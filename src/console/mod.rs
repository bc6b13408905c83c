//! Console front end: I/O collaborators, players and the game loop.

pub mod io;
mod orchestrator;
pub mod players;
mod setup;
pub mod ui;

pub use io::{Console, ConsoleError, ScriptedConsole, StdConsole};
pub use orchestrator::{GameEvent, Orchestrator};
pub use setup::resolve_config;
