//! Command-line interface for tictactoe_console.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_console::PartialConfig;

/// Tic-Tac-Toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_console")]
#[command(about = "Console tic-tac-toe with human and computer players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Computer strength (easy or hard); prompted when omitted
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Game type (human_vs_human, human_vs_computer, computer_vs_computer); prompted when omitted
    #[arg(short, long)]
    pub mode: Option<String>,

    /// TOML file providing difficulty, mode and seed
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer players' random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Settings given as flags.
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            difficulty: self.difficulty.clone(),
            mode: self.mode.clone(),
            seed: self.seed,
        }
    }
}
