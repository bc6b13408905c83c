//! Tic-Tac-Toe console game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_console::{Orchestrator, PartialConfig, StdConsole, resolve_config};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let result = run(cli);
    if let Err(e) = &result {
        error!(error = %e, "Game aborted");
    }
    result
}

#[instrument(skip(cli))]
fn run(cli: Cli) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => PartialConfig::from_file(path)?,
        None => PartialConfig::default(),
    };
    let partial = file_config.overlay(cli.overrides());

    let mut console = StdConsole::stdio();
    let config = resolve_config(partial, &mut console)?;
    info!(?config, "Starting game");

    Orchestrator::new(config, console).run()
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
