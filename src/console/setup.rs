//! Startup prompts for the settings not given on the command line.

use super::io::{Console, ConsoleError};
use crate::config::{GameConfig, PartialConfig};
use tracing::{debug, instrument};

const DIFFICULTY_PROMPT: &str = "Choose difficulty (easy/hard): ";
const MODE_PROMPT: &str =
    "Choose game type (human_vs_human/human_vs_computer/computer_vc_computer): ";

/// Completes `partial` by asking the console for whatever is missing.
///
/// Answers are lower-cased; end of input counts as an empty answer and
/// takes the usual fallback.
#[instrument(skip(console))]
pub fn resolve_config(
    partial: PartialConfig,
    console: &mut dyn Console,
) -> Result<GameConfig, ConsoleError> {
    let difficulty = match &partial.difficulty {
        Some(choice) => choice.clone(),
        None => ask(console, DIFFICULTY_PROMPT)?,
    };
    let mode = match &partial.mode {
        Some(choice) => choice.clone(),
        None => ask(console, MODE_PROMPT)?,
    };
    let config = partial.complete(&difficulty, &mode);
    debug!(?config, "Configuration resolved");
    Ok(config)
}

fn ask(console: &mut dyn Console, prompt: &str) -> Result<String, ConsoleError> {
    Ok(console
        .read_line(prompt)?
        .unwrap_or_default()
        .trim()
        .to_lowercase())
}
