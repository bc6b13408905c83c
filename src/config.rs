//! Session configuration: difficulty, game mode and RNG seed.
//!
//! A [`GameConfig`] is fixed for the whole session. It is assembled from a
//! [`PartialConfig`] built out of an optional TOML file and command-line
//! flags; anything still missing is asked for on the console.

use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Strength of the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Takes an immediate win when one exists, otherwise random.
    #[default]
    Hard,
}

impl Difficulty {
    /// Parses a free-text choice. `easy` selects Easy, anything else Hard.
    #[instrument]
    pub fn from_choice(choice: &str) -> Self {
        if choice.trim().eq_ignore_ascii_case("easy") {
            Difficulty::Easy
        } else {
            Difficulty::Hard
        }
    }
}

/// Who controls each mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    /// Both marks are played from the console.
    HumanVsHuman,
    /// X is the computer, O is the human.
    #[default]
    HumanVsComputer,
    /// The computer plays both marks.
    ComputerVsComputer,
}

impl GameMode {
    /// Parses a free-text choice.
    ///
    /// `human_vs_human` and `human_vs_computer` are recognised; every other
    /// string, including the `computer_vc_computer` offered by the prompt,
    /// selects computer vs computer.
    #[instrument]
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim().to_ascii_lowercase().as_str() {
            "human_vs_human" => GameMode::HumanVsHuman,
            "human_vs_computer" => GameMode::HumanVsComputer,
            _ => GameMode::ComputerVsComputer,
        }
    }

    /// Which kind of player moves for `mark` in this mode.
    pub fn player_type(self, mark: Mark) -> PlayerType {
        match (self, mark) {
            (GameMode::HumanVsHuman, _) => PlayerType::Human,
            (GameMode::HumanVsComputer, Mark::O) => PlayerType::Human,
            (GameMode::HumanVsComputer, Mark::X) => PlayerType::Computer,
            (GameMode::ComputerVsComputer, _) => PlayerType::Computer,
        }
    }
}

/// Type of player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum PlayerType {
    /// Moves typed on the console.
    Human,
    /// Moves chosen by the computer policy.
    Computer,
}

/// Immutable configuration for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, new)]
pub struct GameConfig {
    /// Computer strength.
    difficulty: Difficulty,
    /// Player assignment.
    mode: GameMode,
    /// Seed for the computer players' RNG; entropy when absent.
    seed: Option<u64>,
}

/// Configuration with every field optional, as read from a file or flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    /// Free-text difficulty choice.
    pub difficulty: Option<String>,
    /// Free-text game mode choice.
    pub mode: Option<String>,
    /// RNG seed.
    pub seed: Option<u64>,
}

impl PartialConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn overlay(self, other: PartialConfig) -> Self {
        Self {
            difficulty: other.difficulty.or(self.difficulty),
            mode: other.mode.or(self.mode),
            seed: other.seed.or(self.seed),
        }
    }

    /// Builds the final config once difficulty and mode are known.
    pub fn complete(self, difficulty: &str, mode: &str) -> GameConfig {
        GameConfig::new(
            Difficulty::from_choice(self.difficulty.as_deref().unwrap_or(difficulty)),
            GameMode::from_choice(self.mode.as_deref().unwrap_or(mode)),
            self.seed,
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_fallback() {
        assert_eq!(Difficulty::from_choice("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_choice("  EASY \n"), Difficulty::Easy);
        assert_eq!(Difficulty::from_choice("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_choice("medium"), Difficulty::Hard);
        assert_eq!(Difficulty::from_choice(""), Difficulty::Hard);
    }

    #[test]
    fn test_mode_fallback() {
        assert_eq!(GameMode::from_choice("human_vs_human"), GameMode::HumanVsHuman);
        assert_eq!(GameMode::from_choice("Human_VS_Computer"), GameMode::HumanVsComputer);
        assert_eq!(
            GameMode::from_choice("computer_vc_computer"),
            GameMode::ComputerVsComputer
        );
        assert_eq!(GameMode::from_choice("chess"), GameMode::ComputerVsComputer);
    }

    #[test]
    fn test_player_type_dispatch() {
        use PlayerType::{Computer, Human};
        let table = [
            (GameMode::HumanVsHuman, Mark::X, Human),
            (GameMode::HumanVsHuman, Mark::O, Human),
            (GameMode::HumanVsComputer, Mark::X, Computer),
            (GameMode::HumanVsComputer, Mark::O, Human),
            (GameMode::ComputerVsComputer, Mark::X, Computer),
            (GameMode::ComputerVsComputer, Mark::O, Computer),
        ];
        for (mode, mark, expected) in table {
            assert_eq!(mode.player_type(mark), expected, "{} / {}", mode, mark);
        }
    }

    #[test]
    fn test_overlay_prefers_later_layer() {
        let file = PartialConfig {
            difficulty: Some("easy".into()),
            mode: Some("human_vs_human".into()),
            seed: Some(1),
        };
        let flags = PartialConfig {
            mode: Some("human_vs_computer".into()),
            ..Default::default()
        };
        let merged = file.overlay(flags);
        assert_eq!(merged.difficulty.as_deref(), Some("easy"));
        assert_eq!(merged.mode.as_deref(), Some("human_vs_computer"));
        assert_eq!(merged.seed, Some(1));
    }

    #[test]
    fn test_complete_uses_fallback_answers() {
        let partial = PartialConfig {
            seed: Some(7),
            ..Default::default()
        };
        let config = partial.complete("easy", "human_vs_human");
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(*config.mode(), GameMode::HumanVsHuman);
        assert_eq!(*config.seed(), Some(7));
    }

    #[test]
    fn test_parse_toml() {
        let partial = PartialConfig::from_toml_str("difficulty = \"easy\"\nseed = 42\n").unwrap();
        assert_eq!(partial.difficulty.as_deref(), Some("easy"));
        assert_eq!(partial.mode, None);
        assert_eq!(partial.seed, Some(42));
    }

    #[test]
    fn test_parse_toml_rejects_unknown_keys() {
        assert!(PartialConfig::from_toml_str("board_size = 4\n").is_err());
    }
}
