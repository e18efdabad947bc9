//! Front-end configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::Phase;
use tracing::{debug, info, instrument, warn};

/// When the "Play Again" control accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResetPolicy {
    /// Only after a win or a tie.
    #[default]
    GameOverOnly,
    /// At any time, including mid-game.
    Anytime,
}

impl ResetPolicy {
    /// Whether a reset is allowed while the game is in `phase`.
    pub fn allows(self, phase: Phase) -> bool {
        match self {
            Self::GameOverOnly => phase.is_terminal(),
            Self::Anytime => true,
        }
    }
}

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// When "Play Again" is enabled.
    #[serde(default)]
    reset_policy: ResetPolicy,

    /// Where tracing output goes (the terminal is taken by the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            reset_policy: ResetPolicy::default(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(reset_policy = %config.reset_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.allow_mid_game_reset {
            self.reset_policy = ResetPolicy::Anytime;
        }
        self
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
    use clap::Parser;
    use std::io::Write;
    use tictactoe_engine::Mark;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_policy_only_after_game_over() {
        let policy = ResetPolicy::default();
        assert!(!policy.allows(Phase::InProgress));
        assert!(policy.allows(Phase::WonBy(Mark::O)));
        assert!(policy.allows(Phase::Tied));
        assert!(ResetPolicy::Anytime.allows(Phase::InProgress));
    }

    #[test]
    fn test_from_file_reads_all_keys() {
        let file = write_config("reset_policy = \"anytime\"\nlog_file = \"/tmp/ttt.log\"\n");
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.reset_policy(), ResetPolicy::Anytime);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = write_config("reset_policy = \"sometimes\"\n");
        let err = TuiConfig::load(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let file = write_config("board_size = 4\n");
        assert!(TuiConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let cli = Cli::parse_from(["tictactoe", "--log-file", "cli.log", "--allow-mid-game-reset"]);
        let config = TuiConfig::default().with_overrides(&cli);
        assert_eq!(*config.reset_policy(), ResetPolicy::Anytime);
        assert_eq!(config.log_file(), &PathBuf::from("cli.log"));
    }
}
