//! Arena configuration loaded from TOML.

use crate::CompetitorRegistry;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use strictly_gomoku::{BoardSize, EngineConfig};
use tracing::{debug, info, instrument};

/// Side length used when no board size is given.
pub const DEFAULT_BOARD_SIZE: usize = 20;

/// Matches per ordered pairing when none is given.
pub const DEFAULT_MATCHES_PER_PAIR: u32 = 100;

/// Tournament settings.
///
/// Every field has a default, so a partial file (or none at all) is
/// valid. An empty competitor list means every registered competitor.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct ArenaConfig {
    /// Board rows (and columns unless `board_cols` is set).
    board_size: usize,

    /// Board columns for a rectangular board.
    #[setters(strip_option)]
    board_cols: Option<usize>,

    /// Marks in a row needed to win.
    win_len: usize,

    /// Matches per ordered pair of competitors.
    matches_per_pair: u32,

    /// Base seed for competitor randomness; random when absent.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Registry names of the entrants.
    competitors: Vec<String>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            board_cols: None,
            win_len: strictly_gomoku::DEFAULT_WIN_LEN,
            matches_per_pair: DEFAULT_MATCHES_PER_PAIR,
            seed: None,
            competitors: Vec::new(),
        }
    }
}

impl ArenaConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(size = %config.board(), win_len = config.win_len, "Config loaded successfully");
        Ok(config)
    }

    /// Board dimensions.
    pub fn board(&self) -> BoardSize {
        BoardSize::new(self.board_size, self.board_cols.unwrap_or(self.board_size))
    }

    /// Engine settings derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.board(), self.win_len)
    }

    /// Checks the engine settings, the match count and the entrant list.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine_config()
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid engine settings: {}", e)))?;

        if self.matches_per_pair == 0 {
            return Err(ConfigError::new(
                "matches_per_pair must be at least 1".to_string(),
            ));
        }

        let mut seen = BTreeSet::new();
        for name in &self.competitors {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::new(format!("Duplicate competitor: {}", name)));
            }
        }
        Ok(())
    }

    /// Resolves the entrant names against `registry`.
    ///
    /// An empty list expands to every registered name.
    #[instrument(skip(self, registry))]
    pub fn entrants(&self, registry: &CompetitorRegistry) -> Result<Vec<String>, ConfigError> {
        if self.competitors.is_empty() {
            return Ok(registry.names().into_iter().map(String::from).collect());
        }
        for name in &self.competitors {
            if !registry.contains(name) {
                return Err(ConfigError::new(format!(
                    "Unknown competitor '{}'; known: {}",
                    name,
                    registry.names().join(", ")
                )));
            }
        }
        Ok(self.competitors.clone())
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
    /// Creates a new configuration error at the caller's location.
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

    #[test]
    fn test_defaults_match_runner() {
        let config = ArenaConfig::default();
        assert_eq!(config.board(), BoardSize::square(20));
        assert_eq!(*config.win_len(), 5);
        assert_eq!(*config.matches_per_pair(), 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rectangular_board() {
        let config = ArenaConfig::default().with_board_size(6).with_board_cols(9);
        assert_eq!(config.board(), BoardSize::new(6, 9));
        assert_eq!(config.engine_config().cols, 9);
    }

    #[test]
    fn test_rejects_duplicates() {
        let config = ArenaConfig::default()
            .with_competitors(vec!["random".to_string(), "random".to_string()]);
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("Duplicate competitor"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_rejects_zero_matches() {
        let config = ArenaConfig::default().with_matches_per_pair(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_entrants_expand_to_registry() {
        let registry = CompetitorRegistry::with_builtins();
        let entrants = ArenaConfig::default().entrants(&registry).unwrap();
        assert_eq!(entrants, ["first_available", "greedy", "random"]);
    }

    #[test]
    fn test_unknown_entrant() {
        let registry = CompetitorRegistry::with_builtins();
        let config = ArenaConfig::default().with_competitors(vec!["alpha_go".to_string()]);
        let err = config.entrants(&registry).unwrap_err();
        assert!(err.message.contains("alpha_go"));
    }
}
