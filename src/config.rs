//! Rule configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Toggles for the optional end-of-game rules.
///
/// The defaults play the standard game. Missing keys in a TOML file fall back
/// to their default values.
///
/// ```toml
/// invasion_win = true
/// repetition_draw = true
/// repetition_prior_occurrences = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Whether a surviving invasion of enemy territory wins the game.
    pub invasion_win: bool,
    /// Whether repeating a configuration draws the game.
    pub repetition_draw: bool,
    /// How many earlier occurrences of the current configuration trigger the
    /// repetition draw.
    pub repetition_prior_occurrences: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            invasion_win: true,
            repetition_draw: true,
            repetition_prior_occurrences: 2,
        }
    }
}

impl RuleConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: RuleConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repetition_prior_occurrences == 0 {
            return Err(ConfigError::Validation(
                "repetition_prior_occurrences must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
