//! Player configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use unbeaten_tictactoe::GameMode;

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UnbeatenConfig {
    /// Mode to start `play` in when none is given on the command line.
    #[serde(default)]
    mode: GameMode,

    /// Print the AI's score for every candidate reply.
    #[serde(default)]
    show_scores: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn,unbeaten=info".to_string()
}

impl Default for UnbeatenConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            show_scores: false,
            log_filter: default_log_filter(),
        }
    }
}

impl UnbeatenConfig {
    /// Creates a configuration with the given mode and default everything else.
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Returns a copy with score printing switched on or off.
    pub fn with_show_scores(self, show_scores: bool) -> Self {
        Self {
            show_scores,
            ..self
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid TOML for this type.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, show_scores = config.show_scores, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Fails only if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
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
