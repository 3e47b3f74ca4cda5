//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use unvoid_core::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "unvoid.toml";

/// Settings for the front ends.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board rows for new games.
    rows: usize,

    /// Board columns for new games.
    cols: usize,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    log_filter: String,

    /// File receiving logs while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            log_filter: "info".to_string(),
            log_file: PathBuf::from("unvoid.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if the
    /// board size is out of range.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] when it exists.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] under the same conditions as [`GameConfig::from_file`].
    #[instrument]
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the board size with command-line values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the resulting size is out of range.
    #[instrument(skip(self))]
    pub fn with_size(mut self, rows: Option<usize>, cols: Option<usize>) -> Result<Self, ConfigError> {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(cols) = cols {
            self.cols = cols;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let bounds = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        if bounds.contains(&self.rows) && bounds.contains(&self.cols) {
            Ok(())
        } else {
            Err(ConfigError::new(format!(
                "Board dimensions must be between {} and {} (got {}x{})",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.rows, self.cols
            )))
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
