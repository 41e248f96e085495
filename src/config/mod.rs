//! Configuration management for LazyTable.
//!
//! This module handles loading, saving, and validating the user's
//! configuration file. The file lives at
//! `<config dir>/lazytable/config.toml` unless overridden by the
//! `LAZYTABLE_CONFIG` environment variable or an explicit path.

mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use settings::Settings;

/// Environment variable that overrides the configuration file path.
pub const CONFIG_ENV_VAR: &str = "LAZYTABLE_CONFIG";

/// Errors that can occur while handling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// Reading the configuration file failed.
    #[error("failed to read config file: {0}")]
    ReadError(#[source] std::io::Error),

    /// Writing the configuration file failed.
    #[error("failed to write config file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The configuration file is not valid TOML for `Config`.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// The configuration parsed but holds invalid values.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Application settings.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Get the configuration file path.
    ///
    /// `LAZYTABLE_CONFIG` wins over the platform default.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("lazytable").join("config.toml"))
    }

    /// Load the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load the configuration from a specific file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save the configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::WriteError)?;

        debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        self.settings.validate()
    }
}
