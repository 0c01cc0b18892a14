//! Configuration management for trainlog.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "trainlog";

/// Default schema resource, relative to the working directory.
const SCHEMA_FILE_NAME: &str = "scheme.json";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "TRAINLOG_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `TRAINLOG_`)
/// 2. TOML config file at `~/.config/trainlog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the JSON Schema every train list must satisfy.
    pub schema_path: PathBuf,
    /// Create missing parent directories when saving a train list.
    pub create_parent_dirs: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(SCHEMA_FILE_NAME),
            create_parent_dirs: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Replace the schema path, as done by the `--schema` flag.
    #[must_use]
    pub fn with_schema_path(mut self, schema_path: Option<PathBuf>) -> Self {
        if let Some(path) = schema_path {
            self.storage.schema_path = path;
        }
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.schema_path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "storage.schema_path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get the schema path.
    #[must_use]
    pub fn schema_path(&self) -> &Path {
        &self.storage.schema_path
    }
}
