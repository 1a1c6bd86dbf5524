//! TOML-based application configuration.
//!
//! Stores the default student and the stats filtering thresholds.
//! Configuration is stored at `~/.config/atril/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};

/// Stats filtering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Sessions shorter than this many seconds are ignored by the
    /// progress views.
    #[serde(default = "default_min_session_secs")]
    pub min_session_secs: u32,
}

fn default_min_session_secs() -> u32 {
    60
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            min_session_secs: default_min_session_secs(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/atril/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Student id assumed when a command does not name one.
    #[serde(default)]
    pub default_student: Option<String>,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return (and persist) the default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path or return (and persist) the default.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk at the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
