//! Application configuration.

use crate::consts::dashboard::{REFRESH_PERIOD_SECS, SIMULATED_LATENCY_MS};
use crate::quote::QuoteSnapshot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Refresh period must be at least one second")]
    InvalidRefreshPeriod,

    #[error("Could not determine the home directory")]
    NoHomeDirectory,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Seconds between scheduled refreshes.
    pub refresh_secs: u64,
    /// Simulated latency of each acquisition, in milliseconds.
    pub latency_ms: u64,
    /// Snapshot served instead of the built-in NVDA record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteSnapshot>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_secs: REFRESH_PERIOD_SECS,
            latency_ms: SIMULATED_LATENCY_MS,
            quote: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading fails, the JSON is invalid, or the
    /// refresh period is zero.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file at `path`.
    ///
    /// Refuses to touch anything not named `config.json`; a missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), ConfigError> {
        if !path.ends_with("config.json") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Path must end with config.json",
            )
            .into());
        }
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_secs == 0 {
            return Err(ConfigError::InvalidRefreshPeriod);
        }
        Ok(())
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// The snapshot the fixture source should serve.
    pub fn snapshot(&self) -> QuoteSnapshot {
        self.quote.clone().unwrap_or_else(QuoteSnapshot::nvda)
    }
}

/// Default config location: `~/.stock-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(".stock-dashboard").join("config.json"))
}
