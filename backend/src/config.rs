//! Dashboard configuration.
//!
//! Settings come from an optional `solar-phase.toml` file and are then
//! overridden by environment variables:
//!
//! - `HOST` / `PORT`: bind address (default `0.0.0.0:8080`)
//! - `REFRESH_SECONDS`: page auto-refresh interval (default 60)
//! - `SOLAR_PHASE_DATE`: pin every request to a fixed `YYYY-MM-DD` date
//!
//! ```toml
//! pinned_date = "2025-05-21"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [display]
//! refresh_seconds = 60
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::parse_iso_date;

pub const CONFIG_FILE_NAME: &str = "solar-phase.toml";

/// Longest accepted page refresh interval: one day.
pub const MAX_REFRESH_SECONDS: u64 = 86_400;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_refresh_seconds")]
    pub refresh_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    /// When set, every request evaluates this date and ignores `?date=`.
    #[serde(default)]
    pub pinned_date: Option<NaiveDate>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_refresh_seconds() -> u64 {
    60
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            refresh_seconds: default_refresh_seconds(),
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// First config file found in the standard locations, if any.
    ///
    /// Searches the current directory, `backend/`, then the parent directory.
    pub fn find_default_file() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// File settings (or defaults when no file exists) with env overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_default_file() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `HOST`, `PORT`, `REFRESH_SECONDS` and `SOLAR_PHASE_DATE`.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{port}' is not a valid port number"),
            })?;
        }
        if let Ok(secs) = env::var("REFRESH_SECONDS") {
            self.display.refresh_seconds =
                secs.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "REFRESH_SECONDS".to_string(),
                    message: format!("'{secs}' is not a whole number of seconds"),
                })?;
        }
        if let Ok(date) = env::var("SOLAR_PHASE_DATE") {
            self.pinned_date = if date.trim().is_empty() {
                None
            } else {
                Some(parse_iso_date(&date).map_err(|e| ConfigError::InvalidValue {
                    key: "SOLAR_PHASE_DATE".to_string(),
                    message: e.to_string(),
                })?)
            };
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_REFRESH_SECONDS).contains(&self.display.refresh_seconds) {
            return Err(ConfigError::InvalidValue {
                key: "display.refresh_seconds".to_string(),
                message: format!(
                    "{} is outside 1..={}",
                    self.display.refresh_seconds, MAX_REFRESH_SECONDS
                ),
            });
        }
        if let Some(date) = self.pinned_date {
            parse_iso_date(&date.to_string()).map_err(|e| ConfigError::InvalidValue {
                key: "pinned_date".to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
