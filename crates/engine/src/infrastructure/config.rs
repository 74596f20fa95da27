//! Application configuration
//!
//! Read once at startup from a TOML file:
//!
//! ```toml
//! server = "sqlite:movies.db?mode=rwc"
//! database = "movies_db"
//! # port = 3000
//! # store_timeout_secs = 5
//! ```
//!
//! The file path defaults to `config.toml` and can be overridden with
//! `MARQUEE_CONFIG`. Any problem with the file is fatal.

use std::env;
use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "MARQUEE_CONFIG";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application configuration loaded from the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Store connection URL
    pub server: String,
    /// Database holding the `movies` collection
    pub database: String,
    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-call store timeout; unset means wait for the store indefinitely
    #[serde(default)]
    pub store_timeout_secs: Option<u64>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl AppConfig {
    /// `$MARQUEE_CONFIG`, falling back to `config.toml`.
    pub fn config_path() -> PathBuf {
        env::var(CONFIG_PATH_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    pub fn parse(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|err| ConfigError::Parse {
            origin: origin.to_string(),
            message: err.to_string(),
        })?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.server.trim().is_empty() {
            return Err(ConfigError::Invalid("`server` must not be empty".into()));
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::Invalid("`database` must not be empty".into()));
        }
        if self.store_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "`store_timeout_secs` must be greater than zero".into(),
            ));
        }
        Ok(self)
    }

    pub fn store_timeout(&self) -> Option<Duration> {
        self.store_timeout_secs.map(Duration::from_secs)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
