//! Service configuration.
//!
//! Each service reads an optional TOML file (`racing.toml`, `sports.toml`)
//! from the working directory. Any key left out keeps the service's
//! built-in default, and command-line flags override both.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Number of rows seeded into an empty table.
pub const DEFAULT_SEED_ROWS: u32 = 100;

/// Runtime settings for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the HTTP API binds to.
    pub listen: SocketAddr,
    /// SQLite database file.
    pub database: PathBuf,
    /// How many rows `init` seeds.
    pub seed_rows: u32,
}

/// On-disk shape: every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    listen: Option<SocketAddr>,
    database: Option<PathBuf>,
    seed_rows: Option<u32>,
}

impl ServiceConfig {
    pub fn new(listen: SocketAddr, database: impl Into<PathBuf>) -> Self {
        Self {
            listen,
            database: database.into(),
            seed_rows: DEFAULT_SEED_ROWS,
        }
    }

    /// Layer the file at `path` over `self`.
    ///
    /// A missing file leaves `self` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if it is not valid TOML for this schema.
    pub fn load(self, path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(self);
        }

        let content = std::fs::read_to_string(path)?;
        self.merge_toml(&content)
    }

    /// Layer a TOML document over `self`.
    pub fn merge_toml(self, content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(self.with_overrides(file.listen, file.database, file.seed_rows))
    }

    /// Replace any field for which a value is given.
    pub fn with_overrides(
        mut self,
        listen: Option<SocketAddr>,
        database: Option<PathBuf>,
        seed_rows: Option<u32>,
    ) -> Self {
        if let Some(listen) = listen {
            self.listen = listen;
        }
        if let Some(database) = database {
            self.database = database;
        }
        if let Some(seed_rows) = seed_rows {
            self.seed_rows = seed_rows;
        }
        self
    }
}
