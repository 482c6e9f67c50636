//! TOML configuration for the downloader.
//!
//! Every key is optional:
//!
//! ```toml
//! endpoint = "https://stooq.com/q/d/l/"
//! output_dir = "data"
//! user_agent = "dowfetch/0.1"
//! ```

use crate::data::DataError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default Stooq CSV download endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://stooq.com/q/d/l/";

/// Downloader settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Base URL the query string is appended to.
    pub endpoint: String,

    /// Destination directory used when the caller does not pass one.
    pub output_dir: PathBuf,

    /// User-Agent header. `None` keeps the HTTP client's default.
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: PathBuf::from("data"),
            user_agent: None,
        }
    }
}

impl FetchConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DataError::Config(format!("read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, DataError> {
        let config: Self =
            toml::from_str(content).map_err(|e| DataError::Config(format!("parse TOML: {e}")))?;
        if config.endpoint.trim().is_empty() {
            return Err(DataError::Config("endpoint must not be empty".into()));
        }
        Ok(config)
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, DataError> {
        toml::to_string_pretty(self).map_err(|e| DataError::Config(format!("serialize: {e}")))
    }
}
