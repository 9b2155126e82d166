//! Configuration management

use crate::error::{QuotebookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_FETCH_LIMIT: usize = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint used for both fetch (GET) and push (POST)
    pub remote_url: String,
    pub sync_interval_secs: u64,
    /// Number of remote records taken per fetch
    pub fetch_limit: usize,
    pub request_timeout_secs: u64,
    /// Keep the remote record's own category instead of the fixed one
    pub preserve_remote_category: bool,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            preserve_remote_category: false,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .quotebook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quotebook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuotebookError::NotQuotebookDirectory(path.to_path_buf())
            } else {
                QuotebookError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| QuotebookError::Config(format!("Failed to parse config.toml: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check the rules `config set` enforces, for values edited by hand
    pub fn validate(&self) -> Result<()> {
        parse_remote_url(&self.remote_url)?;
        ensure_positive("sync_interval_secs", self.sync_interval_secs)?;
        ensure_positive("fetch_limit", self.fetch_limit as u64)?;
        ensure_positive("request_timeout_secs", self.request_timeout_secs)?;
        Ok(())
    }

    /// Save config to .quotebook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let dir = path.join(".quotebook");
        let config_path = dir.join("config.toml");

        if !dir.exists() {
            fs::create_dir(&dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuotebookError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub(crate) fn ensure_positive(key: &str, value: u64) -> Result<u64> {
    if value == 0 {
        return Err(QuotebookError::Config(format!(
            "Invalid value for {}: '{}' (expected a positive integer)",
            key, value
        )));
    }
    Ok(value)
}

/// Normalize an http(s) endpoint, rejecting anything else
pub(crate) fn parse_remote_url(value: &str) -> Result<String> {
    let url = reqwest::Url::parse(value.trim())
        .map_err(|e| QuotebookError::Config(format!("Invalid remote_url '{}': {}", value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        scheme => Err(QuotebookError::Config(format!(
            "Invalid remote_url '{}': unsupported scheme '{}'",
            value, scheme
        ))),
    }
}
