//! Config management use case

use crate::error::{QuotebookError, Result};
use crate::infrastructure::config::{ensure_positive, parse_remote_url};
use crate::infrastructure::{Config, Workspace};

const VALID_KEYS: &str =
    "remote_url, sync_interval_secs, fetch_limit, request_timeout_secs, preserve_remote_category, created";

/// Service for managing quotebook configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "remote_url" => Ok(config.remote_url),
            "sync_interval_secs" => Ok(config.sync_interval_secs.to_string()),
            "fetch_limit" => Ok(config.fetch_limit.to_string()),
            "request_timeout_secs" => Ok(config.request_timeout_secs.to_string()),
            "preserve_remote_category" => Ok(config.preserve_remote_category.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "remote_url" => config.remote_url = parse_remote_url(value)?,
            "sync_interval_secs" => config.sync_interval_secs = parse_positive(key, value)?,
            "fetch_limit" => config.fetch_limit = parse_positive(key, value)? as usize,
            "request_timeout_secs" => config.request_timeout_secs = parse_positive(key, value)?,
            "preserve_remote_category" => {
                config.preserve_remote_category = value.parse().map_err(|_| {
                    QuotebookError::Config(format!(
                        "Invalid value for preserve_remote_category: '{}' (expected true or false)",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(QuotebookError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

fn unknown_key(key: &str) -> QuotebookError {
    QuotebookError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    let parsed = value.trim().parse::<u64>().map_err(|_| {
        QuotebookError::Config(format!(
            "Invalid value for {}: '{}' (expected a positive integer)",
            key, value
        ))
    })?;
    ensure_positive(key, parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (ConfigService, TempDir) {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());
        workspace.initialize().unwrap();
        workspace.save_config(&Config::default()).unwrap();
        (ConfigService::new(workspace), temp)
    }

    #[test]
    fn test_get_defaults() {
        let (service, _temp) = service();
        assert_eq!(service.get("fetch_limit").unwrap(), "10");
        assert_eq!(service.get("preserve_remote_category").unwrap(), "false");
        assert!(service.get("remote_url").unwrap().starts_with("https://"));
    }

    #[test]
    fn test_set_and_get() {
        let (service, _temp) = service();

        service.set("sync_interval_secs", "120").unwrap();
        service.set("preserve_remote_category", "true").unwrap();
        service.set("remote_url", "http://localhost:8080/quotes").unwrap();

        assert_eq!(service.get("sync_interval_secs").unwrap(), "120");
        assert_eq!(service.get("preserve_remote_category").unwrap(), "true");
        assert_eq!(
            service.get("remote_url").unwrap(),
            "http://localhost:8080/quotes"
        );
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let (service, _temp) = service();

        assert!(service.set("fetch_limit", "0").is_err());
        assert!(service.set("fetch_limit", "-3").is_err());
        assert!(service.set("sync_interval_secs", "soon").is_err());
        assert!(service.set("preserve_remote_category", "maybe").is_err());
        assert!(service.set("remote_url", "ftp://example.com").is_err());
        assert!(service.set("remote_url", "not a url").is_err());
        assert_eq!(service.get("fetch_limit").unwrap(), "10");
    }

    #[test]
    fn test_created_is_read_only() {
        let (service, _temp) = service();
        let result = service.set("created", "2025-01-01T00:00:00Z");
        assert!(matches!(result, Err(QuotebookError::Config(_))));
    }

    #[test]
    fn test_unknown_key() {
        let (service, _temp) = service();
        match service.get("colour") {
            Err(QuotebookError::Config(msg)) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
