//! Initialize quotebook use case

use crate::error::Result;
use crate::infrastructure::config::parse_remote_url;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;
use tracing::info;

/// Create a new quotebook at `path` with default configuration.
pub fn init(path: &Path, remote_url: Option<String>) -> Result<Workspace> {
    let remote_url = remote_url.as_deref().map(parse_remote_url).transpose()?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let mut config = Config::default();
    if let Some(url) = remote_url {
        config.remote_url = url;
    }
    workspace.save_config(&config)?;

    info!(path = %path.display(), "initialized quotebook");
    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuotebookError;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("b");

        let workspace = init(&target, None).unwrap();

        assert!(workspace.is_initialized());
        let config = workspace.load_config().unwrap();
        assert_eq!(config.remote_url, crate::infrastructure::config::DEFAULT_REMOTE_URL);
        assert_eq!(config.fetch_limit, 10);
    }

    #[test]
    fn test_init_with_remote_url() {
        let temp = TempDir::new().unwrap();
        let workspace = init(temp.path(), Some("http://localhost:1/q".to_string())).unwrap();
        assert_eq!(workspace.load_config().unwrap().remote_url, "http://localhost:1/q");
    }

    #[test]
    fn test_init_rejects_bad_remote_url() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("book");

        for url in ["ftp://example.com/quotes", "not a url"] {
            let result = init(&target, Some(url.to_string()));
            assert!(matches!(result, Err(QuotebookError::Config(_))));
        }

        assert!(!target.exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), None).unwrap();
        assert!(init(temp.path(), None).is_err());
    }
}
