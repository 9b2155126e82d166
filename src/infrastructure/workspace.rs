//! Quotebook workspace on disk

use crate::error::{QuotebookError, Result};
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

const MARKER_DIR: &str = ".quotebook";

/// A directory holding a `.quotebook/` folder with config and storage
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the workspace root.
    /// Checks QUOTEBOOK_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUOTEBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_marker_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(QuotebookError::Config(format!(
                    "QUOTEBOOK_ROOT is set to '{}' but no .quotebook directory found. \
                    Run 'quotebook init' in that directory or unset QUOTEBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.quotebook/` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_marker_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuotebookError::NotQuotebookDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_marker_dir(path: &Path) -> bool {
        path.join(MARKER_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_marker_dir(&self.root)
    }

    /// Create the `.quotebook/` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let dir = self.root.join(MARKER_DIR);

        if dir.exists() {
            return Err(QuotebookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Durable store rooted at `.quotebook/storage/`
    pub fn durable_store(&self) -> FileStore {
        FileStore::new(self.root.join(MARKER_DIR).join("storage"))
    }

    /// Resolve a user-supplied path against the current directory
    pub fn resolve(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(std::env::current_dir()?.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_marker() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());

        assert!(!workspace.is_initialized());
        workspace.initialize().unwrap();
        assert!(workspace.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());

        workspace.initialize().unwrap();
        assert!(matches!(
            workspace.initialize(),
            Err(QuotebookError::Config(_))
        ));
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        Workspace::new(temp.path().to_path_buf()).initialize().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = Workspace::discover_from(&nested).unwrap();
        assert_eq!(found.root(), temp.path());
    }

    #[test]
    fn test_discover_from_without_marker() {
        let temp = TempDir::new().unwrap();
        let result = Workspace::discover_from(temp.path());
        assert!(matches!(
            result,
            Err(QuotebookError::NotQuotebookDirectory(_))
        ));
    }

    #[test]
    fn test_durable_store_location() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());
        assert_eq!(
            workspace.durable_store().dir(),
            temp.path().join(".quotebook").join("storage")
        );
    }
}
