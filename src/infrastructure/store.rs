//! Key-value storage backends
//!
//! Stores never report failures to their callers: a failed write is logged
//! and dropped, and a failed read looks the same as a missing key.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// String-valued key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str);

    /// Read the value stored under `key`
    fn load(&self, key: &str) -> Option<String>;

    /// Delete `key`; missing keys are ignored
    fn remove(&self, key: &str);

    /// Delete every key
    fn clear(&self);
}

/// Durable store keeping one `<key>.json` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Write to a temp file in the same directory, then rename into place.
    fn write_atomic(&self, path: &Path, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let tmp_name = format!(
            "{}.tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("value.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)
    }
}

impl KeyValueStore for FileStore {
    fn save(&self, key: &str, value: &str) {
        let path = self.path_for(key);
        match self.write_atomic(&path, value) {
            Ok(()) => debug!(key, path = %path.display(), "stored value"),
            Err(e) => warn!(key, path = %path.display(), error = %e, "failed to store value"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, path = %path.display(), error = %e, "failed to read value");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(key, path = %path.display(), error = %e, "failed to remove value");
            }
        }
    }

    fn clear(&self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Err(e) = fs::remove_file(&path) {
                    warn!(path = %path.display(), error = %e, "failed to remove value");
                }
            }
        }
    }
}

/// In-process store; clones share the same contents.
///
/// Used as the session store, where contents must not outlive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_values<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> T {
        // A poisoned map only means another holder panicked mid-update.
        let mut values = match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut values)
    }
}

impl KeyValueStore for MemoryStore {
    fn save(&self, key: &str, value: &str) {
        self.with_values(|values| {
            values.insert(key.to_string(), value.to_string());
        });
    }

    fn load(&self, key: &str) -> Option<String> {
        self.with_values(|values| values.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        self.with_values(|values| {
            values.remove(key);
        });
    }

    fn clear(&self) {
        self.with_values(|values| values.clear());
    }
}
