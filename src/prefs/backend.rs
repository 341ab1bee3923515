//! Storage backends for the preference record.
//!
//! The store talks to a minimal key/value interface so hosts can decide
//! where preferences live. The file backend writes one JSON file per key
//! under the platform data directory; the memory backend backs tests and
//! embedded hosts that manage persistence themselves.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::warn;

/// Key the preference record is stored under.
pub const STORAGE_KEY: &str = "accesspanel.preferences";

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

/// Minimal key/value persistence interface.
pub trait SettingsBackend {
    /// Read the stored value for a key. Absent keys and unreadable
    /// entries both surface as `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "accesspanel", "AccessPanel")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// File-backed storage under a directory, one `<key>.json` file per key.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new() -> Self {
        Self { dir: get_data_dir() }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsBackend for FileBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("failed to read stored item {}: {}", key, e);
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
        }

        std::fs::write(&path, value).map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }
}

/// In-memory storage. Clones share the same map, so tests can keep a
/// handle and inspect what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the stored items.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.items.lock().map(|items| items.clone()).unwrap_or_default()
    }
}

impl SettingsBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok().and_then(|items| items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
        Ok(())
    }
}
