//! Preference storage implementation
//!
//! This module persists small string preferences (the chosen language) in a
//! key-value store: a JSON file on the device, or process memory for
//! session-only use.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;
use crate::config::{StorageBackend, StorageConfig};
use crate::utils::errors::{CareNetworkError, Result};

/// Synchronous key-value storage for user preferences
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Create the storage backend selected in configuration
pub fn create_storage(config: &StorageConfig) -> Box<dyn PreferenceStore> {
    match config.backend {
        StorageBackend::File => Box::new(FileStorage::new(&config.path)),
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
    }
}

/// Device-local preferences kept in a JSON object file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every entry; a missing file is an empty store
    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            CareNetworkError::Storage(format!("Corrupted preferences file {}: {}", self.path.display(), e))
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl PreferenceStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        debug!(key = key, path = %self.path.display(), found = entries.contains_key(key), "Preference read");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Rewrite from scratch when the existing file cannot be parsed
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(CareNetworkError::Storage(_)) => BTreeMap::new(),
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        debug!(key = key, path = %self.path.display(), "Preference written");
        Ok(())
    }
}

/// Session-only preferences; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CareNetworkError::Storage("Memory storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CareNetworkError::Storage("Memory storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
