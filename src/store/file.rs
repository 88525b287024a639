//! File-backed storage — the durable native analog of browser local
//! storage. Keeps every key in one JSON object on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, StorageError};

use super::traits::KeyValueStorage;

/// Key-value backend persisted to a single JSON file.
///
/// Every write rewrites the whole file; the store above it already does
/// full read-modify-write, so there is no incremental path to preserve.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use (or later create) the storage file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(path = %path.display(), "File storage opened");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| StorageError::Backend(format!("Failed to read storage file: {e}")))?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Backend(format!("Failed to create storage directory: {e}"))
            })?;
        }
        let raw = serde_json::to_string(map)?;
        std::fs::write(&self.path, raw)
            .map_err(|e| StorageError::Backend(format!("Failed to write storage file: {e}")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
