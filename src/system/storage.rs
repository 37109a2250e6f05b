// src/system/storage.rs

use crate::constants::STORE_FILENAME;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the persistent key/value stores.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A filesystem I/O error occurred.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The store file exists but does not hold a valid JSON object.
    #[error("Store file '{path}' is not valid JSON: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The platform config directory could not be determined.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
}

/// The storage capability injected into the console session.
///
/// A deliberately small get/set/remove contract over string keys, so the
/// session never touches ambient global storage directly. The history layout
/// stored through it must remain format-stable (no version tag).
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// --- IN-MEMORY STORE ---

/// A volatile store. The default for tests and for sessions that should not
/// persist anything.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

// --- FILE-BACKED STORE ---

/// A store persisted as a single JSON object (`key -> value`) in one file.
///
/// The whole map is read at construction and rewritten on every mutation;
/// the stores this console needs are tiny (one history key), so simplicity
/// wins over incremental writes.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStorage {
    /// Opens (or initializes) the store at `path`. A missing file yields an
    /// empty store; an unreadable or malformed file is an error so that a
    /// corrupt store never silently swallows the user's history.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                    path: path.display().to_string(),
                    source: e,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };
        log::debug!(
            "Opened store '{}' with {} key(s)",
            path.display(),
            values.len()
        );
        Ok(Self { path, values })
    }

    /// Opens the store at the default platform location
    /// (`<config dir>/skystack/store.json`), creating the directory if needed.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(default_store_path()?)
    }

    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)
            .expect("a string map always serializes");
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// Returns the default store file path (`<config dir>/skystack/store.json`),
/// ensuring the directory exists.
pub fn default_store_path() -> Result<PathBuf, StorageError> {
    let dir = dirs::config_dir()
        .ok_or(StorageError::ConfigDirNotFound)?
        .join("skystack");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir.join(STORE_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_empty_store() {
        let dir = tempdir().unwrap();
        let store = FileStorage::open(dir.path().join("store.json")).unwrap();
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn set_then_reopen_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStorage::open(&path).unwrap();
        store.set("console_history", "[\"PAN EHAM\"]").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(
            reopened.get("console_history").as_deref(),
            Some("[\"PAN EHAM\"]")
        );
    }

    #[test]
    fn remove_deletes_the_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStorage::open(&path).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert!(reopened.get("k").is_none());
    }

    #[test]
    fn corrupt_file_is_reported_not_swallowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = FileStorage::open(&path);
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }
}
