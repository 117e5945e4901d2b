//! # Storage
//!
//! String key-value storage for persisted app state. [`FileStore`] keeps one JSON file
//! per key inside a data directory and replaces files atomically (write to a temp file
//! in the same directory, then rename over the target). [`MemoryStore`] keeps
//! everything in a map and is used by tests.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The signed-in account
pub const USER_KEY: &str = "cooksy-user";
/// JSON array of every known account
pub const USERS_DB_KEY: &str = "cooksy-users-db";
/// Versioned app state envelope
pub const APP_STATE_KEY: &str = "cooksy-app-storage";

/// Errors raised by the storage layer itself
#[derive(Debug)]
pub enum StorageError {
    /// Key contains characters that cannot be used as a file name
    InvalidKey(String),
    /// Stored value is not valid JSON for the requested type
    CorruptValue { key: String, source: serde_json::Error },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: {key:?}"),
            StorageError::CorruptValue { key, source } => {
                write!(f, "Corrupt value stored under {key:?}: {source}")
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::InvalidKey(_) => None,
            StorageError::CorruptValue { source, .. } => Some(source),
        }
    }
}

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Read and deserialize a JSON value. A missing key yields `Ok(None)`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|source| StorageError::CorruptValue {
        key: key.to_string(),
        source,
    })?;
    Ok(Some(value))
}

/// Like [`load_json`], but a corrupt value is logged and treated as missing
pub fn load_json_or_default<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load_json(store, key) {
        Ok(value) => Ok(value),
        Err(err) if err.is::<StorageError>() => {
            warn!("Ignoring stored value: {err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Serialize a value and store it under `key`
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize value for {key}"))?;
    store.set(key, &raw)
}

/// One `<key>.json` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()).into());
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let mut temp_file = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("Failed to create temp file in {}", self.dir.display()))?;
        temp_file
            .write_all(value.as_bytes())
            .context("Failed to write temp file")?;
        temp_file
            .persist(&path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let mut store = FileStore::open(dir.path().join("data"))?;

        assert_eq!(store.get(USER_KEY)?, None);
        store.set(USER_KEY, r#"{"name":"Asha"}"#)?;
        assert_eq!(store.get(USER_KEY)?.as_deref(), Some(r#"{"name":"Asha"}"#));
        assert!(dir.path().join("data").join("cooksy-user.json").exists());

        store.set(USER_KEY, "{}")?;
        assert_eq!(store.get(USER_KEY)?.as_deref(), Some("{}"));

        store.remove(USER_KEY)?;
        store.remove(USER_KEY)?;
        assert_eq!(store.get(USER_KEY)?, None);
        Ok(())
    }

    #[test]
    fn test_file_store_rejects_path_keys() -> Result<()> {
        let dir = TempDir::new()?;
        let mut store = FileStore::open(dir.path())?;

        let err = store.set("../escape", "{}").unwrap_err();
        assert!(err.is::<StorageError>());
        assert!(store.get("").is_err());
        Ok(())
    }

    #[test]
    fn test_json_helpers() -> Result<()> {
        let mut store = MemoryStore::new();
        save_json(&mut store, "numbers", &vec![1, 2, 3])?;
        let numbers: Option<Vec<u32>> = load_json(&store, "numbers")?;
        assert_eq!(numbers, Some(vec![1, 2, 3]));

        let missing: Option<Vec<u32>> = load_json(&store, "nothing")?;
        assert_eq!(missing, None);
        Ok(())
    }

    #[test]
    fn test_corrupt_value() -> Result<()> {
        let mut store = MemoryStore::new();
        store.set(APP_STATE_KEY, "{not json")?;

        let err = load_json::<Vec<u32>, _>(&store, APP_STATE_KEY).unwrap_err();
        assert!(err.to_string().contains(APP_STATE_KEY));

        let fallback: Option<Vec<u32>> = load_json_or_default(&store, APP_STATE_KEY)?;
        assert_eq!(fallback, None);
        Ok(())
    }
}
