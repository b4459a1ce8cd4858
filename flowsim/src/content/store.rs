//! Key-value backends for the content store.
//!
//! The original authoring tool persisted every slice under a string key
//! in the browser's local storage. [`Backend`] is that surface reduced
//! to its contract: get/set string values by key, plus a whole-store
//! clear. [`DirStore`] maps it onto a directory of JSON files;
//! [`MemoryStore`] backs tests.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error returned by backend write operations.
///
/// Reads never error at this level: a missing or unreadable key is
/// reported as absent and the caller substitutes its compiled-in
/// default.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The backing directory or a slice file could not be written.
    #[error("failed to persist content under {path:?}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The backing store could not be cleared.
    #[error("failed to clear content store at {path:?}")]
    Clear {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A slice value could not be serialized to JSON.
    #[error("failed to encode content slice {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value persistence for content slices.
///
/// The contract is last-write-wins per key, with no transactionality
/// across keys: each slice is stored and reloaded independently.
pub trait Backend {
    /// Read the raw value stored under `key`, if any. A value that
    /// cannot be read counts as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ContentError>;

    /// Remove every stored key.
    fn clear(&mut self) -> Result<(), ContentError>;
}

/// In-memory backend; state disappears with the value.
#[derive(Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ContentError> {
        self.0.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ContentError> {
        self.0.clear();
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per slice.
///
/// The directory is created on first write. Clearing removes only the
/// `.json` files this store would read back, nothing else that may
/// live in the directory.
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Backend for DirStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.file(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ContentError> {
        fs::create_dir_all(&self.root).map_err(|source| ContentError::Persist {
            path: self.root.clone(),
            source,
        })?;
        let path = self.file(key);
        fs::write(&path, value).map_err(|source| ContentError::Persist { path, source })
    }

    fn clear(&mut self) -> Result<(), ContentError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            // nothing stored yet, nothing to clear
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(ContentError::Clear {
                    path: self.root.clone(),
                    source,
                });
            }
        };

        for entry in entries {
            let entry = entry.map_err(|source| ContentError::Clear {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path)
                    .map_err(|source| ContentError::Clear { path, source })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("app_glossary"), None);

        store.set("app_glossary", "{}").unwrap();
        assert_eq!(store.get("app_glossary").as_deref(), Some("{}"));

        store.set("app_glossary", "{\"a\":\"b\"}").unwrap();
        assert_eq!(store.get("app_glossary").as_deref(), Some("{\"a\":\"b\"}"));

        store.clear().unwrap();
        assert_eq!(store.get("app_glossary"), None);
    }

    #[test]
    fn dir_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirStore::new(dir.path());

        assert_eq!(store.get("app_config"), None);

        store.set("app_config", "{\"heroTitle\":\"x\"}").unwrap();
        assert!(dir.path().join("app_config.json").exists());
        assert_eq!(
            store.get("app_config").as_deref(),
            Some("{\"heroTitle\":\"x\"}")
        );
    }

    #[test]
    fn dir_store_clear_removes_only_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirStore::new(dir.path());

        store.set("app_config", "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        store.clear().unwrap();

        assert_eq!(store.get("app_config"), None);
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn dir_store_clear_on_missing_directory_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("never-created");
        let mut store = DirStore::new(&missing);
        assert!(store.clear().is_ok());
    }

    #[test]
    fn dir_store_creates_directory_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content");
        let mut store = DirStore::new(&nested);

        store.set("app_products", "[]").unwrap();
        assert!(nested.join("app_products.json").exists());
    }
}
