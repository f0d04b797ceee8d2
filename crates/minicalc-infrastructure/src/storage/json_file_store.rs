//! File-backed key-value store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use minicalc_core::error::Result;
use minicalc_core::storage::KeyValueStore;

use super::atomic_json::AtomicJsonFile;

type Entries = BTreeMap<String, String>;

/// A [`KeyValueStore`] that keeps every key in a single JSON object file.
///
/// ```text
/// { "history:google|1700000000000": "[{...}]", "mini_calculator_user": "{...}" }
/// ```
///
/// Values are opaque strings, exactly like a browser's local storage. Every
/// `set`/`remove` is a locked read-modify-write of the whole file followed by
/// an atomic rename, so a reader never sees a half-written document.
pub struct JsonFileStore {
    file: AtomicJsonFile<Entries>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.file.load()?.unwrap_or_default();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(Entries::new(), |entries| {
            entries.insert(key.to_string(), value.to_string());
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update(Entries::new(), |entries| {
            entries.remove(key);
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("storage.json"));

        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_remove_without_file_does_not_create_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let store = JsonFileStore::new(path.clone());

        store.remove("missing").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_values_survive_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("storage.json");

        JsonFileStore::new(path.clone()).set("a", "1").unwrap();
        JsonFileStore::new(path.clone()).set("b", "2").unwrap();

        let store = JsonFileStore::new(path);
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_store_reports_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.get("k").unwrap_err().is_serialization());
    }
}
