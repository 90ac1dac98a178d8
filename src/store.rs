use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::StoreError;

/// Flat string key-value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Key-value store kept as one flat json object on disk.
/// The whole file is rewritten on every change, via a sibling temp file and a rename.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store, a missing file gives an empty store
    ///
    /// # Arguments
    ///
    /// * 'path' - path to the store file
    pub fn open(path: &str) -> Result<JsonFileStore, StoreError> {
        let path = Path::new(path).to_path_buf();

        let entries = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json)?
        } else {
            BTreeMap::new()
        };

        Ok(JsonFileStore { path, entries })
    }

    /// All entries currently in the store
    pub fn entries(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)?;
        self.entries = entries;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.contains_key(key) {
            let mut entries = self.entries.clone();
            entries.remove(key);
            self.save(&entries)?;
            self.entries = entries;
        }
        Ok(())
    }
}

/// In-memory store, nothing is persisted
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Returns a memory store holding a copy of the given file store
    ///
    /// # Arguments
    ///
    /// * 'file_store' - the store to copy
    pub fn copy_of(file_store: &JsonFileStore) -> MemoryStore {
        let entries = file_store.entries()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<HashMap<String, String>>();

        MemoryStore { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("store.json");

        let store = JsonFileStore::open(path.to_str().unwrap()).unwrap();
        assert_eq!(store.get("MY_MEMOS").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("store.json");
        let path = path.to_str().unwrap();

        let mut store = JsonFileStore::open(path).unwrap();
        store.set("IS_LOCK_ENABLED", "true").unwrap();
        store.set("MY_SELECTED_MEMO_ID", "1700000000000").unwrap();
        store.remove("MY_SELECTED_MEMO_ID").unwrap();

        let store = JsonFileStore::open(path).unwrap();
        assert_eq!(store.get("IS_LOCK_ENABLED").unwrap(), Some("true".to_string()));
        assert_eq!(store.get("MY_SELECTED_MEMO_ID").unwrap(), None);
    }

    #[test]
    fn save_replaces_file_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(path.to_str().unwrap()).unwrap();
        store.set("IS_LOCK_ENABLED", "false").unwrap();
        store.set("IS_LOCK_ENABLED", "true").unwrap();

        let names = fs::read_dir(dir.path()).unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<String>>();
        assert_eq!(names, vec!["store.json".to_string()]);
        assert_eq!(JsonFileStore::open(path.to_str().unwrap()).unwrap().get("IS_LOCK_ENABLED").unwrap(), Some("true".to_string()));
    }

    #[test]
    fn failed_save_keeps_entries_unchanged() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing_dir").join("store.json");

        let mut store = JsonFileStore::open(path.to_str().unwrap()).unwrap();
        assert!(matches!(store.set("IS_LOCK_ENABLED", "true"), Err(StoreError::File(_))));
        assert_eq!(store.get("IS_LOCK_ENABLED").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_a_document_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(JsonFileStore::open(path.to_str().unwrap()), Err(StoreError::Document(_))));
    }

    #[test]
    fn memory_copy_does_not_write_back() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("store.json");
        let path = path.to_str().unwrap();
        let mut file_store = JsonFileStore::open(path).unwrap();
        file_store.set("MY_BG_LIST", "[]").unwrap();

        let mut copy = MemoryStore::copy_of(&file_store);
        assert_eq!(copy.get("MY_BG_LIST").unwrap(), Some("[]".to_string()));
        copy.set("MY_BG_LIST", r#"["a"]"#).unwrap();

        let file_store = JsonFileStore::open(path).unwrap();
        assert_eq!(file_store.get("MY_BG_LIST").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::default();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
