//! File-backed persistent key-value store.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::warn;

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStorePort;

const STORE_FILE_NAME: &str = "storage.json";

/// Durable key-value store backed by a single JSON file.
///
/// Plays the role browser local storage plays for the web client: values
/// survive process restarts and are read synchronously. Every mutation is
/// written through to disk atomically (write to a temp file, then rename).
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Opens the store inside `dir`, creating the directory if needed.
    ///
    /// A corrupt store file is discarded with a warning and the store starts
    /// empty.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the store file
    /// cannot be read.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let path = dir.join(STORE_FILE_NAME);
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(entries)?;

        let parent = self
            .path
            .parent()
            .ok_or_else(|| std::io::Error::other("store path has no parent directory"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl KeyValueStorePort for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock();
        entries.remove(key);
        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_get_remove_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        assert_eq!(store.get("@Gobarber:token").unwrap(), None);

        store.set("@Gobarber:token", "token-0000000").unwrap();
        assert_eq!(
            store.get("@Gobarber:token").unwrap().as_deref(),
            Some("token-0000000")
        );

        store.remove("@Gobarber:token").unwrap();
        assert_eq!(store.get("@Gobarber:token").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();

        {
            let store = FileKeyValueStore::open(dir.path()).unwrap();
            store.set("@Gobarber:token", "token-0000000").unwrap();
        }

        let reopened = FileKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("@Gobarber:token").unwrap().as_deref(),
            Some("token-0000000")
        );
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        store.remove("missing").unwrap();
        store.remove("missing").unwrap();
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILE_NAME), "not json [").unwrap();

        let store = FileKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(store.get("@Gobarber:token").unwrap(), None);
    }
}
