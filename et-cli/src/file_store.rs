//! File-backed state store
//!
//! The ledger file is a JSON object mapping each key to its value in hex.
//! Changes stay in memory until [`FileStateStore::flush`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use et_core::{LedgerResult, StateStore};
use tracing::{debug, trace};

use crate::error::{CliError, CliResult};

/// State store persisted as a JSON document
#[derive(Debug)]
pub struct FileStateStore {
    path: PathBuf,
    entries: BTreeMap<String, Vec<u8>>,
    dirty: bool,
}

impl FileStateStore {
    /// Load the ledger at `path`. A missing file is an empty ledger.
    pub fn load(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref().to_path_buf();
        if path.is_dir() {
            return Err(CliError::config(format!(
                "ledger path {} is a directory",
                path.display()
            )));
        }

        let entries = if path.exists() {
            let text = fs::read_to_string(&path)?;
            let encoded: BTreeMap<String, String> = serde_json::from_str(&text)?;
            encoded
                .into_iter()
                .map(|(key, value)| match hex::decode(&value) {
                    Ok(bytes) => Ok((key, bytes)),
                    Err(source) => Err(CliError::HexError { key, source }),
                })
                .collect::<CliResult<BTreeMap<_, _>>>()?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "ledger loaded");
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Whether there are writes not yet flushed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Write the ledger file, creating it if needed.
    pub fn flush(&mut self) -> CliResult<()> {
        let encoded: BTreeMap<&str, String> = self
            .entries
            .iter()
            .map(|(key, value)| (key.as_str(), hex::encode(value)))
            .collect();
        let text = serde_json::to_string_pretty(&encoded)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;

        self.dirty = false;
        debug!(path = %self.path.display(), entries = self.entries.len(), "ledger flushed");
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        trace!(key, size = value.len(), "put_state");
        self.entries.insert(key.to_string(), value);
        self.dirty = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStateStore::load(dir.path().join("ledger.json")).unwrap();
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_flush_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");

        let mut store = FileStateStore::load(&path).unwrap();
        store.put_state("User_1", b"{\"id\":1}".to_vec()).unwrap();
        store.put_state("raw", vec![0, 255]).unwrap();
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"raw\": \"00ff\""));

        let reloaded = FileStateStore::load(&path).unwrap();
        assert_eq!(reloaded.keys().collect::<Vec<_>>(), vec!["User_1", "raw"]);
        assert_eq!(
            reloaded.get_state("User_1").unwrap(),
            Some(b"{\"id\":1}".to_vec())
        );
    }

    #[test]
    fn test_unflushed_writes_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");

        let mut store = FileStateStore::load(&path).unwrap();
        store.put_state("k", b"v".to_vec()).unwrap();
        drop(store);

        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_hex() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, r#"{"User_1":"zz"}"#).unwrap();

        match FileStateStore::load(&path).unwrap_err() {
            CliError::HexError { key, .. } => assert_eq!(key, "User_1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let err = FileStateStore::load(dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
