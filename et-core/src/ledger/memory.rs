//! In-memory state store

use std::collections::BTreeMap;

use tracing::trace;

use super::StateStore;
use crate::error::LedgerResult;

/// Ordered in-memory world state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStateStore {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing entries
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<u8>)>) -> Self {
        Self {
            state: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.state.keys().map(String::as_str)
    }

    /// Entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.state.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl StateStore for MemoryStateStore {
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        trace!(key, size = value.len(), "put_state");
        self.state.insert(key.to_string(), value);
        Ok(())
    }
}
