use crate::{KeyValueStore, Result as StoreErrorResult, StoreError};

use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local store. A fresh instance is a fresh "origin".
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::unavailable("memory store lock poisoned"))?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::unavailable("memory store lock poisoned"))?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::unavailable("memory store lock poisoned"))?;

        entries.remove(key);
        Ok(())
    }
}
