use std::collections::BTreeMap;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// In-memory storage for testing. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    map: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.map.remove(key);
        Ok(())
    }
}
