//! In-memory state store for tests and ephemeral sessions

use std::collections::HashMap;

use anyhow::Result;

use super::StateStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_your_writes() {
        let mut store = MemoryStore::new();
        assert!(store.read("favorites").unwrap().is_none());

        store.write("favorites", "[\"1\"]").unwrap();
        assert_eq!(store.read("favorites").unwrap().unwrap(), "[\"1\"]");

        store.write("favorites", "[]").unwrap();
        assert_eq!(store.read("favorites").unwrap().unwrap(), "[]");
    }
}
