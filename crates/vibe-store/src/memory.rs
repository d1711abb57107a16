//! In-memory slot for tests and ephemeral sessions

use crate::slot::KeyValueSlot;
use crate::StoreError;
use std::collections::HashMap;

/// Volatile slot backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemorySlot {
    /// Create a slot pre-populated with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values, writes: 0 }
    }

    /// Number of writes performed since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw value under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key() {
        let slot = MemorySlot::default();
        assert_eq!(slot.read("nope").unwrap(), None);
    }

    #[test]
    fn test_write_overwrites() {
        let mut slot = MemorySlot::with_value("k", "old");
        slot.write("k", "new").unwrap();
        assert_eq!(slot.read("k").unwrap().as_deref(), Some("new"));
        assert_eq!(slot.write_count(), 1);
    }
}
