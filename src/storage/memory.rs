//! In-memory implementation of the key-value store interface
//!
//! A HashMap-backed store with no durability. Used as the test double for
//! the habit store (it makes injecting malformed payloads trivial) and fits
//! any embedding that doesn't want a database file.

use std::collections::HashMap;

use crate::storage::{KeyValueStore, StorageError};

/// HashMap-backed key-value storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, bypassing the trait's error plumbing
    ///
    /// Test helper for seeding a store with existing (possibly malformed)
    /// persisted state before handing it to a HabitStore.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
