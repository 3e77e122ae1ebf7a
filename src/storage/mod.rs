//! Storage layer for persisting habit data
//!
//! The persistence collaborator is a plain key-value store: string keys,
//! string values, synchronous get/set, one user/device per store. The habit
//! collection lives under a single key as one JSON blob, so no transactional
//! guarantees are needed beyond single-document overwrite semantics.

pub mod memory;
pub mod sqlite;

// Re-export the concrete store types
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the key-value persistence interface
///
/// This trait allows swapping the SQLite backend for other stores (or an
/// in-memory one in tests) while keeping the same interface. Values survive
/// process restarts for any durable implementation.
pub trait KeyValueStore {
    /// Read the value stored under a key, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value under a key, overwriting any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
