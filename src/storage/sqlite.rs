//! SQLite implementation of the key-value store interface
//!
//! This module provides the durable backend: a single `kv` table holding
//! string keys and values. The schema is created on open, idempotently, so a
//! fresh database file and an existing one go through the same path.

use std::path::PathBuf;

use rusqlite::{params, Connection, OptionalExtension};

use crate::storage::{KeyValueStore, StorageError};

/// SQLite-backed key-value storage
///
/// This struct holds a connection to the SQLite database and implements the
/// get/set operations defined by the KeyValueStore trait.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite store at the given path
    ///
    /// This opens the database file and creates the schema if it doesn't
    /// already exist.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        Self::initialize_schema(&conn)?;

        tracing::info!("SQLite store initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Create an in-memory SQLite store
    ///
    /// Nothing survives the connection; mainly useful for tests that want
    /// the real SQL path without touching disk.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        Self::initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Create the kv table if it doesn't exist
    fn initialize_schema(conn: &Connection) -> Result<(), StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;

        tracing::debug!("Wrote {} bytes under key: {}", value.len(), key);
        Ok(())
    }
}
