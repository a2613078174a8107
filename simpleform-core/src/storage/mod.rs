// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistent Storage Module
//!
//! Durable key-value storage for the last submitted form record.
//! [`KeyValueStore`] is the port the screen writes through; [`Storage`] is
//! the SQLite implementation and [`MemoryStore`] the in-process one.

mod error;
mod memory;
mod migration;

pub use error::StorageError;
pub use memory::MemoryStore;

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Key the submitted record is stored under.
pub const FORM_DATA_KEY: &str = "formData";

/// Returns the current Unix timestamp in seconds.
fn now_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Durable key-value put/get.
///
/// `put` overwrites any previous value under the same key.
pub trait KeyValueStore: Send {
    /// Stores `value` under `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Loads the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// SQLite-based storage implementation.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens or creates a storage database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let storage = Storage { conn };
        storage.run_migrations()?;
        Ok(storage)
    }

    /// Creates an in-memory storage (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage { conn };
        storage.run_migrations()?;
        Ok(storage)
    }

    fn run_migrations(&self) -> Result<(), StorageError> {
        let migrations = migration::all_migrations();
        migration::MigrationRunner::run(&self.conn, &migrations)
    }

    /// Returns the current schema version.
    pub fn schema_version(&self) -> Result<u32, StorageError> {
        migration::MigrationRunner::current_version(&self.conn)
    }

    /// Returns when `key` was last written (Unix seconds).
    pub fn updated_at(&self, key: &str) -> Result<Option<u64>, StorageError> {
        let updated_at: Option<i64> = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated_at.map(|t| t as u64))
    }
}

impl KeyValueStore for Storage {
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, now_timestamp() as i64],
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }
}
