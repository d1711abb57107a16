//! SQLite-backed slot

use crate::slot::KeyValueSlot;
use crate::StoreError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use vibe_domain::now_millis;

/// Slot stored as rows of a single SQLite table
///
/// Each write replaces the row for its key inside one statement, which
/// SQLite applies atomically.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should open its own slot.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    /// Open (or create) a database at `path`
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vibe_store::SqliteSlot;
    ///
    /// let slot = SqliteSlot::new("vibe.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let slot = Self { conn };
        slot.initialize_schema()?;
        Ok(slot)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }
}

impl KeyValueSlot for SqliteSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
             value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now_millis() as i64],
        )?;
        Ok(())
    }
}
