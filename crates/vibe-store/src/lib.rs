//! Vibe Catalog Storage Layer
//!
//! Keeps the catalog durable across restarts using snapshot writes: every
//! mutation serializes the whole collection and overwrites a single named
//! key-value slot (`vibe_entries`).
//!
//! # Architecture
//!
//! - [`KeyValueSlot`]: the durable storage dependency injected into the store
//! - [`MemorySlot`], [`FileSlot`], [`SqliteSlot`]: slot implementations
//! - [`EntryStore`]: owns the ordered collection (most-recent-first)
//!
//! # Examples
//!
//! ```
//! use vibe_store::{EntryStore, MemorySlot};
//! use vibe_domain::seed::seed_entries;
//!
//! let mut store = EntryStore::new(MemorySlot::default());
//! let entries = store.load(seed_entries(0)).unwrap();
//! assert_eq!(entries.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod codec;
mod file;
mod memory;
mod slot;
mod sqlite;
mod store;

use thiserror::Error;
use vibe_domain::DomainError;

pub use codec::{deserialize, serialize};
pub use file::FileSlot;
pub use memory::MemorySlot;
pub use slot::KeyValueSlot;
pub use sqlite::SqliteSlot;
pub use store::{EntryStore, LoadOutcome};

/// Name of the slot holding the serialized catalog
pub const ENTRIES_KEY: &str = "vibe_entries";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Persisted catalog is unreadable or violates catalog invariants
    #[error("Data corruption: {0}")]
    DataCorruption(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An entry with this id already exists
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),

    /// Entry rejected by domain validation
    #[error("Invalid entry: {0}")]
    InvalidEntry(#[from] DomainError),

    /// Snapshot could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}
