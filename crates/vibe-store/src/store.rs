//! The entry store

use crate::codec::{deserialize, serialize};
use crate::slot::KeyValueSlot;
use crate::{StoreError, ENTRIES_KEY};
use tracing::{debug, info, warn};
use vibe_domain::entry::check_collection;
use vibe_domain::{CatalogEntry, EntryId};

/// How [`EntryStore::load_or_seed`] obtained the collection
#[derive(Debug)]
pub enum LoadOutcome {
    /// A persisted catalog was read back
    Restored(usize),

    /// Nothing was persisted; the seed collection is in use
    Seeded,

    /// The persisted catalog was corrupt; the seed collection is in use
    Recovered(StoreError),
}

/// Ordered catalog collection (most-recent-first) backed by a durable slot
///
/// Mutations take `&mut self`, so appends through one store are serialized.
/// Every append rewrites the whole snapshot synchronously before returning.
pub struct EntryStore<S: KeyValueSlot> {
    slot: S,
    entries: Vec<CatalogEntry>,
}

impl<S: KeyValueSlot> EntryStore<S> {
    /// Create a store over `slot` with an empty in-memory collection
    ///
    /// Call [`EntryStore::load`] or [`EntryStore::load_or_seed`] to read the
    /// persisted catalog.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            entries: Vec::new(),
        }
    }

    /// Read the persisted catalog
    ///
    /// Falls back to `seed` when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DataCorruption`] if the stored snapshot is unreadable;
    ///   the in-memory collection is left unchanged
    /// - I/O or database errors from the slot
    pub fn load(&mut self, seed: Vec<CatalogEntry>) -> Result<&[CatalogEntry], StoreError> {
        match self.slot.read(ENTRIES_KEY)? {
            Some(text) => {
                let entries = deserialize(&text)?;
                debug!("Loaded {} entries from '{}'", entries.len(), ENTRIES_KEY);
                self.entries = entries;
            }
            None => {
                debug!("No persisted catalog under '{}', using seed", ENTRIES_KEY);
                self.entries = seed;
            }
        }
        Ok(&self.entries)
    }

    /// Read the persisted catalog, falling back to `seed` on corruption
    ///
    /// The corruption is logged and returned in [`LoadOutcome::Recovered`] so
    /// the caller can surface it. The corrupt snapshot stays in the slot
    /// until the next append overwrites it.
    pub fn load_or_seed(&mut self, seed: Vec<CatalogEntry>) -> Result<LoadOutcome, StoreError> {
        let persisted = self.slot.read(ENTRIES_KEY)?;
        let Some(text) = persisted else {
            self.entries = seed;
            return Ok(LoadOutcome::Seeded);
        };

        match deserialize(&text) {
            Ok(entries) => {
                let count = entries.len();
                self.entries = entries;
                Ok(LoadOutcome::Restored(count))
            }
            Err(e @ StoreError::DataCorruption(_)) => {
                warn!("Persisted catalog is corrupt, falling back to seed data: {}", e);
                self.entries = seed;
                Ok(LoadOutcome::Recovered(e))
            }
            Err(e) => Err(e),
        }
    }

    /// The current collection, most recent first
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Insert `entry` at the front and persist the whole collection
    ///
    /// The in-memory collection only changes once the snapshot is durably
    /// written.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DuplicateId`] if an entry with the same id exists
    /// - [`StoreError::InvalidEntry`] if the entry breaks an invariant
    /// - I/O or database errors from the slot
    pub fn append(&mut self, entry: CatalogEntry) -> Result<&[CatalogEntry], StoreError> {
        if self.get(&entry.id).is_some() {
            return Err(StoreError::DuplicateId(entry.id.to_string()));
        }
        entry.check_invariants()?;

        let id = entry.id.clone();
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry);
        next.extend(self.entries.iter().cloned());

        let snapshot = serialize(&next)?;
        self.slot.write(ENTRIES_KEY, &snapshot)?;
        self.entries = next;

        info!("Appended entry {} ({} total)", id, self.entries.len());
        Ok(&self.entries)
    }

    /// Replace the whole collection and persist it
    ///
    /// Used to restore the seed catalog over a corrupt or unwanted snapshot.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidEntry`] if `entries` is not a valid catalog;
    ///   nothing is written
    /// - I/O or database errors from the slot
    pub fn reset(&mut self, entries: Vec<CatalogEntry>) -> Result<&[CatalogEntry], StoreError> {
        check_collection(&entries)?;

        let snapshot = serialize(&entries)?;
        self.slot.write(ENTRIES_KEY, &snapshot)?;
        self.entries = entries;

        info!("Catalog reset to {} entries", self.entries.len());
        Ok(&self.entries)
    }

    /// Borrow the underlying slot
    pub fn slot(&self) -> &S {
        &self.slot
    }
}
