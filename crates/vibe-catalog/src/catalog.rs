//! Catalog facade.

use crate::error::CatalogError;
use tracing::{info, warn};
use vibe_domain::search::filter;
use vibe_domain::traits::LlmProvider;
use vibe_domain::{assemble, AnalysisResult, CatalogEntry, EntryId, EntryInput, User};
use vibe_enrich::Enricher;
use vibe_llm::LlmError;
use vibe_store::{EntryStore, KeyValueSlot, LoadOutcome, StoreError};

/// The prompt catalog: an entry store plus an enricher
///
/// Enrichment never touches the store, so a failing or unconfigured LLM
/// leaves browsing and creation fully usable.
pub struct Catalog<S, L>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    store: EntryStore<S>,
    enricher: Enricher<L>,
    load_warning: Option<StoreError>,
}

impl<S, L> Catalog<S, L>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    /// Open the catalog stored in `slot`
    ///
    /// Uses `seed` when nothing is persisted yet. A corrupt snapshot also
    /// falls back to `seed`; the corruption is kept in
    /// [`Catalog::load_warning`] for the caller to surface.
    pub fn open(
        slot: S,
        enricher: Enricher<L>,
        seed: Vec<CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut store = EntryStore::new(slot);
        let load_warning = match store.load_or_seed(seed)? {
            LoadOutcome::Restored(count) => {
                info!("Restored {} catalog entries", count);
                None
            }
            LoadOutcome::Seeded => {
                info!("No saved catalog, starting from seed data");
                None
            }
            LoadOutcome::Recovered(e) => {
                warn!("Catalog recovered from corrupt storage: {}", e);
                Some(e)
            }
        };

        Ok(Self {
            store,
            enricher,
            load_warning,
        })
    }

    /// Corruption found while opening, if the seed collection replaced it
    pub fn load_warning(&self) -> Option<&StoreError> {
        self.load_warning.as_ref()
    }

    /// All entries, most recent first
    pub fn list_entries(&self) -> &[CatalogEntry] {
        self.store.entries()
    }

    /// Look up one entry
    pub fn get_entry(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.store.get(id)
    }

    /// Assemble a new entry from `input` and persist it at the head of the catalog
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Validation`] if a required field is empty; nothing is stored
    /// - [`CatalogError::Store`] if the snapshot cannot be written
    pub fn create_entry(
        &mut self,
        input: EntryInput,
        author: &User,
    ) -> Result<CatalogEntry, CatalogError> {
        let entry = assemble(input, author)?;
        let created = entry.clone();
        self.store.append(entry)?;
        Ok(created)
    }

    /// Filter `entries` by a free-text query
    pub fn search_entries<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
        filter(entries, query)
    }

    /// Filter this catalog's entries by a free-text query
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        filter(self.store.entries(), query)
    }

    /// Ask the LLM for suggested metadata for `prompt_text`
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Enrichment`]; every variant is recoverable.
    pub async fn enrich(&self, prompt_text: &str) -> Result<AnalysisResult, CatalogError> {
        Ok(self.enricher.analyze(prompt_text).await?)
    }

    /// Overwrite the persisted catalog with `seed`
    ///
    /// Clears [`Catalog::load_warning`] once the snapshot is written.
    pub fn reset(&mut self, seed: Vec<CatalogEntry>) -> Result<&[CatalogEntry], CatalogError> {
        self.store.reset(seed)?;
        self.load_warning = None;
        Ok(self.store.entries())
    }

    /// Borrow the entry store
    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }
}
