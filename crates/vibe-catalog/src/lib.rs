//! Vibe Catalog application layer
//!
//! The operations a presentation layer (CLI, UI) needs: list, get, create,
//! search and enrich. Storage and the LLM provider are injected, so tests can
//! run entirely in memory.
//!
//! # Example
//!
//! ```
//! use vibe_catalog::Catalog;
//! use vibe_domain::seed::{default_user, seed_entries};
//! use vibe_domain::EntryInput;
//! use vibe_enrich::{Enricher, EnricherConfig};
//! use vibe_llm::MockProvider;
//! use vibe_store::MemorySlot;
//!
//! let enricher = Enricher::new(MockProvider::default(), EnricherConfig::default());
//! let mut catalog = Catalog::open(MemorySlot::default(), enricher, seed_entries(0)).unwrap();
//!
//! let entry = catalog
//!     .create_entry(EntryInput::new("Landing page", "Build a landing page"), &default_user())
//!     .unwrap();
//! assert_eq!(catalog.list_entries()[0].id, entry.id);
//! assert_eq!(catalog.search("landing").len(), 1);
//! ```

#![warn(missing_docs)]

mod catalog;
mod draft;
mod error;

pub use catalog::Catalog;
pub use draft::{Draft, EnrichmentTicket};
pub use error::CatalogError;
