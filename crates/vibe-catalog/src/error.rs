//! Error types for catalog operations.

use thiserror::Error;
use vibe_domain::DomainError;
use vibe_enrich::EnrichError;
use vibe_store::StoreError;

/// Catalog operation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Bad or missing input field
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Enrichment attempt failed; the catalog itself is unaffected
    #[error(transparent)]
    Enrichment(#[from] EnrichError),
}

impl CatalogError {
    /// Whether the user can recover by retrying or correcting input
    pub fn is_recoverable(&self) -> bool {
        match self {
            CatalogError::Validation(_) | CatalogError::Enrichment(_) => true,
            CatalogError::Store(StoreError::DuplicateId(_)) => true,
            CatalogError::Store(_) => false,
        }
    }
}
