//! Snapshot encoding of the catalog
//!
//! The persisted form is a compact JSON array of entries in collection order.

use crate::StoreError;
use vibe_domain::entry::check_collection;
use vibe_domain::CatalogEntry;

/// Encode a collection as its persisted JSON form
pub fn serialize(entries: &[CatalogEntry]) -> Result<String, StoreError> {
    serde_json::to_string(entries).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Decode a persisted snapshot
///
/// # Errors
///
/// Returns [`StoreError::DataCorruption`] if the text is not a JSON array of
/// entries or if the decoded collection breaks a catalog invariant.
pub fn deserialize(text: &str) -> Result<Vec<CatalogEntry>, StoreError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(text)
        .map_err(|e| StoreError::DataCorruption(format!("unparseable catalog: {}", e)))?;

    check_collection(&entries).map_err(|e| StoreError::DataCorruption(e.to_string()))?;

    Ok(entries)
}
