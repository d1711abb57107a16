//! Catalog entry - the central record of the catalog

use crate::error::DomainError;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Lowest allowed AI complexity rating
pub const MIN_AI_RATING: u8 = 1;

/// Highest allowed AI complexity rating
pub const MAX_AI_RATING: u8 = 10;

/// Opaque unique identifier for a catalog entry
///
/// New identifiers are random UUIDv4 strings. Identifiers read back from
/// storage are kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh random identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use vibe_domain::EntryId;
    ///
    /// let a = EntryId::generate();
    /// let b = EntryId::generate();
    /// assert_ne!(a, b);
    /// ```
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Current time as milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// A catalog entry
///
/// Entries are created once by [`crate::assemble`] and never mutated in place;
/// a revision is a new snapshot with a bumped `version` and `updated_at`.
///
/// Persisted as a camelCase JSON object. Absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique identifier, never reassigned
    pub id: EntryId,

    /// Short title
    pub title: String,

    /// Free-text description
    pub description: String,

    /// The prompt text itself
    pub prompt: String,

    /// Tags, first-seen order, no duplicates
    pub tags: Vec<String>,

    /// Link to the builder session that produced the artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_url: Option<String>,

    /// Link to the deployed artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_url: Option<String>,

    /// Author snapshot taken at creation
    pub author: User,

    /// Creation time (ms since epoch)
    pub created_at: u64,

    /// Last revision time (ms since epoch)
    pub updated_at: u64,

    /// Content revision, starting at 1
    pub version: u32,

    /// Like counter
    pub likes: u32,

    /// AI-generated summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,

    /// AI complexity rating (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_rating: Option<u8>,
}

impl CatalogEntry {
    /// Check the per-entry invariants
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEntry`] naming the first violation.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidEntry {
            id: self.id.to_string(),
            reason,
        };

        if self.id.as_str().is_empty() {
            return Err(invalid("empty id".to_string()));
        }

        let mut seen = HashSet::new();
        for tag in &self.tags {
            if tag.is_empty() {
                return Err(invalid("empty tag".to_string()));
            }
            if !seen.insert(tag.as_str()) {
                return Err(invalid(format!("duplicate tag '{}'", tag)));
            }
        }

        if let Some(rating) = self.ai_rating {
            if !(MIN_AI_RATING..=MAX_AI_RATING).contains(&rating) {
                return Err(invalid(format!("ai rating {} out of range", rating)));
            }
        }

        if self.created_at > self.updated_at {
            return Err(invalid("createdAt is after updatedAt".to_string()));
        }

        if self.version == 0 {
            return Err(invalid("version must start at 1".to_string()));
        }

        Ok(())
    }
}

/// Check the collection-wide invariants: every entry is valid and ids are unique
pub fn check_collection(entries: &[CatalogEntry]) -> Result<(), DomainError> {
    let mut ids = HashSet::new();
    for entry in entries {
        entry.check_invariants()?;
        if !ids.insert(entry.id.as_str()) {
            return Err(DomainError::InvalidEntry {
                id: entry.id.to_string(),
                reason: "duplicate id".to_string(),
            });
        }
    }
    Ok(())
}
