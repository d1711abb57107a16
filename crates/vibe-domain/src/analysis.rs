//! AI analysis results

use crate::entry::{MAX_AI_RATING, MIN_AI_RATING};
use serde::{Deserialize, Serialize};

/// Suggested metadata for a raw prompt, produced by enrichment
///
/// Ephemeral: consumed immediately to pre-fill an [`crate::EntryInput`] and
/// never stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Suggested title
    pub title: String,

    /// Suggested summary (intended at most 2 sentences)
    pub summary: String,

    /// Suggested tags (intended at most 5)
    pub tags: Vec<String>,

    /// Complexity score (intended 1-10)
    pub complexity_score: i64,
}

impl AnalysisResult {
    /// Whether the complexity score lies within the rating range
    pub fn has_valid_score(&self) -> bool {
        (i64::from(MIN_AI_RATING)..=i64::from(MAX_AI_RATING)).contains(&self.complexity_score)
    }

    /// The complexity score as an entry rating, if it is in range
    pub fn rating(&self) -> Option<u8> {
        self.has_valid_score().then_some(self.complexity_score as u8)
    }
}
