//! Tag normalization

use std::collections::HashSet;

/// Normalize a tag sequence for storage
///
/// Tags are trimmed, empty tags are dropped and duplicates are suppressed
/// (case-sensitive). First-seen order is preserved.
///
/// # Examples
///
/// ```
/// use vibe_domain::tags::normalize_tags;
///
/// let tags = normalize_tags(["a", " b ", "a", "", "B"]);
/// assert_eq!(tags, vec!["a", "b", "B"]);
/// ```
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || !seen.insert(tag.to_string()) {
            continue;
        }
        out.push(tag.to_string());
    }

    out
}

/// Merge `extra` into `existing`, keeping the existing tags first
pub fn merge_tags(existing: &[String], extra: &[String]) -> Vec<String> {
    normalize_tags(existing.iter().chain(extra.iter()))
}
