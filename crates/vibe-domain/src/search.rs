//! Catalog search
//!
//! Stateless keyword filtering over an entry collection. Cheap enough to run
//! on every keystroke.

use crate::entry::CatalogEntry;

/// Whether `entry` matches `query`
///
/// Case-insensitive substring match against the title, any tag, or the
/// author's display name. The empty query matches everything.
pub fn matches(entry: &CatalogEntry, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowered(entry, &needle)
}

fn matches_lowered(entry: &CatalogEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.title.to_lowercase().contains(needle)
        || entry.tags.iter().any(|t| t.to_lowercase().contains(needle))
        || entry.author.name.to_lowercase().contains(needle)
}

/// Filter `entries` by `query`, preserving input order
///
/// # Examples
///
/// ```
/// use vibe_domain::search::filter;
/// use vibe_domain::seed::seed_entries;
///
/// let entries = seed_entries(0);
/// let hits = filter(&entries, "jwt");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "JWT Auth Middleware");
/// ```
pub fn filter<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| matches_lowered(e, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_entries;

    #[test]
    fn test_empty_query_matches_all() {
        let entries = seed_entries(0);
        assert_eq!(filter(&entries, "").len(), entries.len());
    }

    #[test]
    fn test_title_match_case_insensitive() {
        let entries = seed_entries(0);
        let hits = filter(&entries, "jwt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "JWT Auth Middleware");

        assert_eq!(filter(&entries, "DASHBOARD").len(), 1);
    }

    #[test]
    fn test_tag_match() {
        let entries = seed_entries(0);
        let hits = filter(&entries, "secur");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].tags.contains(&"security".to_string()));
    }

    #[test]
    fn test_author_match() {
        let entries = seed_entries(0);
        let hits = filter(&entries, "sarah");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].author.name, "Sarah Lead");
    }

    #[test]
    fn test_description_and_prompt_not_searched() {
        let entries = seed_entries(0);
        // Appears only in the first seed's description and prompt
        assert!(filter(&entries, "visualization").is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let entries = seed_entries(0);
        let hits = filter(&entries, "e");
        let ids: Vec<_> = hits.iter().map(|e| e.id.clone()).collect();
        let expected: Vec<_> = entries
            .iter()
            .filter(|e| matches(e, "e"))
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(ids, expected);
    }
}
