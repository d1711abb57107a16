//! Entry assembly - turns form input into a finished catalog entry

use crate::analysis::AnalysisResult;
use crate::entry::{now_millis, CatalogEntry, EntryId, MAX_AI_RATING, MIN_AI_RATING};
use crate::error::DomainError;
use crate::tags::{merge_tags, normalize_tags};
use crate::user::User;

/// User-provided fields for a new entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryInput {
    /// Title (required)
    pub title: String,

    /// Description
    pub description: String,

    /// Prompt text (required)
    pub prompt: String,

    /// Builder link; empty means absent
    pub builder_url: Option<String>,

    /// Deployed link; empty means absent
    pub deployed_url: Option<String>,

    /// Tags as entered, possibly with duplicates
    pub tags: Vec<String>,

    /// AI summary carried over from enrichment
    pub ai_summary: Option<String>,

    /// AI rating carried over from enrichment
    pub ai_rating: Option<u8>,
}

impl EntryInput {
    /// Create input with the two required fields
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Pre-fill the form from an analysis result
    ///
    /// Title and description are replaced, suggested tags are appended after
    /// the ones already entered, and the summary and score become the AI
    /// metadata. A score outside 1-10 is not carried over.
    pub fn apply_analysis(&mut self, analysis: &AnalysisResult) {
        self.title = analysis.title.clone();
        self.description = analysis.summary.clone();
        self.tags = merge_tags(&self.tags, &analysis.tags);
        self.ai_summary = Some(analysis.summary.clone());
        self.ai_rating = analysis.rating();
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.prompt.trim().is_empty() {
            missing.push("prompt");
        }
        missing
    }
}

/// Assemble a new entry stamped with the current time
///
/// # Errors
///
/// - [`DomainError::Validation`] if `title` or `prompt` is empty
/// - [`DomainError::InvalidRating`] if `ai_rating` is outside 1-10
///
/// # Examples
///
/// ```
/// use vibe_domain::{assemble, EntryInput, User, UserRole};
///
/// let author = User::new("u1", "Alex", "", UserRole::Engineer);
/// let mut input = EntryInput::new("X", "Y");
/// input.tags = vec!["a".into(), "a".into(), "b".into()];
///
/// let entry = assemble(input, &author).unwrap();
/// assert_eq!(entry.tags, vec!["a", "b"]);
/// assert_eq!(entry.version, 1);
/// ```
pub fn assemble(input: EntryInput, author: &User) -> Result<CatalogEntry, DomainError> {
    assemble_at(input, author, now_millis())
}

/// Assemble a new entry with an explicit creation time (ms since epoch)
pub fn assemble_at(
    input: EntryInput,
    author: &User,
    now: u64,
) -> Result<CatalogEntry, DomainError> {
    let missing = input.missing_fields();
    if !missing.is_empty() {
        return Err(DomainError::Validation { fields: missing });
    }

    if let Some(rating) = input.ai_rating {
        if !(MIN_AI_RATING..=MAX_AI_RATING).contains(&rating) {
            return Err(DomainError::InvalidRating(i64::from(rating)));
        }
    }

    Ok(CatalogEntry {
        id: EntryId::generate(),
        title: input.title,
        description: input.description,
        prompt: input.prompt,
        tags: normalize_tags(&input.tags),
        builder_url: non_empty(input.builder_url),
        deployed_url: non_empty(input.deployed_url),
        author: author.clone(),
        created_at: now,
        updated_at: now,
        version: 1,
        likes: 0,
        ai_summary: input.ai_summary,
        ai_rating: input.ai_rating,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserRole;
    use std::collections::HashSet;

    fn author() -> User {
        User::new("u1", "Alex Engineer", "avatar.png", UserRole::Engineer)
    }

    #[test]
    fn test_assemble_defaults() {
        let entry = assemble_at(EntryInput::new("X", "Y"), &author(), 1234).unwrap();

        assert_eq!(entry.created_at, 1234);
        assert_eq!(entry.updated_at, 1234);
        assert_eq!(entry.version, 1);
        assert_eq!(entry.likes, 0);
        assert_eq!(entry.author, author());
        assert!(entry.check_invariants().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let err = assemble(EntryInput::new("", " "), &author()).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                fields: vec!["title", "prompt"]
            }
        );
        assert_eq!(err.to_string(), "Missing required field(s): title, prompt");
    }

    #[test]
    fn test_missing_prompt_only() {
        let err = assemble(EntryInput::new("Title", ""), &author()).unwrap_err();
        assert_eq!(err, DomainError::Validation { fields: vec!["prompt"] });
    }

    #[test]
    fn test_author_is_a_snapshot() {
        let mut user = author();
        let entry = assemble(EntryInput::new("X", "Y"), &user).unwrap();

        user.name = "Renamed".to_string();
        assert_eq!(entry.author.name, "Alex Engineer");
    }

    #[test]
    fn test_ids_unique_across_calls() {
        let ids: HashSet<_> = (0..500)
            .map(|_| assemble(EntryInput::new("X", "Y"), &author()).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_empty_urls_become_absent() {
        let mut input = EntryInput::new("X", "Y");
        input.builder_url = Some(String::new());
        input.deployed_url = Some("https://app.example.com".to_string());

        let entry = assemble(input, &author()).unwrap();
        assert_eq!(entry.builder_url, None);
        assert_eq!(entry.deployed_url.as_deref(), Some("https://app.example.com"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut input = EntryInput::new("X", "Y");
        input.ai_rating = Some(0);
        assert_eq!(
            assemble(input, &author()).unwrap_err(),
            DomainError::InvalidRating(0)
        );
    }

    #[test]
    fn test_ai_fields_carried_over() {
        let mut input = EntryInput::new("X", "Y");
        input.ai_summary = Some("Short summary.".to_string());
        input.ai_rating = Some(6);

        let entry = assemble(input, &author()).unwrap();
        assert_eq!(entry.ai_summary.as_deref(), Some("Short summary."));
        assert_eq!(entry.ai_rating, Some(6));
    }

    #[test]
    fn test_apply_analysis_prefills_form() {
        let mut input = EntryInput::new("", "Build a login page");
        input.tags = vec!["auth".to_string()];

        input.apply_analysis(&AnalysisResult {
            title: "Login Page".to_string(),
            summary: "A login form.".to_string(),
            tags: vec!["react".to_string(), "auth".to_string()],
            complexity_score: 3,
        });

        assert_eq!(input.title, "Login Page");
        assert_eq!(input.description, "A login form.");
        assert_eq!(input.tags, vec!["auth", "react"]);
        assert_eq!(input.ai_summary.as_deref(), Some("A login form."));
        assert_eq!(input.ai_rating, Some(3));
        assert_eq!(input.prompt, "Build a login page");
    }
}
