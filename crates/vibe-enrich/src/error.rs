//! Error types for enrichment

use thiserror::Error;
use vibe_llm::LlmError;

/// Errors that can occur during enrichment
///
/// All of these are recoverable: the user can retry or fill the fields by hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichError {
    /// Prompt text is empty
    #[error("Prompt text is empty")]
    Precondition,

    /// Prompt text exceeds the configured maximum
    #[error("Prompt too long: {0} chars (max: {1})")]
    PromptTooLong(usize, usize),

    /// No API credential is configured
    #[error("Enrichment unavailable: API key is missing")]
    MissingCredential,

    /// The LLM call failed (network, HTTP status, rate limit)
    #[error("LLM error: {0}")]
    Provider(String),

    /// The reply did not match the analysis schema
    #[error("Failed to parse AI analysis: {0}")]
    AnalysisParse(String),

    /// The LLM did not answer in time
    #[error("Enrichment timed out")]
    Timeout,
}

impl From<LlmError> for EnrichError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingCredential => EnrichError::MissingCredential,
            LlmError::Timeout => EnrichError::Timeout,
            LlmError::InvalidResponse(msg) => EnrichError::AnalysisParse(msg),
            other => EnrichError::Provider(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for EnrichError {
    fn from(e: serde_json::Error) -> Self {
        EnrichError::AnalysisParse(e.to_string())
    }
}
