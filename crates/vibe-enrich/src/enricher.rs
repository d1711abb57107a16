//! Core Enricher implementation

use crate::config::EnricherConfig;
use crate::error::EnrichError;
use crate::parser::parse_analysis;
use crate::prompt::{analysis_schema, build_analysis_prompt};
use tokio::time::timeout;
use tracing::{debug, info, warn};
use vibe_domain::traits::LlmProvider;
use vibe_domain::AnalysisResult;
use vibe_llm::LlmError;

/// Produces suggested metadata for raw prompt text
///
/// Holds no mutable state, so concurrent calls with different prompts are
/// independent.
pub struct Enricher<L>
where
    L: LlmProvider<Error = LlmError>,
{
    llm: L,
    config: EnricherConfig,
}

impl<L> Enricher<L>
where
    L: LlmProvider<Error = LlmError>,
{
    /// Create a new Enricher
    pub fn new(llm: L, config: EnricherConfig) -> Self {
        Self { llm, config }
    }

    /// Analyze `prompt_text` and return suggested metadata
    ///
    /// # Errors
    ///
    /// - [`EnrichError::Precondition`] for empty text (no network call is made)
    /// - [`EnrichError::PromptTooLong`] above `max_prompt_length`
    /// - [`EnrichError::MissingCredential`] when no API key is configured
    /// - [`EnrichError::Provider`] / [`EnrichError::Timeout`] when the call fails
    /// - [`EnrichError::AnalysisParse`] when the reply does not match the schema
    pub async fn analyze(&self, prompt_text: &str) -> Result<AnalysisResult, EnrichError> {
        if prompt_text.trim().is_empty() {
            return Err(EnrichError::Precondition);
        }

        let length = prompt_text.chars().count();
        if length > self.config.max_prompt_length {
            return Err(EnrichError::PromptTooLong(length, self.config.max_prompt_length));
        }

        let prompt = build_analysis_prompt(prompt_text);
        let schema = analysis_schema();

        info!(
            "Analyzing prompt with model '{}' ({} chars)",
            self.llm.model(),
            length
        );

        let reply = timeout(
            self.config.timeout(),
            self.llm.generate_structured(&prompt, &schema),
        )
        .await
        .map_err(|_| EnrichError::Timeout)??;

        debug!("LLM reply length: {} chars", reply.len());

        parse_analysis(&reply).inspect_err(|e| warn!("Rejected AI analysis reply: {}", e))
    }
}
