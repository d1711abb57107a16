//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (vibe-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Generate a reply constrained to a JSON schema
    ///
    /// `schema` is a JSON document in the provider's schema dialect. The reply
    /// is returned as raw text; callers parse and validate it.
    fn generate_structured(
        &self,
        prompt: &str,
        schema: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
