//! Vibe Catalog LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `vibe-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API with structured output
//!
//! # Examples
//!
//! ```
//! use vibe_llm::MockProvider;
//! use vibe_domain::traits::LlmProvider;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let provider = MockProvider::new(r#"{"ok": true}"#);
//! let reply = provider.generate_structured("prompt", "{}").await.unwrap();
//! assert_eq!(reply, r#"{"ok": true}"#);
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use vibe_domain::traits::LlmProvider as LlmProviderTrait;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// No API credential configured
    #[error("API key is missing")]
    MissingCredential,

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request could not be built (bad schema, bad endpoint)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No reply within the request timeout
    #[error("Request timed out")]
    Timeout,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail(LlmError),
}

#[derive(Debug, Default)]
struct MockState {
    rules: Vec<(String, MockReply)>,
    last_prompt: Option<String>,
    last_schema: Option<String>,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls. Rules
/// match when the prompt contains their fragment; the first match wins and
/// the default reply is used otherwise.
///
/// # Examples
///
/// ```
/// use vibe_llm::{LlmError, MockProvider};
///
/// let mut provider = MockProvider::new("default");
/// provider.add_response("dashboard", r#"{"title":"Dashboard"}"#);
/// provider.add_error("timeout please", LlmError::RateLimitExceeded);
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    model: String,
    delay: Option<Duration>,
    state: Arc<Mutex<MockState>>,
    call_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed reply for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            model: "mock-model".to_string(),
            delay: None,
            state: Arc::new(Mutex::new(MockState::default())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Reply with `response` when the prompt contains `fragment`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        self.lock()
            .rules
            .push((fragment.into(), MockReply::Text(response.into())));
    }

    /// Fail with `error` when the prompt contains `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>, error: LlmError) {
        self.lock().rules.push((fragment.into(), MockReply::Fail(error)));
    }

    /// Delay every reply, to simulate a slow service
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times the provider was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Prompt of the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        self.lock().last_prompt.clone()
    }

    /// Schema of the most recent call
    pub fn last_schema(&self) -> Option<String> {
        self.lock().last_schema.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reply_for(&self, prompt: &str, schema: &str) -> MockReply {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let mut state = self.lock();
        state.last_prompt = Some(prompt.to_string());
        state.last_schema = Some(schema.to_string());

        state
            .rules
            .iter()
            .find(|(fragment, _)| prompt.contains(fragment.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| MockReply::Text(self.default_response.clone()))
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn model(&self) -> &str {
        &self.model
    }

    fn generate_structured(
        &self,
        prompt: &str,
        schema: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        let reply = self.reply_for(prompt, schema);
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match reply {
                MockReply::Text(text) => Ok(text),
                MockReply::Fail(e) => Err(e),
            }
        }
    }
}
