//! Gemini Provider Implementation
//!
//! Calls the Google Generative Language `generateContent` API with a JSON
//! response schema, so the service itself rejects replies that do not
//! conform.
//!
//! Each call is a single attempt. Retry policy belongs to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use vibe_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::from_env(&["API_KEY"], "gemini-2.5-flash").unwrap();
//! if !provider.has_credential() {
//!     eprintln!("enrichment disabled: API_KEY is not set");
//! }
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use vibe_domain::traits::LlmProvider as LlmProviderTrait;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gemini API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// An absent or blank `api_key` is accepted here; calls then fail with
    /// [`LlmError::MissingCredential`] without touching the network.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client,
        })
    }

    /// Create a provider reading the key from the first non-empty variable in `vars`
    pub fn from_env(vars: &[&str], model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = vars
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty());
        Self::new(api_key, model)
    }

    /// Override the API endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout; expiry yields [`LlmError::Timeout`]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn request(&self, prompt: &str, schema: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        let response_schema: serde_json::Value = serde_json::from_str(schema)
            .map_err(|e| LlmError::InvalidRequest(format!("Invalid response schema: {}", e)))?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
            },
        };

        let url = format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model);
        debug!("Calling {} (prompt {} chars)", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Communication(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, error_text)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                }
            })?;

        parsed
            .text()
            .ok_or_else(|| LlmError::InvalidResponse("No response from model".to_string()))
    }
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn model(&self) -> &str {
        &self.model
    }

    fn generate_structured(
        &self,
        prompt: &str,
        schema: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        self.request(prompt, schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;
    use vibe_domain::traits::LlmProvider;

    const REPLY: &str = r#"{"candidates":[{"content":{"parts":[{"text":"{\"ok\":true}"}]}}]}"#;

    /// Serve one canned HTTP response and return the raw request it received
    async fn stub_server(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (endpoint, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn provider_at(endpoint: &str) -> GeminiProvider {
        GeminiProvider::new(Some("secret".to_string()), DEFAULT_MODEL)
            .unwrap()
            .with_endpoint(endpoint)
    }

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new(Some("key".to_string()), DEFAULT_MODEL).unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model(), "gemini-2.5-flash");
        assert_eq!(provider.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(provider.has_credential());
    }

    #[test]
    fn test_blank_key_is_no_credential() {
        let provider = GeminiProvider::new(Some("  ".to_string()), DEFAULT_MODEL).unwrap();
        assert!(!provider.has_credential());
    }

    #[test]
    fn test_with_endpoint_trims_slash() {
        let provider = GeminiProvider::new(None, DEFAULT_MODEL)
            .unwrap()
            .with_endpoint("http://localhost:8089/");
        assert_eq!(provider.endpoint, "http://localhost:8089");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: "hi" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: serde_json::json!({"type": "OBJECT"}),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some(r#"{"a":1}"#));

        let empty: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_network() {
        // Unroutable endpoint: a network attempt would yield Communication instead
        let provider = GeminiProvider::new(None, DEFAULT_MODEL)
            .unwrap()
            .with_endpoint("http://localhost:99999");
        let result = provider.generate_structured("prompt", "{}").await;
        assert_eq!(result.unwrap_err(), LlmError::MissingCredential);
    }

    #[tokio::test]
    async fn test_invalid_schema_rejected() {
        let provider = GeminiProvider::new(Some("key".to_string()), DEFAULT_MODEL).unwrap();
        let result = provider.generate_structured("prompt", "{not json").await;
        assert!(matches!(result, Err(LlmError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_gemini_error_handling() {
        let provider = GeminiProvider::new(Some("key".to_string()), DEFAULT_MODEL)
            .unwrap()
            .with_endpoint("http://localhost:99999");

        match provider.generate_structured("test", "{}").await {
            Err(LlmError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_wire_format() {
        let (endpoint, server) = stub_server("200 OK", REPLY).await;
        let provider = provider_at(&endpoint);

        let reply = provider
            .generate_structured("Describe this", r#"{"type":"OBJECT"}"#)
            .await
            .unwrap();
        assert_eq!(reply, r#"{"ok":true}"#);

        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert_eq!(
            request_line,
            "POST /v1beta/models/gemini-2.5-flash:generateContent HTTP/1.1"
        );
        assert!(request.to_lowercase().contains("x-goog-api-key: secret"));

        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Describe this");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (endpoint, _server) = stub_server("404 Not Found", "{}").await;
        let result = provider_at(&endpoint).generate_structured("p", "{}").await;
        assert_eq!(result, Err(LlmError::ModelNotAvailable(DEFAULT_MODEL.to_string())));

        let (endpoint, _server) = stub_server("429 Too Many Requests", "{}").await;
        let result = provider_at(&endpoint).generate_structured("p", "{}").await;
        assert_eq!(result, Err(LlmError::RateLimitExceeded));

        let (endpoint, _server) = stub_server("500 Internal Server Error", "boom").await;
        match provider_at(&endpoint).generate_structured("p", "{}").await {
            Err(LlmError::Communication(msg)) => assert!(msg.contains("500")),
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_invalid_response() {
        let (endpoint, _server) = stub_server("200 OK", r#"{"candidates":[]}"#).await;
        let result = provider_at(&endpoint).generate_structured("p", "{}").await;
        assert_eq!(
            result,
            Err(LlmError::InvalidResponse("No response from model".to_string()))
        );
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let _hold = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(socket);
        });

        let provider = provider_at(&endpoint).with_timeout(Duration::from_millis(100));
        let result = provider.generate_structured("p", "{}").await;
        assert_eq!(result, Err(LlmError::Timeout));
    }
}
