//! AI summarization backend
//!
//! A single-turn text-generation call against the Gemini REST API,
//! behind the [`SummaryBackend`] trait so the composer can be tested
//! with a deterministic stub. The backend handle is built once at
//! startup and only when a credential is configured.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BriefingError;
use crate::Result;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Single-turn text generation backend
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Generate a completion for the prompt and return its raw text
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Gemini REST API backend
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiBackend {
    /// Create a backend using the given API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEMINI_BASE_URL)
    }

    /// Create a backend against an alternate base URL (used by tests)
    #[must_use]
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("AeroBrief/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SummaryBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, GEMINI_MODEL
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!("Invoking Gemini model {GEMINI_MODEL}");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BriefingError::invocation(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BriefingError::invocation(format!(
                "backend returned {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BriefingError::invocation(format!("malformed response: {e}")))?;

        let text: String = body
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(BriefingError::invocation("no candidates in response"));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "brief me" }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "contents": [{ "parts": [{ "text": "brief me" }] }] })
        );
    }

    #[test]
    fn test_response_parsing_joins_candidate_parts() {
        let body: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "<div>" }, { "text": "</div>" }] }
            }]
        }))
        .unwrap();

        let text: String = body.candidates[0]
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<String>();
        assert_eq!(text, "<div></div>");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_an_invocation_error() {
        let backend = GeminiBackend::with_base_url("key".into(), "http://127.0.0.1:1");
        let result = backend.generate("prompt").await;
        assert!(matches!(result, Err(BriefingError::AiInvocation { .. })));
    }
}
