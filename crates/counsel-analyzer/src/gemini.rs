//! Gemini `generateContent` transport.
//!
//! Thin REST client for the hosted Gemini API. Only the pieces of the wire
//! format the analyzer needs are modelled; everything else in the response
//! is ignored.

use crate::analyzer::TextGenerator;
use crate::error::AnalyzerError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Timeout for one generation request. LLM calls are slow; this bounds the
/// wait without retrying.
const GENERATE_TIMEOUT: Duration = Duration::from_secs(90);

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

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

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the Gemini generative text API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a client for the given API key and model.
    ///
    /// Fails fast on an empty key so a misconfigured deployment cannot get
    /// as far as a live request.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, AnalyzerError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AnalyzerError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(GENERATE_TIMEOUT)
            .build()
            .map_err(|e| AnalyzerError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", API_BASE, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AnalyzerError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, "sending generation request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalyzerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "model backend returned an error");
            return Err(AnalyzerError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::Schema(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(AnalyzerError::EmptyResponse)?;

        Ok(text)
    }
}
