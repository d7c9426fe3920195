//! The Case Analyzer: prompt in, validated `CaseAnalysis` out.

use crate::error::AnalyzerError;
use crate::gemini::{GeminiClient, DEFAULT_MODEL};
use crate::prompt::{build_prompt, strip_code_fences};
use async_trait::async_trait;
use counsel_types::{CaseAnalysis, CaseQuery};

/// Abstraction over the hosted text-generation backend.
///
/// Production uses `GeminiClient`; tests substitute canned responses.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the raw response text.
    async fn generate(&self, prompt: &str) -> Result<String, AnalyzerError>;
}

/// Parses a raw model response into a `CaseAnalysis`.
///
/// Strips any markdown code fencing, then deserializes against the schema.
/// Missing fields degrade to defaults inside `CaseAnalysis`; structurally
/// invalid JSON is a `Schema` error.
pub fn parse_analysis(raw: &str) -> Result<CaseAnalysis, AnalyzerError> {
    let clean = strip_code_fences(raw);
    serde_json::from_str(&clean).map_err(|e| AnalyzerError::Schema(e.to_string()))
}

/// Maps a free-text legal problem to a structured classification/advice
/// record via a hosted generative model.
///
/// Stateless per call: no retries, no session memory. A failed attempt
/// yields an `AnalyzerError` immediately and the caller decides whether to
/// re-invoke.
pub struct CaseAnalyzer {
    generator: Box<dyn TextGenerator>,
}

impl CaseAnalyzer {
    /// Creates an analyzer backed by the Gemini API.
    ///
    /// Errors if the API key is empty; the analyzer must not be
    /// constructible without its mandatory credential.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AnalyzerError> {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Creates an analyzer backed by the Gemini API with a specific model.
    pub fn with_model(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AnalyzerError> {
        let client = GeminiClient::new(api_key, model)?;
        Ok(Self::from_generator(Box::new(client)))
    }

    /// Creates an analyzer over an arbitrary generator. This is the seam
    /// tests use to run the full analyze path without a network.
    pub fn from_generator(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Analyzes one case query.
    ///
    /// Never panics; every failure path (empty input, transport, provider
    /// error, malformed output) is an `AnalyzerError`.
    pub async fn analyze(&self, query: &CaseQuery) -> Result<CaseAnalysis, AnalyzerError> {
        if query.text.trim().is_empty() {
            return Err(AnalyzerError::EmptyQuery);
        }

        let prompt = build_prompt(query);
        let raw = self.generator.generate(&prompt).await?;
        let analysis = parse_analysis(&raw)?;

        tracing::info!(
            issue = %analysis.legal_issue,
            has_letter = analysis.letter_data.is_some(),
            "case analyzed"
        );

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_json() {
        let result = parse_analysis("I'm sorry, I cannot help with that.");
        assert!(matches!(result, Err(AnalyzerError::Schema(_))));
    }

    #[test]
    fn parse_accepts_fenced_json() {
        let fenced = "```json\n{\"legal_issue\": \"Tenancy Dispute\"}\n```";
        let plain = "{\"legal_issue\": \"Tenancy Dispute\"}";
        assert_eq!(parse_analysis(fenced).unwrap(), parse_analysis(plain).unwrap());
    }
}
