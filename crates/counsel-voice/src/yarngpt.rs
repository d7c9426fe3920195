//! Primary hosted voice provider: YarnGPT (Nigerian-accented TTS).

use crate::error::VoiceError;
use crate::strategy::SynthesisStrategy;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Default YarnGPT voice identifier.
pub const DEFAULT_VOICE: &str = "idera";

/// Timeout for one synthesis request.
const SYNTH_TIMEOUT: Duration = Duration::from_secs(30);

const API_URL: &str = "https://api.yarngpt.ai/v1/audio/speech";

#[derive(Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    voice: &'a str,
    response_format: &'static str,
}

/// Hosted Nigerian-accented TTS, authenticated with a bearer token.
///
/// Wire contract: POST with JSON `{text, voice, response_format: "mp3"}`;
/// a 2xx status carries the MP3 bytes in the body (possibly chunked).
#[derive(Debug, Clone)]
pub struct YarnGptStrategy {
    client: reqwest::Client,
    api_key: String,
    voice: String,
    endpoint: String,
}

impl YarnGptStrategy {
    pub fn new(
        api_key: impl Into<String>,
        voice: impl Into<String>,
    ) -> Result<Self, VoiceError> {
        Self::with_endpoint(api_key, voice, API_URL)
    }

    /// Overrides the provider endpoint. Used by tests and for self-hosted
    /// gateways.
    ///
    /// # Errors
    ///
    /// Returns `VoiceError::Transport` if the HTTP client cannot be built;
    /// a client without its bounded timeout must not be constructible.
    pub fn with_endpoint(
        api_key: impl Into<String>,
        voice: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, VoiceError> {
        let client = reqwest::Client::builder()
            .timeout(SYNTH_TIMEOUT)
            .build()
            .map_err(|e| VoiceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            voice: voice.into(),
            endpoint: endpoint.into(),
        })
    }

    async fn request(&self, text: &str) -> Result<Vec<u8>, VoiceError> {
        let body = SpeechRequest {
            text,
            voice: &self.voice,
            response_format: "mp3",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VoiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| VoiceError::Transport(e.to_string()))?;

        if bytes.is_empty() {
            return Err(VoiceError::EmptyAudio);
        }

        Ok(bytes.to_vec())
    }

    /// Connectivity self-test: one minimal fixed-text request.
    ///
    /// Operator diagnostics only — never part of the main synthesis path.
    /// Returns success plus a short status message, or failure with the raw
    /// status or transport message.
    pub async fn test_connection(&self) -> (bool, String) {
        match self.request("Test").await {
            Ok(bytes) => (true, format!("received {} audio bytes", bytes.len())),
            Err(e) => (false, e.to_string()),
        }
    }
}

#[async_trait]
impl SynthesisStrategy for YarnGptStrategy {
    fn name(&self) -> &'static str {
        "yarngpt"
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, VoiceError> {
        self.request(text).await
    }
}
