//! Fallback voice engine: the credential-free Google-Translate TTS
//! endpoint.
//!
//! This is the same endpoint the gTTS tooling wraps: a plain GET with the
//! text, a language code, and a host selected by top-level domain. A
//! regional TLD (here `com.ng`) yields a Nigerian-English-leaning voice
//! where available; when the regional host refuses, one retry against the
//! plain default host is made before giving up.

use crate::error::VoiceError;
use crate::strategy::SynthesisStrategy;
use async_trait::async_trait;
use std::time::Duration;

/// Timeout for one synthesis request.
const SYNTH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default host TLD.
const DEFAULT_TLD: &str = "com";

/// Regional TLD tried first for the Nigerian accent variant.
const REGIONAL_TLD: &str = "com.ng";

/// Credential-free TTS via the public translate endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslateStrategy {
    client: reqwest::Client,
    lang: String,
    /// Whether to attempt the regional accent variant before the default.
    regional_accent: bool,
    /// Host pattern override for tests; `{tld}` is substituted.
    host_pattern: String,
}

impl GoogleTranslateStrategy {
    /// English voice with the Nigerian regional variant attempted first.
    pub fn new() -> Result<Self, VoiceError> {
        Self::with_lang("en", true)
    }

    /// # Errors
    ///
    /// Returns `VoiceError::Transport` if the HTTP client cannot be built;
    /// a client without its bounded timeout must not be constructible.
    pub fn with_lang(
        lang: impl Into<String>,
        regional_accent: bool,
    ) -> Result<Self, VoiceError> {
        let client = reqwest::Client::builder()
            .timeout(SYNTH_TIMEOUT)
            .build()
            .map_err(|e| VoiceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            lang: lang.into(),
            regional_accent,
            host_pattern: "https://translate.google.{tld}".to_string(),
        })
    }

    /// Points the strategy at a different host pattern. Test hook.
    pub fn with_host_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.host_pattern = pattern.into();
        self
    }

    async fn request(&self, text: &str, tld: &str) -> Result<Vec<u8>, VoiceError> {
        let base = self.host_pattern.replace("{tld}", tld);
        let url = format!("{}/translate_tts", base);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.lang.as_str()),
                ("q", text),
            ])
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
}

#[async_trait]
impl SynthesisStrategy for GoogleTranslateStrategy {
    fn name(&self) -> &'static str {
        "gtts"
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, VoiceError> {
        if self.regional_accent {
            match self.request(text, REGIONAL_TLD).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "regional accent variant failed, retrying default host"
                    );
                }
            }
        }

        self.request(text, DEFAULT_TLD).await
    }
}
