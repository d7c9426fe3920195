//! The sequential-fallback combinator over synthesis strategies.

use crate::error::VoiceError;
use crate::gtts::GoogleTranslateStrategy;
use crate::strategy::SynthesisStrategy;
use crate::yarngpt::{YarnGptStrategy, DEFAULT_VOICE};
use std::io::Write;
use std::path::PathBuf;

/// Configuration for building the default strategy chain.
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// Primary provider credential. `None` disables the primary path
    /// entirely — it is skipped, not failed.
    pub yarngpt_api_key: Option<String>,
    /// Voice identifier for the primary provider.
    pub voice: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            yarngpt_api_key: None,
            voice: DEFAULT_VOICE.to_string(),
        }
    }
}

/// A successfully synthesized MP3 artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceAudio {
    bytes: Vec<u8>,
    source: &'static str,
}

impl VoiceAudio {
    pub fn new(bytes: Vec<u8>, source: &'static str) -> Self {
        Self { bytes, source }
    }

    /// The MP3-encoded audio.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Name of the strategy that produced this audio.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Writes the audio to an ephemeral `.mp3` file and returns its path.
    ///
    /// The file is kept (not deleted on drop); bounding its lifetime is the
    /// caller's responsibility, as with any artifact of one interaction.
    pub fn persist(&self) -> std::io::Result<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix("counsel-advice-")
            .suffix(".mp3")
            .tempfile()?;
        file.write_all(&self.bytes)?;
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

/// Outcome of a synthesis attempt: audio, or an explicit "unavailable".
///
/// Expected failure modes (provider error, missing credentials, network
/// failure) all degrade to `Unavailable` after the chain is exhausted;
/// `synthesize` never returns an error.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceResult {
    Audio(VoiceAudio),
    Unavailable,
}

impl VoiceResult {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Audio(_))
    }
}

/// Converts advice text to audio by trying each strategy in order.
pub struct VoiceSynthesizer {
    strategies: Vec<Box<dyn SynthesisStrategy>>,
    primary: Option<YarnGptStrategy>,
}

impl VoiceSynthesizer {
    /// Builds the default chain from configuration: YarnGPT first when its
    /// credential is present, then the Google-Translate fallback.
    ///
    /// # Errors
    ///
    /// Returns `VoiceError::Transport` if a strategy's HTTP client cannot
    /// be built. This is a startup fault, distinct from the per-request
    /// failures `synthesize` swallows.
    pub fn new(config: VoiceConfig) -> Result<Self, VoiceError> {
        let mut strategies: Vec<Box<dyn SynthesisStrategy>> = Vec::new();
        let mut primary = None;

        match config.yarngpt_api_key {
            Some(key) if !key.trim().is_empty() => {
                let strategy = YarnGptStrategy::new(key, config.voice)?;
                primary = Some(strategy.clone());
                strategies.push(Box::new(strategy));
            }
            _ => {
                tracing::info!("no YarnGPT credential configured, primary voice path disabled");
            }
        }

        strategies.push(Box::new(GoogleTranslateStrategy::new()?));

        Ok(Self {
            strategies,
            primary,
        })
    }

    /// Builds a synthesizer over an explicit strategy chain. This is the
    /// seam tests use to verify ordering without any provider.
    pub fn from_strategies(strategies: Vec<Box<dyn SynthesisStrategy>>) -> Self {
        Self {
            strategies,
            primary: None,
        }
    }

    /// Names of the configured strategies, in attempt order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Synthesizes `text`, trying each strategy in order.
    ///
    /// Strictly sequential: a strategy is only attempted after every
    /// earlier one has failed. Failures are logged and swallowed; the chain
    /// exhausting yields `VoiceResult::Unavailable`.
    pub async fn synthesize(&self, text: &str) -> VoiceResult {
        for strategy in &self.strategies {
            match strategy.synthesize(text).await {
                Ok(bytes) => {
                    tracing::info!(
                        source = strategy.name(),
                        bytes = bytes.len(),
                        "voice synthesis succeeded"
                    );
                    return VoiceResult::Audio(VoiceAudio::new(bytes, strategy.name()));
                }
                Err(e) => {
                    tracing::warn!(
                        source = strategy.name(),
                        error = %e,
                        "voice synthesis attempt failed, falling back"
                    );
                }
            }
        }

        tracing::warn!("all voice synthesis strategies exhausted");
        VoiceResult::Unavailable
    }

    /// Connectivity self-test against the primary provider only.
    ///
    /// Reports `(false, ..)` when no primary credential is configured.
    pub async fn test_primary_connection(&self) -> (bool, String) {
        match &self.primary {
            Some(primary) => primary.test_connection().await,
            None => (false, "primary voice provider not configured".to_string()),
        }
    }
}
