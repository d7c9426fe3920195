//! The synthesis-strategy seam.

use crate::error::VoiceError;
use async_trait::async_trait;

/// One way of turning text into MP3 bytes.
///
/// Strategies are independently testable and mockable; the synthesizer
/// composes them into an ordered fallback chain. A strategy reports
/// failure through `VoiceError` and must never panic on provider faults.
#[async_trait]
pub trait SynthesisStrategy: Send + Sync {
    /// Short identifier used in logs and on the resulting artifact.
    fn name(&self) -> &'static str;

    /// Synthesizes `text` to MP3 bytes.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, VoiceError>;
}
