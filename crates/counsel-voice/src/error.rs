use thiserror::Error;

/// Errors produced by individual synthesis strategies.
///
/// These never escape `VoiceSynthesizer::synthesize`; the combinator
/// converts an exhausted chain into `VoiceResult::Unavailable`. They are
/// public so strategies stay independently testable.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("provider returned an empty audio body")]
    EmptyAudio,
}
