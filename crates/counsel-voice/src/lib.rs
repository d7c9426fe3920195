//! Voice synthesis for the Counsel legal-aid core.
//!
//! Converts short advice text into an MP3 artifact through an ordered chain
//! of synthesis strategies: a hosted Nigerian-accented provider (YarnGPT)
//! when its credential is configured, then a credential-free
//! Google-Translate TTS fallback. The chain is strictly sequential — the
//! primary must fail before the fallback runs — and exhausting it yields an
//! explicit "unavailable" result, never an error the caller must catch.

pub mod error;
pub mod gtts;
pub mod strategy;
pub mod synthesizer;
pub mod yarngpt;

pub use error::VoiceError;
pub use gtts::GoogleTranslateStrategy;
pub use strategy::SynthesisStrategy;
pub use synthesizer::{VoiceAudio, VoiceConfig, VoiceResult, VoiceSynthesizer};
pub use yarngpt::{YarnGptStrategy, DEFAULT_VOICE};
