//! Case analysis for the Counsel legal-aid core.
//!
//! Maps a free-text legal problem to a structured classification/advice
//! record (`CaseAnalysis`) via a hosted generative model. This crate owns
//! the prompt template, the transport to the model backend, and the
//! defensive parsing of the model's untrusted output.
//!
//! The transport is a seam: `TextGenerator` abstracts "prompt in, raw text
//! out", with `GeminiClient` as the production implementation. Tests supply
//! their own generator; nothing below the trait needs a network.

pub mod analyzer;
pub mod error;
pub mod gemini;
pub mod prompt;

pub use analyzer::{parse_analysis, CaseAnalyzer, TextGenerator};
pub use error::AnalyzerError;
pub use gemini::{GeminiClient, DEFAULT_MODEL};
