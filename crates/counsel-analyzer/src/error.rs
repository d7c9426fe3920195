use thiserror::Error;

/// Errors produced by the Case Analyzer.
///
/// Every failure mode of `analyze` is one of these; the `Display` string is
/// the single human-readable message callers surface to users.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("API key for the model backend is required")]
    MissingApiKey,

    #[error("query text must not be empty")]
    EmptyQuery,

    #[error("transport error calling model backend: {0}")]
    Transport(String),

    #[error("model backend returned status {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("model response is not valid JSON: {0}")]
    Schema(String),

    #[error("model response contained no text candidates")]
    EmptyResponse,
}
