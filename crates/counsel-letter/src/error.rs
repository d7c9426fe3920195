use thiserror::Error;

/// Errors produced by the Letter Builder.
#[derive(Error, Debug)]
pub enum LetterError {
    #[error("failed to render document: {0}")]
    Render(String),
}
