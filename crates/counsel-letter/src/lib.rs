//! Formal letter rendering for the Counsel legal-aid core.
//!
//! Turns the `LetterData` extracted by the Case Analyzer into a `.docx`
//! byte buffer using a fixed template. Purely mechanical formatting: no
//! validation beyond presence checks, no legal-content judgment, no
//! caching — the document is regenerated per request.

pub mod error;
mod template;

pub use error::LetterError;
pub use template::{
    build_letter, build_letter_for_date, letter_lines, LETTER_FILENAME, LETTER_MIME_TYPE,
    MISSING_BODY_PLACEHOLDER,
};
