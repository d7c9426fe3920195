//! The structured analysis record produced by the Case Analyzer.
//!
//! The model's output is untrusted: every field defaults rather than
//! errors when absent, so a partially-formed response still yields a
//! usable record. Validation happens once, at the parse boundary, not
//! ad hoc in display code.

use serde::{Deserialize, Serialize};

/// Default shown when the model failed to name the issue.
pub const UNKNOWN_ISSUE: &str = "Unknown Issue";

/// Default shown when the model produced no advice string.
pub const NO_ADVICE: &str = "No advice generated.";

fn default_legal_issue() -> String {
    UNKNOWN_ISSUE.to_string()
}

fn default_advice() -> String {
    NO_ADVICE.to_string()
}

fn default_recipient_type() -> String {
    "Recipient".to_string()
}

/// A successful case analysis.
///
/// `relevant_law` is optional by decision: some model revisions omit the
/// citation and its absence is a permitted gap, not a schema error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseAnalysis {
    /// Short name of the classified legal issue.
    #[serde(default = "default_legal_issue")]
    pub legal_issue: String,

    /// Specific statute/section citation claimed to apply, when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_law: Option<String>,

    /// Short informal guidance in Nigerian Pidgin (bounded to ~50 words by
    /// the prompt, not re-validated here).
    #[serde(default = "default_advice")]
    pub advice_pidgin: String,

    /// Fields for the formal letter; absent means no letter is offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_data: Option<LetterData>,
}

impl CaseAnalysis {
    /// Citation to display: the model's, or the documented fallback.
    pub fn citation(&self) -> &str {
        self.relevant_law
            .as_deref()
            .unwrap_or("General Legal Principles")
    }
}

/// Extracted fields for the formal complaint letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterData {
    /// Who the letter addresses (e.g. "Landlord", "Police", "Employer").
    /// Open set; the model uses "Unknown" when it cannot tell.
    #[serde(default = "default_recipient_type")]
    pub recipient_type: String,

    /// Multi-paragraph formal prose. Missing body is rendered as a fixed
    /// placeholder by the letter builder, never an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal_body: Option<String>,
}
