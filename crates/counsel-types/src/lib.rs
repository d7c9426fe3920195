//! Shared types for the Counsel legal-aid core.
//!
//! This crate provides the domain types used across all Counsel crates:
//! the case query submitted by a caller, the jurisdiction tag that frames
//! the analysis, and the structured analysis record returned by the model.
//!
//! No crate in the workspace depends on anything *except* `counsel-types`
//! for cross-cutting type definitions. This keeps the dependency graph
//! clean and prevents circular dependencies.

mod analysis;

pub use analysis::{CaseAnalysis, LetterData};

use serde::{Deserialize, Serialize};

/// Recognized Nigerian jurisdictions a caller can select.
///
/// The tag is interpolated verbatim into the analyzer prompt as contextual
/// framing; it never changes parsing logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    #[default]
    Lagos,
    Abuja,
    Kano,
    Rivers,
    Oyo,
    /// Catch-all when no state-specific law applies.
    Federal,
}

impl Jurisdiction {
    /// Returns the human-readable label shown to callers and sent to the
    /// model.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lagos => "Lagos",
            Self::Abuja => "Abuja (FCT)",
            Self::Kano => "Kano",
            Self::Rivers => "Rivers",
            Self::Oyo => "Oyo",
            Self::Federal => "General (Federal Law)",
        }
    }

    /// All selectable jurisdictions, in display order.
    pub fn all() -> &'static [Jurisdiction] {
        &[
            Self::Lagos,
            Self::Abuja,
            Self::Kano,
            Self::Rivers,
            Self::Oyo,
            Self::Federal,
        ]
    }

    /// Attempts to match a label (case-insensitive, prefix-tolerant for
    /// "Abuja (FCT)" style input) to a jurisdiction.
    pub fn parse_label(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|j| j.label().to_lowercase().starts_with(&needle) && !needle.is_empty())
    }
}

/// A single legal question submitted by a caller.
///
/// Ephemeral: constructed per request and never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseQuery {
    /// Free-text description of the problem. Must be non-empty.
    pub text: String,
    /// Optional jurisdiction framing for the analysis.
    pub jurisdiction: Option<Jurisdiction>,
}

impl CaseQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            jurisdiction: None,
        }
    }

    pub fn with_jurisdiction(mut self, jurisdiction: Jurisdiction) -> Self {
        self.jurisdiction = Some(jurisdiction);
        self
    }
}
