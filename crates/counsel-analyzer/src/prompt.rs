//! Prompt template for the case analysis request.
//!
//! The prompt is deterministic for a given query: same text and
//! jurisdiction always produce the same instruction string. The schema
//! block at the end mandates a single JSON object so the response can be
//! parsed structurally rather than scraped.

use counsel_types::CaseQuery;

/// Builds the full instruction sent to the model backend.
pub fn build_prompt(query: &CaseQuery) -> String {
    let jurisdiction = query
        .jurisdiction
        .map(|j| j.label())
        .unwrap_or("General (Federal Law)");

    format!(
        r#"You are a Senior Nigerian Legal Consultant. The user is facing a legal issue: "{text}"

Context: Apply Nigerian Law strictly based on the user's jurisdiction.
Jurisdiction: {jurisdiction}.

Tasks:
1. Identify the specific legal issue.
2. CITE THE LAW: Quote the specific Act, Section, or Law that applies (e.g., "Section 7 of Lagos Tenancy Law 2011").
3. Draft a short advice in Nigerian Pidgin English (max 50 words).
4. Extract data for a formal letter (Recipient, Address). Use "Unknown" if missing.
5. Draft the body of a formal legal letter in Standard English.

Output a single JSON object, and nothing else:
{{
    "legal_issue": "string",
    "relevant_law": "string (The specific citation)",
    "advice_pidgin": "string",
    "letter_data": {{
        "recipient_type": "Landlord/Police/Employer",
        "formal_body": "string"
    }}
}}"#,
        text = query.text,
        jurisdiction = jurisdiction,
    )
}

/// Strips markdown code-fence markers from a model response.
///
/// Models routinely wrap the mandated JSON object in triple-backtick
/// fencing, with or without a `json` language tag. Stripping is idempotent:
/// applying it to already-clean text is a no-op.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_types::Jurisdiction;

    #[test]
    fn prompt_interpolates_query_and_jurisdiction() {
        let query =
            CaseQuery::new("My landlord lock my shop").with_jurisdiction(Jurisdiction::Lagos);
        let prompt = build_prompt(&query);
        assert!(prompt.contains("My landlord lock my shop"));
        assert!(prompt.contains("Jurisdiction: Lagos."));
        assert!(prompt.contains("\"legal_issue\""));
    }

    #[test]
    fn prompt_defaults_to_federal_framing() {
        let prompt = build_prompt(&CaseQuery::new("wrongful dismissal"));
        assert!(prompt.contains("Jurisdiction: General (Federal Law)."));
    }

    #[test]
    fn prompt_is_deterministic() {
        let query = CaseQuery::new("unpaid wages").with_jurisdiction(Jurisdiction::Kano);
        assert_eq!(build_prompt(&query), build_prompt(&query));
    }

    #[test]
    fn fence_stripping_handles_tagged_and_plain_fences() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");

        let plain = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(plain), "{\"a\": 1}");
    }

    #[test]
    fn fence_stripping_is_idempotent() {
        let fenced = "```json\n{\"a\": 1}\n```";
        let once = strip_code_fences(fenced);
        assert_eq!(strip_code_fences(&once), once);

        let clean = "{\"a\": 1}";
        assert_eq!(strip_code_fences(clean), clean);
    }
}
