use async_trait::async_trait;
use counsel_analyzer::{AnalyzerError, CaseAnalyzer, TextGenerator};
use counsel_types::{CaseQuery, Jurisdiction};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Generator returning a canned response, recording each prompt count.
struct CannedGenerator {
    response: String,
    calls: Arc<AtomicUsize>,
}

impl CannedGenerator {
    fn new(response: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                response: response.to_string(),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AnalyzerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Generator that always fails at the transport level.
struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AnalyzerError> {
        Err(AnalyzerError::Transport("connection refused".to_string()))
    }
}

const VALID_RESPONSE: &str = r#"{
    "legal_issue": "Illegal Eviction",
    "relevant_law": "Section 7 of Lagos Tenancy Law 2011",
    "advice_pidgin": "No gree pack out. Your landlord need court order before him fit evict you.",
    "letter_data": {
        "recipient_type": "Landlord",
        "formal_body": "I write to formally notify you that the eviction is unlawful."
    }
}"#;

#[tokio::test]
async fn valid_schema_yields_populated_analysis() {
    let (generator, _) = CannedGenerator::new(VALID_RESPONSE);
    let analyzer = CaseAnalyzer::from_generator(Box::new(generator));

    let query =
        CaseQuery::new("My landlord lock my shop").with_jurisdiction(Jurisdiction::Lagos);
    let analysis = analyzer.analyze(&query).await.unwrap();

    assert_eq!(analysis.legal_issue, "Illegal Eviction");
    assert!(!analysis.advice_pidgin.is_empty());
    assert_eq!(
        analysis.letter_data.unwrap().recipient_type,
        "Landlord"
    );
}

#[tokio::test]
async fn fenced_response_parses_identically_to_plain() {
    let fenced = format!("```json\n{}\n```", VALID_RESPONSE);
    let (plain_gen, _) = CannedGenerator::new(VALID_RESPONSE);
    let (fenced_gen, _) = CannedGenerator::new(&fenced);

    let query = CaseQuery::new("landlord wahala");
    let plain = CaseAnalyzer::from_generator(Box::new(plain_gen))
        .analyze(&query)
        .await
        .unwrap();
    let from_fenced = CaseAnalyzer::from_generator(Box::new(fenced_gen))
        .analyze(&query)
        .await
        .unwrap();

    assert_eq!(plain, from_fenced);
}

#[tokio::test]
async fn non_json_response_is_schema_error_not_panic() {
    let (generator, _) = CannedGenerator::new("As an AI, I recommend consulting a lawyer.");
    let analyzer = CaseAnalyzer::from_generator(Box::new(generator));

    let result = analyzer.analyze(&CaseQuery::new("employer no pay me")).await;
    assert!(matches!(result, Err(AnalyzerError::Schema(_))));
}

#[tokio::test]
async fn transport_failure_surfaces_as_error_without_retry() {
    let analyzer = CaseAnalyzer::from_generator(Box::new(FailingGenerator));

    let result = analyzer.analyze(&CaseQuery::new("police seize my car")).await;
    match result {
        Err(AnalyzerError::Transport(msg)) => assert!(msg.contains("connection refused")),
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_query_is_rejected_before_any_backend_call() {
    let (generator, calls) = CannedGenerator::new(VALID_RESPONSE);
    let analyzer = CaseAnalyzer::from_generator(Box::new(generator));

    let result = analyzer.analyze(&CaseQuery::new("   ")).await;
    assert!(matches!(result, Err(AnalyzerError::EmptyQuery)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_optional_fields_are_permitted_gaps() {
    let (generator, _) =
        CannedGenerator::new(r#"{"legal_issue": "Defamation", "advice_pidgin": "Calm down first."}"#);
    let analyzer = CaseAnalyzer::from_generator(Box::new(generator));

    let analysis = analyzer
        .analyze(&CaseQuery::new("person dey spread lies about me"))
        .await
        .unwrap();

    assert_eq!(analysis.legal_issue, "Defamation");
    assert!(analysis.relevant_law.is_none());
    assert_eq!(analysis.citation(), "General Legal Principles");
    assert!(analysis.letter_data.is_none());
}
