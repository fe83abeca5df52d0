use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_constraint_default() {
    let constraint = SummaryConstraint::default();
    assert_eq!(constraint.min_length, 30);
    assert_eq!(constraint.max_length, 150);
    assert!(constraint.validate().is_ok());
}

#[test]
fn test_constraint_rejects_bad_bounds() {
    assert_eq!(
        SummaryConstraint::new(0, 10),
        Err(InvalidConstraint { min: 0, max: 10 })
    );
    assert_eq!(
        SummaryConstraint::new(50, 20),
        Err(InvalidConstraint { min: 50, max: 20 })
    );
    assert!(SummaryConstraint::new(20, 20).is_ok());
}

#[test]
fn test_constraint_partial_json_uses_defaults() {
    let constraint: SummaryConstraint = serde_json::from_str(r#"{"max_length": 80}"#).unwrap();
    assert_eq!(constraint.min_length, 30);
    assert_eq!(constraint.max_length, 80);
}

#[test]
fn test_request_omits_missing_model() {
    let req = SummarizeRequest {
        text: "some text".to_string(),
        min_length: 20,
        max_length: 100,
        model: None,
    };

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["min_length"], 20);
    assert_eq!(json["max_length"], 100);
    assert!(json.get("model").is_none());
}

#[test]
fn test_health_without_model_list() {
    let health: HealthResponse =
        serde_json::from_str(r#"{"status": "ok", "model": "t5-base"}"#).unwrap();
    assert_eq!(health.status, "ok");
    assert!(health.available_models.is_empty());
}

#[test]
fn test_model_info_default() {
    let model = ModelInfo::default();
    assert_eq!(model.name, "facebook/bart-large-cnn");
    assert_eq!(model.short_name(), "bart-large-cnn");
}

#[test]
fn test_model_catalog_lookup() {
    assert_eq!(ModelInfo::catalog().len(), 4);
    assert_eq!(ModelInfo::find("t5-base"), Some(ModelInfo::t5_base()));
    assert_eq!(ModelInfo::t5_base().short_name(), "t5-base");
    assert!(ModelInfo::find("gpt-unknown").is_none());
}

#[test]
fn test_client_trims_endpoint() {
    let client = SummarizerClient::new("http://localhost:18116/")
        .unwrap()
        .with_model("t5-base");
    assert_eq!(client.endpoint(), "http://localhost:18116");
    assert_eq!(client.model(), Some("t5-base"));
}

#[tokio::test]
async fn test_fn_summarizer_passes_arguments() {
    let calls = AtomicUsize::new(0);
    let summarizer = FnSummarizer::new(|text: &str, constraint: SummaryConstraint| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "{} {}-{}",
            text.split_whitespace().count(),
            constraint.min_length,
            constraint.max_length
        ))
    });

    let out = summarizer
        .summarize("one two three", SummaryConstraint::default())
        .await
        .unwrap();
    assert_eq!(out, "3 30-150");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fn_summarizer_propagates_failure() {
    let summarizer = FnSummarizer::new(|_: &str, _: SummaryConstraint| {
        Err(SummarizeError::Model("out of memory".to_string()))
    });

    let err = summarizer
        .summarize("text", SummaryConstraint::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Model error: out of memory");
}

#[tokio::test]
async fn test_client_unreachable_server() {
    // Nothing listens on port 9 locally
    let client = SummarizerClient::new("http://127.0.0.1:9").unwrap();
    let result = client
        .summarize("some text", SummaryConstraint::default())
        .await;
    assert!(result.is_err());
}

// Integration test - requires the model server running
#[tokio::test]
#[ignore]
async fn test_client_round_trip() {
    let client = SummarizerClient::new(client::DEFAULT_ENDPOINT).unwrap();

    let health = client.health_check().await.unwrap();
    assert_eq!(health.status, "ok");

    let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
    let summary = client
        .summarize(&text, SummaryConstraint::new(10, 40).unwrap())
        .await
        .unwrap();
    assert!(!summary.trim().is_empty());
}
