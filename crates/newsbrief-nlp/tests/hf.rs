//! Integration tests for `HfInferenceClient` using wiremock HTTP mocks.

use newsbrief_nlp::{HfInferenceClient, NlpError};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> HfInferenceClient {
    HfInferenceClient::with_base_url(None, 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn classify_sentiment_returns_top_label_from_nested_response() {
    let server = MockServer::start().await;

    let body = serde_json::json!([[
        { "label": "POSITIVE", "score": 0.998 },
        { "label": "NEGATIVE", "score": 0.002 }
    ]]);

    Mock::given(method("POST"))
        .and(path(
            "/models/distilbert-base-uncased-finetuned-sst-2-english",
        ))
        .and(body_partial_json(
            serde_json::json!({ "inputs": "great quarter" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let label = client
        .classify_sentiment("great quarter")
        .await
        .expect("should classify");

    assert_eq!(label, "POSITIVE");
}

#[tokio::test]
async fn classify_sentiment_accepts_flat_response() {
    let server = MockServer::start().await;

    let body = serde_json::json!([{ "label": "NEGATIVE", "score": 0.91 }]);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let label = client
        .classify_sentiment("recall announced")
        .await
        .expect("should classify");

    assert_eq!(label, "NEGATIVE");
}

#[tokio::test]
async fn summarize_returns_summary_text_and_sends_length_bounds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .and(body_partial_json(serde_json::json!({
            "parameters": { "max_length": 130, "min_length": 30 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!([{ "summary_text": "Acme grew strongly." }]),
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let summary = client
        .summarize("A long article body about Acme.")
        .await
        .expect("should summarize");

    assert_eq!(summary, "Acme grew strongly.");
}

#[tokio::test]
async fn summarize_surfaces_model_rejection_as_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            serde_json::json!({ "error": "input too long" }),
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.summarize("way too much text").await.expect_err("should fail");

    assert!(
        matches!(
            err,
            NlpError::UnexpectedStatus {
                service: "summarization",
                status: 400
            }
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn extract_entities_maps_groups_and_words() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "entity_group": "ORG", "word": "Acme Corp", "score": 0.99 },
        { "entity_group": "PER", "word": "Jane Doe", "score": 0.97 },
        { "entity_group": "LAW", "word": "Clean Air Act", "score": 0.88 }
    ]);

    Mock::given(method("POST"))
        .and(path("/models/dslim/bert-base-NER"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entities = client
        .extract_entities("Acme Corp and Jane Doe discussed the Clean Air Act.")
        .await
        .expect("should extract");

    assert_eq!(entities.len(), 3);
    assert_eq!(entities[0].text, "Acme Corp");
    assert_eq!(entities[0].category, "ORG");
    assert_eq!(entities[2].category, "LAW");
}

#[tokio::test]
async fn extract_entities_with_no_matches_returns_empty_vec() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entities = client
        .extract_entities("nothing notable here")
        .await
        .expect("should extract");

    assert!(entities.is_empty());
}
