//! Router tests for /api/symptoms and /health.
//!
//! The remote service is replaced with FakeTopicSearch so no network is used.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use symptoscan_common::Resolver;
use symptoscand::server::{router, AppState};
use symptoscand::topic_search::FakeTopicSearch;
use tower::ServiceExt;

async fn get(search: Arc<FakeTopicSearch>, uri: &str) -> (StatusCode, Value) {
    let app = router(AppState::new(search, Resolver::default()));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_missing_query_is_rejected() {
    let search = Arc::new(FakeTopicSearch::unreachable());
    let (status, body) = get(search.clone(), "/api/symptoms").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No symptoms provided." }));
    assert_eq!(search.calls(), 0);
}

#[tokio::test]
async fn test_blank_query_is_rejected_without_remote_call() {
    let search = Arc::new(FakeTopicSearch::unreachable());
    let (status, _) = get(search.clone(), "/api/symptoms?q=%20%2C%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(search.calls(), 0);
}

#[tokio::test]
async fn test_duplicated_query_gets_json_error() {
    let search = Arc::new(FakeTopicSearch::unreachable());
    let (status, body) = get(search.clone(), "/api/symptoms?q=fever&q=cough").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No symptoms provided." }));
    assert_eq!(search.calls(), 0);
}

#[tokio::test]
async fn test_markup_feed_is_normalized() {
    let search = Arc::new(FakeTopicSearch::returning(
        "<feed><title>Health Topics</title><entry><title>Flu</title></entry><entry><title>Fever</title></entry></feed>",
    ));
    let (status, body) = get(search.clone(), "/api/symptoms?q=fever").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "feed": { "entry": [
            { "title": { "_value": "Flu" } },
            { "title": { "_value": "Fever" } }
        ] } })
    );
    assert_eq!(search.calls(), 1);
}

#[tokio::test]
async fn test_json_body_passes_through() {
    let search = Arc::new(FakeTopicSearch::returning(r#"{"feed":{"entry":[],"total":0}}"#));
    let (status, body) = get(search, "/api/symptoms?q=fever").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "feed": { "entry": [], "total": 0 } }));
}

#[tokio::test]
async fn test_remote_failure_uses_fallback_table() {
    let search = Arc::new(FakeTopicSearch::unreachable());
    let (status, body) = get(search, "/api/symptoms?q=Fever,%20Cough").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "fallback": [
            "Flu", "Typhoid Fever", "COVID-19", "Common Cold",
            "Bronchitis", "Asthma", "Pneumonia"
        ] })
    );
}

#[tokio::test]
async fn test_unparseable_body_uses_fallback_table() {
    let search = Arc::new(FakeTopicSearch::returning("service temporarily unavailable"));
    let (_, body) = get(search, "/api/symptoms?q=wheezing").await;

    assert_eq!(body, json!({ "fallback": ["Asthma"] }));
}

#[tokio::test]
async fn test_empty_feed_uses_fallback_table() {
    let search = Arc::new(FakeTopicSearch::returning("<feed><title>Health Topics</title></feed>"));
    let (_, body) = get(search, "/api/symptoms?q=yellow%20skin").await;

    assert_eq!(body, json!({ "fallback": ["Jaundice"] }));
}

#[tokio::test]
async fn test_fallback_with_no_match() {
    let search = Arc::new(FakeTopicSearch::unreachable());
    let (status, body) = get(search, "/api/symptoms?q=xyzzy").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "fallback": [] }));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(Arc::new(FakeTopicSearch::unreachable()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["table_entries"], 74);
}
