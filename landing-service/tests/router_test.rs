//! Router-level tests with the mock provider, no sockets involved.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::test_config;
use landing_service::models::REQUIRED_FIELDS_MESSAGE;
use landing_service::services::prompt::SYSTEM_PROMPT;
use landing_service::services::providers::mock::MockCompletionProvider;
use landing_service::services::providers::Role;
use landing_service::startup::MAX_BODY_BYTES;
use landing_service::{build_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn router_with(provider: Arc<MockCompletionProvider>) -> Router {
    // The base URL is never contacted with a mock provider.
    build_router(AppState::new(test_config("http://127.0.0.1:1"), provider))
}

async fn post_generate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn acme_rockets_scenario() {
    let provider = Arc::new(MockCompletionProvider::replying("<html>...</html>"));

    let (status, body) = post_generate(
        router_with(provider.clone()),
        json!({ "idea": "Acme Rockets", "category": "SaaS" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "html": "<html>...</html>" }));

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].role, Role::System);
    assert_eq!(calls[0][0].content, SYSTEM_PROMPT);
    assert!(calls[0][1].content.contains("\"Acme Rockets\""));
    assert!(calls[0][1].content.contains("SaaS"));
}

#[tokio::test]
async fn empty_idea_scenario() {
    let provider = Arc::new(MockCompletionProvider::replying("<html></html>"));

    let (status, body) = post_generate(
        router_with(provider.clone()),
        json!({ "idea": "", "category": "SaaS" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": REQUIRED_FIELDS_MESSAGE }));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn non_string_fields_are_rejected() {
    let provider = Arc::new(MockCompletionProvider::replying("<html></html>"));

    let (status, body) = post_generate(
        router_with(provider.clone()),
        json!({ "idea": 42, "category": ["SaaS"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn oversized_body_is_413() {
    let provider = Arc::new(MockCompletionProvider::replying("<html></html>"));

    let (status, body) = post_generate(
        router_with(provider.clone()),
        json!({ "idea": "a".repeat(MAX_BODY_BYTES), "category": "SaaS" }),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].is_string());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn provider_upstream_error_maps_to_502() {
    let provider = Arc::new(MockCompletionProvider::failing(401, "No auth credentials found"));

    let (status, body) = post_generate(
        router_with(provider),
        json!({ "idea": "Acme Rockets", "category": "SaaS" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body,
        json!({ "error": "OpenRouter API error", "details": "No auth credentials found" })
    );
}

#[tokio::test]
async fn unreachable_provider_maps_to_500() {
    let provider = Arc::new(MockCompletionProvider::unreachable("connection refused"));

    let (status, body) = post_generate(
        router_with(provider),
        json!({ "idea": "Acme Rockets", "category": "SaaS" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Server error." }));
}

#[tokio::test]
async fn missing_content_maps_to_500() {
    let provider = Arc::new(MockCompletionProvider::without_content());

    let (status, body) = post_generate(
        router_with(provider),
        json!({ "idea": "Acme Rockets", "category": "SaaS" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "No content returned from model." }));
}

#[tokio::test]
async fn api_responses_get_strict_security_headers() {
    let provider = Arc::new(MockCompletionProvider::replying("<html></html>"));

    let response = router_with(provider)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"idea":"Acme","category":"SaaS"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-frame-options"], "DENY");
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert!(response.headers().contains_key("x-request-id"));
}
