//! Integration tests for the liveness, health, static client and CORS surface.

mod common;

use common::TestApp;
use landing_service::handlers::health::LIVENESS_MESSAGE;
use reqwest::{Method, StatusCode};

#[tokio::test]
async fn root_returns_liveness_text() {
    let app = TestApp::spawn().await;

    let response = app.client.get(&app.address).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), LIVENESS_MESSAGE);
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "landing-service");
    assert_eq!(body["provider"], "openrouter");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "req-42")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn client_page_is_served() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/index.html", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("id=\"generate\""));
    assert!(html.contains("main.js"));

    let script = app
        .client
        .get(format!("{}/main.js", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(script.status(), StatusCode::OK);
    assert!(script.text().await.unwrap().contains("landing.html"));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/does-not-exist.txt", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn preflight(app: &TestApp, origin: &str) -> reqwest::Response {
    app.client
        .request(Method::OPTIONS, format!("{}/api/generate", app.address))
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn cors_allows_dev_and_configured_origins() {
    let app = TestApp::spawn().await;

    for origin in [
        "http://localhost:5173",
        "http://127.0.0.1:5173",
        "https://pages.example.com",
    ] {
        let response = preflight(&app, origin).await;
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], origin);
        assert_eq!(headers["access-control-allow-credentials"], "true");
        let methods = headers["access-control-allow-methods"].to_str().unwrap();
        assert!(methods.contains("GET") && methods.contains("POST"));
    }
}

#[tokio::test]
async fn cors_rejects_unknown_origin() {
    let app = TestApp::spawn().await;

    let response = preflight(&app, "https://evil.example.net").await;

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
