#![allow(dead_code)]

use landing_service::config::{
    ClientConfig, CorsConfig, LandingConfig, OpenRouterConfig, DEFAULT_APP_TITLE,
    DEFAULT_SITE_URL,
};
use landing_service::Application;
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::path::PathBuf;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk-or-test-key";
pub const TEST_MODEL: &str = "openai/gpt-4o-mini";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub upstream: MockServer,
    pub client: reqwest::Client,
}

/// Configuration pointing at `base_url` for OpenRouter, on a random port.
pub fn test_config(base_url: &str) -> LandingConfig {
    LandingConfig {
        common: CoreConfig { port: 0 },
        openrouter: OpenRouterConfig {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            base_url: base_url.to_string(),
            model: TEST_MODEL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
        },
        cors: CorsConfig {
            client_origin: Some("https://pages.example.com".to_string()),
        },
        client: ClientConfig {
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        },
    }
}

/// A chat-completions success body with one choice.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "gen-test",
        "object": "chat.completion",
        "model": TEST_MODEL,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 250, "completion_tokens": 1200, "total_tokens": 1450 }
    })
}

impl TestApp {
    /// Spawn the real application with a wiremock server standing in for OpenRouter.
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;

        let app = Application::build(test_config(&upstream.uri()))
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the liveness route
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            upstream,
            client,
        }
    }

    pub async fn post_generate(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/generate", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send generate request")
    }

    /// Requests the mock upstream has seen so far.
    pub async fn upstream_requests(&self) -> Vec<wiremock::Request> {
        self.upstream.received_requests().await.unwrap_or_default()
    }
}
