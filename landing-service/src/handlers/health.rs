use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde_json::json;

pub const LIVENESS_MESSAGE: &str = "AI Landing Page Generator API is running.";

pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check endpoint for container probes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let provider = state.generator.provider();
    Json(json!({
        "status": "ok",
        "service": "landing-service",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": provider.name(),
        "model": provider.model(),
    }))
}

pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        get_metrics(),
    )
}
