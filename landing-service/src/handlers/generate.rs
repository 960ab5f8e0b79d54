use crate::dtos::{GenerateRequest, GenerateResponse};
use crate::models::LandingBrief;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use service_core::error::AppError;
use service_core::middleware::tracing::RequestId;

/// `POST /api/generate`: relay a brief to the provider and return the page.
pub async fn generate(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request_id = request_id
        .map(|Extension(id)| id.0)
        .unwrap_or_else(|| "-".to_string());

    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(request_id = %request_id, error = %rejection, "Rejected generate body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    })?;

    let brief = LandingBrief::try_from(payload).map_err(|e| {
        tracing::info!(request_id = %request_id, "Generate request missing idea or category");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        category = %brief.category,
        idea_len = brief.idea.len(),
        "Generating landing page"
    );

    let html = state.generator.generate(&brief).await?;

    Ok(Json(GenerateResponse { html }))
}
