//! Landing page generation: one brief in, one provider call, one HTML document out.

use crate::models::LandingBrief;
use crate::services::prompt;
use crate::services::providers::{CompletionProvider, ProviderError};
use metrics::{counter, histogram};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

pub const UPSTREAM_ERROR_MESSAGE: &str = "OpenRouter API error";
pub const EMPTY_RESULT_MESSAGE: &str = "No content returned from model.";

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider answered with a non-success status; `body` is kept verbatim.
    #[error("OpenRouter API error (status {status})")]
    Upstream { status: u16, body: String },

    #[error("No content returned from model.")]
    EmptyResult,

    #[error("Provider failure: {0}")]
    Provider(#[source] ProviderError),
}

impl From<ProviderError> for GenerationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, body } => GenerationError::Upstream { status, body },
            other => GenerationError::Provider(other),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Upstream { body, .. } => AppError::BadGateway {
                message: UPSTREAM_ERROR_MESSAGE.to_string(),
                details: Some(body),
            },
            GenerationError::EmptyResult => AppError::EmptyResult(EMPTY_RESULT_MESSAGE.to_string()),
            GenerationError::Provider(e) => AppError::InternalError(anyhow::Error::new(e)),
        }
    }
}

impl GenerationError {
    fn outcome(&self) -> &'static str {
        match self {
            GenerationError::Upstream { .. } => "upstream_error",
            GenerationError::EmptyResult => "empty_result",
            GenerationError::Provider(_) => "provider_failure",
        }
    }
}

#[derive(Clone)]
pub struct LandingPageGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl LandingPageGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn CompletionProvider {
        self.provider.as_ref()
    }

    /// Generate a landing page for `brief`. Never retries.
    ///
    /// Output is non-deterministic; identical briefs may produce different pages.
    pub async fn generate(&self, brief: &LandingBrief) -> Result<String, GenerationError> {
        let result = self.generate_once(brief).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.outcome(),
        };
        counter!("landing_generations_total", "outcome" => outcome).increment(1);

        result
    }

    async fn generate_once(&self, brief: &LandingBrief) -> Result<String, GenerationError> {
        let messages = prompt::build_messages(brief);
        let params = prompt::generation_params();

        let start = Instant::now();
        let result = self.provider.complete(&messages, &params).await;
        histogram!(
            "landing_provider_latency_seconds",
            "provider" => self.provider.name(),
            "model" => self.provider.model().to_string()
        )
        .record(start.elapsed().as_secs_f64());

        let completion = result.map_err(|e| {
            match &e {
                ProviderError::Upstream { status, body } => {
                    tracing::error!(status, body = %body, "OpenRouter error")
                }
                other => tracing::error!(error = %other, "Completion request failed"),
            }
            GenerationError::from(e)
        })?;

        tracing::info!(
            provider = self.provider.name(),
            model = %self.provider.model(),
            input_tokens = completion.input_tokens,
            output_tokens = completion.output_tokens,
            finish_reason = completion.finish_reason.as_deref().unwrap_or("unknown"),
            "Completion received"
        );

        completion
            .text
            .as_deref()
            .map(str::trim)
            .filter(|html| !html.is_empty())
            .map(str::to_string)
            .ok_or(GenerationError::EmptyResult)
    }
}
