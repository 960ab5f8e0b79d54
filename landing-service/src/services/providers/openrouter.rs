//! OpenRouter chat-completions provider.

use super::{ChatMessage, Completion, CompletionProvider, GenerationParams, ProviderError};
use crate::config::OpenRouterConfig;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_core::observability::TracedClientExt;

pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterProvider {
    /// No request timeout is set; the transport defaults apply.
    pub fn new(config: OpenRouterConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<Completion, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        tracing::debug!(
            model = %self.config.model,
            message_count = messages.len(),
            "Sending request to OpenRouter"
        );

        let response = self
            .client
            .traced_post(&self.completions_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .header("HTTP-Referer", &self.config.site_url)
            .header("X-Title", &self.config.app_title)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(status = status.as_u16(), error = %e, "Failed to read OpenRouter error body");
                    String::new()
                }
            };
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        parse_completion(&body)
    }
}

/// Pull the first choice's text and usage out of a chat-completions body.
///
/// Only a body that is not JSON at all is an error. Missing or null
/// `choices` yield no text, and usage counts are best effort.
fn parse_completion(body: &str) -> Result<Completion, ProviderError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    let response: ChatCompletionResponse = if value.is_object() {
        serde_json::from_value(value).map_err(|e| {
            ProviderError::InvalidResponse(format!("Unexpected response shape: {}", e))
        })?
    } else {
        ChatCompletionResponse::default()
    };

    let first = response.choices.unwrap_or_default().into_iter().next();
    let usage = response.usage.unwrap_or(Value::Null);

    Ok(Completion {
        finish_reason: first.as_ref().and_then(|c| c.finish_reason.clone()),
        text: first.and_then(|c| c.message).and_then(|m| m.content),
        input_tokens: token_count(&usage, "prompt_tokens"),
        output_tokens: token_count(&usage, "completion_tokens"),
    })
}

fn token_count(usage: &Value, field: &str) -> u32 {
    usage
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

// ============================================================================
// OpenRouter API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
    #[serde(default)]
    usage: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ResponseMessage>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
