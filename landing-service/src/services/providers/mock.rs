//! Mock provider for testing.

use super::{ChatMessage, Completion, CompletionProvider, GenerationParams, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    NoContent,
    Upstream { status: u16, body: String },
    Network(String),
}

/// Scripted provider that answers every call the same way and records what
/// it was asked.
pub struct MockCompletionProvider {
    reply: MockReply,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockCompletionProvider {
    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Succeeds with the given completion text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    /// Succeeds without any completion text.
    pub fn without_content() -> Self {
        Self::with_reply(MockReply::NoContent)
    }

    /// Fails as if the provider returned a non-success status.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Upstream {
            status,
            body: body.into(),
        })
    }

    /// Fails as if the provider could not be reached.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Network(reason.into()))
    }

    /// Messages of every call so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: &GenerationParams,
    ) -> Result<Completion, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }

        match &self.reply {
            MockReply::Text(text) => Ok(Completion {
                text: Some(text.clone()),
                input_tokens: messages.iter().map(|m| m.content.len() as u32 / 4).sum(),
                output_tokens: text.len() as u32 / 4,
                finish_reason: Some("stop".to_string()),
            }),
            MockReply::NoContent => Ok(Completion {
                finish_reason: Some("stop".to_string()),
                ..Completion::default()
            }),
            MockReply::Upstream { status, body } => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            MockReply::Network(reason) => Err(ProviderError::NetworkError(reason.clone())),
        }
    }
}
