//! Chat-completion client
//!
//! `CompletionBackend` is the seam between the summarization pipeline and the
//! network. `OpenAiBackend` talks to any OpenAI-compatible endpoint through
//! `openai-api-rs` and builds a fresh client for every call.

use async_trait::async_trait;
use openai_api_rs::v1::api::OpenAIClient;
use openai_api_rs::v1::chat_completion::{
    ChatCompletionMessage, ChatCompletionRequest, Content, MessageRole,
};
use tracing::{info, warn};

use super::provider::Provider;
use crate::errors::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Provider-neutral chat-completion request. Always non-streaming.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

impl ChatRequest {
    #[must_use]
    pub fn single_turn(model: &str, prompt: String, temperature: f64) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::user(prompt)],
            temperature,
        }
    }

    fn into_openai(self) -> ChatCompletionRequest {
        let messages = self
            .messages
            .into_iter()
            .map(|msg| ChatCompletionMessage {
                role: match msg.role {
                    ChatRole::User => MessageRole::user,
                },
                content: Content::Text(msg.content),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            })
            .collect();

        ChatCompletionRequest::new(self.model, messages).temperature(self.temperature)
    }
}

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends one chat-completion request to `provider` and returns the first
    /// choice's message content, if any.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::UpstreamError` for any transport or provider failure.
    async fn chat_completion(
        &self,
        provider: &Provider,
        request: ChatRequest,
    ) -> Result<Option<String>, GatewayError>;
}

/// Production backend over `openai-api-rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiBackend;

impl OpenAiBackend {
    fn build_client(provider: &Provider) -> Result<OpenAIClient, GatewayError> {
        OpenAIClient::builder()
            .with_endpoint(provider.endpoint())
            .with_api_key(provider.api_key())
            .build()
            .map_err(|e| {
                GatewayError::UpstreamError(format!("Failed to create OpenAI client: {e}"))
            })
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn chat_completion(
        &self,
        provider: &Provider,
        request: ChatRequest,
    ) -> Result<Option<String>, GatewayError> {
        let mut client = Self::build_client(provider)?;

        info!(
            provider = provider.name(),
            model = %request.model,
            "Sending chat completion request"
        );

        let response = client.chat_completion(request.into_openai()).await?;

        if response.choices.is_empty() {
            warn!(provider = provider.name(), "Provider returned no choices");
        }

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}
