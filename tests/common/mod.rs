#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use tos_gateway::GatewayError;
use tos_gateway::ai::client::{ChatRequest, CompletionBackend};
use tos_gateway::ai::provider::Provider;

/// What the fake provider answers with.
pub enum Reply {
    Content(String),
    NoContent,
    Fail(String),
}

/// Backend that records every call and answers with a canned reply.
pub struct RecordingBackend {
    reply: Reply,
    calls: Mutex<Vec<(Provider, ChatRequest)>>,
}

impl RecordingBackend {
    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Content(text.to_string()))
    }

    pub fn empty() -> Self {
        Self::new(Reply::NoContent)
    }

    pub fn failing(detail: &str) -> Self {
        Self::new(Reply::Fail(detail.to_string()))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Provider, ChatRequest)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for RecordingBackend {
    async fn chat_completion(
        &self,
        provider: &Provider,
        request: ChatRequest,
    ) -> Result<Option<String>, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((provider.clone(), request));

        match &self.reply {
            Reply::Content(text) => Ok(Some(text.clone())),
            Reply::NoContent => Ok(None),
            Reply::Fail(detail) => Err(GatewayError::UpstreamError(detail.clone())),
        }
    }
}
