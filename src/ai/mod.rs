//! All AI/LLM functionality

pub mod client;
pub mod prompt;
pub mod provider;

// Re-export main types for convenience
pub use client::{ChatMessage, ChatRequest, ChatRole, CompletionBackend, OpenAiBackend};
pub use prompt::{Badge, build_prompt};
pub use provider::{Provider, select_provider};
