//! ToS Gateway - summarizes Terms of Service and Privacy Policy text with an LLM.
//!
//! This crate implements a single Lambda function behind API Gateway that
//! exposes two routes:
//! 1. `POST /api/ping` - a liveness check
//! 2. `POST /api/summarize` - forwards text to a chat-completion provider and
//!    returns a plain-language summary with a list of detected badges
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - openai-api-rs for the chat-completion call (`OpenRouter` or `OpenAI`)
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use tos_gateway::ai::client::OpenAiBackend;
//! use tos_gateway::core::config::ProviderCredentials;
//! use tos_gateway::core::models::SummarizeRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     tos_gateway::setup_logging();
//!
//!     let credentials = ProviderCredentials::new(None, Some("sk-dummy".to_string()));
//!     let request = SummarizeRequest::from_body(&serde_json::json!({
//!         "text": "We may share your data with partners."
//!     }))?;
//!
//!     let response = tos_gateway::gateway::summarize(&OpenAiBackend, &credentials, &request).await?;
//!     println!("Summary: {}", response.summary);
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod gateway;

pub use errors::GatewayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// tos_gateway::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
