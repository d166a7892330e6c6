//! Summarization pipeline: validate, select provider, build prompt, call, normalize.

use tracing::{error, info};

use crate::ai::client::{ChatRequest, CompletionBackend};
use crate::ai::prompt::build_prompt;
use crate::ai::provider::select_provider;
use crate::core::config::ProviderCredentials;
use crate::core::models::{SummarizeRequest, SummarizeResponse};
use crate::errors::GatewayError;

/// Sampling temperature for every summary request.
pub const SUMMARY_TEMPERATURE: f64 = 0.4;

/// Returned in place of a summary when the provider sends back no content.
pub const NO_SUMMARY_FALLBACK: &str = "No summary generated.";

/// Summarizes `request.text` with whichever provider `credentials` select.
///
/// The backend is called at most once. Nothing is retried.
///
/// # Errors
///
/// - `ConfigurationError` when no credential is set; the backend is not called.
/// - `UpstreamError` when the backend call fails. The detail is logged here.
pub async fn summarize<B>(
    backend: &B,
    credentials: &ProviderCredentials,
    request: &SummarizeRequest,
) -> Result<SummarizeResponse, GatewayError>
where
    B: CompletionBackend + ?Sized,
{
    let provider = select_provider(credentials).inspect_err(|_| {
        error!("No API key configured; set OPENROUTER_API_KEY or OPENAI_API_KEY");
    })?;

    let prompt = build_prompt(&request.text);

    #[cfg(feature = "debug-logs")]
    info!("Using summary prompt:\n{}", prompt);

    #[cfg(not(feature = "debug-logs"))]
    info!(
        provider = provider.name(),
        text_chars = request.text.chars().count(),
        prompt_chars = prompt.chars().count(),
        "Summarizing text"
    );

    let chat = ChatRequest::single_turn(provider.model(), prompt, SUMMARY_TEMPERATURE);

    let content = backend
        .chat_completion(&provider, chat)
        .await
        .map_err(|e| {
            error!(provider = provider.name(), "Summarize error: {}", e);
            match e {
                GatewayError::UpstreamError(_) => e,
                other => GatewayError::UpstreamError(other.to_string()),
            }
        })?;

    Ok(SummarizeResponse {
        summary: normalize_summary(content),
    })
}

/// Null or empty content becomes the fixed fallback string.
#[must_use]
pub fn normalize_summary(content: Option<String>) -> String {
    content
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string())
}
