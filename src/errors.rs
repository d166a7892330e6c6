use openai_api_rs::v1::error::APIError;
use thiserror::Error;

/// Message returned to callers when the request carries no usable `text`.
pub const MISSING_TEXT_MESSAGE: &str = "Missing 'text' in body";

/// Message returned to callers when neither provider credential is set.
pub const NO_API_KEY_MESSAGE: &str =
    "No API key configured. Set OPENROUTER_API_KEY or OPENAI_API_KEY.";

/// Message returned to callers for any upstream failure.
pub const SUMMARY_FAILED_MESSAGE: &str = "Summary failed";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No provider credential configured")]
    ConfigurationError,

    #[error("Failed to access LLM provider: {0}")]
    UpstreamError(String),
}

impl GatewayError {
    /// HTTP status code the error maps to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            GatewayError::InvalidInput(_) => 400,
            GatewayError::ConfigurationError | GatewayError::UpstreamError(_) => 500,
        }
    }

    /// Fixed caller-facing message. Upstream detail stays in the logs.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            GatewayError::InvalidInput(_) => MISSING_TEXT_MESSAGE,
            GatewayError::ConfigurationError => NO_API_KEY_MESSAGE,
            GatewayError::UpstreamError(_) => SUMMARY_FAILED_MESSAGE,
        }
    }
}

impl From<APIError> for GatewayError {
    fn from(error: APIError) -> Self {
        GatewayError::UpstreamError(format!("OpenAI API error: {error}"))
    }
}
