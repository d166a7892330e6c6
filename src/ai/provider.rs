//! Upstream provider selection.
//!
//! `OpenRouter` wins when its key is present; otherwise the direct `OpenAI`
//! endpoint is used. Exactly one provider serves a request and there is no
//! fallback to the other one on failure.

use crate::core::config::ProviderCredentials;
use crate::errors::GatewayError;

pub const OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1";
pub const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

pub const OPENROUTER_MODEL: &str = "openai/gpt-3.5-turbo";
pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, PartialEq, Eq)]
pub enum Provider {
    /// Aggregator reachable at an alternate base URL.
    Gateway { endpoint: String, api_key: String },
    /// The vendor's own endpoint.
    Direct { api_key: String },
}

impl Provider {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Provider::Gateway { endpoint, .. } => endpoint.as_str(),
            Provider::Direct { .. } => OPENAI_ENDPOINT,
        }
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        match self {
            Provider::Gateway { api_key, .. } | Provider::Direct { api_key } => api_key,
        }
    }

    #[must_use]
    pub const fn model(&self) -> &'static str {
        match self {
            Provider::Gateway { .. } => OPENROUTER_MODEL,
            Provider::Direct { .. } => OPENAI_MODEL,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Provider::Gateway { .. } => "openrouter",
            Provider::Direct { .. } => "openai",
        }
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name())
            .field("endpoint", &self.endpoint())
            .field("model", &self.model())
            .finish_non_exhaustive()
    }
}

/// Picks the provider for one request.
///
/// # Errors
///
/// Returns `GatewayError::ConfigurationError` when neither key is configured.
pub fn select_provider(credentials: &ProviderCredentials) -> Result<Provider, GatewayError> {
    if let Some(key) = &credentials.openrouter_api_key {
        return Ok(Provider::Gateway {
            endpoint: OPENROUTER_ENDPOINT.to_string(),
            api_key: key.clone(),
        });
    }

    if let Some(key) = &credentials.openai_api_key {
        return Ok(Provider::Direct {
            api_key: key.clone(),
        });
    }

    Err(GatewayError::ConfigurationError)
}
