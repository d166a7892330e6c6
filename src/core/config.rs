use std::env;

pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Provider credentials, read fresh for every request so that key rotation
/// takes effect without a cold start.
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    pub openrouter_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl ProviderCredentials {
    /// Empty keys are treated as absent.
    #[must_use]
    pub fn new(openrouter_api_key: Option<String>, openai_api_key: Option<String>) -> Self {
        Self {
            openrouter_api_key: non_empty(openrouter_api_key),
            openai_api_key: non_empty(openai_api_key),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            env::var(OPENROUTER_API_KEY_VAR).ok(),
            env::var(OPENAI_API_KEY_VAR).ok(),
        )
    }
}

// Keys must never reach the logs, so Debug only reports presence.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("openrouter_api_key", &self.openrouter_api_key.is_some())
            .field("openai_api_key", &self.openai_api_key.is_some())
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
