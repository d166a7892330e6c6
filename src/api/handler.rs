//! API Lambda handler - thin router over the summarization gateway.
//!
//! Routes are matched on the path suffix so that API Gateway stage prefixes
//! (`/prod/api/ping`) and trailing slashes resolve to the same handler.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};

use super::{parsing, response};
use crate::ai::client::{CompletionBackend, OpenAiBackend};
use crate::core::config::ProviderCredentials;
use crate::core::models::SummarizeRequest;
use crate::gateway;

pub use self::function_handler as handler;

pub const PING_PATH: &str = "/api/ping";
pub const SUMMARIZE_PATH: &str = "/api/summarize";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Ping,
    Summarize,
}

impl Route {
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.ends_with(PING_PATH) {
            Some(Route::Ping)
        } else if trimmed.ends_with(SUMMARIZE_PATH) {
            Some(Route::Summarize)
        } else {
            None
        }
    }
}

/// Lambda handler for the API entrypoint.
///
/// Credentials are read from the environment on every invocation.
///
/// # Errors
///
/// Never fails for request-level problems; those become JSON error responses.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let credentials = ProviderCredentials::from_env();
    Ok(route(&event.payload, &credentials, &OpenAiBackend).await)
}

/// Dispatches one API Gateway event. Pure apart from the backend call.
pub async fn route<B>(payload: &Value, credentials: &ProviderCredentials, backend: &B) -> Value
where
    B: CompletionBackend + ?Sized,
{
    let path = parsing::request_path(payload).unwrap_or_default();
    let method = parsing::request_method(payload).unwrap_or_default();
    info!(path = %path, method = %method, "Request received");

    let Some(matched) = Route::from_path(path) else {
        warn!(path = %path, "No route for path");
        return response::not_found();
    };

    match (matched, method.as_str()) {
        (_, "OPTIONS") => response::ok_empty(),
        (Route::Ping, "POST") => {
            info!("PING endpoint called");
            response::pong()
        }
        (Route::Summarize, "POST") => handle_summarize(payload, credentials, backend).await,
        _ => {
            warn!(path = %path, method = %method, "Method not allowed");
            response::method_not_allowed()
        }
    }
}

async fn handle_summarize<B>(
    payload: &Value,
    credentials: &ProviderCredentials,
    backend: &B,
) -> Value
where
    B: CompletionBackend + ?Sized,
{
    let body = parsing::request_json(payload);

    let request = match SummarizeRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejecting summarize request: {}", e);
            return response::from_error(&e);
        }
    };

    match gateway::summarize(backend, credentials, &request).await {
        Ok(summary) => response::json_response(200, &summary),
        Err(e) => response::from_error(&e),
    }
}
