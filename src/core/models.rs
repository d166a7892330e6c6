use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GatewayError;

/// Body of `POST /api/summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

impl SummarizeRequest {
    /// Validates a decoded JSON body. `text` must be a non-empty string;
    /// anything else (absent, null, another type, empty) is `InvalidInput`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidInput` when the body carries no usable text.
    pub fn from_body(body: &Value) -> Result<Self, GatewayError> {
        match body.get("text") {
            Some(Value::String(text)) if !text.is_empty() => Ok(Self { text: text.clone() }),
            Some(Value::String(_)) => Err(GatewayError::InvalidInput("'text' is empty".into())),
            Some(other) => Err(GatewayError::InvalidInput(format!(
                "'text' must be a string, got {}",
                json_type_name(other)
            ))),
            None => Err(GatewayError::InvalidInput("'text' is missing".into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PongResponse {
    pub pong: bool,
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
