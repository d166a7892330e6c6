//! API Gateway proxy-response builders.
//!
//! Every response carries the same CORS headers, whatever its status.

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::models::{ErrorBody, PongResponse};
use crate::errors::GatewayError;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": ALLOW_ORIGIN,
        "Access-Control-Allow-Methods": ALLOW_METHODS,
        "Access-Control-Allow-Headers": ALLOW_HEADERS,
        "Content-Type": "application/json",
    })
}

/// Serializes `body` into a proxy response with the given status.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": body,
    })
}

/// Returns a 200 OK response with an empty JSON body (CORS preflight).
#[must_use]
pub fn ok_empty() -> Value {
    json_response(200, &json!({}))
}

#[must_use]
pub fn pong() -> Value {
    json_response(200, &PongResponse { pong: true })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(
        status_code,
        &ErrorBody {
            error: message.to_string(),
        },
    )
}

/// Maps a domain error to its status and fixed caller-facing message.
#[must_use]
pub fn from_error(error: &GatewayError) -> Value {
    err_response(error.status_code(), error.public_message())
}

#[must_use]
pub fn not_found() -> Value {
    err_response(404, "Not found")
}

#[must_use]
pub fn method_not_allowed() -> Value {
    err_response(405, "Method not allowed")
}
