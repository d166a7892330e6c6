//! Accessors for API Gateway proxy events (HTTP API v2.0, REST v1.0 fields as fallback).

use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Upper-cased HTTP method, if the event carries one.
#[must_use]
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

#[must_use]
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .or_else(|| v_str(payload, &["requestContext", "http", "path"]))
}

/// Raw request body, base64-decoded when `isBase64Encoded` is set.
/// Returns `None` when there is no body or it cannot be decoded as UTF-8.
#[must_use]
pub fn request_body(payload: &Value) -> Option<String> {
    let body = payload.get("body").and_then(Value::as_str)?;

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_base64 {
        let bytes = general_purpose::STANDARD.decode(body).ok()?;
        String::from_utf8(bytes).ok()
    } else {
        Some(body.to_string())
    }
}

/// Parses the request body as JSON. Missing or malformed bodies yield `Value::Null`,
/// which downstream validation rejects as missing `text`.
#[must_use]
pub fn request_json(payload: &Value) -> Value {
    request_body(payload)
        .and_then(|body| serde_json::from_str(&body).ok())
        .unwrap_or(Value::Null)
}
