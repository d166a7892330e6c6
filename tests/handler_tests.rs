mod common;

use base64::{Engine as _, engine::general_purpose};
use common::RecordingBackend;
use serde_json::{Value, json};
use tos_gateway::api::handler::{Route, route};
use tos_gateway::core::config::ProviderCredentials;

fn event(method: &str, path: &str, body: Option<&str>) -> Value {
    let mut payload = json!({
        "version": "2.0",
        "rawPath": path,
        "requestContext": { "http": { "method": method, "path": path } },
        "isBase64Encoded": false,
    });
    if let Some(body) = body {
        payload["body"] = json!(body);
    }
    payload
}

fn body_json(response: &Value) -> Value {
    let body = response["body"].as_str().expect("body should be a string");
    serde_json::from_str(body).expect("body should be JSON")
}

fn assert_cors(response: &Value) {
    let headers = &response["headers"];
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
    assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
}

fn openai_only() -> ProviderCredentials {
    ProviderCredentials::new(None, Some("oa-key".to_string()))
}

#[tokio::test]
async fn test_ping_returns_pong() {
    let backend = RecordingBackend::replying("unused");
    let response = route(&event("POST", "/api/ping", None), &openai_only(), &backend).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_json(&response), json!({ "pong": true }));
    assert_cors(&response);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_options_preflight_independent_of_config() {
    let backend = RecordingBackend::replying("unused");
    for creds in [ProviderCredentials::default(), openai_only()] {
        let response = route(&event("OPTIONS", "/api/summarize", None), &creds, &backend).await;
        assert_eq!(response["statusCode"], 200);
        assert_eq!(body_json(&response), json!({}));
        assert_cors(&response);
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_options_on_ping() {
    let backend = RecordingBackend::replying("unused");
    let response = route(&event("OPTIONS", "/api/ping", None), &openai_only(), &backend).await;
    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_json(&response), json!({}));
}

#[tokio::test]
async fn test_summarize_success() {
    let backend = RecordingBackend::replying("- You can cancel anytime");
    let body = r#"{"text":"We may share your data with partners and retain it indefinitely."}"#;

    let response = route(
        &event("POST", "/api/summarize", Some(body)),
        &openai_only(),
        &backend,
    )
    .await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(
        body_json(&response),
        json!({ "summary": "- You can cancel anytime" })
    );
    assert_cors(&response);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_missing_text_is_400_without_upstream_call() {
    let backend = RecordingBackend::replying("unused");
    let bodies = [
        None,
        Some("{}"),
        Some(r#"{"text":null}"#),
        Some(r#"{"text":123}"#),
        Some(r#"{"text":""}"#),
        Some("not json at all"),
    ];

    for body in bodies {
        let response = route(
            &event("POST", "/api/summarize", body),
            &openai_only(),
            &backend,
        )
        .await;
        assert_eq!(response["statusCode"], 400, "body: {body:?}");
        assert_eq!(
            body_json(&response),
            json!({ "error": "Missing 'text' in body" })
        );
        assert_cors(&response);
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_input_checked_before_configuration() {
    let backend = RecordingBackend::replying("unused");
    let response = route(
        &event("POST", "/api/summarize", Some("{}")),
        &ProviderCredentials::default(),
        &backend,
    )
    .await;
    assert_eq!(response["statusCode"], 400);
}

#[tokio::test]
async fn test_no_api_key_is_500() {
    let backend = RecordingBackend::replying("unused");
    let response = route(
        &event("POST", "/api/summarize", Some(r#"{"text":"terms"}"#)),
        &ProviderCredentials::default(),
        &backend,
    )
    .await;

    assert_eq!(response["statusCode"], 500);
    assert_eq!(
        body_json(&response),
        json!({ "error": "No API key configured. Set OPENROUTER_API_KEY or OPENAI_API_KEY." })
    );
    assert_cors(&response);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_upstream_failure_hides_detail() {
    let backend = RecordingBackend::failing("401 invalid api key sk-abc123");
    let response = route(
        &event("POST", "/api/summarize", Some(r#"{"text":"terms"}"#)),
        &openai_only(),
        &backend,
    )
    .await;

    assert_eq!(response["statusCode"], 500);
    assert_eq!(body_json(&response), json!({ "error": "Summary failed" }));
    assert!(!response["body"].as_str().unwrap().contains("sk-abc123"));
    assert_cors(&response);
}

#[tokio::test]
async fn test_empty_upstream_content_returns_fallback() {
    let backend = RecordingBackend::empty();
    let response = route(
        &event("POST", "/api/summarize", Some(r#"{"text":"terms"}"#)),
        &openai_only(),
        &backend,
    )
    .await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(
        body_json(&response),
        json!({ "summary": "No summary generated." })
    );
}

#[tokio::test]
async fn test_base64_body_is_decoded() {
    let backend = RecordingBackend::replying("decoded");
    let mut payload = event("POST", "/api/summarize", None);
    payload["body"] = json!(general_purpose::STANDARD.encode(r#"{"text":"terms"}"#));
    payload["isBase64Encoded"] = json!(true);

    let response = route(&payload, &openai_only(), &backend).await;

    assert_eq!(response["statusCode"], 200);
    assert!(backend.calls()[0].1.messages[0].content.ends_with("\nterms"));
}

#[tokio::test]
async fn test_rest_api_event_shape() {
    let backend = RecordingBackend::replying("unused");
    let payload = json!({ "httpMethod": "POST", "path": "/prod/api/ping" });
    let response = route(&payload, &openai_only(), &backend).await;
    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_json(&response), json!({ "pong": true }));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let backend = RecordingBackend::replying("unused");
    let response = route(&event("POST", "/api/unknown", None), &openai_only(), &backend).await;
    assert_eq!(response["statusCode"], 404);
    assert_cors(&response);
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let backend = RecordingBackend::replying("unused");
    let response = route(&event("GET", "/api/summarize", None), &openai_only(), &backend).await;
    assert_eq!(response["statusCode"], 405);
    assert_cors(&response);
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn test_route_from_path() {
    assert_eq!(Route::from_path("/api/ping"), Some(Route::Ping));
    assert_eq!(Route::from_path("/api/ping/"), Some(Route::Ping));
    assert_eq!(Route::from_path("/prod/api/summarize"), Some(Route::Summarize));
    assert_eq!(Route::from_path("/api"), None);
    assert_eq!(Route::from_path(""), None);
}
