//! End-to-end tests of header defaults and body normalization
//!
//! These drive `HttpClient::prepare` the way an application would and check
//! the request that would reach the transport.

use super::panel_client;
use request_pipeline::{
    BodyNormalizer, HeaderDefaults, HttpClient, HttpMethod, RequestConfig, RequestError,
    RequestInterceptor,
};
use serde_json::json;

#[test]
fn test_post_without_content_type_gets_form_default() {
    let prepared = panel_client()
        .prepare(RequestConfig::post("/inbound/list"))
        .unwrap();

    assert_eq!(
        prepared.content_type(),
        Some("application/x-www-form-urlencoded; charset=UTF-8")
    );
    assert_eq!(prepared.header("X-Requested-With"), Some("XMLHttpRequest"));
    assert_eq!(prepared.url, "http://127.0.0.1:54321/xui/inbound/list");
}

#[test]
fn test_every_method_gets_requested_with() {
    let client = panel_client();
    for method in HttpMethod::ALL {
        let prepared = client.prepare(RequestConfig::new(method, "/x")).unwrap();
        assert_eq!(
            prepared.header("X-Requested-With"),
            Some("XMLHttpRequest"),
            "{} should carry X-Requested-With",
            method
        );
        if method != HttpMethod::POST {
            assert_eq!(prepared.content_type(), None, "{} has no default type", method);
        }
    }
}

#[test]
fn test_json_body_is_serialized() {
    let prepared = panel_client()
        .prepare(
            RequestConfig::post("/x")
                .with_header("Content-Type", "application/json")
                .with_data(json!({"a": 1})),
        )
        .unwrap();

    assert_eq!(prepared.body_text(), Some(r#"{"a":1}"#));
}

#[test]
fn test_json_without_body_sends_empty_object() {
    let prepared = panel_client()
        .prepare(RequestConfig::post("/x").with_header("Content-Type", "application/json"))
        .unwrap();

    assert_eq!(prepared.body_text(), Some("{}"));
}

#[test]
fn test_json_get_without_body_sends_empty_object() {
    let prepared = panel_client()
        .prepare(RequestConfig::get("/x").with_header("content-type", "application/json"))
        .unwrap();

    assert_eq!(prepared.body_text(), Some("{}"));
}

#[test]
fn test_structured_body_uses_repeated_keys() {
    let prepared = panel_client()
        .prepare(RequestConfig::post("/x").with_data(json!({"a": [1, 2]})))
        .unwrap();

    assert_eq!(prepared.body_text(), Some("a=1&a=2"));
    assert_ne!(prepared.body_text(), Some("a[]=1&a[]=2"));
}

#[test]
fn test_text_body_is_left_unchanged() {
    let prepared = panel_client()
        .prepare(RequestConfig::post("/x").with_text("already=encoded&a[]=1"))
        .unwrap();

    assert_eq!(prepared.body_text(), Some("already=encoded&a[]=1"));
}

#[test]
fn test_explicit_content_type_overrides_default() {
    let prepared = panel_client()
        .prepare(
            RequestConfig::post("/x")
                .with_header("Content-Type", "text/plain")
                .with_data(json!({"a": "b"})),
        )
        .unwrap();

    assert_eq!(prepared.content_type(), Some("text/plain"));
    // Not JSON, so structured data is still form-encoded
    assert_eq!(prepared.body_text(), Some("a=b"));
}

struct FailUpstream(RequestError);

impl RequestInterceptor for FailUpstream {
    fn name(&self) -> &str {
        "fail-upstream"
    }

    fn on_request(&self, _request: RequestConfig) -> Result<RequestConfig, RequestError> {
        Err(self.0.clone())
    }
}

#[test]
fn test_upstream_rejection_passes_through_unchanged() {
    let error = RequestError::Rejected("session expired".to_string());

    let mut client = HttpClient::bare();
    client.interceptors_mut().use_interceptor(FailUpstream(error.clone()));
    client.interceptors_mut().use_interceptor(BodyNormalizer::new());

    let result = client.prepare(RequestConfig::post("http://h/x").with_data(json!({"a": 1})));
    assert_eq!(result, Err(error));
}

#[test]
fn test_url_failure_reaches_caller_unchanged() {
    let result = HttpClient::new().prepare(RequestConfig::get("gopher://h/x"));
    match result {
        Err(RequestError::UnsupportedProtocol(msg)) => assert!(msg.contains("gopher")),
        other => panic!("Expected UnsupportedProtocol, got {:?}", other),
    }
}

#[test]
fn test_custom_defaults() {
    let mut defaults = HeaderDefaults::standard();
    defaults.set_for(HttpMethod::PUT, "Content-Type", "application/json");

    let mut client = HttpClient::new();
    *client.defaults_mut() = defaults;

    let prepared = client
        .prepare(RequestConfig::new(HttpMethod::PUT, "http://h/x").with_data(json!({"a": [1]})))
        .unwrap();
    assert_eq!(prepared.body_text(), Some(r#"{"a":[1]}"#));
}

#[test]
fn test_client_is_shareable_across_threads() {
    let client = std::sync::Arc::new(panel_client());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = client.clone();
            std::thread::spawn(move || {
                client
                    .prepare(RequestConfig::post("/x").with_data(json!({"n": i})))
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let prepared = handle.join().unwrap();
        assert_eq!(prepared.body_text(), Some(format!("n={}", i).as_str()));
    }
}
