//! Outgoing request configuration.
//!
//! A [`RequestConfig`] is what flows through the client pipeline: header
//! defaults are merged into it, interceptors mutate it, and the transport
//! layer finally consumes it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// HTTP request method.
///
/// Represents all standard HTTP methods as defined in RFC 7231 and RFC 5789.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP OPTIONS method - describe communication options
    OPTIONS,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
    /// HTTP TRACE method - perform a message loop-back test
    TRACE,
    /// HTTP CONNECT method - establish a tunnel to the server
    CONNECT,
}

impl HttpMethod {
    /// All methods, in declaration order.
    pub const ALL: [HttpMethod; 9] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::DELETE,
        HttpMethod::PATCH,
        HttpMethod::OPTIONS,
        HttpMethod::HEAD,
        HttpMethod::TRACE,
        HttpMethod::CONNECT,
    ];

    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::TRACE => "TRACE",
            HttpMethod::CONNECT => "CONNECT",
        }
    }

    /// Parses a method name, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not a standard method.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration of a single outgoing request.
///
/// The payload is kept as a JSON value until an interceptor encodes it:
/// `Value::String` is already textual, objects and arrays are structured,
/// and both `None` and `Value::Null` mean "no body".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Identifier used to correlate log records for this request.
    pub id: String,

    /// HTTP method.
    pub method: HttpMethod,

    /// Target URL. May be relative when the client has a base URL.
    pub url: String,

    /// Request headers as provided by the caller, then merged with defaults.
    ///
    /// Names keep the spelling they were inserted with.
    pub headers: HashMap<String, String>,

    /// Request payload, if any.
    pub data: Option<Value>,
}

impl RequestConfig {
    /// Creates a request with no headers and no payload.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method,
            url: url.into(),
            headers: HashMap::new(),
            data: None,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::GET, url)
    }

    /// Shorthand for a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::POST, url)
    }

    /// Adds a header, replacing a previous value stored under the exact same name.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Builder form of [`add_header`](Self::add_header).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(name, value);
        self
    }

    /// Sets the payload.
    pub fn set_data(&mut self, data: Value) {
        self.data = Some(data);
    }

    /// Builder form of [`set_data`](Self::set_data).
    pub fn with_data(mut self, data: Value) -> Self {
        self.set_data(data);
        self
    }

    /// Builder form that sets a textual payload.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_data(Value::String(text.into()))
    }

    /// Checks whether a header is present under any ASCII case.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.keys().any(|k| k.eq_ignore_ascii_case(name))
    }

    /// Looks up a header value under any ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Gets the effective Content-Type value.
    ///
    /// Only the exact spellings `Content-Type` and `content-type` are
    /// consulted, in that order. An empty `Content-Type` value counts as
    /// missing, so the lowercase entry is used instead.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("Content-Type")
            .filter(|v| !v.is_empty())
            .or_else(|| self.headers.get("content-type"))
            .map(String::as_str)
    }

    /// Returns the payload when it is already text.
    pub fn body_text(&self) -> Option<&str> {
        self.data.as_ref().and_then(Value::as_str)
    }

    /// Checks if the request carries a payload.
    ///
    /// `Value::Null` counts as no payload.
    pub fn has_data(&self) -> bool {
        !matches!(self.data, None | Some(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::GET.as_str(), "GET");
        assert_eq!(HttpMethod::POST.as_str(), "POST");
        assert_eq!(HttpMethod::DELETE.as_str(), "DELETE");
    }

    #[test]
    fn test_http_method_parse() {
        assert_eq!(HttpMethod::parse("GET"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::parse(" Post "), Some(HttpMethod::POST));
        assert_eq!(HttpMethod::parse("INVALID"), None);
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(format!("{}", HttpMethod::GET), "GET");
        assert_eq!(format!("{}", HttpMethod::PATCH), "PATCH");
    }

    #[test]
    fn test_request_config_new() {
        let request = RequestConfig::get("https://example.com");

        assert_eq!(request.method, HttpMethod::GET);
        assert_eq!(request.url, "https://example.com");
        assert!(request.headers.is_empty());
        assert_eq!(request.data, None);
        assert!(!request.id.is_empty());
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestConfig::get("/a");
        let b = RequestConfig::get("/a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_content_type_exact_spellings() {
        let request = RequestConfig::post("/x").with_header("content-type", "text/plain");
        assert_eq!(request.content_type(), Some("text/plain"));

        let request = RequestConfig::post("/x")
            .with_header("Content-Type", "application/json")
            .with_header("content-type", "text/plain");
        assert_eq!(request.content_type(), Some("application/json"));
    }

    #[test]
    fn test_content_type_skips_empty_canonical_value() {
        let request = RequestConfig::post("/x")
            .with_header("Content-Type", "")
            .with_header("content-type", "application/json");
        assert_eq!(request.content_type(), Some("application/json"));

        let request = RequestConfig::post("/x").with_header("Content-Type", "");
        assert_eq!(request.content_type(), None);
    }

    #[test]
    fn test_content_type_ignores_other_spellings() {
        let request = RequestConfig::post("/x").with_header("CONTENT-TYPE", "application/json");
        assert_eq!(request.content_type(), None);
        // The generic lookup still sees it
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert!(request.has_header("Content-Type"));
    }

    #[test]
    fn test_data_helpers() {
        let mut request = RequestConfig::post("/x");
        assert!(!request.has_data());

        request.set_data(Value::Null);
        assert!(!request.has_data());

        request.set_data(json!({"a": 1}));
        assert!(request.has_data());
        assert_eq!(request.body_text(), None);

        let request = request.with_text("a=1");
        assert_eq!(request.body_text(), Some("a=1"));
    }

    #[test]
    fn test_serialization() {
        let request = RequestConfig::get("https://api.example.com/data").with_data(json!({"k": "v"}));

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("GET"));

        let deserialized: RequestConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, request);
    }
}
