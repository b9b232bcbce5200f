//! Hand-off of prepared requests to reqwest.
//!
//! Only builds `reqwest::Request` values; sending them is up to the caller.

use super::HttpClient;
use crate::client::error::RequestError;
use crate::models::request::{HttpMethod, RequestConfig};
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

/// Converts a prepared request into a reqwest request.
///
/// Text payloads are sent verbatim. A structured payload that no interceptor
/// encoded is written as JSON text.
///
/// Exactly one `content-type` header is sent, carrying the value
/// [`RequestConfig::content_type`] picked. Other spellings of the name are
/// only used when neither `Content-Type` nor `content-type` yields a value.
pub fn to_native_request(
    client: &reqwest::Client,
    request: &RequestConfig,
) -> Result<reqwest::Request, RequestError> {
    let method = match request.method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::HEAD => reqwest::Method::HEAD,
        HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
        HttpMethod::TRACE => reqwest::Method::TRACE,
        HttpMethod::CONNECT => reqwest::Method::CONNECT,
    };

    let mut req_builder = client.request(method, request.url.as_str());

    let content_type = request
        .content_type()
        .or_else(|| request.header("content-type"));

    for (name, value) in &request.headers {
        if name.eq_ignore_ascii_case("content-type") {
            continue;
        }
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RequestError::InvalidHeader(format!("{}: {}", name, e)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| RequestError::InvalidHeader(format!("{}: {}", name, e)))?;
        req_builder = req_builder.header(header_name, header_value);
    }

    if let Some(value) = content_type {
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| RequestError::InvalidHeader(format!("content-type: {}", e)))?;
        req_builder = req_builder.header(CONTENT_TYPE, header_value);
    }

    match &request.data {
        None | Some(Value::Null) => {}
        Some(Value::String(text)) => req_builder = req_builder.body(text.clone()),
        Some(other) => req_builder = req_builder.body(serde_json::to_string(other)?),
    }

    let native = req_builder.build()?;
    log::trace!("[{}] built native request for {}", request.id, native.url());
    Ok(native)
}

impl HttpClient {
    /// Prepares a request and builds the matching reqwest request.
    pub fn build_native(
        &self,
        client: &reqwest::Client,
        request: RequestConfig,
    ) -> Result<reqwest::Request, RequestError> {
        let prepared = self.prepare(request)?;
        to_native_request(client, &prepared)
    }
}
