//! Content-type driven body encoding.
//!
//! The normalizer looks at the effective Content-Type of a request and turns
//! its payload into wire text:
//!
//! - JSON content types get JSON text (an absent payload becomes `{}`)
//! - otherwise, structured payloads get a query string
//! - everything else is left alone

use super::RequestInterceptor;
use crate::client::error::RequestError;
use crate::encoding::json;
use crate::encoding::query::{self, QueryOptions};
use crate::headers::is_json_content_type;
use crate::models::request::RequestConfig;
use serde_json::Value;

/// Which branch the normalizer took for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// Payload written as JSON text.
    Json,
    /// Payload written as a query string.
    Form,
    /// Payload not touched.
    Untouched,
}

impl BodyEncoding {
    /// Selects the encoding for a request without modifying it.
    pub fn select(request: &RequestConfig) -> Self {
        if request.content_type().map_or(false, is_json_content_type) {
            BodyEncoding::Json
        } else if matches!(request.data, Some(Value::Object(_)) | Some(Value::Array(_))) {
            BodyEncoding::Form
        } else {
            BodyEncoding::Untouched
        }
    }
}

/// Interceptor that encodes request payloads by content type.
#[derive(Debug, Clone, Default)]
pub struct BodyNormalizer {
    query_options: QueryOptions,
}

impl BodyNormalizer {
    /// Creates a normalizer that writes arrays as repeated keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer with custom query-string options.
    pub fn with_query_options(query_options: QueryOptions) -> Self {
        Self { query_options }
    }

    /// Options used for form encoding.
    pub fn query_options(&self) -> &QueryOptions {
        &self.query_options
    }

    /// Encodes the payload of a request in place.
    pub fn normalize(&self, request: &mut RequestConfig) -> Result<BodyEncoding, RequestError> {
        let encoding = BodyEncoding::select(request);

        match encoding {
            BodyEncoding::Json => {
                let text = json::to_text(request.data.as_ref())?;
                request.data = Some(Value::String(text));
            }
            BodyEncoding::Form => {
                if let Some(data) = request.data.take() {
                    let text = query::stringify(&data, &self.query_options);
                    request.data = Some(Value::String(text));
                }
            }
            BodyEncoding::Untouched => {}
        }

        log::debug!("[{}] request body encoding: {:?}", request.id, encoding);
        Ok(encoding)
    }
}

impl RequestInterceptor for BodyNormalizer {
    fn name(&self) -> &str {
        "body-normalizer"
    }

    fn on_request(&self, mut request: RequestConfig) -> Result<RequestConfig, RequestError> {
        self.normalize(&mut request)?;
        Ok(request)
    }
}
