//! Header names, media types and client-wide header defaults.

pub mod defaults;

pub use defaults::HeaderDefaults;

/// `Content-Type` header name, in its canonical spelling.
pub const CONTENT_TYPE: &str = "Content-Type";

/// `X-Requested-With` header name.
pub const X_REQUESTED_WITH: &str = "X-Requested-With";

/// Value marking a request as script-initiated.
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// JSON media type. Matched as a substring of the Content-Type value.
pub const APPLICATION_JSON: &str = "application/json";

/// Default content type of POST requests.
pub const FORM_URLENCODED_UTF8: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Checks whether a Content-Type value selects JSON encoding.
///
/// The check is a plain substring match, so parameters such as
/// `; charset=utf-8` are fine but `Application/JSON` is not JSON.
pub fn is_json_content_type(value: &str) -> bool {
    value.contains(APPLICATION_JSON)
}
