//! Request pipeline error types.
//!
//! Errors raised while preparing an outgoing request, before anything is
//! handed to the transport.

use thiserror::Error;

/// Errors that can occur while a request moves through the pipeline.
///
/// Interceptors receive these on their error hook, so the type is `Clone`
/// and comparable: a pass-through must hand back exactly what it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The URL could not be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Only HTTP and HTTPS are supported.
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    /// The payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A header name or value is not valid on the wire.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The request content was rejected before it was built.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The transport request could not be constructed.
    #[error("Request build error: {0}")]
    Build(String),

    /// A custom interceptor refused the request.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Serialization(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            RequestError::Build(err.to_string())
        } else {
            RequestError::Rejected(err.to_string())
        }
    }
}
