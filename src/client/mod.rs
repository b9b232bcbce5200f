//! The shared HTTP client front end.
//!
//! [`HttpClient`] owns the header defaults and the interceptor chain. It does
//! not talk to the network: [`HttpClient::prepare`] turns a caller's request
//! into the exact configuration a transport should send.

pub mod error;

// Hand-off to reqwest (request building only)
#[cfg(feature = "native")]
pub mod native;

pub use error::RequestError;

#[cfg(feature = "native")]
pub use native::to_native_request;

use crate::config::{get_config, ClientConfig, ConfigError};
use crate::headers::HeaderDefaults;
use crate::interceptor::{BodyNormalizer, InterceptorChain};
use crate::models::request::RequestConfig;
use url::Url;

/// HTTP client configuration: header defaults plus request interceptors.
///
/// # Examples
///
/// ```
/// use request_pipeline::{HttpClient, RequestConfig};
/// use serde_json::json;
///
/// let client = HttpClient::new();
/// let request = RequestConfig::post("https://panel.example.com/inbound/add")
///     .with_data(json!({"port": 443, "tags": ["a", "b"]}));
///
/// let prepared = client.prepare(request).unwrap();
/// assert_eq!(prepared.body_text(), Some("port=443&tags=a&tags=b"));
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: Option<String>,
    defaults: HeaderDefaults,
    interceptors: InterceptorChain,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a client with the standard defaults and a body normalizer.
    pub fn new() -> Self {
        let mut interceptors = InterceptorChain::new();
        interceptors.use_interceptor(BodyNormalizer::new());

        Self {
            base_url: None,
            defaults: HeaderDefaults::standard(),
            interceptors,
        }
    }

    /// Creates a client with no defaults and no interceptors.
    pub fn bare() -> Self {
        Self {
            base_url: None,
            defaults: HeaderDefaults::new(),
            interceptors: InterceptorChain::new(),
        }
    }

    /// Creates a client from settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut interceptors = InterceptorChain::new();
        interceptors.use_interceptor(BodyNormalizer::with_query_options(config.query_options()));

        Ok(Self {
            base_url: config.base_url.clone(),
            defaults: config.header_defaults()?,
            interceptors,
        })
    }

    /// Creates a client from the process-wide configuration.
    pub fn from_global_config() -> Result<Self, ConfigError> {
        Self::from_config(&get_config())
    }

    /// Sets the base URL joined with relative request URLs.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, RequestError> {
        validate_url(base_url)?;
        self.base_url = Some(base_url.to_string());
        Ok(self)
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Header defaults applied to every request.
    pub fn defaults(&self) -> &HeaderDefaults {
        &self.defaults
    }

    /// Mutable access to the header defaults.
    pub fn defaults_mut(&mut self) -> &mut HeaderDefaults {
        &mut self.defaults
    }

    /// The registered interceptors.
    pub fn interceptors(&self) -> &InterceptorChain {
        &self.interceptors
    }

    /// Mutable access to the interceptor chain.
    pub fn interceptors_mut(&mut self) -> &mut InterceptorChain {
        &mut self.interceptors
    }

    /// Prepares a request for transmission.
    ///
    /// Resolves and validates the URL, merges header defaults, then runs the
    /// interceptors. A URL failure enters the interceptor chain as an error,
    /// so each interceptor's error hook sees it.
    pub fn prepare(&self, request: RequestConfig) -> Result<RequestConfig, RequestError> {
        let upstream = self.resolve(request).map(|mut request| {
            self.defaults.apply(&mut request);
            request
        });

        let result = self.interceptors.run(upstream);
        match &result {
            Ok(request) => log::debug!(
                "[{}] prepared {} {}",
                request.id,
                request.method,
                request.url
            ),
            Err(e) => log::debug!("request preparation failed: {}", e),
        }
        result
    }

    fn resolve(&self, mut request: RequestConfig) -> Result<RequestConfig, RequestError> {
        let url = match &self.base_url {
            Some(base) if !is_absolute_url(&request.url) => combine_urls(base, &request.url),
            _ => request.url.clone(),
        };
        validate_url(&url)?;
        request.url = url;
        Ok(request)
    }
}

/// Checks whether a URL carries its own scheme (`scheme://`).
fn is_absolute_url(url: &str) -> bool {
    match url.find("://") {
        Some(index) => {
            let scheme = &url[..index];
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}

/// Joins a base URL and a relative path with exactly one slash between them.
fn combine_urls(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

/// Validates that the URL is well-formed and uses a supported protocol.
fn validate_url(url: &str) -> Result<(), RequestError> {
    let parsed = Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::UnsupportedProtocol(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(())
}
