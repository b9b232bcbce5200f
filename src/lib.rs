//! Shared HTTP client defaults and request body normalization.
//!
//! This crate configures the request side of an HTTP client used by a web
//! management panel: default headers that every request carries, and an
//! interceptor that encodes request bodies according to their content type.
//!
//! # Architecture
//!
//! - **models**: the outgoing request configuration
//! - **headers**: header names, media types and per-method defaults
//! - **encoding**: JSON text and `qs`-style query-string encoders
//! - **interceptor**: the interceptor trait, chain, and the body normalizer
//! - **client**: `HttpClient`, which ties defaults and interceptors together
//! - **config**: serde-backed settings with a process-wide copy
//! - **panel**: request builders for the panel's inbound API
//!
//! # Request flow
//!
//! 1. The caller builds a [`RequestConfig`]
//! 2. [`HttpClient::prepare`] resolves the URL against the base URL
//! 3. Header defaults are merged under the caller's own headers
//! 4. Interceptors run in order; the [`BodyNormalizer`] encodes the body:
//!    JSON text for `application/json`, a repeated-key query string for
//!    structured bodies otherwise
//! 5. The prepared request goes to a transport (see `client::native`)
//!
//! # Usage
//!
//! ```
//! use request_pipeline::{HttpClient, RequestConfig};
//! use serde_json::json;
//!
//! let client = HttpClient::new().with_base_url("http://127.0.0.1:54321").unwrap();
//!
//! let form = client
//!     .prepare(RequestConfig::post("/inbound/add").with_data(json!({"ids": [1, 2]})))
//!     .unwrap();
//! assert_eq!(form.body_text(), Some("ids=1&ids=2"));
//!
//! let json_body = client
//!     .prepare(
//!         RequestConfig::post("/inbound/addBatch")
//!             .with_header("Content-Type", "application/json")
//!             .with_data(json!({"a": 1})),
//!     )
//!     .unwrap();
//! assert_eq!(json_body.body_text(), Some(r#"{"a":1}"#));
//! ```

use std::io::Write;

pub mod client;
pub mod config;
pub mod encoding;
pub mod headers;
pub mod interceptor;
pub mod models;
pub mod panel;

pub use client::{HttpClient, RequestError};
pub use config::{ClientConfig, ConfigError};
pub use headers::HeaderDefaults;
pub use interceptor::{BodyNormalizer, InterceptorChain, InterceptorId, RequestInterceptor};
pub use models::{HttpMethod, RequestConfig};

/// Installs a timestamped `env_logger` logger.
///
/// Defaults to `info`; `RUST_LOG` overrides it. Calling this more than once,
/// or after another logger was installed, has no effect.
pub fn init_logging() {
    let result = env_logger::Builder::new()
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(buf, "{}", log_line(timestamp, record.level(), record.args()))
        })
        .filter(None, log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .try_init();

    if result.is_ok() {
        log::debug!("request-pipeline {} logging initialized", env!("CARGO_PKG_VERSION"));
    }
}

/// Renders one log record as `time - level - message`.
fn log_line(
    timestamp: impl std::fmt::Display,
    level: log::Level,
    message: impl std::fmt::Display,
) -> String {
    format!("{} - {} - {}", timestamp, level, message)
}
