//! Integration tests module for the request pipeline
//!
//! Shared helpers for tests that drive the public API end to end.

pub mod panel_test;
pub mod pipeline_test;

use request_pipeline::HttpClient;
use std::sync::Once;

static INIT: Once = Once::new();

/// Base URL the tests resolve relative routes against.
pub const PANEL_URL: &str = "http://127.0.0.1:54321/xui";

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        request_pipeline::init_logging();
    });
}

/// A client with the standard defaults pointed at the test panel.
pub fn panel_client() -> HttpClient {
    init_test_env();
    HttpClient::new()
        .with_base_url(PANEL_URL)
        .expect("test base URL is valid")
}
