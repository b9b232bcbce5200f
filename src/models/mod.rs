//! Data models for outgoing requests.
//!
//! This module contains the request configuration that travels through the
//! client pipeline.

pub mod request;

pub use request::{HttpMethod, RequestConfig};
