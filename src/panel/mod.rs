//! Typed request builders for the management panel's HTTP API.
//!
//! Builders only produce [`RequestConfig`](crate::models::RequestConfig)
//! values; run them through an [`HttpClient`](crate::HttpClient) to encode
//! bodies and apply header defaults.

pub mod inbound;

pub use inbound::{Inbound, InboundApi, MAX_BATCH_SIZE};
