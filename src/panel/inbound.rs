//! Requests for the panel's `/inbound` routes.
//!
//! Every route is a POST. Single inbounds travel as form bodies; batches
//! travel as JSON because the server binds them from a JSON document.

use crate::client::error::RequestError;
use crate::headers::{APPLICATION_JSON, CONTENT_TYPE};
use crate::models::request::RequestConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Largest batch the server accepts in one `addBatch` call.
pub const MAX_BATCH_SIZE: usize = 100;

/// A proxy inbound as the panel stores it.
///
/// `settings`, `stream_settings` and `sniffing` hold JSON documents encoded
/// as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inbound {
    /// Database id; assigned by the server, absent on new inbounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Uploaded traffic in bytes.
    #[serde(default)]
    pub up: i64,
    /// Downloaded traffic in bytes.
    #[serde(default)]
    pub down: i64,
    /// Traffic quota in bytes; 0 means unlimited.
    #[serde(default)]
    pub total: i64,
    /// Free-form label shown in the panel.
    #[serde(default)]
    pub remark: String,
    /// Whether the inbound is active.
    #[serde(default)]
    pub enable: bool,
    /// Expiry as epoch milliseconds; 0 means never.
    #[serde(default)]
    pub expiry_time: i64,
    /// Listen address; empty binds all interfaces.
    #[serde(default)]
    pub listen: String,
    /// Listen port.
    pub port: u16,
    /// Proxy protocol name, e.g. `vmess` or `trojan`.
    pub protocol: String,
    /// Protocol settings as a JSON document.
    #[serde(default)]
    pub settings: String,
    /// Transport settings as a JSON document.
    #[serde(default)]
    pub stream_settings: String,
    /// Routing tag; the server sets `inbound-{port}`.
    #[serde(default)]
    pub tag: String,
    /// Traffic sniffing settings as a JSON document.
    #[serde(default)]
    pub sniffing: String,
}

impl Inbound {
    /// Creates an enabled inbound with empty settings.
    pub fn new(protocol: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: protocol.into(),
            port,
            enable: true,
            ..Default::default()
        }
    }

    /// Tag the server assigns to an inbound on this port.
    pub fn default_tag(&self) -> String {
        format!("inbound-{}", self.port)
    }
}

/// Builds requests for the inbound routes under a path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundApi {
    prefix: String,
}

impl Default for InboundApi {
    fn default() -> Self {
        Self::new("/inbound")
    }
}

impl InboundApi {
    /// Creates a builder for routes under `prefix` (e.g. `/xui/inbound`).
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    fn route(&self, path: &str) -> String {
        format!("{}/{}", self.prefix, path)
    }

    /// Lists the caller's inbounds.
    pub fn list(&self) -> RequestConfig {
        RequestConfig::post(self.route("list"))
    }

    /// Adds one inbound.
    pub fn add(&self, inbound: &Inbound) -> Result<RequestConfig, RequestError> {
        Ok(RequestConfig::post(self.route("add")).with_data(serde_json::to_value(inbound)?))
    }

    /// Adds several inbounds in one call.
    ///
    /// The server refuses empty batches and batches over [`MAX_BATCH_SIZE`],
    /// so those are rejected here without building a request.
    pub fn add_batch(&self, inbounds: &[Inbound]) -> Result<RequestConfig, RequestError> {
        if inbounds.is_empty() {
            return Err(RequestError::Validation(
                "inbound batch must not be empty".to_string(),
            ));
        }
        if inbounds.len() > MAX_BATCH_SIZE {
            return Err(RequestError::Validation(format!(
                "inbound batch holds {} entries, at most {} allowed",
                inbounds.len(),
                MAX_BATCH_SIZE
            )));
        }

        Ok(RequestConfig::post(self.route("addBatch"))
            .with_header(CONTENT_TYPE, APPLICATION_JSON)
            .with_data(json!({ "inbounds": inbounds })))
    }

    /// Deletes an inbound.
    pub fn delete(&self, id: i64) -> RequestConfig {
        RequestConfig::post(self.route(&format!("del/{}", id)))
    }

    /// Replaces an inbound's fields. The id travels in the path.
    pub fn update(&self, id: i64, inbound: &Inbound) -> Result<RequestConfig, RequestError> {
        let body = Inbound {
            id: None,
            ..inbound.clone()
        };
        Ok(RequestConfig::post(self.route(&format!("update/{}", id)))
            .with_data(serde_json::to_value(&body)?))
    }
}
