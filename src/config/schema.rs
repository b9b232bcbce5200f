//! Configuration schema for the request pipeline.
//!
//! This module defines the settings structure and its validation rules.

use crate::encoding::query::{ArrayFormat, QueryOptions};
use crate::headers::{
    HeaderDefaults, CONTENT_TYPE, FORM_URLENCODED_UTF8, XML_HTTP_REQUEST, X_REQUESTED_WITH,
};
use crate::models::request::HttpMethod;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document is not valid JSON.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A setting has an unacceptable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings of a shared HTTP client.
///
/// Missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL joined with relative request URLs.
    ///
    /// Must use http or https when set. Defaults to none, in which case every
    /// request URL must be absolute.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Headers added to every request unless the request sets them.
    ///
    /// Defaults to `X-Requested-With: XMLHttpRequest`.
    #[serde(default = "default_common_headers")]
    pub common_headers: HashMap<String, String>,

    /// Headers added per method, keyed by method name (any case).
    ///
    /// Defaults to the form-urlencoded Content-Type for POST.
    #[serde(default = "default_method_headers")]
    pub method_headers: HashMap<String, HashMap<String, String>>,

    /// Layout of array values in form bodies. Defaults to `repeat`.
    #[serde(default)]
    pub array_format: ArrayFormat,

    /// Whether form keys and values are percent-encoded. Defaults to true.
    #[serde(default = "default_encode_values")]
    pub encode_values: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            common_headers: default_common_headers(),
            method_headers: default_method_headers(),
            array_format: ArrayFormat::default(),
            encode_values: default_encode_values(),
        }
    }
}

impl ClientConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or a `ConfigError::Invalid` naming the problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base_url {
            let parsed = url::Url::parse(base_url)
                .map_err(|e| ConfigError::Invalid(format!("baseUrl {}: {}", base_url, e)))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ConfigError::Invalid(format!(
                    "baseUrl must use http or https, got: {}",
                    parsed.scheme()
                )));
            }
        }

        for method in self.method_headers.keys() {
            if HttpMethod::parse(method).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "methodHeaders has unknown method: {}",
                    method
                )));
            }
        }

        Ok(())
    }

    /// Builds the header defaults described by this configuration.
    pub fn header_defaults(&self) -> Result<HeaderDefaults, ConfigError> {
        let mut defaults = HeaderDefaults::new();

        for (name, value) in &self.common_headers {
            defaults.set_common(name.clone(), value.clone());
        }

        for (method_name, headers) in &self.method_headers {
            let method = HttpMethod::parse(method_name).ok_or_else(|| {
                ConfigError::Invalid(format!("methodHeaders has unknown method: {}", method_name))
            })?;
            for (name, value) in headers {
                defaults.set_for(method, name.clone(), value.clone());
            }
        }

        Ok(defaults)
    }

    /// Query-string options for form bodies.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            array_format: self.array_format,
            encode: self.encode_values,
        }
    }
}

// Default value functions for serde

fn default_common_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert(X_REQUESTED_WITH.to_string(), XML_HTTP_REQUEST.to_string());
    headers
}

fn default_method_headers() -> HashMap<String, HashMap<String, String>> {
    let mut post = HashMap::new();
    post.insert(CONTENT_TYPE.to_string(), FORM_URLENCODED_UTF8.to_string());

    let mut headers = HashMap::new();
    headers.insert("post".to_string(), post);
    headers
}

fn default_encode_values() -> bool {
    true
}
