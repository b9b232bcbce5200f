//! Configuration management for the request pipeline.
//!
//! Settings are read from the `"request-pipeline"` key of a JSON settings
//! document, merged with defaults, and kept in a process-wide slot.

pub mod schema;

pub use schema::{ClientConfig, ConfigError};

use once_cell::sync::Lazy;
use serde_json::Value;
use std::path::Path;
use std::sync::RwLock;

/// Key under which settings documents carry this crate's section.
pub const SETTINGS_KEY: &str = "request-pipeline";

/// Global configuration instance.
///
/// This is lazily initialized on first access and can be updated when settings change.
static CONFIG: Lazy<RwLock<ClientConfig>> = Lazy::new(|| RwLock::new(ClientConfig::default()));

/// Loads configuration from a settings document.
///
/// A section that fails to deserialize is logged and replaced by defaults; a
/// section that deserializes but fails validation is an error and leaves the
/// global configuration unchanged.
///
/// # Example
///
/// ```no_run
/// use request_pipeline::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "request-pipeline": {
///         "baseUrl": "https://panel.example.com/",
///         "arrayFormat": "repeat"
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.base_url.as_deref(), Some("https://panel.example.com/"));
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::default();

    if let Some(section) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<ClientConfig>(section.clone()) {
            Ok(user_config) => config = user_config,
            Err(e) => {
                log::warn!(
                    "Failed to parse {} settings: {}. Using defaults.",
                    SETTINGS_KEY,
                    e
                );
            }
        }
    }

    config.validate()?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    log::debug!("Loaded request pipeline configuration: {:?}", config);
    Ok(config)
}

/// Loads configuration from a JSON settings file.
///
/// The file must be valid JSON; its `"request-pipeline"` section is handled
/// as in [`load_config`].
pub fn load_config_file(path: impl AsRef<Path>) -> Result<ClientConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let settings: Value = serde_json::from_str(&content)?;
    log::debug!("Read settings from {}", path.display());
    load_config(Some(settings))
}

/// Gets a copy of the current global configuration.
///
/// If configuration has not been loaded yet, returns the default configuration.
pub fn get_config() -> ClientConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| ClientConfig::default())
}

/// Updates the global configuration in place.
///
/// If the updated configuration fails validation it is reverted to defaults.
pub fn update_config<F>(updater: F)
where
    F: FnOnce(&mut ClientConfig),
{
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);

        if let Err(e) = config.validate() {
            log::warn!("Configuration validation failed after update: {}", e);
            *config = ClientConfig::default();
        }
    }
}

/// Resets the global configuration to defaults.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = ClientConfig::default();
    }
}
