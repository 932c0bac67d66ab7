//! Configuration access port.
//!
//! Provides a uniform, key-based interface for reading a deployment record.
//! Used by `brewenv get` and `brewenv keys`. Records are read-only once
//! built, so the port has no setter.

use brewenv_domain::{DeploymentConfiguration, known_keys, lookup_key};

/// A dynamically-typed configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Boolean(bool),
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Errors from config access operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAccessError {
    /// The key is not recognized.
    UnknownKey { key: String },
}

impl std::fmt::Display for ConfigAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigAccessError::UnknownKey { key } => write!(f, "unknown config key: {}", key),
        }
    }
}

impl std::error::Error for ConfigAccessError {}

/// Port for key-based config access.
pub trait ConfigAccessorPort: Send + Sync {
    /// Get the current value of a config key.
    ///
    /// Accepts the dotted key (`auth0.client_id`) or the front-end key
    /// (`auth0.clientId`).
    fn config_get(&self, key: &str) -> Result<ConfigValue, ConfigAccessError>;

    /// List all known config key names.
    fn config_keys(&self) -> Vec<String>;
}

impl ConfigAccessorPort for DeploymentConfiguration {
    fn config_get(&self, key: &str) -> Result<ConfigValue, ConfigAccessError> {
        let info = lookup_key(key).ok_or_else(|| ConfigAccessError::UnknownKey {
            key: key.to_string(),
        })?;
        let auth0 = self.auth0();
        let value = match info.key {
            "production" => return Ok(ConfigValue::Boolean(self.production())),
            "api_server_url" => self.api_server_url(),
            "auth0.url" => auth0.url(),
            "auth0.audience" => auth0.audience(),
            "auth0.client_id" => auth0.client_id(),
            "auth0.callback_url" => auth0.callback_url(),
            _ => {
                return Err(ConfigAccessError::UnknownKey {
                    key: key.to_string(),
                });
            }
        };
        Ok(ConfigValue::String(value.to_string()))
    }

    fn config_keys(&self) -> Vec<String> {
        known_keys().iter().map(|k| k.key.to_string()).collect()
    }
}
