//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;

/// Receipt API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Largest accepted request body in bytes (default: 1MB)
    pub max_body_bytes: usize,

    /// Enable a permissive CORS layer
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 1024 * 1024,
            enable_cors: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("RECEIPT_API_HOST").unwrap_or(defaults.host),

            port: match lookup("RECEIPT_API_PORT") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?,
                None => defaults.port,
            },

            max_body_bytes: match lookup("RECEIPT_API_MAX_BODY_BYTES") {
                Some(value) => value.parse().map_err(|_| {
                    ConfigError::InvalidValue("RECEIPT_API_MAX_BODY_BYTES".to_string())
                })?,
                None => defaults.max_body_bytes,
            },

            enable_cors: match lookup("RECEIPT_API_ENABLE_CORS") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_ENABLE_CORS".to_string()))?,
                None => defaults.enable_cors,
            },
        };

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue(
                "RECEIPT_API_MAX_BODY_BYTES".to_string(),
            ));
        }

        Ok(config)
    }

    /// The address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_HOST".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::load_from(lookup(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert!(!config.enable_cors);
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::load_from(lookup(&[
            ("RECEIPT_API_HOST", "127.0.0.1"),
            ("RECEIPT_API_PORT", "9000"),
            ("RECEIPT_API_MAX_BODY_BYTES", "2048"),
            ("RECEIPT_API_ENABLE_CORS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(config.max_body_bytes, 2048);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_invalid_values() {
        assert!(ApiConfig::load_from(lookup(&[("RECEIPT_API_PORT", "eighty")])).is_err());
        assert!(ApiConfig::load_from(lookup(&[("RECEIPT_API_PORT", "70000")])).is_err());
        assert!(ApiConfig::load_from(lookup(&[("RECEIPT_API_MAX_BODY_BYTES", "0")])).is_err());
        assert!(ApiConfig::load_from(lookup(&[("RECEIPT_API_ENABLE_CORS", "yes")])).is_err());

        let config = ApiConfig::load_from(lookup(&[("RECEIPT_API_HOST", "not a host")])).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
