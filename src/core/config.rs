//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (with `.env` support) or defaults. The ATTOM API
//! key is the only required setting; everything else has a usable default.

use super::transport::TransportConfig;
use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default production root of the ATTOM property API.
pub const DEFAULT_ATTOM_BASE_URL: &str = "https://api.gateway.attomdata.com/propertyapi/v1.0.0";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream ATTOM API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Credentials and endpoint for the upstream ATTOM Data API.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// ATTOM API key. Required before any request is issued.
    pub attom_api_key: String,

    /// Base URL of the ATTOM property API.
    pub attom_base_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "attom_api_key",
                if self.attom_api_key.is_empty() {
                    &""
                } else {
                    &"[REDACTED]"
                },
            )
            .field("attom_base_url", &self.attom_base_url)
            .finish()
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            // The key has no default and must be supplied externally.
            attom_api_key: String::new(),
            attom_base_url: DEFAULT_ATTOM_BASE_URL.to_string(),
        }
    }
}

impl CredentialsConfig {
    /// Validate that required configuration is present.
    ///
    /// Invoked at client construction, before the first outbound request.
    pub fn validate(&self) -> Result<()> {
        if self.attom_api_key.is_empty() {
            return Err(Error::config(
                "ATTOM_API_KEY is required. Set it in your .env file or environment variables.",
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "property-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `ATTOM_API_KEY` and `BASE_ATTOM_URL` for the upstream API, and
    /// `MCP_`-prefixed variables for server and transport settings.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load ATTOM API credentials
        if let Ok(api_key) = std::env::var("ATTOM_API_KEY") {
            config.credentials.attom_api_key = api_key;
            info!("ATTOM API key loaded from environment");
        } else {
            warn!("ATTOM_API_KEY not set - server construction will fail until it is provided");
        }

        if let Ok(base_url) = std::env::var("BASE_ATTOM_URL") {
            config.credentials.attom_base_url = base_url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ATTOM_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.attom_api_key, "test_key_12345");
        unsafe {
            std::env::remove_var("ATTOM_API_KEY");
        }
    }

    #[test]
    fn test_base_url_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("BASE_ATTOM_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.attom_base_url, DEFAULT_ATTOM_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("BASE_ATTOM_URL", "http://localhost:8081/propertyapi");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.attom_base_url,
            "http://localhost:8081/propertyapi"
        );
        unsafe {
            std::env::remove_var("BASE_ATTOM_URL");
        }
    }

    #[test]
    fn test_validate_rejects_missing_key() {
        let credentials = CredentialsConfig::default();
        let result = credentials.validate();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_accepts_present_key() {
        let credentials = CredentialsConfig {
            attom_api_key: "some-key".to_string(),
            ..Default::default()
        };
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let credentials = CredentialsConfig {
            attom_api_key: "super_secret_key".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", credentials);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
