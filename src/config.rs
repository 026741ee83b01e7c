//! Configuration system for the GoHighLevel SDK and tool server.
//!
//! Configuration is loaded from a TOML file; secrets are referenced by
//! environment variable name and resolved at runtime, never stored in the
//! file itself.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub server: ServerSection,
    #[serde(default)]
    pub api: ApiSection,
    pub auth: AuthSection,
}

/// Server identity section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    /// Server identifier (must match [a-zA-Z0-9._-]+)
    pub name: String,
    /// Description of this deployment
    pub description: String,
}

/// Vendor API endpoint section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSection {
    /// Versioned API root
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value for the required `Version` header
    #[serde(default = "default_api_version")]
    pub version: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://services.leadconnectorhq.com".to_string()
}

fn default_api_version() -> String {
    "2021-07-28".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Authentication section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSection {
    /// Environment variable containing the agency/location access token
    pub access_token_env: String,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid server name: {0}")]
    InvalidServerName(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;

        validate_server_name(&config.server.name)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.auth.access_token_env.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "auth.access_token_env must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the access token from the configured environment variable
    pub fn get_access_token(&self) -> Result<String, ConfigError> {
        std::env::var(&self.auth.access_token_env)
            .map_err(|_| ConfigError::EnvVarNotFound(self.auth.access_token_env.clone()))
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[server]
name = "ghl-test"
description = "A test deployment"

[auth]
access_token_env = "GHL_ACCESS_TOKEN"
"#;
        toml::from_str(toml_content).expect("Test config should parse")
    }
}

/// Validate server name format
fn validate_server_name(name: &str) -> Result<(), ConfigError> {
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-');

    if name.is_empty() || !valid_chars {
        return Err(ConfigError::InvalidServerName(format!(
            "Server name '{name}' must match pattern [a-zA-Z0-9._-]+"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml_content = r#"
[server]
name = "ghl-prod"
description = "Production tool server"

[api]
base_url = "https://services.leadconnectorhq.com"
version = "2021-07-28"
timeout_secs = 15

[auth]
access_token_env = "GHL_ACCESS_TOKEN"
"#;

        let config: ServerConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.name, "ghl-prod");
        assert_eq!(config.api.version, "2021-07-28");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.auth.access_token_env, "GHL_ACCESS_TOKEN");
    }

    #[test]
    fn test_minimal_config_uses_api_defaults() {
        let config = ServerConfig::test_config();
        assert_eq!(config.api.base_url, "https://services.leadconnectorhq.com");
        assert_eq!(config.api.version, "2021-07-28");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_server_name() {
        let result = validate_server_name("invalid@name");
        assert!(result.is_err());

        let result = validate_server_name("valid-name_123.test");
        assert!(result.is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ServerConfig::test_config();
        config.api.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_env_var() {
        let mut config = ServerConfig::test_config();
        config.auth.access_token_env = "GHL_TEST_TOKEN_THAT_DOES_NOT_EXIST".to_string();
        assert!(matches!(
            config.get_access_token(),
            Err(ConfigError::EnvVarNotFound(_))
        ));
    }
}
