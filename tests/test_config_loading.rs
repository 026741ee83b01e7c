//! Configuration loading tests.

use ghl_mcp::config::{ConfigError, ServerConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config_from_file() {
    let file = write_config(
        r#"
[server]
name = "ghl-prod"
description = "Production tool server"

[api]
base_url = "https://services.leadconnectorhq.com"
version = "2021-07-28"
timeout_secs = 20

[auth]
access_token_env = "GHL_ACCESS_TOKEN"
"#,
    );

    let config = ServerConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.server.name, "ghl-prod");
    assert_eq!(config.api.timeout_secs, 20);
}

#[test]
fn test_load_minimal_config_applies_api_defaults() {
    let file = write_config(
        r#"
[server]
name = "ghl-dev"
description = "Dev"

[auth]
access_token_env = "GHL_ACCESS_TOKEN"
"#,
    );

    let config = ServerConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.api.base_url, "https://services.leadconnectorhq.com");
    assert_eq!(config.api.version, "2021-07-28");
    assert_eq!(config.api.timeout_secs, 30);
}

#[test]
fn test_invalid_server_name_rejected() {
    let file = write_config(
        r#"
[server]
name = "bad name!"
description = "Dev"

[auth]
access_token_env = "GHL_ACCESS_TOKEN"
"#,
    );

    let result = ServerConfig::load_from_file(file.path());
    assert!(matches!(result, Err(ConfigError::InvalidServerName(_))));
}

#[test]
fn test_empty_token_env_rejected() {
    let file = write_config(
        r#"
[server]
name = "ghl-dev"
description = "Dev"

[auth]
access_token_env = ""
"#,
    );

    let result = ServerConfig::load_from_file(file.path());
    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_config("this is not toml [");
    let result = ServerConfig::load_from_file(file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ServerConfig::load_from_file(std::path::Path::new("/nonexistent/ghl-mcp.toml"));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}
