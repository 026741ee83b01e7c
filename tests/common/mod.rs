//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ghl_mcp::api::{GoHighLevelClient, TransportConfig};
use ghl_mcp::auth::StaticTokenProvider;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_VERSION: &str = "2021-07-28";

/// Build a client pointed at a wiremock server.
pub fn test_client(base_url: &str) -> GoHighLevelClient {
    let config = TransportConfig {
        base_url: base_url.to_string(),
        version: TEST_VERSION.to_string(),
        timeout: Duration::from_secs(5),
    };
    let auth = Arc::new(StaticTokenProvider::new(TEST_TOKEN));
    GoHighLevelClient::new(config, auth).expect("client should build")
}

/// Decode the JSON body of a recorded wiremock request.
pub fn request_body_json(request: &wiremock::Request) -> serde_json::Value {
    serde_json::from_slice(&request.body).expect("request body should be JSON")
}
