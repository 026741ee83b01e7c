//! Transport-level integration tests: auth attachment, per-request token
//! fetch with location scoping, and error propagation.

mod common;

use ghl_mcp::api::{ApiError, ContactSearchFilters, GoHighLevelClient, TransportConfig};
use ghl_mcp::testing::MockTokenProvider;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> TransportConfig {
    TransportConfig {
        base_url: server.uri(),
        version: "2021-07-28".to_string(),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_token_fetched_once_per_request_with_location_scope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "contacts": [] })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {"id": "u1", "name": "Ada", "email": "ada@acme.test"}
        })))
        .mount(&mock_server)
        .await;

    let provider = Arc::new(MockTokenProvider::new("scoped-token"));
    let client = GoHighLevelClient::new(config_for(&mock_server), provider.clone()).unwrap();

    client
        .contacts()
        .get_contacts("loc_1", 100, 0, &ContactSearchFilters::default())
        .await
        .unwrap();
    client.users().get_user("u1").await.unwrap();

    let scopes = provider.get_requested_scopes().await;
    assert_eq!(scopes, vec![Some("loc_1".to_string()), None]);
}

#[tokio::test]
async fn test_bearer_and_version_headers_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .and(header("Authorization", "Bearer scoped-token"))
        .and(header("Version", "2021-07-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {"id": "u1", "name": "Ada", "email": "ada@acme.test"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = Arc::new(MockTokenProvider::new("scoped-token"));
    let client = GoHighLevelClient::new(config_for(&mock_server), provider).unwrap();
    client.users().get_user("u1").await.unwrap();
}

#[tokio::test]
async fn test_auth_failure_surfaces_before_any_http_call() {
    let mock_server = MockServer::start().await;

    let provider = Arc::new(MockTokenProvider::with_failure());
    let client = GoHighLevelClient::new(config_for(&mock_server), provider).unwrap();

    let result = client.users().get_user("u1").await;
    assert!(matches!(result, Err(ApiError::Auth(_))));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_server_error_propagates_with_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let provider = Arc::new(MockTokenProvider::new("tok"));
    let client = GoHighLevelClient::new(config_for(&mock_server), provider).unwrap();

    match client.users().get_user("u1").await.unwrap_err() {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("internal error"));
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}
