//! Integration tests for the users client.

mod common;

use common::{request_body_json, test_client};
use ghl_mcp::models::{UserCreate, UserPermissions, UserUpdate};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_users_without_location_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("locationId"))
        .and(query_param_is_missing("skip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [{"id": "u1", "name": "Ada Lovelace", "email": "ada@acme.test"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client.users().get_users(None, 100, 0).await.unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Ada Lovelace");
}

#[tokio::test]
async fn test_get_users_with_location_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("locationId", "loc_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "users": [] })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client.users().get_users(Some("loc_1"), 100, 0).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_create_user_serializes_permissions_camel_case() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {"id": "u1", "name": "Ada", "email": "ada@acme.test"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let payload = UserCreate {
        company_id: "comp_1".to_string(),
        name: "Ada".to_string(),
        first_name: None,
        last_name: None,
        email: "ada@acme.test".to_string(),
        phone: None,
        extension: None,
        permissions: Some(UserPermissions {
            contacts_enabled: Some(true),
            ..Default::default()
        }),
        roles: None,
        location_ids: None,
        profile_photo: None,
        user_type: None,
    };
    client.users().create_user(&payload).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body["companyId"], "comp_1");
    assert_eq!(body["permissions"]["contactsEnabled"], true);
    // unset permission flags never serialize
    assert_eq!(body["permissions"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_user_omits_unset_permissions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {"id": "u1", "name": "Ada", "email": "ada@acme.test"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let updates = UserUpdate {
        name: Some("Ada".to_string()),
        ..Default::default()
    };
    client.users().update_user("u1", &updates).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert!(body.get("permissions").is_none());
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_user_succeeds_only_on_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/u2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    assert!(client.users().delete_user("u1").await.unwrap());
    assert!(!client.users().delete_user("u2").await.unwrap());
}
