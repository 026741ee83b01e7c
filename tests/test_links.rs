//! Integration tests for the links client, including its 204-tolerant
//! delete contract.

mod common;

use common::test_client;
use ghl_mcp::api::ApiError;
use ghl_mcp::models::{LinkCreate, LinkUpdate};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn link_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "locationId": "loc_1",
        "name": "Promo",
        "url": "https://example.test/promo"
    })
}

#[tokio::test]
async fn test_get_links_uses_trailing_slash_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("locationId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "links": [link_body("l1")],
            "total": 1
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client.links().get_links("loc_1", 100, 0).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].url, "https://example.test/promo");
}

#[tokio::test]
async fn test_create_and_update_link() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/links/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "link": link_body("l1") })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/links/l1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "link": link_body("l1") })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let created = client
        .links()
        .create_link(
            &LinkCreate {
                name: "Promo".to_string(),
                url: "https://example.test/promo".to_string(),
                description: None,
                is_active: None,
            },
            "loc_1",
        )
        .await
        .unwrap();
    assert_eq!(created.id, "l1");

    let updated = client
        .links()
        .update_link(
            "l1",
            &LinkUpdate {
                name: Some("Promo v2".to_string()),
                ..Default::default()
            },
            "loc_1",
        )
        .await
        .unwrap();
    assert_eq!(updated.id, "l1");
}

#[tokio::test]
async fn test_delete_link_treats_204_as_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/links/l1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let status = client.links().delete_link("l1", "loc_1").await.unwrap();
    assert!(status.success);
    assert_eq!(status.message, "Link deleted successfully");
}

#[tokio::test]
async fn test_delete_link_carries_server_message_on_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/links/l1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "Link l1 removed" })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let status = client.links().delete_link("l1", "loc_1").await.unwrap();
    assert!(status.success);
    assert_eq!(status.message, "Link l1 removed");
}

#[tokio::test]
async fn test_delete_link_propagates_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/links/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Link not found"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.links().delete_link("missing", "loc_1").await;
    assert!(matches!(
        result,
        Err(ApiError::Status { status: 404, .. })
    ));
}
