//! Integration tests for the locations client.

mod common;

use common::{request_body_json, test_client};
use ghl_mcp::models::{LocationCreate, LocationUpdate};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_locations_uses_search_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations/search"))
        .and(query_param("limit", "100"))
        .and(query_param("companyId", "comp_1"))
        .and(query_param_is_missing("skip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "locations": [{"id": "loc_1", "name": "Main Street"}],
            "total": 3
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .locations()
        .search_locations(Some("comp_1"), 100, 0, None)
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn test_get_location_unwraps_entity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations/loc_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": {"id": "loc_1", "name": "Main Street", "timezone": "America/New_York"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let location = client.locations().get_location("loc_1").await.unwrap();
    assert_eq!(location.name, "Main Street");
    assert_eq!(location.timezone.as_deref(), Some("America/New_York"));
}

#[tokio::test]
async fn test_create_location_uses_flat_field_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": {"id": "loc_1", "name": "Main Street"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let payload = LocationCreate {
        company_id: "comp_1".to_string(),
        name: "Main Street".to_string(),
        address: None,
        city: Some("Atlanta".to_string()),
        state: None,
        country: None,
        postal_code: Some("30301".to_string()),
        logo_url: None,
        website: None,
        timezone: None,
        email: None,
        phone: None,
        business_type: None,
        allow_duplicate_contact: None,
        allow_duplicate_opportunity: None,
        allow_facebook_name_merge: None,
        disable_contact_timezone: None,
        stripe_product_id: None,
    };
    client.locations().create_location(&payload).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    // companyId is the one camelCase exception on this endpoint
    assert_eq!(body["companyId"], "comp_1");
    assert_eq!(body["postal_code"], "30301");
    assert_eq!(body["city"], "Atlanta");
    assert_eq!(body.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_update_location_partial_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/locations/loc_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": {"id": "loc_1", "name": "Renamed"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let updates = LocationUpdate {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    client
        .locations()
        .update_location("loc_1", &updates)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_location_succeeds_only_on_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/locations/loc_1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/locations/loc_2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    assert!(client.locations().delete_location("loc_1").await.unwrap());
    assert!(!client.locations().delete_location("loc_2").await.unwrap());
}
