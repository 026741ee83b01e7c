//! Integration tests for the businesses client.

mod common;

use common::{request_body_json, test_client};
use ghl_mcp::api::ApiError;
use ghl_mcp::models::{BusinessCreate, BusinessUpdate};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_businesses_list_envelope() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "businesses": [
            {"id": "b1", "name": "Acme", "locationId": "loc_1"},
            {"id": "b2", "name": "Globex", "locationId": "loc_1"}
        ],
        "total": 12
    });

    Mock::given(method("GET"))
        .and(path("/businesses"))
        .and(query_param("locationId", "loc_1"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("skip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .businesses()
        .get_businesses("loc_1", 100, 0)
        .await
        .unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.total, 12);
    assert_eq!(page.items[0].name, "Acme");
}

#[tokio::test]
async fn test_get_business_decodes_bare_body() {
    let mock_server = MockServer::start().await;

    // The live API answers this endpoint without a "business" wrapper
    let response_body = serde_json::json!({
        "id": "b1",
        "name": "Acme",
        "locationId": "loc_1",
        "email": "info@acme.test"
    });

    Mock::given(method("GET"))
        .and(path("/businesses/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let business = client.businesses().get_business("b1", "loc_1").await.unwrap();

    assert_eq!(business.id.as_deref(), Some("b1"));
    assert_eq!(business.name, "Acme");
    assert_eq!(business.email.as_deref(), Some("info@acme.test"));
}

#[tokio::test]
async fn test_get_business_unwraps_wrapped_body() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "business": {"id": "b1", "name": "Acme"}
    });

    Mock::given(method("GET"))
        .and(path("/businesses/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let business = client.businesses().get_business("b1", "loc_1").await.unwrap();
    assert_eq!(business.name, "Acme");
}

#[tokio::test]
async fn test_create_business_drops_unset_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "business": {"id": "b1", "name": "Acme"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let payload = BusinessCreate {
        location_id: "loc_1".to_string(),
        name: "Acme".to_string(),
        description: None,
        website: None,
        phone: None,
        email: None,
        address: None,
        logo_url: None,
        industry: None,
        employee_count: None,
        annual_revenue: None,
        custom_fields: None,
        tags: None,
    };
    client.businesses().create_business(&payload).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body.as_object().unwrap().len(), 2);
    assert_eq!(body["locationId"], "loc_1");
    assert_eq!(body["name"], "Acme");
}

#[tokio::test]
async fn test_update_business_sends_only_provided_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/businesses/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "business": {"id": "b1", "name": "Acme Corp"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let updates = BusinessUpdate {
        name: Some("Acme Corp".to_string()),
        ..Default::default()
    };
    client
        .businesses()
        .update_business("b1", &updates, "loc_1")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert_eq!(body["name"], "Acme Corp");
}

#[tokio::test]
async fn test_delete_business_status_semantics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/businesses/b1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/businesses/b2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/businesses/b3"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Business not found"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    assert!(client.businesses().delete_business("b1", "loc_1").await.unwrap());
    assert!(!client.businesses().delete_business("b2", "loc_1").await.unwrap());

    let result = client.businesses().delete_business("b3", "loc_1").await;
    assert!(matches!(
        result,
        Err(ApiError::Status { status: 404, .. })
    ));
}
