//! Integration tests for the extended location sub-resources.

mod common;

use common::{request_body_json, test_client};
use ghl_mcp::models::{LocationCustomValueCreate, LocationTagCreate, LocationTaskSearchFilters};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_location_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations/loc_1/tags"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tags": [{"id": "tag_1", "name": "vip", "locationId": "loc_1"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .locations_extended()
        .get_location_tags("loc_1", 100, 0)
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].name, "vip");
}

#[tokio::test]
async fn test_create_location_tag_decodes_bare_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/locations/loc_1/tags/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "tag_1", "name": "vip", "locationId": "loc_1"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let tag = client
        .locations_extended()
        .create_location_tag(
            "loc_1",
            &LocationTagCreate {
                name: "vip".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(tag.id.as_deref(), Some("tag_1"));
}

#[tokio::test]
async fn test_delete_location_tag_returns_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/locations/loc_1/tags/tag_1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let status = client
        .locations_extended()
        .delete_location_tag("loc_1", "tag_1")
        .await
        .unwrap();
    assert!(status.success);
    assert_eq!(status.message, "Tag deleted successfully");
}

#[tokio::test]
async fn test_custom_values_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations/loc_1/customValues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "customValues": [{"id": "cv1", "name": "Support Phone", "value": "555-1234"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/locations/loc_1/customValues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cv2", "name": "Support Email", "value": "help@acme.test"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());

    let page = client
        .locations_extended()
        .get_location_custom_values("loc_1", 100, 0)
        .await
        .unwrap();
    assert_eq!(page.items[0].value.as_deref(), Some("555-1234"));

    let created = client
        .locations_extended()
        .create_location_custom_value(
            "loc_1",
            &LocationCustomValueCreate {
                name: "Support Email".to_string(),
                value: "help@acme.test".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("cv2"));
}

#[tokio::test]
async fn test_search_location_tasks_body_rules() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/locations/loc_1/tasks/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tasks": [{"id": "t1", "title": "Call back", "completed": false}],
            "total": 1
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let filters = LocationTaskSearchFilters {
        completed: Some(false),
        ..Default::default()
    };
    let page = client
        .locations_extended()
        .search_location_tasks("loc_1", Some(&filters), 100, 0)
        .await
        .unwrap();
    assert_eq!(page.count, 1);

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    // limit always present, skip omitted at zero, filters merged in
    assert_eq!(body["limit"], 100);
    assert!(body.get("skip").is_none());
    assert_eq!(body["completed"], false);
    assert!(body.get("contactId").is_none());
}

#[tokio::test]
async fn test_search_location_tasks_includes_positive_skip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/locations/loc_1/tasks/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "tasks": [] })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client
        .locations_extended()
        .search_location_tasks("loc_1", None, 50, 100)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body["skip"], 100);
}

#[tokio::test]
async fn test_get_location_templates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations/loc_1/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "templates": [{"id": "tpl_1", "name": "Welcome Email", "type": "email"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .locations_extended()
        .get_location_templates("loc_1", 100, 0)
        .await
        .unwrap();
    assert_eq!(page.items[0].template_type.as_deref(), Some("email"));
}
