//! Integration tests for the tool registry: schema validation, envelope
//! shapes, and conditional sub-object construction.

mod common;

use common::{request_body_json, test_client};
use ghl_mcp::mcp::{ToolError, ToolRegistry};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_registry(base_url: &str) -> ToolRegistry {
    ToolRegistry::with_all_tools(Arc::new(test_client(base_url)))
}

#[tokio::test]
async fn test_registry_registers_every_resource_group() {
    let mock_server = MockServer::start().await;
    let registry = test_registry(&mock_server.uri());

    let tools = registry.list_tools();
    for name in [
        "search_contacts",
        "create_contact",
        "add_contact_tags",
        "get_contact_tasks",
        "get_contact_notes",
        "add_contact_to_workflow",
        "search_conversations",
        "search_opportunities",
        "get_pipelines",
        "get_appointments",
        "create_block_slot",
        "get_forms",
        "get_businesses",
        "get_users",
        "get_campaigns",
        "get_workflows",
        "search_locations",
        "get_location_tags",
        "get_products",
        "get_payment_orders",
        "get_links",
        "get_surveys",
        "get_installed_locations",
    ] {
        assert!(tools.contains(&name.to_string()), "missing tool {name}");
    }
}

#[tokio::test]
async fn test_unknown_tool() {
    let mock_server = MockServer::start().await;
    let registry = test_registry(&mock_server.uri());

    let result = registry.execute_tool("does_not_exist", &json!({})).await;
    assert!(matches!(result, Err(ToolError::UnknownTool(_))));
}

#[tokio::test]
async fn test_missing_required_scoping_field_fails_validation() {
    let mock_server = MockServer::start().await;
    let registry = test_registry(&mock_server.uri());

    // no contact_id / location_id
    let result = registry.execute_tool("get_contact", &json!({})).await;
    assert!(matches!(result, Err(ToolError::ValidationError(_))));

    // validation happens before any HTTP call
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_describe_tool_exposes_schema() {
    let mock_server = MockServer::start().await;
    let registry = test_registry(&mock_server.uri());

    let description = registry.describe_tool("search_contacts").unwrap();
    assert_eq!(description.name, "search_contacts");
    let required = description.parameters["required"].as_array().unwrap();
    assert!(required.contains(&json!("location_id")));
}

#[tokio::test]
async fn test_search_contacts_envelope_and_skip_rule() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("locationId", "loc_1"))
        .and(query_param("limit", "50"))
        .and(query_param_is_missing("skip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contacts": [{"id": "c1", "firstName": "A"}],
            "total": 1
        })))
        .mount(&mock_server)
        .await;

    let registry = test_registry(&mock_server.uri());
    let envelope = registry
        .execute_tool(
            "search_contacts",
            &json!({"location_id": "loc_1", "limit": 50, "skip": 0}),
        )
        .await
        .unwrap();

    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["count"], 1);
    assert_eq!(envelope["total"], 1);
    assert_eq!(envelope["contacts"][0]["id"], "c1");
}

#[tokio::test]
async fn test_delete_contact_message_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/contacts/c1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/c2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let registry = test_registry(&mock_server.uri());

    let deleted = registry
        .execute_tool(
            "delete_contact",
            &json!({"contact_id": "c1", "location_id": "loc_1"}),
        )
        .await
        .unwrap();
    assert_eq!(deleted["success"], true);
    assert_eq!(deleted["message"], "Contact deleted successfully");

    // this endpoint's contract treats 204 as failure
    let not_deleted = registry
        .execute_tool(
            "delete_contact",
            &json!({"contact_id": "c2", "location_id": "loc_1"}),
        )
        .await
        .unwrap();
    assert_eq!(not_deleted["success"], false);
}

#[tokio::test]
async fn test_adapter_error_propagates_out_of_wrapper() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let registry = test_registry(&mock_server.uri());
    let result = registry
        .execute_tool(
            "get_contact",
            &json!({"contact_id": "missing", "location_id": "loc_1"}),
        )
        .await;

    // never a partially-populated success envelope
    assert!(matches!(result, Err(ToolError::Api(_))));
}

#[tokio::test]
async fn test_update_user_omits_permissions_when_no_flag_supplied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": "u1", "name": "Ada", "email": "ada@acme.test"}
        })))
        .mount(&mock_server)
        .await;

    let registry = test_registry(&mock_server.uri());
    registry
        .execute_tool("update_user", &json!({"user_id": "u1", "name": "Ada"}))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert!(body.get("permissions").is_none());
}

#[tokio::test]
async fn test_update_user_builds_permissions_from_single_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": "u1", "name": "Ada", "email": "ada@acme.test"}
        })))
        .mount(&mock_server)
        .await;

    let registry = test_registry(&mock_server.uri());
    registry
        .execute_tool(
            "update_user",
            &json!({"user_id": "u1", "contacts_enabled": false}),
        )
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body["permissions"]["contactsEnabled"], false);
    assert_eq!(body["permissions"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_business_omits_address_when_no_field_supplied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "business": {"id": "b1", "name": "Acme"}
        })))
        .mount(&mock_server)
        .await;

    let registry = test_registry(&mock_server.uri());
    registry
        .execute_tool(
            "create_business",
            &json!({"location_id": "loc_1", "name": "Acme"}),
        )
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert!(body.get("address").is_none());
}

#[tokio::test]
async fn test_create_business_builds_address_from_flat_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "business": {"id": "b1", "name": "Acme"}
        })))
        .mount(&mock_server)
        .await;

    let registry = test_registry(&mock_server.uri());
    registry
        .execute_tool(
            "create_business",
            &json!({
                "location_id": "loc_1",
                "name": "Acme",
                "city": "Atlanta",
                "postal_code": "30301"
            }),
        )
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body["address"]["city"], "Atlanta");
    assert_eq!(body["address"]["postalCode"], "30301");
    assert!(body["address"].get("state").is_none());
}

#[tokio::test]
async fn test_delete_link_tool_reports_204_as_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/links/l1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let registry = test_registry(&mock_server.uri());
    let envelope = registry
        .execute_tool("delete_link", &json!({"link_id": "l1", "location_id": "loc_1"}))
        .await
        .unwrap();

    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["message"], "Link deleted successfully");
}
