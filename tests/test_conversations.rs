//! Integration tests for the conversations client.

mod common;

use common::{request_body_json, test_client};
use ghl_mcp::api::ConversationSearchFilters;
use ghl_mcp::models::{ConversationCreate, MessageCreate};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_conversations_with_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversations/search"))
        .and(query_param("locationId", "loc_1"))
        .and(query_param("contactId", "c1"))
        .and(query_param("unreadOnly", "true"))
        .and(query_param_is_missing("starred"))
        .and(query_param_is_missing("skip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "conversations": [
                {"id": "conv_1", "contactId": "c1", "unreadCount": 2}
            ],
            "total": 1
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let filters = ConversationSearchFilters {
        contact_id: Some("c1".to_string()),
        starred: None,
        unread_only: Some(true),
    };
    let page = client
        .conversations()
        .get_conversations("loc_1", 100, 0, &filters)
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].unread_count, Some(2));
}

#[tokio::test]
async fn test_create_conversation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "conversation": {"id": "conv_1", "locationId": "loc_1", "contactId": "c1"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let conversation = client
        .conversations()
        .create_conversation(&ConversationCreate {
            location_id: "loc_1".to_string(),
            contact_id: "c1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(conversation.id.as_deref(), Some("conv_1"));
}

#[tokio::test]
async fn test_get_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversations/conv_1/messages"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "messages": [
                {"id": "m1", "type": "SMS", "body": "Hello", "direction": "inbound"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .conversations()
        .get_messages("conv_1", "loc_1", 100, 0)
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].direction.as_deref(), Some("inbound"));
}

#[tokio::test]
async fn test_send_message_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/conversations/conv_1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {"id": "m1", "type": "SMS", "body": "On my way"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let message = client
        .conversations()
        .send_message(
            "conv_1",
            &MessageCreate {
                message_type: "SMS".to_string(),
                message: "On my way".to_string(),
                subject: None,
                html: None,
                attachments: None,
            },
            "loc_1",
        )
        .await
        .unwrap();
    assert_eq!(message.id.as_deref(), Some("m1"));

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body["type"], "SMS");
    assert_eq!(body["message"], "On my way");
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_message_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/conversations/messages/m1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {"id": "m1", "status": "read"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let message = client
        .conversations()
        .update_message_status("m1", "read", "loc_1")
        .await
        .unwrap();
    assert_eq!(message.status.as_deref(), Some("read"));

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body, serde_json::json!({ "status": "read" }));
}
