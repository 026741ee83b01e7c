//! Integration tests for contact note sub-resources.

mod common;

use common::{request_body_json, test_client};
use ghl_mcp::models::{NoteCreate, NoteUpdate};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_contact_notes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/c1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "notes": [{"id": "n1", "body": "Left a voicemail"}],
            "total": 5
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .contacts()
        .get_contact_notes("c1", "loc_1")
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.total, 5);
    assert_eq!(page.items[0].body, "Left a voicemail");
}

#[tokio::test]
async fn test_create_contact_note() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contacts/c1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "note": {"id": "n1", "body": "Follow up Friday"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let note = client
        .contacts()
        .create_contact_note(
            "c1",
            &NoteCreate {
                body: "Follow up Friday".to_string(),
            },
            "loc_1",
        )
        .await
        .unwrap();
    assert_eq!(note.id.as_deref(), Some("n1"));

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body, serde_json::json!({ "body": "Follow up Friday" }));
}

#[tokio::test]
async fn test_update_contact_note_empty_update_sends_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/contacts/c1/notes/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "note": {"id": "n1", "body": "unchanged"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client
        .contacts()
        .update_contact_note("c1", "n1", &NoteUpdate::default(), "loc_1")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert!(body.as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_contact_note_status_semantics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/contacts/c1/notes/n1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    assert!(client
        .contacts()
        .delete_contact_note("c1", "n1", "loc_1")
        .await
        .unwrap());
}
