//! Integration tests for the forms client.

mod common;

use common::test_client;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_forms() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forms/"))
        .and(query_param("locationId", "loc_1"))
        .and(query_param_is_missing("skip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "forms": [{"id": "f1", "name": "Contact Us"}],
            "total": 1
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client.forms().get_forms("loc_1", 100, 0).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].name, "Contact Us");
}

#[tokio::test]
async fn test_get_form_submissions_with_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forms/submissions"))
        .and(query_param("formId", "f1"))
        .and(query_param("startAt", "2025-01-01"))
        .and(query_param_is_missing("contactId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "submissions": [
                {"id": "s1", "formId": "f1", "email": "ada@acme.test"}
            ],
            "meta": {"total": 9}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .forms()
        .get_all_submissions("loc_1", Some("f1"), None, Some("2025-01-01"), None, 100, 0)
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.total, 9);
    assert_eq!(page.items[0].email.as_deref(), Some("ada@acme.test"));
}
