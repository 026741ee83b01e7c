//! Integration tests for the opportunities client.

mod common;

use common::{request_body_json, test_client};
use ghl_mcp::models::{OpportunityCreate, OpportunitySearchFilters};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_opportunities_with_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/opportunities/search"))
        .and(query_param("locationId", "loc_1"))
        .and(query_param("pipelineId", "pipe_1"))
        .and(query_param("status", "open"))
        .and(query_param_is_missing("assignedTo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "opportunities": [
                {"id": "op_1", "name": "Big Deal", "monetaryValue": 5000.0}
            ],
            "meta": {"total": 14}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let filters = OpportunitySearchFilters {
        pipeline_id: Some("pipe_1".to_string()),
        status: Some("open".to_string()),
        ..Default::default()
    };
    let page = client
        .opportunities()
        .get_opportunities("loc_1", 100, 0, Some(&filters))
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.total, 14);
    assert_eq!(page.items[0].monetary_value, Some(5000.0));
}

#[tokio::test]
async fn test_create_opportunity_drops_unset_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/opportunities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "opportunity": {"id": "op_1", "name": "Big Deal"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let payload = OpportunityCreate {
        location_id: "loc_1".to_string(),
        pipeline_id: "pipe_1".to_string(),
        name: "Big Deal".to_string(),
        pipeline_stage_id: None,
        status: None,
        contact_id: None,
        monetary_value: None,
        assigned_to: None,
    };
    client
        .opportunities()
        .create_opportunity(&payload)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body.as_object().unwrap().len(), 3);
    assert_eq!(body["pipelineId"], "pipe_1");
}

#[tokio::test]
async fn test_update_opportunity_status_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/opportunities/op_1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "opportunity": {"id": "op_1", "name": "Big Deal", "status": "won"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let opportunity = client
        .opportunities()
        .update_opportunity_status("op_1", "won", "loc_1")
        .await
        .unwrap();
    assert_eq!(opportunity.status.as_deref(), Some("won"));

    let requests = mock_server.received_requests().await.unwrap();
    let body = request_body_json(&requests[0]);
    assert_eq!(body, serde_json::json!({ "status": "won" }));
}

#[tokio::test]
async fn test_delete_opportunity_succeeds_only_on_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/opportunities/op_1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    assert!(client
        .opportunities()
        .delete_opportunity("op_1", "loc_1")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_get_pipelines() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/opportunities/pipelines"))
        .and(query_param("locationId", "loc_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pipelines": [
                {
                    "id": "pipe_1",
                    "name": "Sales",
                    "stages": [{"id": "st_1", "name": "New", "position": 0}]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let pipelines = client.opportunities().get_pipelines("loc_1").await.unwrap();

    assert_eq!(pipelines.len(), 1);
    assert_eq!(pipelines[0].stages.as_ref().unwrap()[0].name, "New");
}
