//! Opportunity and pipeline tools.

use super::default_limit;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, to_json, ToolRegistry};
use crate::models::{OpportunityCreate, OpportunitySearchFilters, OpportunityUpdate};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchOpportunitiesParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
    pub pipeline_id: Option<String>,
    pub pipeline_stage_id: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub contact_id: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetOpportunityParams {
    pub opportunity_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateOpportunityParams {
    pub location_id: String,
    pub pipeline_id: String,
    pub name: String,
    pub pipeline_stage_id: Option<String>,
    pub status: Option<String>,
    pub contact_id: Option<String>,
    pub monetary_value: Option<f64>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateOpportunityParams {
    pub opportunity_id: String,
    pub location_id: String,
    pub name: Option<String>,
    pub pipeline_id: Option<String>,
    pub pipeline_stage_id: Option<String>,
    pub status: Option<String>,
    pub monetary_value: Option<f64>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteOpportunityParams {
    pub opportunity_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateOpportunityStatusParams {
    pub opportunity_id: String,
    pub location_id: String,
    pub status: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetPipelinesParams {
    pub location_id: String,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<SearchOpportunitiesParams, _, _>(
        "search_opportunities",
        "Search opportunities in a location",
        |client, params| async move {
            let filters = OpportunitySearchFilters {
                pipeline_id: params.pipeline_id,
                pipeline_stage_id: params.pipeline_stage_id,
                status: params.status,
                assigned_to: params.assigned_to,
                contact_id: params.contact_id,
                query: params.query,
            };
            let page = client
                .opportunities()
                .get_opportunities(&params.location_id, params.limit, params.skip, Some(&filters))
                .await?;
            page_envelope("opportunities", &page)
        },
    );

    registry.register::<GetOpportunityParams, _, _>(
        "get_opportunity",
        "Get a single opportunity by ID",
        |client, params| async move {
            let opportunity = client
                .opportunities()
                .get_opportunity(&params.opportunity_id, &params.location_id)
                .await?;
            entity_envelope("opportunity", &opportunity)
        },
    );

    registry.register::<CreateOpportunityParams, _, _>(
        "create_opportunity",
        "Create a new opportunity",
        |client, params| async move {
            let opportunity_data = OpportunityCreate {
                location_id: params.location_id,
                pipeline_id: params.pipeline_id,
                name: params.name,
                pipeline_stage_id: params.pipeline_stage_id,
                status: params.status,
                contact_id: params.contact_id,
                monetary_value: params.monetary_value,
                assigned_to: params.assigned_to,
            };
            let opportunity = client
                .opportunities()
                .create_opportunity(&opportunity_data)
                .await?;
            entity_envelope("opportunity", &opportunity)
        },
    );

    registry.register::<UpdateOpportunityParams, _, _>(
        "update_opportunity",
        "Update an existing opportunity",
        |client, params| async move {
            let update_data = OpportunityUpdate {
                name: params.name,
                pipeline_id: params.pipeline_id,
                pipeline_stage_id: params.pipeline_stage_id,
                status: params.status,
                monetary_value: params.monetary_value,
                assigned_to: params.assigned_to,
            };
            let opportunity = client
                .opportunities()
                .update_opportunity(&params.opportunity_id, &update_data, &params.location_id)
                .await?;
            entity_envelope("opportunity", &opportunity)
        },
    );

    registry.register::<DeleteOpportunityParams, _, _>(
        "delete_opportunity",
        "Delete an opportunity",
        |client, params| async move {
            let success = client
                .opportunities()
                .delete_opportunity(&params.opportunity_id, &params.location_id)
                .await?;
            let message = if success {
                "Opportunity deleted successfully"
            } else {
                "Failed to delete opportunity"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<UpdateOpportunityStatusParams, _, _>(
        "update_opportunity_status",
        "Update the status of an opportunity",
        |client, params| async move {
            let opportunity = client
                .opportunities()
                .update_opportunity_status(&params.opportunity_id, &params.status, &params.location_id)
                .await?;
            entity_envelope("opportunity", &opportunity)
        },
    );

    registry.register::<GetPipelinesParams, _, _>(
        "get_pipelines",
        "Get all pipelines for a location",
        |client, params| async move {
            let pipelines = client.opportunities().get_pipelines(&params.location_id).await?;
            Ok(json!({
                "success": true,
                "pipelines": to_json(&pipelines)?,
                "count": pipelines.len(),
            }))
        },
    );
}
