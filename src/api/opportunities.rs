//! Opportunity and pipeline endpoints.

use super::resource::{decode_entity, decode_page, read_json, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{
    Opportunity, OpportunityCreate, OpportunitySearchFilters, OpportunityUpdate, Page, Pipeline,
};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

const OPPORTUNITIES: ResourceDescriptor = ResourceDescriptor {
    collection: "/opportunities",
    item: "/opportunities",
    singular: "opportunity",
    plural: "opportunities",
    delete_success: &[200],
};

/// Client for opportunity endpoints
pub struct OpportunitiesClient {
    transport: Arc<ApiTransport>,
}

impl OpportunitiesClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Search opportunities for a location
    pub async fn get_opportunities(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
        filters: Option<&OpportunitySearchFilters>,
    ) -> Result<Page<Opportunity>, ApiError> {
        let mut query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip);
        if let Some(filters) = filters {
            query = query
                .push_opt("pipelineId", filters.pipeline_id.as_deref())
                .push_opt("pipelineStageId", filters.pipeline_stage_id.as_deref())
                .push_opt("status", filters.status.as_deref())
                .push_opt("assignedTo", filters.assigned_to.as_deref())
                .push_opt("contactId", filters.contact_id.as_deref())
                .push_opt("query", filters.query.as_deref());
        }

        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/opportunities/search")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "opportunities").await
    }

    /// Get a specific opportunity
    pub async fn get_opportunity(
        &self,
        opportunity_id: &str,
        location_id: &str,
    ) -> Result<Opportunity, ApiError> {
        self.transport
            .get_resource(&OPPORTUNITIES, opportunity_id, Some(location_id))
            .await
    }

    /// Create a new opportunity
    pub async fn create_opportunity(
        &self,
        opportunity: &OpportunityCreate,
    ) -> Result<Opportunity, ApiError> {
        self.transport
            .create_resource(&OPPORTUNITIES, opportunity, Some(&opportunity.location_id))
            .await
    }

    /// Update an existing opportunity
    pub async fn update_opportunity(
        &self,
        opportunity_id: &str,
        updates: &OpportunityUpdate,
        location_id: &str,
    ) -> Result<Opportunity, ApiError> {
        self.transport
            .update_resource(&OPPORTUNITIES, opportunity_id, updates, Some(location_id))
            .await
    }

    /// Delete an opportunity; success is status 200 exactly
    pub async fn delete_opportunity(
        &self,
        opportunity_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        self.transport
            .delete_resource(&OPPORTUNITIES, opportunity_id, Some(location_id))
            .await
    }

    /// Update only the status of an opportunity
    pub async fn update_opportunity_status(
        &self,
        opportunity_id: &str,
        status: &str,
        location_id: &str,
    ) -> Result<Opportunity, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/opportunities/{opportunity_id}/status"),
                )
                .body(json!({ "status": status }))
                .location(location_id),
            )
            .await?;
        decode_entity(response, "opportunity").await
    }

    /// Get all pipelines for a location. This is the only pipeline endpoint
    /// the vendor exposes; individual pipeline/stage lookups do not exist.
    pub async fn get_pipelines(&self, location_id: &str) -> Result<Vec<Pipeline>, ApiError> {
        let query = QueryParams::new().push("locationId", location_id);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/opportunities/pipelines")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        let mut body = read_json(response).await?;
        let pipelines = match body.get_mut("pipelines") {
            Some(value) => serde_json::from_value(value.take())
                .map_err(|e| ApiError::Decode(e.to_string()))?,
            None => Vec::new(),
        };
        Ok(pipelines)
    }
}
