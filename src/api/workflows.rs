//! Workflow endpoints. The vendor only exposes a listing.

use super::resource::ResourceDescriptor;
use super::transport::{ApiError, ApiTransport, QueryParams};
use crate::models::{Page, Workflow};
use std::sync::Arc;

const WORKFLOWS: ResourceDescriptor = ResourceDescriptor {
    collection: "/workflows",
    item: "/workflows",
    singular: "workflow",
    plural: "workflows",
    delete_success: &[200],
};

/// Client for workflow-related endpoints
pub struct WorkflowsClient {
    transport: Arc<ApiTransport>,
}

impl WorkflowsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all workflows for a location
    pub async fn get_workflows(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<Workflow>, ApiError> {
        let query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip);
        self.transport
            .list_resource(&WORKFLOWS, query, Some(location_id))
            .await
    }
}
