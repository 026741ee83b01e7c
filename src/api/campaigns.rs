//! Campaign endpoints. The vendor only exposes a listing.

use super::resource::ResourceDescriptor;
use super::transport::{ApiError, ApiTransport, QueryParams};
use crate::models::{Campaign, Page};
use std::sync::Arc;

const CAMPAIGNS: ResourceDescriptor = ResourceDescriptor {
    collection: "/campaigns",
    item: "/campaigns",
    singular: "campaign",
    plural: "campaigns",
    delete_success: &[200],
};

/// Client for campaign-related endpoints
pub struct CampaignsClient {
    transport: Arc<ApiTransport>,
}

impl CampaignsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all campaigns for a location
    pub async fn get_campaigns(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<Campaign>, ApiError> {
        let query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip);
        self.transport
            .list_resource(&CAMPAIGNS, query, Some(location_id))
            .await
    }
}
