//! Location (tenant) endpoints. Listing goes through the dedicated
//! `/locations/search` path; everything else follows the common shape.

use super::resource::{decode_page, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{Location, LocationCreate, LocationUpdate, Page};
use reqwest::Method;
use std::sync::Arc;

const LOCATIONS: ResourceDescriptor = ResourceDescriptor {
    collection: "/locations",
    item: "/locations",
    singular: "location",
    plural: "locations",
    delete_success: &[200],
};

/// Client for location-related endpoints
pub struct LocationsClient {
    transport: Arc<ApiTransport>,
}

impl LocationsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get a specific location by ID
    pub async fn get_location(&self, location_id: &str) -> Result<Location, ApiError> {
        self.transport
            .get_resource(&LOCATIONS, location_id, None)
            .await
    }

    /// Search locations with filters
    pub async fn search_locations(
        &self,
        company_id: Option<&str>,
        limit: u32,
        skip: u32,
        search_query: Option<&str>,
    ) -> Result<Page<Location>, ApiError> {
        let query = QueryParams::new()
            .page(limit, skip)
            .push_opt("companyId", company_id)
            .push_opt("query", search_query);
        let response = self
            .transport
            .request(RequestDescriptor::new(Method::GET, "/locations/search").query(query))
            .await?;
        decode_page(response, "locations").await
    }

    /// Create a new location
    pub async fn create_location(&self, location: &LocationCreate) -> Result<Location, ApiError> {
        self.transport
            .create_resource(&LOCATIONS, location, None)
            .await
    }

    /// Update an existing location
    pub async fn update_location(
        &self,
        location_id: &str,
        updates: &LocationUpdate,
    ) -> Result<Location, ApiError> {
        self.transport
            .update_resource(&LOCATIONS, location_id, updates, None)
            .await
    }

    /// Delete a location; success is status 200 exactly
    pub async fn delete_location(&self, location_id: &str) -> Result<bool, ApiError> {
        self.transport
            .delete_resource(&LOCATIONS, location_id, None)
            .await
    }
}
