//! Business endpoints.

use super::resource::ResourceDescriptor;
use super::transport::{ApiError, ApiTransport, QueryParams};
use crate::models::{Business, BusinessCreate, BusinessUpdate, Page};
use std::sync::Arc;

const BUSINESSES: ResourceDescriptor = ResourceDescriptor {
    collection: "/businesses",
    item: "/businesses",
    singular: "business",
    plural: "businesses",
    delete_success: &[200],
};

/// Client for business-related endpoints
pub struct BusinessesClient {
    transport: Arc<ApiTransport>,
}

impl BusinessesClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all businesses for a location
    pub async fn get_businesses(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<Business>, ApiError> {
        let query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip);
        self.transport
            .list_resource(&BUSINESSES, query, Some(location_id))
            .await
    }

    /// Get a specific business by ID
    pub async fn get_business(
        &self,
        business_id: &str,
        location_id: &str,
    ) -> Result<Business, ApiError> {
        self.transport
            .get_resource(&BUSINESSES, business_id, Some(location_id))
            .await
    }

    /// Create a new business
    pub async fn create_business(&self, business: &BusinessCreate) -> Result<Business, ApiError> {
        self.transport
            .create_resource(&BUSINESSES, business, Some(&business.location_id))
            .await
    }

    /// Update an existing business
    pub async fn update_business(
        &self,
        business_id: &str,
        updates: &BusinessUpdate,
        location_id: &str,
    ) -> Result<Business, ApiError> {
        self.transport
            .update_resource(&BUSINESSES, business_id, updates, Some(location_id))
            .await
    }

    /// Delete a business; success is status 200 exactly
    pub async fn delete_business(
        &self,
        business_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        self.transport
            .delete_resource(&BUSINESSES, business_id, Some(location_id))
            .await
    }
}
