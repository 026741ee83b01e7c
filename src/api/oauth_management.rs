//! OAuth application management: installed locations, location-scoped token
//! generation, and SaaS subscription updates.

use super::resource::{decode_entity, decode_page, to_body};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{
    InstalledLocation, LocationToken, LocationTokenRequest, Page, SaasSubscription,
    SaasSubscriptionUpdate,
};
use reqwest::Method;
use std::sync::Arc;

/// Client for OAuth management endpoints
pub struct OAuthManagementClient {
    transport: Arc<ApiTransport>,
}

impl OAuthManagementClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all locations where the OAuth application is installed
    pub async fn get_installed_locations(
        &self,
        limit: u32,
        skip: u32,
    ) -> Result<Page<InstalledLocation>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(RequestDescriptor::new(Method::GET, "/oauth/installedLocations").query(query))
            .await?;
        decode_page(response, "locations").await
    }

    /// Generate an OAuth token scoped to a specific location
    pub async fn generate_location_token(
        &self,
        request: &LocationTokenRequest,
    ) -> Result<LocationToken, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::POST, "/oauth/locationToken")
                    .body(to_body(request)?),
            )
            .await?;
        decode_entity(response, "token").await
    }

    /// Update the SaaS subscription details for a specific location
    pub async fn update_saas_subscription(
        &self,
        location_id: &str,
        subscription: &SaasSubscriptionUpdate,
    ) -> Result<SaasSubscription, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/update-saas-subscription/{location_id}"),
                )
                .body(to_body(subscription)?),
            )
            .await?;
        decode_entity(response, "subscription").await
    }
}
