//! Trigger link endpoints.
//!
//! The delete endpoint here is one of the vendor's odd ones: it answers
//! 204 with no body on success, so the result is a message envelope rather
//! than the bare status bool the other resources use.

use super::resource::{read_json, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{DeleteStatus, Link, LinkCreate, LinkUpdate, Page};
use reqwest::Method;
use std::sync::Arc;

const LINKS: ResourceDescriptor = ResourceDescriptor {
    collection: "/links/",
    item: "/links",
    singular: "link",
    plural: "links",
    delete_success: &[200, 204],
};

/// Client for trigger link endpoints
pub struct LinksClient {
    transport: Arc<ApiTransport>,
}

impl LinksClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all links for a location
    pub async fn get_links(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<Link>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        self.transport
            .list_resource(&LINKS, query, Some(location_id))
            .await
    }

    /// Get a specific link by ID
    pub async fn get_link(&self, link_id: &str, location_id: &str) -> Result<Link, ApiError> {
        self.transport
            .get_resource(&LINKS, link_id, Some(location_id))
            .await
    }

    /// Create a new link
    pub async fn create_link(&self, link: &LinkCreate, location_id: &str) -> Result<Link, ApiError> {
        self.transport
            .create_resource(&LINKS, link, Some(location_id))
            .await
    }

    /// Update an existing link
    pub async fn update_link(
        &self,
        link_id: &str,
        link: &LinkUpdate,
        location_id: &str,
    ) -> Result<Link, ApiError> {
        self.transport
            .update_resource(&LINKS, link_id, link, Some(location_id))
            .await
    }

    /// Delete a link. 204 means deleted with no body; 200 carries a message.
    pub async fn delete_link(
        &self,
        link_id: &str,
        location_id: &str,
    ) -> Result<DeleteStatus, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::DELETE, format!("/links/{link_id}"))
                    .location(location_id),
            )
            .await?;

        if response.status().as_u16() == 204 {
            return Ok(DeleteStatus {
                success: true,
                message: "Link deleted successfully".to_string(),
            });
        }

        let body = read_json(response).await?;
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Link deleted successfully")
            .to_string();
        Ok(DeleteStatus {
            success: true,
            message,
        })
    }
}
