//! Location-scoped sub-resources: tags, custom values, custom fields,
//! templates, and task search. Paths embed the location ID, so these
//! operations build descriptors inline rather than using a static table.

use super::resource::{decode_entity, decode_page, to_body};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{
    DeleteStatus, LocationCustomField, LocationCustomFieldCreate, LocationCustomFieldUpdate,
    LocationCustomValue, LocationCustomValueCreate, LocationCustomValueUpdate, LocationTag,
    LocationTagCreate, LocationTagUpdate, LocationTask, LocationTaskSearchFilters,
    LocationTemplate, Page,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Client for extended location operations
pub struct LocationsExtendedClient {
    transport: Arc<ApiTransport>,
}

impl LocationsExtendedClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    // Tags

    /// Get all tags for a location
    pub async fn get_location_tags(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<LocationTag>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, format!("/locations/{location_id}/tags"))
                    .query(query),
            )
            .await?;
        decode_page(response, "tags").await
    }

    /// Get a specific location tag
    pub async fn get_location_tag(
        &self,
        location_id: &str,
        tag_id: &str,
    ) -> Result<LocationTag, ApiError> {
        let response = self
            .transport
            .request(RequestDescriptor::new(
                Method::GET,
                format!("/locations/{location_id}/tags/{tag_id}"),
            ))
            .await?;
        decode_entity(response, "tag").await
    }

    /// Create a new location tag
    pub async fn create_location_tag(
        &self,
        location_id: &str,
        tag: &LocationTagCreate,
    ) -> Result<LocationTag, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::POST, format!("/locations/{location_id}/tags/"))
                    .body(to_body(tag)?),
            )
            .await?;
        decode_entity(response, "tag").await
    }

    /// Update a location tag
    pub async fn update_location_tag(
        &self,
        location_id: &str,
        tag_id: &str,
        tag: &LocationTagUpdate,
    ) -> Result<LocationTag, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/locations/{location_id}/tags/{tag_id}"),
                )
                .body(to_body(tag)?),
            )
            .await?;
        decode_entity(response, "tag").await
    }

    /// Delete a location tag
    pub async fn delete_location_tag(
        &self,
        location_id: &str,
        tag_id: &str,
    ) -> Result<DeleteStatus, ApiError> {
        self.transport
            .request(RequestDescriptor::new(
                Method::DELETE,
                format!("/locations/{location_id}/tags/{tag_id}"),
            ))
            .await?;
        Ok(DeleteStatus {
            success: true,
            message: "Tag deleted successfully".to_string(),
        })
    }

    // Custom values

    /// Get all custom values for a location
    pub async fn get_location_custom_values(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<LocationCustomValue>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/locations/{location_id}/customValues"),
                )
                .query(query),
            )
            .await?;
        decode_page(response, "customValues").await
    }

    /// Get a specific location custom value
    pub async fn get_location_custom_value(
        &self,
        location_id: &str,
        custom_value_id: &str,
    ) -> Result<LocationCustomValue, ApiError> {
        let response = self
            .transport
            .request(RequestDescriptor::new(
                Method::GET,
                format!("/locations/{location_id}/customValues/{custom_value_id}"),
            ))
            .await?;
        decode_entity(response, "customValue").await
    }

    /// Create a new location custom value
    pub async fn create_location_custom_value(
        &self,
        location_id: &str,
        custom_value: &LocationCustomValueCreate,
    ) -> Result<LocationCustomValue, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::POST,
                    format!("/locations/{location_id}/customValues"),
                )
                .body(to_body(custom_value)?),
            )
            .await?;
        decode_entity(response, "customValue").await
    }

    /// Update a location custom value
    pub async fn update_location_custom_value(
        &self,
        location_id: &str,
        custom_value_id: &str,
        custom_value: &LocationCustomValueUpdate,
    ) -> Result<LocationCustomValue, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/locations/{location_id}/customValues/{custom_value_id}"),
                )
                .body(to_body(custom_value)?),
            )
            .await?;
        decode_entity(response, "customValue").await
    }

    /// Delete a location custom value
    pub async fn delete_location_custom_value(
        &self,
        location_id: &str,
        custom_value_id: &str,
    ) -> Result<DeleteStatus, ApiError> {
        self.transport
            .request(RequestDescriptor::new(
                Method::DELETE,
                format!("/locations/{location_id}/customValues/{custom_value_id}"),
            ))
            .await?;
        Ok(DeleteStatus {
            success: true,
            message: "Custom value deleted successfully".to_string(),
        })
    }

    // Custom fields

    /// Get all custom fields for a location
    pub async fn get_location_custom_fields(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<LocationCustomField>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/locations/{location_id}/customFields"),
                )
                .query(query),
            )
            .await?;
        decode_page(response, "customFields").await
    }

    /// Get a specific location custom field
    pub async fn get_location_custom_field(
        &self,
        location_id: &str,
        custom_field_id: &str,
    ) -> Result<LocationCustomField, ApiError> {
        let response = self
            .transport
            .request(RequestDescriptor::new(
                Method::GET,
                format!("/locations/{location_id}/customFields/{custom_field_id}"),
            ))
            .await?;
        decode_entity(response, "customField").await
    }

    /// Create a new location custom field
    pub async fn create_location_custom_field(
        &self,
        location_id: &str,
        custom_field: &LocationCustomFieldCreate,
    ) -> Result<LocationCustomField, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::POST,
                    format!("/locations/{location_id}/customFields"),
                )
                .body(to_body(custom_field)?),
            )
            .await?;
        decode_entity(response, "customField").await
    }

    /// Update a location custom field
    pub async fn update_location_custom_field(
        &self,
        location_id: &str,
        custom_field_id: &str,
        custom_field: &LocationCustomFieldUpdate,
    ) -> Result<LocationCustomField, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/locations/{location_id}/customFields/{custom_field_id}"),
                )
                .body(to_body(custom_field)?),
            )
            .await?;
        decode_entity(response, "customField").await
    }

    /// Delete a location custom field
    pub async fn delete_location_custom_field(
        &self,
        location_id: &str,
        custom_field_id: &str,
    ) -> Result<DeleteStatus, ApiError> {
        self.transport
            .request(RequestDescriptor::new(
                Method::DELETE,
                format!("/locations/{location_id}/customFields/{custom_field_id}"),
            ))
            .await?;
        Ok(DeleteStatus {
            success: true,
            message: "Custom field deleted successfully".to_string(),
        })
    }

    // Templates

    /// Get all templates for a location
    pub async fn get_location_templates(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<LocationTemplate>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, format!("/locations/{location_id}/templates"))
                    .query(query),
            )
            .await?;
        decode_page(response, "templates").await
    }

    // Task search

    /// Search tasks for a location. This endpoint takes pagination in the
    /// POST body; the omit-skip-when-0 rule applies there too.
    pub async fn search_location_tasks(
        &self,
        location_id: &str,
        filters: Option<&LocationTaskSearchFilters>,
        limit: u32,
        skip: u32,
    ) -> Result<Page<LocationTask>, ApiError> {
        let mut body = serde_json::Map::new();
        body.insert("limit".to_string(), Value::from(limit));
        if skip > 0 {
            body.insert("skip".to_string(), Value::from(skip));
        }
        if let Some(filters) = filters {
            if let Value::Object(extra) = to_body(filters)? {
                body.extend(extra);
            }
        }

        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::POST,
                    format!("/locations/{location_id}/tasks/search"),
                )
                .body(Value::Object(body)),
            )
            .await?;
        decode_page(response, "tasks").await
    }
}
