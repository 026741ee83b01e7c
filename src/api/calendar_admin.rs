//! Calendar administration: calendar CRUD, groups, event deletion, and
//! block-slot management.

use super::resource::{decode_page, read_json, to_body, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{
    BlockSlotCreate, BlockSlotUpdate, Calendar, CalendarCreate, CalendarGroup, CalendarUpdate, Page,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

const CALENDARS: ResourceDescriptor = ResourceDescriptor {
    collection: "/calendars",
    item: "/calendars",
    singular: "calendar",
    plural: "calendars",
    delete_success: &[200],
};

/// Client for calendar administration endpoints
pub struct CalendarAdminClient {
    transport: Arc<ApiTransport>,
}

impl CalendarAdminClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Create a new calendar
    pub async fn create_calendar(&self, calendar: &CalendarCreate) -> Result<Calendar, ApiError> {
        self.transport
            .create_resource(&CALENDARS, calendar, Some(&calendar.location_id))
            .await
    }

    /// Update an existing calendar
    pub async fn update_calendar(
        &self,
        calendar_id: &str,
        updates: &CalendarUpdate,
    ) -> Result<Calendar, ApiError> {
        self.transport
            .update_resource(&CALENDARS, calendar_id, updates, None)
            .await
    }

    /// Delete a calendar; success is status 200 exactly
    pub async fn delete_calendar(&self, calendar_id: &str) -> Result<bool, ApiError> {
        self.transport
            .delete_resource(&CALENDARS, calendar_id, None)
            .await
    }

    /// Get calendar groups for a location
    pub async fn get_calendar_groups(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<CalendarGroup>, ApiError> {
        let query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/calendars/groups")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "groups").await
    }

    /// Delete a calendar event; success is status 200 exactly
    pub async fn delete_calendar_event(
        &self,
        event_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::DELETE, format!("/calendars/events/{event_id}"))
                    .location(location_id),
            )
            .await?;
        Ok(response.status().as_u16() == 200)
    }

    /// Create a calendar block slot. The response shape is undocumented, so
    /// the raw body is returned.
    pub async fn create_block_slot(
        &self,
        block_slot: &BlockSlotCreate,
        location_id: &str,
    ) -> Result<Value, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::POST, "/calendars/events/block-slots")
                    .body(to_body(block_slot)?)
                    .location(location_id),
            )
            .await?;
        read_json(response).await
    }

    /// Update a calendar block slot
    pub async fn update_block_slot(
        &self,
        event_id: &str,
        block_slot: &BlockSlotUpdate,
        location_id: &str,
    ) -> Result<Value, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/calendars/events/block-slots/{event_id}"),
                )
                .body(to_body(block_slot)?)
                .location(location_id),
            )
            .await?;
        read_json(response).await
    }
}
