//! Calendar administration tools.

use super::default_limit;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{BlockSlotCreate, BlockSlotUpdate, CalendarCreate, CalendarUpdate};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCalendarParams {
    pub location_id: String,
    pub name: String,
    pub description: Option<String>,
    pub group_id: Option<String>,
    pub calendar_type: Option<String>,
    pub slug: Option<String>,
    pub widget_type: Option<String>,
    pub slot_duration: Option<i64>,
    pub slot_interval: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCalendarParams {
    pub calendar_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub group_id: Option<String>,
    pub slug: Option<String>,
    pub widget_type: Option<String>,
    pub is_active: Option<bool>,
    pub slot_duration: Option<i64>,
    pub slot_interval: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteCalendarParams {
    pub calendar_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCalendarGroupsParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteCalendarEventParams {
    pub event_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateBlockSlotParams {
    pub calendar_id: String,
    pub location_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: Option<String>,
    pub assigned_user_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateBlockSlotParams {
    pub event_id: String,
    pub location_id: String,
    pub calendar_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub assigned_user_id: Option<String>,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<CreateCalendarParams, _, _>(
        "create_calendar",
        "Create a new calendar",
        |client, params| async move {
            let calendar_data = CalendarCreate {
                location_id: params.location_id,
                name: params.name,
                description: params.description,
                group_id: params.group_id,
                calendar_type: params.calendar_type,
                slug: params.slug,
                widget_type: params.widget_type,
                slot_duration: params.slot_duration,
                slot_interval: params.slot_interval,
                team_members: None,
            };
            let calendar = client
                .calendar_admin()
                .create_calendar(&calendar_data)
                .await?;
            entity_envelope("calendar", &calendar)
        },
    );

    registry.register::<UpdateCalendarParams, _, _>(
        "update_calendar",
        "Update an existing calendar",
        |client, params| async move {
            let update_data = CalendarUpdate {
                name: params.name,
                description: params.description,
                group_id: params.group_id,
                slug: params.slug,
                widget_type: params.widget_type,
                is_active: params.is_active,
                slot_duration: params.slot_duration,
                slot_interval: params.slot_interval,
            };
            let calendar = client
                .calendar_admin()
                .update_calendar(&params.calendar_id, &update_data)
                .await?;
            entity_envelope("calendar", &calendar)
        },
    );

    registry.register::<DeleteCalendarParams, _, _>(
        "delete_calendar",
        "Delete a calendar",
        |client, params| async move {
            let success = client
                .calendar_admin()
                .delete_calendar(&params.calendar_id)
                .await?;
            let message = if success {
                "Calendar deleted successfully"
            } else {
                "Failed to delete calendar"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<GetCalendarGroupsParams, _, _>(
        "get_calendar_groups",
        "Get calendar groups for a location",
        |client, params| async move {
            let page = client
                .calendar_admin()
                .get_calendar_groups(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("groups", &page)
        },
    );

    registry.register::<DeleteCalendarEventParams, _, _>(
        "delete_calendar_event",
        "Delete a calendar event",
        |client, params| async move {
            let success = client
                .calendar_admin()
                .delete_calendar_event(&params.event_id, &params.location_id)
                .await?;
            let message = if success {
                "Event deleted successfully"
            } else {
                "Failed to delete event"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<CreateBlockSlotParams, _, _>(
        "create_block_slot",
        "Create a calendar block slot",
        |client, params| async move {
            let block_slot = BlockSlotCreate {
                calendar_id: params.calendar_id,
                location_id: params.location_id.clone(),
                start_time: params.start_time,
                end_time: params.end_time,
                title: params.title,
                assigned_user_id: params.assigned_user_id,
            };
            let created = client
                .calendar_admin()
                .create_block_slot(&block_slot, &params.location_id)
                .await?;
            Ok(json!({ "success": true, "blockSlot": created }))
        },
    );

    registry.register::<UpdateBlockSlotParams, _, _>(
        "update_block_slot",
        "Update a calendar block slot",
        |client, params| async move {
            let block_slot = BlockSlotUpdate {
                calendar_id: params.calendar_id,
                start_time: params.start_time,
                end_time: params.end_time,
                title: params.title,
                assigned_user_id: params.assigned_user_id,
            };
            let updated = client
                .calendar_admin()
                .update_block_slot(&params.event_id, &block_slot, &params.location_id)
                .await?;
            Ok(json!({ "success": true, "blockSlot": updated }))
        },
    );
}
