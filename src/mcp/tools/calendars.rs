//! Calendar and appointment tools.

use crate::mcp::{entity_envelope, message_envelope, page_envelope, to_json, ToolRegistry};
use crate::models::{AppointmentCreate, AppointmentUpdate};
use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAppointmentsParams {
    pub contact_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAppointmentParams {
    pub appointment_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateAppointmentParams {
    pub calendar_id: String,
    pub location_id: String,
    pub contact_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub appointment_status: Option<String>,
    pub assigned_user_id: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateAppointmentParams {
    pub appointment_id: String,
    pub location_id: String,
    pub title: Option<String>,
    pub appointment_status: Option<String>,
    pub assigned_user_id: Option<String>,
    pub notes: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteAppointmentParams {
    pub appointment_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCalendarsParams {
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCalendarParams {
    pub calendar_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetFreeSlotsParams {
    pub calendar_id: String,
    pub location_id: String,
    /// Range start date (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Range end date; defaults to the start date on the server
    pub end_date: Option<NaiveDate>,
    pub timezone: Option<String>,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetAppointmentsParams, _, _>(
        "get_appointments",
        "Get appointments for a contact",
        |client, params| async move {
            let page = client
                .calendars()
                .get_appointments(&params.contact_id, &params.location_id)
                .await?;
            page_envelope("appointments", &page)
        },
    );

    registry.register::<GetAppointmentParams, _, _>(
        "get_appointment",
        "Get a single appointment by ID",
        |client, params| async move {
            let appointment = client
                .calendars()
                .get_appointment(&params.appointment_id, &params.location_id)
                .await?;
            entity_envelope("appointment", &appointment)
        },
    );

    registry.register::<CreateAppointmentParams, _, _>(
        "create_appointment",
        "Book a new appointment",
        |client, params| async move {
            let appointment_data = AppointmentCreate {
                calendar_id: params.calendar_id,
                location_id: params.location_id,
                contact_id: params.contact_id,
                start_time: params.start_time,
                end_time: params.end_time,
                title: params.title,
                appointment_status: params.appointment_status,
                assigned_user_id: params.assigned_user_id,
                notes: params.notes,
            };
            let appointment = client
                .calendars()
                .create_appointment(&appointment_data)
                .await?;
            entity_envelope("appointment", &appointment)
        },
    );

    registry.register::<UpdateAppointmentParams, _, _>(
        "update_appointment",
        "Update an existing appointment",
        |client, params| async move {
            let update_data = AppointmentUpdate {
                title: params.title,
                appointment_status: params.appointment_status,
                assigned_user_id: params.assigned_user_id,
                notes: params.notes,
                start_time: params.start_time,
                end_time: params.end_time,
            };
            let appointment = client
                .calendars()
                .update_appointment(&params.appointment_id, &update_data, &params.location_id)
                .await?;
            entity_envelope("appointment", &appointment)
        },
    );

    registry.register::<DeleteAppointmentParams, _, _>(
        "delete_appointment",
        "Delete an appointment",
        |client, params| async move {
            let success = client
                .calendars()
                .delete_appointment(&params.appointment_id, &params.location_id)
                .await?;
            let message = if success {
                "Appointment deleted successfully"
            } else {
                "Failed to delete appointment"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<GetCalendarsParams, _, _>(
        "get_calendars",
        "Get all calendars for a location",
        |client, params| async move {
            let page = client.calendars().get_calendars(&params.location_id).await?;
            page_envelope("calendars", &page)
        },
    );

    registry.register::<GetCalendarParams, _, _>(
        "get_calendar",
        "Get a single calendar by ID",
        |client, params| async move {
            let calendar = client
                .calendars()
                .get_calendar(&params.calendar_id, &params.location_id)
                .await?;
            entity_envelope("calendar", &calendar)
        },
    );

    registry.register::<GetFreeSlotsParams, _, _>(
        "get_free_slots",
        "Get available time slots for a calendar",
        |client, params| async move {
            let slots = client
                .calendars()
                .get_free_slots(
                    &params.calendar_id,
                    &params.location_id,
                    params.start_date,
                    params.end_date,
                    params.timezone.as_deref(),
                )
                .await?;
            Ok(json!({ "success": true, "slots": to_json(&slots)? }))
        },
    );
}
