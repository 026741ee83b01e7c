//! Calendar and appointment read/booking endpoints. Administrative
//! operations live in [`super::calendar_admin`].

use super::resource::{decode_entity, decode_page, read_json, to_body, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{
    Appointment, AppointmentCreate, AppointmentUpdate, Calendar, FreeSlotsResult, Page,
};
use chrono::NaiveDate;
use reqwest::Method;
use std::sync::Arc;

const CALENDARS: ResourceDescriptor = ResourceDescriptor {
    collection: "/calendars/",
    item: "/calendars",
    singular: "calendar",
    plural: "calendars",
    delete_success: &[200],
};

/// Client for calendar and appointment endpoints
pub struct CalendarsClient {
    transport: Arc<ApiTransport>,
}

impl CalendarsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get appointments for a contact
    pub async fn get_appointments(
        &self,
        contact_id: &str,
        location_id: &str,
    ) -> Result<Page<Appointment>, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, format!("/contacts/{contact_id}/appointments"))
                    .location(location_id),
            )
            .await?;
        decode_page(response, "appointments").await
    }

    /// Get a specific appointment
    pub async fn get_appointment(
        &self,
        appointment_id: &str,
        location_id: &str,
    ) -> Result<Appointment, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/calendars/events/appointments/{appointment_id}"),
                )
                .location(location_id),
            )
            .await?;
        decode_entity(response, "appointment").await
    }

    /// Book a new appointment
    pub async fn create_appointment(
        &self,
        appointment: &AppointmentCreate,
    ) -> Result<Appointment, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::POST, "/calendars/events/appointments")
                    .body(to_body(appointment)?)
                    .location(&appointment.location_id),
            )
            .await?;
        decode_entity(response, "appointment").await
    }

    /// Update an existing appointment
    pub async fn update_appointment(
        &self,
        appointment_id: &str,
        updates: &AppointmentUpdate,
        location_id: &str,
    ) -> Result<Appointment, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/calendars/events/appointments/{appointment_id}"),
                )
                .body(to_body(updates)?)
                .location(location_id),
            )
            .await?;
        decode_entity(response, "appointment").await
    }

    /// Delete an appointment; success is status 200 exactly
    pub async fn delete_appointment(
        &self,
        appointment_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::DELETE,
                    format!("/calendars/events/appointments/{appointment_id}"),
                )
                .location(location_id),
            )
            .await?;
        Ok(response.status().as_u16() == 200)
    }

    /// Get all calendars for a location
    pub async fn get_calendars(&self, location_id: &str) -> Result<Page<Calendar>, ApiError> {
        let query = QueryParams::new().push("locationId", location_id);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, CALENDARS.collection)
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, CALENDARS.plural).await
    }

    /// Get a specific calendar
    pub async fn get_calendar(
        &self,
        calendar_id: &str,
        location_id: &str,
    ) -> Result<Calendar, ApiError> {
        self.transport
            .get_resource(&CALENDARS, calendar_id, Some(location_id))
            .await
    }

    /// Get available time slots for a calendar over a date range
    pub async fn get_free_slots(
        &self,
        calendar_id: &str,
        location_id: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        timezone: Option<&str>,
    ) -> Result<FreeSlotsResult, ApiError> {
        let query = QueryParams::new()
            .push("startDate", start_date)
            .push_opt("endDate", end_date)
            .push_opt("timezone", timezone);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, format!("/calendars/{calendar_id}/free-slots"))
                    .query(query)
                    .location(location_id),
            )
            .await?;
        let body = read_json(response).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
