//! Form endpoints.

use super::resource::decode_page;
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{Form, FormSubmission, Page};
use reqwest::Method;
use std::sync::Arc;

/// Client for form endpoints
pub struct FormsClient {
    transport: Arc<ApiTransport>,
}

impl FormsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all forms for a location
    pub async fn get_forms(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<Form>, ApiError> {
        let query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/forms/")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "forms").await
    }

    /// Get form submissions for a location with optional filters
    #[allow(clippy::too_many_arguments)]
    pub async fn get_all_submissions(
        &self,
        location_id: &str,
        form_id: Option<&str>,
        contact_id: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        limit: u32,
        skip: u32,
    ) -> Result<Page<FormSubmission>, ApiError> {
        let query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip)
            .push_opt("formId", form_id)
            .push_opt("contactId", contact_id)
            .push_opt("startAt", start_date)
            .push_opt("endAt", end_date);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/forms/submissions")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "submissions").await
    }
}
