//! Survey endpoints (read-only on the vendor side).

use super::resource::{decode_page, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{Page, Survey, SurveySubmission};
use reqwest::Method;
use std::sync::Arc;

const SURVEYS: ResourceDescriptor = ResourceDescriptor {
    collection: "/surveys/",
    item: "/surveys",
    singular: "survey",
    plural: "surveys",
    delete_success: &[200],
};

/// Client for survey endpoints
pub struct SurveysClient {
    transport: Arc<ApiTransport>,
}

impl SurveysClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all surveys for a location
    pub async fn get_surveys(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<Survey>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        self.transport
            .list_resource(&SURVEYS, query, Some(location_id))
            .await
    }

    /// Get a specific survey by ID
    pub async fn get_survey(&self, survey_id: &str, location_id: &str) -> Result<Survey, ApiError> {
        self.transport
            .get_resource(&SURVEYS, survey_id, Some(location_id))
            .await
    }

    /// Get survey submissions for a location, optionally for one survey
    pub async fn get_survey_submissions(
        &self,
        location_id: &str,
        survey_id: Option<&str>,
        limit: u32,
        skip: u32,
    ) -> Result<Page<SurveySubmission>, ApiError> {
        let query = QueryParams::new()
            .page(limit, skip)
            .push_opt("surveyId", survey_id);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/surveys/submissions")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "submissions").await
    }
}
