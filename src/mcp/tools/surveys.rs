//! Survey tools.

use super::default_limit;
use crate::mcp::{entity_envelope, page_envelope, ToolRegistry};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSurveysParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSurveyParams {
    pub survey_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSurveySubmissionsParams {
    pub location_id: String,
    pub survey_id: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetSurveysParams, _, _>(
        "get_surveys",
        "Get all surveys for a location",
        |client, params| async move {
            let page = client
                .surveys()
                .get_surveys(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("surveys", &page)
        },
    );

    registry.register::<GetSurveyParams, _, _>(
        "get_survey",
        "Get a single survey by ID",
        |client, params| async move {
            let survey = client
                .surveys()
                .get_survey(&params.survey_id, &params.location_id)
                .await?;
            entity_envelope("survey", &survey)
        },
    );

    registry.register::<GetSurveySubmissionsParams, _, _>(
        "get_survey_submissions",
        "Get survey submissions for a location",
        |client, params| async move {
            let page = client
                .surveys()
                .get_survey_submissions(
                    &params.location_id,
                    params.survey_id.as_deref(),
                    params.limit,
                    params.skip,
                )
                .await?;
            page_envelope("submissions", &page)
        },
    );
}
