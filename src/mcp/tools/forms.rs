//! Form tools.

use super::default_limit;
use crate::mcp::{page_envelope, ToolRegistry};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetFormsParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetFormSubmissionsParams {
    pub location_id: String,
    pub form_id: Option<String>,
    pub contact_id: Option<String>,
    /// Range start (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Range end (YYYY-MM-DD)
    pub end_date: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetFormsParams, _, _>(
        "get_forms",
        "Get all forms for a location",
        |client, params| async move {
            let page = client
                .forms()
                .get_forms(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("forms", &page)
        },
    );

    registry.register::<GetFormSubmissionsParams, _, _>(
        "get_form_submissions",
        "Get form submissions for a location",
        |client, params| async move {
            let page = client
                .forms()
                .get_all_submissions(
                    &params.location_id,
                    params.form_id.as_deref(),
                    params.contact_id.as_deref(),
                    params.start_date.as_deref(),
                    params.end_date.as_deref(),
                    params.limit,
                    params.skip,
                )
                .await?;
            page_envelope("submissions", &page)
        },
    );
}
