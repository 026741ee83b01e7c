//! Workflow tools.

use super::default_limit;
use crate::mcp::{page_envelope, ToolRegistry};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetWorkflowsParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetWorkflowsParams, _, _>(
        "get_workflows",
        "Get all workflows for a location",
        |client, params| async move {
            let page = client
                .workflows()
                .get_workflows(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("workflows", &page)
        },
    );
}
