//! Campaign tools.

use super::default_limit;
use crate::mcp::{page_envelope, ToolRegistry};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCampaignsParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetCampaignsParams, _, _>(
        "get_campaigns",
        "Get all campaigns for a location",
        |client, params| async move {
            let page = client
                .campaigns()
                .get_campaigns(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("campaigns", &page)
        },
    );
}
