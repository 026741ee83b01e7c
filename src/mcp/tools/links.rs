//! Trigger link tools.

use super::default_limit;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{LinkCreate, LinkUpdate};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetLinksParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetLinkParams {
    pub link_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateLinkParams {
    pub location_id: String,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateLinkParams {
    pub link_id: String,
    pub location_id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteLinkParams {
    pub link_id: String,
    pub location_id: String,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetLinksParams, _, _>(
        "get_links",
        "Get all trigger links for a location",
        |client, params| async move {
            let page = client
                .links()
                .get_links(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("links", &page)
        },
    );

    registry.register::<GetLinkParams, _, _>(
        "get_link",
        "Get a single trigger link by ID",
        |client, params| async move {
            let link = client
                .links()
                .get_link(&params.link_id, &params.location_id)
                .await?;
            entity_envelope("link", &link)
        },
    );

    registry.register::<CreateLinkParams, _, _>(
        "create_link",
        "Create a new trigger link",
        |client, params| async move {
            let link_data = LinkCreate {
                name: params.name,
                url: params.url,
                description: params.description,
                is_active: params.is_active,
            };
            let link = client
                .links()
                .create_link(&link_data, &params.location_id)
                .await?;
            entity_envelope("link", &link)
        },
    );

    registry.register::<UpdateLinkParams, _, _>(
        "update_link",
        "Update an existing trigger link",
        |client, params| async move {
            let update_data = LinkUpdate {
                name: params.name,
                url: params.url,
                description: params.description,
                is_active: params.is_active,
            };
            let link = client
                .links()
                .update_link(&params.link_id, &update_data, &params.location_id)
                .await?;
            entity_envelope("link", &link)
        },
    );

    registry.register::<DeleteLinkParams, _, _>(
        "delete_link",
        "Delete a trigger link",
        |client, params| async move {
            let status = client
                .links()
                .delete_link(&params.link_id, &params.location_id)
                .await?;
            Ok(message_envelope(status.success, &status.message))
        },
    );
}
