//! Tools over the extended location sub-resources: tags, custom values,
//! custom fields, templates, and task search.

use super::default_limit;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{
    LocationCustomFieldCreate, LocationCustomFieldUpdate, LocationCustomValueCreate,
    LocationCustomValueUpdate, LocationTagCreate, LocationTagUpdate, LocationTaskSearchFilters,
};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListSubResourceParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TagParams {
    pub location_id: String,
    pub tag_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTagParams {
    pub location_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTagParams {
    pub location_id: String,
    pub tag_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomValueParams {
    pub location_id: String,
    pub custom_value_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCustomValueParams {
    pub location_id: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCustomValueParams {
    pub location_id: String,
    pub custom_value_id: String,
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomFieldParams {
    pub location_id: String,
    pub custom_field_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCustomFieldParams {
    pub location_id: String,
    pub name: String,
    /// Field data type, e.g. TEXT or NUMERICAL
    pub data_type: String,
    pub placeholder: Option<String>,
    pub position: Option<i64>,
    /// Owning model, e.g. contact or opportunity
    pub model: Option<String>,
    pub picklist_options: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCustomFieldParams {
    pub location_id: String,
    pub custom_field_id: String,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub position: Option<i64>,
    pub picklist_options: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchLocationTasksParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
    pub contact_id: Option<String>,
    pub assigned_to: Option<String>,
    pub completed: Option<bool>,
    pub query: Option<String>,
}

pub fn register(registry: &mut ToolRegistry) {
    // Tags

    registry.register::<ListSubResourceParams, _, _>(
        "get_location_tags",
        "Get all tags for a location",
        |client, params| async move {
            let page = client
                .locations_extended()
                .get_location_tags(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("tags", &page)
        },
    );

    registry.register::<TagParams, _, _>(
        "get_location_tag",
        "Get a specific location tag",
        |client, params| async move {
            let tag = client
                .locations_extended()
                .get_location_tag(&params.location_id, &params.tag_id)
                .await?;
            entity_envelope("tag", &tag)
        },
    );

    registry.register::<CreateTagParams, _, _>(
        "create_location_tag",
        "Create a new location tag",
        |client, params| async move {
            let tag = client
                .locations_extended()
                .create_location_tag(&params.location_id, &LocationTagCreate { name: params.name })
                .await?;
            entity_envelope("tag", &tag)
        },
    );

    registry.register::<UpdateTagParams, _, _>(
        "update_location_tag",
        "Update a location tag",
        |client, params| async move {
            let tag = client
                .locations_extended()
                .update_location_tag(
                    &params.location_id,
                    &params.tag_id,
                    &LocationTagUpdate { name: params.name },
                )
                .await?;
            entity_envelope("tag", &tag)
        },
    );

    registry.register::<TagParams, _, _>(
        "delete_location_tag",
        "Delete a location tag",
        |client, params| async move {
            let status = client
                .locations_extended()
                .delete_location_tag(&params.location_id, &params.tag_id)
                .await?;
            Ok(message_envelope(status.success, &status.message))
        },
    );

    // Custom values

    registry.register::<ListSubResourceParams, _, _>(
        "get_location_custom_values",
        "Get all custom values for a location",
        |client, params| async move {
            let page = client
                .locations_extended()
                .get_location_custom_values(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("customValues", &page)
        },
    );

    registry.register::<CustomValueParams, _, _>(
        "get_location_custom_value",
        "Get a specific location custom value",
        |client, params| async move {
            let custom_value = client
                .locations_extended()
                .get_location_custom_value(&params.location_id, &params.custom_value_id)
                .await?;
            entity_envelope("customValue", &custom_value)
        },
    );

    registry.register::<CreateCustomValueParams, _, _>(
        "create_location_custom_value",
        "Create a new location custom value",
        |client, params| async move {
            let custom_value = client
                .locations_extended()
                .create_location_custom_value(
                    &params.location_id,
                    &LocationCustomValueCreate {
                        name: params.name,
                        value: params.value,
                    },
                )
                .await?;
            entity_envelope("customValue", &custom_value)
        },
    );

    registry.register::<UpdateCustomValueParams, _, _>(
        "update_location_custom_value",
        "Update a location custom value",
        |client, params| async move {
            let custom_value = client
                .locations_extended()
                .update_location_custom_value(
                    &params.location_id,
                    &params.custom_value_id,
                    &LocationCustomValueUpdate {
                        name: params.name,
                        value: params.value,
                    },
                )
                .await?;
            entity_envelope("customValue", &custom_value)
        },
    );

    registry.register::<CustomValueParams, _, _>(
        "delete_location_custom_value",
        "Delete a location custom value",
        |client, params| async move {
            let status = client
                .locations_extended()
                .delete_location_custom_value(&params.location_id, &params.custom_value_id)
                .await?;
            Ok(message_envelope(status.success, &status.message))
        },
    );

    // Custom fields

    registry.register::<ListSubResourceParams, _, _>(
        "get_location_custom_fields",
        "Get all custom fields for a location",
        |client, params| async move {
            let page = client
                .locations_extended()
                .get_location_custom_fields(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("customFields", &page)
        },
    );

    registry.register::<CustomFieldParams, _, _>(
        "get_location_custom_field",
        "Get a specific location custom field",
        |client, params| async move {
            let custom_field = client
                .locations_extended()
                .get_location_custom_field(&params.location_id, &params.custom_field_id)
                .await?;
            entity_envelope("customField", &custom_field)
        },
    );

    registry.register::<CreateCustomFieldParams, _, _>(
        "create_location_custom_field",
        "Create a new location custom field",
        |client, params| async move {
            let custom_field = client
                .locations_extended()
                .create_location_custom_field(
                    &params.location_id,
                    &LocationCustomFieldCreate {
                        name: params.name,
                        data_type: params.data_type,
                        placeholder: params.placeholder,
                        position: params.position,
                        model: params.model,
                        picklist_options: params.picklist_options,
                    },
                )
                .await?;
            entity_envelope("customField", &custom_field)
        },
    );

    registry.register::<UpdateCustomFieldParams, _, _>(
        "update_location_custom_field",
        "Update a location custom field",
        |client, params| async move {
            let custom_field = client
                .locations_extended()
                .update_location_custom_field(
                    &params.location_id,
                    &params.custom_field_id,
                    &LocationCustomFieldUpdate {
                        name: params.name,
                        placeholder: params.placeholder,
                        position: params.position,
                        picklist_options: params.picklist_options,
                    },
                )
                .await?;
            entity_envelope("customField", &custom_field)
        },
    );

    registry.register::<CustomFieldParams, _, _>(
        "delete_location_custom_field",
        "Delete a location custom field",
        |client, params| async move {
            let status = client
                .locations_extended()
                .delete_location_custom_field(&params.location_id, &params.custom_field_id)
                .await?;
            Ok(message_envelope(status.success, &status.message))
        },
    );

    // Templates and task search

    registry.register::<ListSubResourceParams, _, _>(
        "get_location_templates",
        "Get all templates for a location",
        |client, params| async move {
            let page = client
                .locations_extended()
                .get_location_templates(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("templates", &page)
        },
    );

    registry.register::<SearchLocationTasksParams, _, _>(
        "search_location_tasks",
        "Search tasks for a location",
        |client, params| async move {
            let filters = LocationTaskSearchFilters {
                contact_id: params.contact_id,
                assigned_to: params.assigned_to,
                completed: params.completed,
                query: params.query,
            };
            let page = client
                .locations_extended()
                .search_location_tasks(
                    &params.location_id,
                    Some(&filters),
                    params.limit,
                    params.skip,
                )
                .await?;
            page_envelope("tasks", &page)
        },
    );
}
