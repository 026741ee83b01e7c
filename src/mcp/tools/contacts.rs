//! Contact tools.

use super::default_limit;
use crate::api::ContactSearchFilters;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{ContactCreate, ContactUpdate};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

fn custom_fields_from_map(fields: &HashMap<String, String>) -> Vec<Value> {
    fields
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .collect()
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateContactParams {
    /// Location the contact belongs to
    pub location_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
    pub source: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// Custom field values keyed by field key
    pub custom_fields: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateContactParams {
    pub contact_id: String,
    pub location_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub custom_fields: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetContactParams {
    pub contact_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteContactParams {
    pub contact_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchContactsParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
    /// Free-text search query
    pub query: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ManageTagsParams {
    pub contact_id: String,
    pub location_id: String,
    pub tags: Vec<String>,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<CreateContactParams, _, _>(
        "create_contact",
        "Create a new contact in GoHighLevel",
        |client, params| async move {
            let contact_data = ContactCreate {
                location_id: params.location_id,
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                phone: params.phone,
                tags: params.tags,
                source: params.source,
                company_name: params.company_name,
                address1: params.address,
                city: params.city,
                state: params.state,
                postal_code: params.postal_code,
                custom_fields: params.custom_fields.as_ref().map(custom_fields_from_map),
            };

            let contact = client.contacts().create_contact(&contact_data).await?;
            entity_envelope("contact", &contact)
        },
    );

    registry.register::<UpdateContactParams, _, _>(
        "update_contact",
        "Update an existing contact in GoHighLevel",
        |client, params| async move {
            let update_data = ContactUpdate {
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                phone: params.phone,
                tags: params.tags,
                company_name: params.company_name,
                address1: params.address,
                city: params.city,
                state: params.state,
                postal_code: params.postal_code,
                custom_fields: params.custom_fields.as_ref().map(custom_fields_from_map),
            };

            let contact = client
                .contacts()
                .update_contact(&params.contact_id, &update_data, &params.location_id)
                .await?;
            entity_envelope("contact", &contact)
        },
    );

    registry.register::<DeleteContactParams, _, _>(
        "delete_contact",
        "Delete a contact from GoHighLevel",
        |client, params| async move {
            let success = client
                .contacts()
                .delete_contact(&params.contact_id, &params.location_id)
                .await?;
            let message = if success {
                "Contact deleted successfully"
            } else {
                "Failed to delete contact"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<GetContactParams, _, _>(
        "get_contact",
        "Get a single contact by ID",
        |client, params| async move {
            let contact = client
                .contacts()
                .get_contact(&params.contact_id, &params.location_id)
                .await?;
            entity_envelope("contact", &contact)
        },
    );

    registry.register::<SearchContactsParams, _, _>(
        "search_contacts",
        "Search contacts in a location",
        |client, params| async move {
            let filters = ContactSearchFilters {
                query: params.query,
                email: params.email,
                phone: params.phone,
                tags: params.tags,
            };
            let page = client
                .contacts()
                .get_contacts(&params.location_id, params.limit, params.skip, &filters)
                .await?;
            page_envelope("contacts", &page)
        },
    );

    registry.register::<ManageTagsParams, _, _>(
        "add_contact_tags",
        "Add tags to a contact",
        |client, params| async move {
            let contact = client
                .contacts()
                .add_contact_tags(&params.contact_id, &params.tags, &params.location_id)
                .await?;
            entity_envelope("contact", &contact)
        },
    );

    registry.register::<ManageTagsParams, _, _>(
        "remove_contact_tags",
        "Remove tags from a contact",
        |client, params| async move {
            let contact = client
                .contacts()
                .remove_contact_tags(&params.contact_id, &params.tags, &params.location_id)
                .await?;
            entity_envelope("contact", &contact)
        },
    );
}
