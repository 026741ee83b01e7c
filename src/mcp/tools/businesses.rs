//! Business tools.

use super::default_limit;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{BusinessAddress, BusinessCreate, BusinessUpdate};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetBusinessesParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetBusinessParams {
    pub business_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateBusinessParams {
    pub location_id: String,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub employee_count: Option<i64>,
    pub annual_revenue: Option<f64>,
    pub custom_fields: Option<HashMap<String, String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateBusinessParams {
    pub business_id: String,
    pub location_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub employee_count: Option<i64>,
    pub annual_revenue: Option<f64>,
    pub custom_fields: Option<HashMap<String, String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteBusinessParams {
    pub business_id: String,
    pub location_id: String,
}

struct AddressFields<'a> {
    address1: Option<&'a String>,
    address2: Option<&'a String>,
    city: Option<&'a String>,
    state: Option<&'a String>,
    country: Option<&'a String>,
    postal_code: Option<&'a String>,
}

/// Build the nested address only when at least one flat field was supplied;
/// an all-empty address object would clear the server-side one on update.
fn build_address(fields: AddressFields<'_>) -> Option<BusinessAddress> {
    let supplied = fields.address1.is_some()
        || fields.address2.is_some()
        || fields.city.is_some()
        || fields.state.is_some()
        || fields.country.is_some()
        || fields.postal_code.is_some();
    if !supplied {
        return None;
    }
    Some(BusinessAddress {
        address1: fields.address1.cloned(),
        address2: fields.address2.cloned(),
        city: fields.city.cloned(),
        state: fields.state.cloned(),
        country: fields.country.cloned(),
        postal_code: fields.postal_code.cloned(),
    })
}

fn custom_fields_from_map(fields: &HashMap<String, String>) -> Vec<Value> {
    fields
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .collect()
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetBusinessesParams, _, _>(
        "get_businesses",
        "Get all businesses for a location",
        |client, params| async move {
            let page = client
                .businesses()
                .get_businesses(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("businesses", &page)
        },
    );

    registry.register::<GetBusinessParams, _, _>(
        "get_business",
        "Get a single business by ID",
        |client, params| async move {
            let business = client
                .businesses()
                .get_business(&params.business_id, &params.location_id)
                .await?;
            entity_envelope("business", &business)
        },
    );

    registry.register::<CreateBusinessParams, _, _>(
        "create_business",
        "Create a new business in GoHighLevel",
        |client, params| async move {
            let address = build_address(AddressFields {
                address1: params.address1.as_ref(),
                address2: params.address2.as_ref(),
                city: params.city.as_ref(),
                state: params.state.as_ref(),
                country: params.country.as_ref(),
                postal_code: params.postal_code.as_ref(),
            });

            let business_data = BusinessCreate {
                location_id: params.location_id,
                name: params.name,
                description: params.description,
                website: params.website,
                phone: params.phone,
                email: params.email,
                address,
                logo_url: params.logo_url,
                industry: params.industry,
                employee_count: params.employee_count,
                annual_revenue: params.annual_revenue,
                custom_fields: params.custom_fields.as_ref().map(custom_fields_from_map),
                tags: params.tags,
            };

            let business = client.businesses().create_business(&business_data).await?;
            entity_envelope("business", &business)
        },
    );

    registry.register::<UpdateBusinessParams, _, _>(
        "update_business",
        "Update an existing business in GoHighLevel",
        |client, params| async move {
            let address = build_address(AddressFields {
                address1: params.address1.as_ref(),
                address2: params.address2.as_ref(),
                city: params.city.as_ref(),
                state: params.state.as_ref(),
                country: params.country.as_ref(),
                postal_code: params.postal_code.as_ref(),
            });

            let update_data = BusinessUpdate {
                name: params.name,
                description: params.description,
                website: params.website,
                phone: params.phone,
                email: params.email,
                address,
                logo_url: params.logo_url,
                industry: params.industry,
                employee_count: params.employee_count,
                annual_revenue: params.annual_revenue,
                custom_fields: params.custom_fields.as_ref().map(custom_fields_from_map),
                tags: params.tags,
            };

            let business = client
                .businesses()
                .update_business(&params.business_id, &update_data, &params.location_id)
                .await?;
            entity_envelope("business", &business)
        },
    );

    registry.register::<DeleteBusinessParams, _, _>(
        "delete_business",
        "Delete a business from GoHighLevel",
        |client, params| async move {
            let success = client
                .businesses()
                .delete_business(&params.business_id, &params.location_id)
                .await?;
            let message = if success {
                "Business deleted successfully"
            } else {
                "Failed to delete business"
            };
            Ok(message_envelope(success, message))
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_omitted_when_no_field_supplied() {
        let address = build_address(AddressFields {
            address1: None,
            address2: None,
            city: None,
            state: None,
            country: None,
            postal_code: None,
        });
        assert!(address.is_none());
    }

    #[test]
    fn test_address_built_from_single_field() {
        let city = "Atlanta".to_string();
        let address = build_address(AddressFields {
            address1: None,
            address2: None,
            city: Some(&city),
            state: None,
            country: None,
            postal_code: None,
        });
        let address = address.unwrap();
        assert_eq!(address.city.as_deref(), Some("Atlanta"));
        assert!(address.address1.is_none());
    }
}
