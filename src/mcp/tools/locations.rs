//! Location tools. Create/update pass the vendor's flat field shape
//! straight through.

use super::default_limit;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{LocationCreate, LocationUpdate};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetLocationParams {
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchLocationsParams {
    pub company_id: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
    /// Search query for location names
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateLocationParams {
    pub company_id: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub timezone: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_type: Option<String>,
    pub allow_duplicate_contact: Option<bool>,
    pub allow_duplicate_opportunity: Option<bool>,
    pub allow_facebook_name_merge: Option<bool>,
    pub disable_contact_timezone: Option<bool>,
    pub stripe_product_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateLocationParams {
    pub location_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub timezone: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_type: Option<String>,
    pub allow_duplicate_contact: Option<bool>,
    pub allow_duplicate_opportunity: Option<bool>,
    pub allow_facebook_name_merge: Option<bool>,
    pub disable_contact_timezone: Option<bool>,
    pub stripe_product_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteLocationParams {
    pub location_id: String,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetLocationParams, _, _>(
        "get_location",
        "Get a single location by ID",
        |client, params| async move {
            let location = client.locations().get_location(&params.location_id).await?;
            entity_envelope("location", &location)
        },
    );

    registry.register::<SearchLocationsParams, _, _>(
        "search_locations",
        "Search locations with filters",
        |client, params| async move {
            let page = client
                .locations()
                .search_locations(
                    params.company_id.as_deref(),
                    params.limit,
                    params.skip,
                    params.query.as_deref(),
                )
                .await?;
            page_envelope("locations", &page)
        },
    );

    registry.register::<CreateLocationParams, _, _>(
        "create_location",
        "Create a new location in GoHighLevel",
        |client, params| async move {
            let location_data = LocationCreate {
                company_id: params.company_id,
                name: params.name,
                address: params.address,
                city: params.city,
                state: params.state,
                country: params.country,
                postal_code: params.postal_code,
                logo_url: params.logo_url,
                website: params.website,
                timezone: params.timezone,
                email: params.email,
                phone: params.phone,
                business_type: params.business_type,
                allow_duplicate_contact: params.allow_duplicate_contact,
                allow_duplicate_opportunity: params.allow_duplicate_opportunity,
                allow_facebook_name_merge: params.allow_facebook_name_merge,
                disable_contact_timezone: params.disable_contact_timezone,
                stripe_product_id: params.stripe_product_id,
            };

            let location = client.locations().create_location(&location_data).await?;
            entity_envelope("location", &location)
        },
    );

    registry.register::<UpdateLocationParams, _, _>(
        "update_location",
        "Update an existing location in GoHighLevel",
        |client, params| async move {
            let update_data = LocationUpdate {
                name: params.name,
                address: params.address,
                city: params.city,
                state: params.state,
                country: params.country,
                postal_code: params.postal_code,
                logo_url: params.logo_url,
                website: params.website,
                timezone: params.timezone,
                email: params.email,
                phone: params.phone,
                business_type: params.business_type,
                allow_duplicate_contact: params.allow_duplicate_contact,
                allow_duplicate_opportunity: params.allow_duplicate_opportunity,
                allow_facebook_name_merge: params.allow_facebook_name_merge,
                disable_contact_timezone: params.disable_contact_timezone,
                stripe_product_id: params.stripe_product_id,
            };

            let location = client
                .locations()
                .update_location(&params.location_id, &update_data)
                .await?;
            entity_envelope("location", &location)
        },
    );

    registry.register::<DeleteLocationParams, _, _>(
        "delete_location",
        "Delete a location from GoHighLevel",
        |client, params| async move {
            let success = client.locations().delete_location(&params.location_id).await?;
            let message = if success {
                "Location deleted successfully"
            } else {
                "Failed to delete location"
            };
            Ok(message_envelope(success, message))
        },
    );
}
