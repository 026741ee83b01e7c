//! OAuth management tools.

use super::default_limit;
use crate::mcp::{entity_envelope, page_envelope, ToolRegistry};
use crate::models::{LocationTokenRequest, SaasSubscriptionUpdate};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetInstalledLocationsParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateLocationTokenParams {
    pub location_id: String,
    pub scope: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateSaasSubscriptionParams {
    pub location_id: String,
    pub plan_id: Option<String>,
    pub status: Option<String>,
    pub billing_cycle: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub trial_end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetInstalledLocationsParams, _, _>(
        "get_installed_locations",
        "Get all locations where the OAuth application is installed",
        |client, params| async move {
            let page = client
                .oauth_management()
                .get_installed_locations(params.limit, params.skip)
                .await?;
            page_envelope("locations", &page)
        },
    );

    registry.register::<GenerateLocationTokenParams, _, _>(
        "generate_location_token",
        "Generate an OAuth token for a specific location",
        |client, params| async move {
            let request = LocationTokenRequest {
                location_id: params.location_id,
                scope: params.scope,
            };
            let token = client
                .oauth_management()
                .generate_location_token(&request)
                .await?;
            entity_envelope("token", &token)
        },
    );

    registry.register::<UpdateSaasSubscriptionParams, _, _>(
        "update_saas_subscription",
        "Update the SaaS subscription for a location",
        |client, params| async move {
            let update_data = SaasSubscriptionUpdate {
                plan_id: params.plan_id,
                status: params.status,
                billing_cycle: params.billing_cycle,
                amount: params.amount,
                currency: params.currency,
                start_date: params.start_date,
                end_date: params.end_date,
                trial_end_date: params.trial_end_date,
                is_active: params.is_active,
            };
            let subscription = client
                .oauth_management()
                .update_saas_subscription(&params.location_id, &update_data)
                .await?;
            entity_envelope("subscription", &subscription)
        },
    );
}
