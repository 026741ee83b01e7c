//! User DTOs.
//!
//! `UserPermissions` mirrors the vendor's full permission flag set; all
//! flags are optional so a partial permission object never clears flags the
//! caller did not mention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaigns_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaigns_read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflows_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflows_read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funnels_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub websites_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunities_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_stats_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_requests_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_listings_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_call_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversations_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_data_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adwords_reporting_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_ads_reporting_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributions_reporting_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_value_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_reporting_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_planner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blogging_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_manager_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_ai_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunds_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_payment_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communities_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_payments_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<UserPermissions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub company_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<UserPermissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<UserPermissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_serialize_camel_case() {
        let permissions = UserPermissions {
            campaigns_enabled: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&permissions).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["campaignsEnabled"], true);
    }

    #[test]
    fn test_user_type_maps_to_type_key() {
        let updates = UserUpdate {
            user_type: Some("account".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&updates).unwrap();
        assert_eq!(json["type"], "account");
    }
}
