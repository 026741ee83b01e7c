//! User tools.

use super::default_limit;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{UserCreate, UserPermissions, UserUpdate};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetUsersParams {
    /// Optional location filter
    pub location_id: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetUserParams {
    pub user_id: String,
}

/// Simplified permission flags exposed on the tool surface.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PermissionFlags {
    pub campaigns_enabled: Option<bool>,
    pub campaigns_read_only: Option<bool>,
    pub contacts_enabled: Option<bool>,
    pub workflows_enabled: Option<bool>,
    pub workflows_read_only: Option<bool>,
    pub opportunities_enabled: Option<bool>,
    pub appointments_enabled: Option<bool>,
    pub conversations_enabled: Option<bool>,
    pub settings_enabled: Option<bool>,
}

impl PermissionFlags {
    /// A permissions object is only sent when the caller mentioned at least
    /// one flag; sending an all-null object would clear server-side flags.
    fn build(&self) -> Option<UserPermissions> {
        let supplied = self.campaigns_enabled.is_some()
            || self.campaigns_read_only.is_some()
            || self.contacts_enabled.is_some()
            || self.workflows_enabled.is_some()
            || self.workflows_read_only.is_some()
            || self.opportunities_enabled.is_some()
            || self.appointments_enabled.is_some()
            || self.conversations_enabled.is_some()
            || self.settings_enabled.is_some();
        if !supplied {
            return None;
        }
        Some(UserPermissions {
            campaigns_enabled: self.campaigns_enabled,
            campaigns_read_only: self.campaigns_read_only,
            contacts_enabled: self.contacts_enabled,
            workflows_enabled: self.workflows_enabled,
            workflows_read_only: self.workflows_read_only,
            opportunities_enabled: self.opportunities_enabled,
            appointments_enabled: self.appointments_enabled,
            conversations_enabled: self.conversations_enabled,
            settings_enabled: self.settings_enabled,
            ..Default::default()
        })
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateUserParams {
    /// Company the user will be created under
    pub company_id: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub extension: Option<String>,
    #[serde(flatten)]
    pub permissions: PermissionFlags,
    pub roles: Option<Vec<String>>,
    pub location_ids: Option<Vec<String>>,
    pub profile_photo: Option<String>,
    pub user_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateUserParams {
    pub user_id: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub extension: Option<String>,
    #[serde(flatten)]
    pub permissions: PermissionFlags,
    pub roles: Option<Vec<String>>,
    pub location_ids: Option<Vec<String>>,
    pub profile_photo: Option<String>,
    pub user_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteUserParams {
    pub user_id: String,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetUsersParams, _, _>(
        "get_users",
        "Get users, optionally filtered to a location",
        |client, params| async move {
            let page = client
                .users()
                .get_users(params.location_id.as_deref(), params.limit, params.skip)
                .await?;
            page_envelope("users", &page)
        },
    );

    registry.register::<GetUserParams, _, _>(
        "get_user",
        "Get a single user by ID",
        |client, params| async move {
            let user = client.users().get_user(&params.user_id).await?;
            entity_envelope("user", &user)
        },
    );

    registry.register::<CreateUserParams, _, _>(
        "create_user",
        "Create a new user in GoHighLevel",
        |client, params| async move {
            let user_data = UserCreate {
                company_id: params.company_id,
                name: params.name,
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                phone: params.phone,
                extension: params.extension,
                permissions: params.permissions.build(),
                roles: params.roles,
                location_ids: params.location_ids,
                profile_photo: params.profile_photo,
                user_type: params.user_type,
            };

            let user = client.users().create_user(&user_data).await?;
            entity_envelope("user", &user)
        },
    );

    registry.register::<UpdateUserParams, _, _>(
        "update_user",
        "Update an existing user in GoHighLevel",
        |client, params| async move {
            let update_data = UserUpdate {
                name: params.name,
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                phone: params.phone,
                extension: params.extension,
                permissions: params.permissions.build(),
                roles: params.roles,
                location_ids: params.location_ids,
                profile_photo: params.profile_photo,
                user_type: params.user_type,
            };

            let user = client
                .users()
                .update_user(&params.user_id, &update_data)
                .await?;
            entity_envelope("user", &user)
        },
    );

    registry.register::<DeleteUserParams, _, _>(
        "delete_user",
        "Delete a user from GoHighLevel",
        |client, params| async move {
            let success = client.users().delete_user(&params.user_id).await?;
            let message = if success {
                "User deleted successfully"
            } else {
                "Failed to delete user"
            };
            Ok(message_envelope(success, message))
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_flags() -> PermissionFlags {
        PermissionFlags {
            campaigns_enabled: None,
            campaigns_read_only: None,
            contacts_enabled: None,
            workflows_enabled: None,
            workflows_read_only: None,
            opportunities_enabled: None,
            appointments_enabled: None,
            conversations_enabled: None,
            settings_enabled: None,
        }
    }

    #[test]
    fn test_permissions_omitted_when_no_flag_supplied() {
        assert!(empty_flags().build().is_none());
    }

    #[test]
    fn test_permissions_built_when_flag_supplied_even_false() {
        let mut flags = empty_flags();
        flags.contacts_enabled = Some(false);
        let permissions = flags.build().unwrap();
        assert_eq!(permissions.contacts_enabled, Some(false));
        assert!(permissions.campaigns_enabled.is_none());
    }
}
