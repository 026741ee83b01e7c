//! User endpoints. Users are agency-scoped; the location filter is optional.

use super::resource::ResourceDescriptor;
use super::transport::{ApiError, ApiTransport, QueryParams};
use crate::models::{Page, User, UserCreate, UserUpdate};
use std::sync::Arc;

const USERS: ResourceDescriptor = ResourceDescriptor {
    collection: "/users",
    item: "/users",
    singular: "user",
    plural: "users",
    delete_success: &[200],
};

/// Client for user-related endpoints
pub struct UsersClient {
    transport: Arc<ApiTransport>,
}

impl UsersClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get users, optionally filtered to a location
    pub async fn get_users(
        &self,
        location_id: Option<&str>,
        limit: u32,
        skip: u32,
    ) -> Result<Page<User>, ApiError> {
        let query = QueryParams::new()
            .page(limit, skip)
            .push_opt("locationId", location_id);
        self.transport.list_resource(&USERS, query, None).await
    }

    /// Get a specific user by ID
    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.transport.get_resource(&USERS, user_id, None).await
    }

    /// Create a new user
    pub async fn create_user(&self, user: &UserCreate) -> Result<User, ApiError> {
        self.transport.create_resource(&USERS, user, None).await
    }

    /// Update an existing user
    pub async fn update_user(&self, user_id: &str, updates: &UserUpdate) -> Result<User, ApiError> {
        self.transport
            .update_resource(&USERS, user_id, updates, None)
            .await
    }

    /// Delete a user; success is status 200 exactly
    pub async fn delete_user(&self, user_id: &str) -> Result<bool, ApiError> {
        self.transport.delete_resource(&USERS, user_id, None).await
    }
}
