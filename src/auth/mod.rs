//! Access token collaborator interface.
//!
//! The SDK treats authentication as an external capability: every outgoing
//! request asks the provider for a bearer token, optionally scoped to a
//! location. Token acquisition and refresh live behind this trait.

use async_trait::async_trait;
use thiserror::Error;

/// Authentication errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("No access token configured")]
    NotConfigured,
    #[error("Access token expired or invalid: {0}")]
    InvalidToken(String),
    #[error("Token request failed: {0}")]
    RequestFailed(String),
}

/// Supplies bearer tokens for outgoing API requests.
///
/// Called once per request. `location_id` carries the tenant scope when the
/// operation is location-scoped; providers that hold a single agency token
/// may ignore it.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self, location_id: Option<&str>) -> Result<String, AuthError>;
}

/// Token provider backed by a single long-lived token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self, _location_id: Option<&str>) -> Result<String, AuthError> {
        if self.token.is_empty() {
            return Err(AuthError::NotConfigured);
        }
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_token() {
        let provider = StaticTokenProvider::new("tok-123");
        let token = provider.access_token(None).await.unwrap();
        assert_eq!(token, "tok-123");
    }

    #[tokio::test]
    async fn test_static_provider_ignores_location_scope() {
        let provider = StaticTokenProvider::new("tok-123");
        let token = provider.access_token(Some("loc_1")).await.unwrap();
        assert_eq!(token, "tok-123");
    }

    #[tokio::test]
    async fn test_empty_token_is_not_configured() {
        let provider = StaticTokenProvider::new("");
        let result = provider.access_token(None).await;
        assert!(matches!(result, Err(AuthError::NotConfigured)));
    }
}
