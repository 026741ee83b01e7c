//! Mock implementations for testing.
//!
//! Provides a mock `AccessTokenProvider` so transport behavior can be tested
//! without a live OAuth collaborator.

use crate::auth::{AccessTokenProvider, AuthError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock token provider that records every location scope it was asked for.
#[derive(Debug, Default)]
pub struct MockTokenProvider {
    token: String,
    pub requested_scopes: Arc<Mutex<Vec<Option<String>>>>,
    should_fail: bool,
}

impl MockTokenProvider {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
            requested_scopes: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub async fn get_requested_scopes(&self) -> Vec<Option<String>> {
        self.requested_scopes.lock().await.clone()
    }
}

#[async_trait]
impl AccessTokenProvider for MockTokenProvider {
    async fn access_token(&self, location_id: Option<&str>) -> Result<String, AuthError> {
        if self.should_fail {
            return Err(AuthError::InvalidToken("mock token failure".to_string()));
        }

        let mut scopes = self.requested_scopes.lock().await;
        scopes.push(location_id.map(String::from));
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_records_scopes() {
        let provider = MockTokenProvider::new("tok");
        provider.access_token(Some("loc_1")).await.unwrap();
        provider.access_token(None).await.unwrap();

        let scopes = provider.get_requested_scopes().await;
        assert_eq!(scopes, vec![Some("loc_1".to_string()), None]);
    }

    #[tokio::test]
    async fn test_mock_provider_failure_mode() {
        let provider = MockTokenProvider::with_failure();
        let result = provider.access_token(None).await;
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
