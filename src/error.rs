//! Crate-level error types.
//!
//! Module-specific errors (`ApiError`, `AuthError`, `ToolError`, `ConfigError`)
//! live next to the code that raises them; this enum aggregates them at the
//! public API boundary.

use thiserror::Error;

/// Main error type for GoHighLevel SDK operations
#[derive(Debug, Error)]
pub enum GhlError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),

    #[error("Authentication error: {0}")]
    Auth(#[from] crate::auth::AuthError),

    #[error("Tool error: {0}")]
    Tool(#[from] crate::mcp::ToolError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GhlError {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type for SDK operations
pub type GhlResult<T> = Result<T, GhlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_constructor() {
        let error = GhlError::internal("unexpected state");
        assert!(matches!(error, GhlError::Internal { .. }));
        assert_eq!(error.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_api_error_conversion() {
        let api = crate::api::ApiError::Network("connection refused".to_string());
        let error: GhlError = api.into();
        assert!(error.to_string().contains("connection refused"));
    }
}
