//! HTTP transport for the vendor API.
//!
//! Every operation in the SDK funnels through [`ApiTransport::request`]: one
//! request descriptor in, one `reqwest::Response` out. The transport fetches
//! a bearer token from the [`AccessTokenProvider`] once per request, attaches
//! the required `Version` header, and maps non-2xx statuses to
//! [`ApiError::Status`]. It never retries.

use crate::auth::AccessTokenProvider;
use crate::config::ApiSection;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Transport-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("API request failed: {status} - {message}")]
    Status { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Response decode failed: {0}")]
    Decode(String),
}

/// Transport configuration
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: String,
    pub version: String,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: "https://services.leadconnectorhq.com".to_string(),
            version: "2021-07-28".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&ApiSection> for TransportConfig {
    fn from(section: &ApiSection) -> Self {
        Self {
            base_url: section.base_url.clone(),
            version: section.version.clone(),
            timeout: Duration::from_secs(section.timeout_secs),
        }
    }
}

/// Query parameter set with omit-if-absent semantics.
///
/// `skip` is a wire-compatibility special case: the vendor expects the
/// parameter to be missing entirely when the offset is zero, so
/// [`QueryParams::page`] never emits `skip=0`.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter unconditionally.
    pub fn push<V: std::fmt::Display>(mut self, key: &str, value: V) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn push_opt<V: std::fmt::Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Append pagination parameters: `limit` always, `skip` only when > 0.
    pub fn page(self, limit: u32, skip: u32) -> Self {
        let params = self.push("limit", limit);
        if skip > 0 {
            params.push("skip", skip)
        } else {
            params
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

/// One outgoing request. Constructed fresh per call; never reused.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
    pub location_id: Option<String>,
}

impl RequestDescriptor {
    pub fn new<P: Into<String>>(method: Method, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
            location_id: None,
        }
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Scope the auth lookup to a location.
    pub fn location<S: Into<String>>(mut self, location_id: S) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn location_opt(mut self, location_id: Option<&str>) -> Self {
        self.location_id = location_id.map(String::from);
        self
    }
}

/// Shared HTTP transport; one instance backs every resource client.
pub struct ApiTransport {
    http: Client,
    base_url: String,
    version: String,
    auth: Arc<dyn AccessTokenProvider>,
}

impl ApiTransport {
    pub fn new(
        config: TransportConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        url::Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            version: config.version,
            auth,
        })
    }

    /// Execute one request. Non-2xx responses become [`ApiError::Status`];
    /// 2xx responses are returned whole so callers that key off the exact
    /// status (delete, toggles) can inspect it.
    pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Response, ApiError> {
        let token = self
            .auth
            .access_token(descriptor.location_id.as_deref())
            .await
            .map_err(|e| ApiError::Auth(e.to_string()))?;

        let url = format!("{}{}", self.base_url, descriptor.path);
        let mut request = self
            .http
            .request(descriptor.method.clone(), &url)
            .bearer_auth(token)
            .header("Version", &self.version)
            .header("Accept", "application/json");

        if !descriptor.query.is_empty() {
            request = request.query(descriptor.query.as_slice());
        }
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        tracing::debug!(
            method = %descriptor.method,
            path = %descriptor.path,
            location_id = descriptor.location_id.as_deref().unwrap_or(""),
            "sending API request"
        );

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_omits_skip_when_zero() {
        let params = QueryParams::new().push("locationId", "loc_1").page(100, 0);
        let keys: Vec<&str> = params.as_slice().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["locationId", "limit"]);
    }

    #[test]
    fn test_page_includes_positive_skip() {
        let params = QueryParams::new().page(50, 25);
        assert_eq!(
            params.as_slice(),
            &[
                ("limit".to_string(), "50".to_string()),
                ("skip".to_string(), "25".to_string())
            ]
        );
    }

    #[test]
    fn test_push_opt_drops_none() {
        let params = QueryParams::new()
            .push_opt("query", Some("ada"))
            .push_opt("email", None::<&str>);
        assert_eq!(params.as_slice().len(), 1);
        assert_eq!(params.as_slice()[0].0, "query");
    }

    #[test]
    fn test_descriptor_builder() {
        let descriptor = RequestDescriptor::new(Method::GET, "/contacts")
            .query(QueryParams::new().page(10, 0))
            .location("loc_1");
        assert_eq!(descriptor.path, "/contacts");
        assert_eq!(descriptor.location_id.as_deref(), Some("loc_1"));
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn test_transport_rejects_invalid_base_url() {
        let config = TransportConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        let auth = Arc::new(crate::auth::StaticTokenProvider::new("tok"));
        let result = ApiTransport::new(config, auth);
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_transport_config_from_api_section() {
        let section = crate::config::ApiSection::default();
        let config = TransportConfig::from(&section);
        assert_eq!(config.base_url, "https://services.leadconnectorhq.com");
        assert_eq!(config.version, "2021-07-28");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
