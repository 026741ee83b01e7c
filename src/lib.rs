//! Typed Rust SDK and MCP tool layer for the GoHighLevel CRM API.
//!
//! # Overview
//!
//! This crate provides:
//! - One typed client per vendor resource group (contacts, conversations,
//!   opportunities, calendars, businesses, users, campaigns, workflows,
//!   locations, products, payments, links, surveys, OAuth management)
//!   behind a [`api::GoHighLevelClient`] facade
//! - A shared request/decode engine handling pagination, envelope
//!   unwrapping, and per-endpoint delete semantics
//! - A tool registry ([`mcp::ToolRegistry`]) exposing every operation under
//!   a uniform `{success, <key>, count, total}` calling convention with
//!   JSON Schema parameter validation
//!
//! # Quick Start
//!
//! ```no_run
//! use ghl_mcp::api::{GoHighLevelClient, ContactSearchFilters, TransportConfig};
//! use ghl_mcp::auth::StaticTokenProvider;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), ghl_mcp::GhlError> {
//! let auth = Arc::new(StaticTokenProvider::new("token"));
//! let client = GoHighLevelClient::new(TransportConfig::default(), auth)?;
//!
//! let page = client
//!     .contacts()
//!     .get_contacts("loc_1", 100, 0, &ContactSearchFilters::default())
//!     .await?;
//! println!("{} of {} contacts", page.count, page.total);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod observability;
pub mod testing;

pub use api::{ApiError, GoHighLevelClient, TransportConfig};
pub use auth::{AccessTokenProvider, AuthError, StaticTokenProvider};
pub use config::{ConfigError, ServerConfig};
pub use error::{GhlError, GhlResult};
pub use mcp::{ToolDescription, ToolError, ToolRegistry};
