//! Typed clients for the vendor's REST API.
//!
//! Every resource group shares one marshaling contract: pagination via
//! `limit`/`skip` (skip omitted at zero), envelope keys with a bare-body
//! fallback, null-dropping serialization, and per-endpoint delete-success
//! status sets. The shared mechanics live in [`transport`] and
//! [`resource`]; the per-group modules add only what genuinely differs.

pub mod businesses;
pub mod calendar_admin;
pub mod calendars;
pub mod campaigns;
pub mod client;
pub mod contacts;
pub mod conversations;
pub mod forms;
pub mod links;
pub mod locations;
pub mod locations_extended;
pub mod oauth_management;
pub mod opportunities;
pub mod payments;
pub mod products;
mod resource;
pub mod surveys;
pub mod transport;
pub mod users;
pub mod workflows;

pub use businesses::BusinessesClient;
pub use calendar_admin::CalendarAdminClient;
pub use calendars::CalendarsClient;
pub use campaigns::CampaignsClient;
pub use client::GoHighLevelClient;
pub use contacts::{ContactSearchFilters, ContactsClient};
pub use conversations::{ConversationSearchFilters, ConversationsClient};
pub use forms::FormsClient;
pub use links::LinksClient;
pub use locations::LocationsClient;
pub use locations_extended::LocationsExtendedClient;
pub use oauth_management::OAuthManagementClient;
pub use opportunities::OpportunitiesClient;
pub use payments::PaymentsClient;
pub use products::ProductsClient;
pub use surveys::SurveysClient;
pub use transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor, TransportConfig};
pub use users::UsersClient;
pub use workflows::WorkflowsClient;
