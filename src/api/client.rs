//! Facade over the per-resource clients.
//!
//! One transport instance is shared by every sub-client; callers reach a
//! resource group through its accessor rather than through re-exposed
//! delegate methods.

use super::businesses::BusinessesClient;
use super::calendar_admin::CalendarAdminClient;
use super::calendars::CalendarsClient;
use super::campaigns::CampaignsClient;
use super::contacts::ContactsClient;
use super::conversations::ConversationsClient;
use super::forms::FormsClient;
use super::links::LinksClient;
use super::locations::LocationsClient;
use super::locations_extended::LocationsExtendedClient;
use super::oauth_management::OAuthManagementClient;
use super::opportunities::OpportunitiesClient;
use super::payments::PaymentsClient;
use super::products::ProductsClient;
use super::surveys::SurveysClient;
use super::transport::{ApiError, ApiTransport, TransportConfig};
use super::users::UsersClient;
use super::workflows::WorkflowsClient;
use crate::auth::AccessTokenProvider;
use std::sync::Arc;

/// Main client for the GoHighLevel API v2.
pub struct GoHighLevelClient {
    contacts: ContactsClient,
    conversations: ConversationsClient,
    opportunities: OpportunitiesClient,
    calendars: CalendarsClient,
    calendar_admin: CalendarAdminClient,
    forms: FormsClient,
    businesses: BusinessesClient,
    users: UsersClient,
    campaigns: CampaignsClient,
    workflows: WorkflowsClient,
    locations: LocationsClient,
    locations_extended: LocationsExtendedClient,
    products: ProductsClient,
    payments: PaymentsClient,
    links: LinksClient,
    surveys: SurveysClient,
    oauth_management: OAuthManagementClient,
}

impl GoHighLevelClient {
    /// Build a client over one shared transport.
    pub fn new(
        config: TransportConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let transport = Arc::new(ApiTransport::new(config, auth)?);
        Ok(Self::with_transport(transport))
    }

    pub fn with_transport(transport: Arc<ApiTransport>) -> Self {
        Self {
            contacts: ContactsClient::new(transport.clone()),
            conversations: ConversationsClient::new(transport.clone()),
            opportunities: OpportunitiesClient::new(transport.clone()),
            calendars: CalendarsClient::new(transport.clone()),
            calendar_admin: CalendarAdminClient::new(transport.clone()),
            forms: FormsClient::new(transport.clone()),
            businesses: BusinessesClient::new(transport.clone()),
            users: UsersClient::new(transport.clone()),
            campaigns: CampaignsClient::new(transport.clone()),
            workflows: WorkflowsClient::new(transport.clone()),
            locations: LocationsClient::new(transport.clone()),
            locations_extended: LocationsExtendedClient::new(transport.clone()),
            products: ProductsClient::new(transport.clone()),
            payments: PaymentsClient::new(transport.clone()),
            links: LinksClient::new(transport.clone()),
            surveys: SurveysClient::new(transport.clone()),
            oauth_management: OAuthManagementClient::new(transport),
        }
    }

    pub fn contacts(&self) -> &ContactsClient {
        &self.contacts
    }

    pub fn conversations(&self) -> &ConversationsClient {
        &self.conversations
    }

    pub fn opportunities(&self) -> &OpportunitiesClient {
        &self.opportunities
    }

    pub fn calendars(&self) -> &CalendarsClient {
        &self.calendars
    }

    pub fn calendar_admin(&self) -> &CalendarAdminClient {
        &self.calendar_admin
    }

    pub fn forms(&self) -> &FormsClient {
        &self.forms
    }

    pub fn businesses(&self) -> &BusinessesClient {
        &self.businesses
    }

    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    pub fn campaigns(&self) -> &CampaignsClient {
        &self.campaigns
    }

    pub fn workflows(&self) -> &WorkflowsClient {
        &self.workflows
    }

    pub fn locations(&self) -> &LocationsClient {
        &self.locations
    }

    pub fn locations_extended(&self) -> &LocationsExtendedClient {
        &self.locations_extended
    }

    pub fn products(&self) -> &ProductsClient {
        &self.products
    }

    pub fn payments(&self) -> &PaymentsClient {
        &self.payments
    }

    pub fn links(&self) -> &LinksClient {
        &self.links
    }

    pub fn surveys(&self) -> &SurveysClient {
        &self.surveys
    }

    pub fn oauth_management(&self) -> &OAuthManagementClient {
        &self.oauth_management
    }
}
