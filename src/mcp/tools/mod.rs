//! Built-in tool registrations, one module per resource group.

use super::ToolRegistry;

pub mod businesses;
pub mod calendar_admin;
pub mod calendars;
pub mod campaigns;
pub mod contact_assignment;
pub mod contact_notes;
pub mod contact_tasks;
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
pub mod surveys;
pub mod users;
pub mod workflows;

/// Register every built-in tool.
pub fn register_all(registry: &mut ToolRegistry) {
    contacts::register(registry);
    contact_tasks::register(registry);
    contact_notes::register(registry);
    contact_assignment::register(registry);
    conversations::register(registry);
    opportunities::register(registry);
    calendars::register(registry);
    calendar_admin::register(registry);
    forms::register(registry);
    businesses::register(registry);
    users::register(registry);
    campaigns::register(registry);
    workflows::register(registry);
    locations::register(registry);
    locations_extended::register(registry);
    products::register(registry);
    payments::register(registry);
    links::register(registry);
    surveys::register(registry);
    oauth_management::register(registry);
}

pub(crate) fn default_limit() -> u32 {
    100
}
