//! Transient DTOs mirroring the vendor API's JSON shapes.
//!
//! Entities are created on response decode and handed to the caller; nothing
//! here is cached or persisted. Create/Update structs drop unset optional
//! fields at serialization time so a partial update never sends explicit
//! nulls.

pub mod business;
pub mod calendar;
pub mod campaign;
pub mod contact;
pub mod conversation;
pub mod form;
pub mod link;
pub mod location;
pub mod note;
pub mod oauth;
pub mod opportunity;
pub mod payment;
pub mod product;
pub mod survey;
pub mod task;
pub mod user;
pub mod workflow;

use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
///
/// `count` is always the number of items in this page. `total` is the
/// server-reported total when one was present, otherwise `count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result shape for the delete endpoints that answer with a message rather
/// than a bare status (links, location tags/custom values/custom fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStatus {
    pub success: bool,
    pub message: String,
}

pub use business::{Business, BusinessAddress, BusinessCreate, BusinessUpdate};
pub use calendar::{
    Appointment, AppointmentCreate, AppointmentUpdate, BlockSlotCreate, BlockSlotUpdate, Calendar,
    CalendarCreate, CalendarGroup, CalendarUpdate, FreeSlotsResult,
};
pub use campaign::Campaign;
pub use contact::{Contact, ContactCreate, ContactUpdate};
pub use conversation::{Conversation, ConversationCreate, Message, MessageCreate};
pub use form::{Form, FormSubmission};
pub use link::{Link, LinkCreate, LinkUpdate};
pub use location::{
    Location, LocationAddress, LocationCreate, LocationCustomField, LocationCustomFieldCreate,
    LocationCustomFieldUpdate, LocationCustomValue, LocationCustomValueCreate,
    LocationCustomValueUpdate, LocationSettings, LocationTag, LocationTagCreate, LocationTagUpdate,
    LocationTask, LocationTaskSearchFilters, LocationTemplate, LocationUpdate,
};
pub use note::{Note, NoteCreate, NoteUpdate};
pub use oauth::{
    InstalledLocation, LocationToken, LocationTokenRequest, SaasSubscription,
    SaasSubscriptionUpdate,
};
pub use opportunity::{
    Opportunity, OpportunityCreate, OpportunitySearchFilters, OpportunityUpdate, Pipeline,
    PipelineStage,
};
pub use payment::{
    PaymentIntegration, PaymentIntegrationCreate, PaymentOrder, PaymentOrderFulfillment,
    PaymentOrderFulfillmentCreate, PaymentSubscription, PaymentTransaction,
};
pub use product::{
    Product, ProductCreate, ProductPrice, ProductPriceCreate, ProductPriceRecurring,
    ProductPriceUpdate, ProductUpdate,
};
pub use survey::{Survey, SurveySubmission};
pub use task::{Task, TaskCreate, TaskUpdate};
pub use user::{User, UserCreate, UserPermissions, UserUpdate};
pub use workflow::Workflow;
