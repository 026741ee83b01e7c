//! Contact endpoints, including the task/note sub-resources and the
//! campaign/workflow assignment toggles.

use super::resource::{decode_entity, decode_page, to_body, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{
    Contact, ContactCreate, ContactUpdate, Note, NoteCreate, NoteUpdate, Page, Task, TaskCreate,
    TaskUpdate,
};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

const CONTACTS: ResourceDescriptor = ResourceDescriptor {
    collection: "/contacts",
    item: "/contacts",
    singular: "contact",
    plural: "contacts",
    delete_success: &[200],
};

/// Optional filters for contact search.
#[derive(Debug, Clone, Default)]
pub struct ContactSearchFilters {
    pub query: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Client for contact-related endpoints
pub struct ContactsClient {
    transport: Arc<ApiTransport>,
}

impl ContactsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get contacts for a location
    pub async fn get_contacts(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
        filters: &ContactSearchFilters,
    ) -> Result<Page<Contact>, ApiError> {
        let mut query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip)
            .push_opt("query", filters.query.as_deref())
            .push_opt("email", filters.email.as_deref())
            .push_opt("phone", filters.phone.as_deref());
        if let Some(tags) = &filters.tags {
            if !tags.is_empty() {
                query = query.push("tags", tags.join(","));
            }
        }

        self.transport
            .list_resource(&CONTACTS, query, Some(location_id))
            .await
    }

    /// Get a specific contact
    pub async fn get_contact(
        &self,
        contact_id: &str,
        location_id: &str,
    ) -> Result<Contact, ApiError> {
        self.transport
            .get_resource(&CONTACTS, contact_id, Some(location_id))
            .await
    }

    /// Create a new contact
    pub async fn create_contact(&self, contact: &ContactCreate) -> Result<Contact, ApiError> {
        self.transport
            .create_resource(&CONTACTS, contact, Some(&contact.location_id))
            .await
    }

    /// Update an existing contact; only provided fields are sent
    pub async fn update_contact(
        &self,
        contact_id: &str,
        updates: &ContactUpdate,
        location_id: &str,
    ) -> Result<Contact, ApiError> {
        self.transport
            .update_resource(&CONTACTS, contact_id, updates, Some(location_id))
            .await
    }

    /// Delete a contact; success is status 200 exactly
    pub async fn delete_contact(
        &self,
        contact_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        self.transport
            .delete_resource(&CONTACTS, contact_id, Some(location_id))
            .await
    }

    /// Add tags to a contact.
    ///
    /// The tags endpoint answers with only `{tags, tagsAdded}`, so a
    /// follow-up fetch of the full contact is mandatory.
    pub async fn add_contact_tags(
        &self,
        contact_id: &str,
        tags: &[String],
        location_id: &str,
    ) -> Result<Contact, ApiError> {
        self.transport
            .request(
                RequestDescriptor::new(Method::POST, format!("/contacts/{contact_id}/tags"))
                    .body(json!({ "tags": tags }))
                    .location(location_id),
            )
            .await?;
        self.get_contact(contact_id, location_id).await
    }

    /// Remove tags from a contact; same follow-up fetch as
    /// [`Self::add_contact_tags`].
    pub async fn remove_contact_tags(
        &self,
        contact_id: &str,
        tags: &[String],
        location_id: &str,
    ) -> Result<Contact, ApiError> {
        self.transport
            .request(
                RequestDescriptor::new(Method::DELETE, format!("/contacts/{contact_id}/tags"))
                    .body(json!({ "tags": tags }))
                    .location(location_id),
            )
            .await?;
        self.get_contact(contact_id, location_id).await
    }

    // Contact task sub-resource

    /// Get all tasks for a contact
    pub async fn get_contact_tasks(
        &self,
        contact_id: &str,
        location_id: &str,
    ) -> Result<Page<Task>, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, format!("/contacts/{contact_id}/tasks"))
                    .location(location_id),
            )
            .await?;
        decode_page(response, "tasks").await
    }

    /// Get a specific task for a contact
    pub async fn get_contact_task(
        &self,
        contact_id: &str,
        task_id: &str,
        location_id: &str,
    ) -> Result<Task, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/contacts/{contact_id}/tasks/{task_id}"),
                )
                .location(location_id),
            )
            .await?;
        decode_entity(response, "task").await
    }

    /// Create a new task for a contact
    pub async fn create_contact_task(
        &self,
        contact_id: &str,
        task: &TaskCreate,
        location_id: &str,
    ) -> Result<Task, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::POST, format!("/contacts/{contact_id}/tasks"))
                    .body(to_body(task)?)
                    .location(location_id),
            )
            .await?;
        decode_entity(response, "task").await
    }

    /// Update an existing task for a contact
    pub async fn update_contact_task(
        &self,
        contact_id: &str,
        task_id: &str,
        updates: &TaskUpdate,
        location_id: &str,
    ) -> Result<Task, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/contacts/{contact_id}/tasks/{task_id}"),
                )
                .body(to_body(updates)?)
                .location(location_id),
            )
            .await?;
        decode_entity(response, "task").await
    }

    /// Delete a task for a contact
    pub async fn delete_contact_task(
        &self,
        contact_id: &str,
        task_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::DELETE,
                    format!("/contacts/{contact_id}/tasks/{task_id}"),
                )
                .location(location_id),
            )
            .await?;
        Ok(response.status().as_u16() == 200)
    }

    /// Mark a contact task as completed or incomplete
    pub async fn complete_contact_task(
        &self,
        contact_id: &str,
        task_id: &str,
        completed: bool,
        location_id: &str,
    ) -> Result<Task, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/contacts/{contact_id}/tasks/{task_id}/completed"),
                )
                .body(json!({ "completed": completed }))
                .location(location_id),
            )
            .await?;
        decode_entity(response, "task").await
    }

    // Contact note sub-resource

    /// Get all notes for a contact
    pub async fn get_contact_notes(
        &self,
        contact_id: &str,
        location_id: &str,
    ) -> Result<Page<Note>, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, format!("/contacts/{contact_id}/notes"))
                    .location(location_id),
            )
            .await?;
        decode_page(response, "notes").await
    }

    /// Get a specific note for a contact
    pub async fn get_contact_note(
        &self,
        contact_id: &str,
        note_id: &str,
        location_id: &str,
    ) -> Result<Note, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/contacts/{contact_id}/notes/{note_id}"),
                )
                .location(location_id),
            )
            .await?;
        decode_entity(response, "note").await
    }

    /// Create a new note for a contact
    pub async fn create_contact_note(
        &self,
        contact_id: &str,
        note: &NoteCreate,
        location_id: &str,
    ) -> Result<Note, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::POST, format!("/contacts/{contact_id}/notes"))
                    .body(to_body(note)?)
                    .location(location_id),
            )
            .await?;
        decode_entity(response, "note").await
    }

    /// Update an existing note for a contact
    pub async fn update_contact_note(
        &self,
        contact_id: &str,
        note_id: &str,
        updates: &NoteUpdate,
        location_id: &str,
    ) -> Result<Note, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/contacts/{contact_id}/notes/{note_id}"),
                )
                .body(to_body(updates)?)
                .location(location_id),
            )
            .await?;
        decode_entity(response, "note").await
    }

    /// Delete a note for a contact
    pub async fn delete_contact_note(
        &self,
        contact_id: &str,
        note_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::DELETE,
                    format!("/contacts/{contact_id}/notes/{note_id}"),
                )
                .location(location_id),
            )
            .await?;
        Ok(response.status().as_u16() == 200)
    }

    // Campaign/workflow assignment toggles

    /// Add a contact to a campaign; the vendor answers 200 or 201
    pub async fn add_contact_to_campaign(
        &self,
        contact_id: &str,
        campaign_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::POST,
                    format!("/contacts/{contact_id}/campaigns/{campaign_id}"),
                )
                .location(location_id),
            )
            .await?;
        Ok(matches!(response.status().as_u16(), 200 | 201))
    }

    /// Remove a contact from a specific campaign
    pub async fn remove_contact_from_campaign(
        &self,
        contact_id: &str,
        campaign_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::DELETE,
                    format!("/contacts/{contact_id}/campaigns/{campaign_id}"),
                )
                .location(location_id),
            )
            .await?;
        Ok(response.status().as_u16() == 200)
    }

    /// Remove a contact from all campaigns
    pub async fn remove_contact_from_all_campaigns(
        &self,
        contact_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::DELETE,
                    format!("/contacts/{contact_id}/campaigns/removeAll"),
                )
                .location(location_id),
            )
            .await?;
        Ok(response.status().as_u16() == 200)
    }

    /// Add a contact to a workflow; the vendor answers 200 or 201
    pub async fn add_contact_to_workflow(
        &self,
        contact_id: &str,
        workflow_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::POST,
                    format!("/contacts/{contact_id}/workflow/{workflow_id}"),
                )
                .location(location_id),
            )
            .await?;
        Ok(matches!(response.status().as_u16(), 200 | 201))
    }

    /// Remove a contact from a workflow
    pub async fn remove_contact_from_workflow(
        &self,
        contact_id: &str,
        workflow_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::DELETE,
                    format!("/contacts/{contact_id}/workflow/{workflow_id}"),
                )
                .location(location_id),
            )
            .await?;
        Ok(response.status().as_u16() == 200)
    }
}
