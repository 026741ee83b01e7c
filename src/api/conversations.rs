//! Conversation and message endpoints.

use super::resource::{decode_entity, decode_page, to_body, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{Conversation, ConversationCreate, Message, MessageCreate, Page};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

const CONVERSATIONS: ResourceDescriptor = ResourceDescriptor {
    collection: "/conversations",
    item: "/conversations",
    singular: "conversation",
    plural: "conversations",
    delete_success: &[200],
};

/// Optional filters for conversation search.
#[derive(Debug, Clone, Default)]
pub struct ConversationSearchFilters {
    pub contact_id: Option<String>,
    pub starred: Option<bool>,
    pub unread_only: Option<bool>,
}

/// Client for conversation endpoints
pub struct ConversationsClient {
    transport: Arc<ApiTransport>,
}

impl ConversationsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get conversations for a location
    pub async fn get_conversations(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
        filters: &ConversationSearchFilters,
    ) -> Result<Page<Conversation>, ApiError> {
        let query = QueryParams::new()
            .push("locationId", location_id)
            .page(limit, skip)
            .push_opt("contactId", filters.contact_id.as_deref())
            .push_opt("starred", filters.starred)
            .push_opt("unreadOnly", filters.unread_only);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/conversations/search")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "conversations").await
    }

    /// Get a specific conversation
    pub async fn get_conversation(
        &self,
        conversation_id: &str,
        location_id: &str,
    ) -> Result<Conversation, ApiError> {
        self.transport
            .get_resource(&CONVERSATIONS, conversation_id, Some(location_id))
            .await
    }

    /// Create a new conversation
    pub async fn create_conversation(
        &self,
        conversation: &ConversationCreate,
    ) -> Result<Conversation, ApiError> {
        self.transport
            .create_resource(&CONVERSATIONS, conversation, Some(&conversation.location_id))
            .await
    }

    /// Get messages for a conversation
    pub async fn get_messages(
        &self,
        conversation_id: &str,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<Message>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/conversations/{conversation_id}/messages"),
                )
                .query(query)
                .location(location_id),
            )
            .await?;
        decode_page(response, "messages").await
    }

    /// Send a message in a conversation
    pub async fn send_message(
        &self,
        conversation_id: &str,
        message: &MessageCreate,
        location_id: &str,
    ) -> Result<Message, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::POST,
                    format!("/conversations/{conversation_id}/messages"),
                )
                .body(to_body(message)?)
                .location(location_id),
            )
            .await?;
        decode_entity(response, "message").await
    }

    /// Update the delivery status of a message
    pub async fn update_message_status(
        &self,
        message_id: &str,
        status: &str,
        location_id: &str,
    ) -> Result<Message, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/conversations/messages/{message_id}/status"),
                )
                .body(json!({ "status": status }))
                .location(location_id),
            )
            .await?;
        decode_entity(response, "message").await
    }
}
