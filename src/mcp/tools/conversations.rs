//! Conversation and message tools.

use super::default_limit;
use crate::api::ConversationSearchFilters;
use crate::mcp::{entity_envelope, page_envelope, ToolRegistry};
use crate::models::{ConversationCreate, MessageCreate};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchConversationsParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
    pub contact_id: Option<String>,
    pub starred: Option<bool>,
    pub unread_only: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetConversationParams {
    pub conversation_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateConversationParams {
    pub location_id: String,
    pub contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetMessagesParams {
    pub conversation_id: String,
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SendMessageParams {
    pub conversation_id: String,
    pub location_id: String,
    /// Channel: SMS, Email, ...
    pub message_type: String,
    pub message: String,
    pub subject: Option<String>,
    pub html: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateMessageStatusParams {
    pub message_id: String,
    pub location_id: String,
    pub status: String,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<SearchConversationsParams, _, _>(
        "search_conversations",
        "Search conversations in a location",
        |client, params| async move {
            let filters = ConversationSearchFilters {
                contact_id: params.contact_id,
                starred: params.starred,
                unread_only: params.unread_only,
            };
            let page = client
                .conversations()
                .get_conversations(&params.location_id, params.limit, params.skip, &filters)
                .await?;
            page_envelope("conversations", &page)
        },
    );

    registry.register::<GetConversationParams, _, _>(
        "get_conversation",
        "Get a single conversation by ID",
        |client, params| async move {
            let conversation = client
                .conversations()
                .get_conversation(&params.conversation_id, &params.location_id)
                .await?;
            entity_envelope("conversation", &conversation)
        },
    );

    registry.register::<CreateConversationParams, _, _>(
        "create_conversation",
        "Create a new conversation",
        |client, params| async move {
            let conversation_data = ConversationCreate {
                location_id: params.location_id,
                contact_id: params.contact_id,
            };
            let conversation = client
                .conversations()
                .create_conversation(&conversation_data)
                .await?;
            entity_envelope("conversation", &conversation)
        },
    );

    registry.register::<GetMessagesParams, _, _>(
        "get_messages",
        "Get messages for a conversation",
        |client, params| async move {
            let page = client
                .conversations()
                .get_messages(
                    &params.conversation_id,
                    &params.location_id,
                    params.limit,
                    params.skip,
                )
                .await?;
            page_envelope("messages", &page)
        },
    );

    registry.register::<SendMessageParams, _, _>(
        "send_message",
        "Send a message in a conversation",
        |client, params| async move {
            let message_data = MessageCreate {
                message_type: params.message_type,
                message: params.message,
                subject: params.subject,
                html: params.html,
                attachments: None,
            };
            let message = client
                .conversations()
                .send_message(&params.conversation_id, &message_data, &params.location_id)
                .await?;
            entity_envelope("message", &message)
        },
    );

    registry.register::<UpdateMessageStatusParams, _, _>(
        "update_message_status",
        "Update the delivery status of a message",
        |client, params| async move {
            let message = client
                .conversations()
                .update_message_status(&params.message_id, &params.status, &params.location_id)
                .await?;
            entity_envelope("message", &message)
        },
    );
}
