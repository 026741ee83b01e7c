//! Contact note tools.

use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{NoteCreate, NoteUpdate};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetContactNotesParams {
    pub contact_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetContactNoteParams {
    pub contact_id: String,
    pub note_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateContactNoteParams {
    pub contact_id: String,
    pub location_id: String,
    pub body: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateContactNoteParams {
    pub contact_id: String,
    pub note_id: String,
    pub location_id: String,
    pub body: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteContactNoteParams {
    pub contact_id: String,
    pub note_id: String,
    pub location_id: String,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetContactNotesParams, _, _>(
        "get_contact_notes",
        "Get all notes for a contact",
        |client, params| async move {
            let page = client
                .contacts()
                .get_contact_notes(&params.contact_id, &params.location_id)
                .await?;
            page_envelope("notes", &page)
        },
    );

    registry.register::<GetContactNoteParams, _, _>(
        "get_contact_note",
        "Get a specific note for a contact",
        |client, params| async move {
            let note = client
                .contacts()
                .get_contact_note(&params.contact_id, &params.note_id, &params.location_id)
                .await?;
            entity_envelope("note", &note)
        },
    );

    registry.register::<CreateContactNoteParams, _, _>(
        "create_contact_note",
        "Create a new note for a contact",
        |client, params| async move {
            let note_data = NoteCreate { body: params.body };
            let note = client
                .contacts()
                .create_contact_note(&params.contact_id, &note_data, &params.location_id)
                .await?;
            entity_envelope("note", &note)
        },
    );

    registry.register::<UpdateContactNoteParams, _, _>(
        "update_contact_note",
        "Update an existing note for a contact",
        |client, params| async move {
            let update_data = NoteUpdate { body: params.body };
            let note = client
                .contacts()
                .update_contact_note(
                    &params.contact_id,
                    &params.note_id,
                    &update_data,
                    &params.location_id,
                )
                .await?;
            entity_envelope("note", &note)
        },
    );

    registry.register::<DeleteContactNoteParams, _, _>(
        "delete_contact_note",
        "Delete a note for a contact",
        |client, params| async move {
            let success = client
                .contacts()
                .delete_contact_note(&params.contact_id, &params.note_id, &params.location_id)
                .await?;
            let message = if success {
                "Note deleted successfully"
            } else {
                "Failed to delete note"
            };
            Ok(message_envelope(success, message))
        },
    );
}
