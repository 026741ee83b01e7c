//! Contact task tools.

use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{TaskCreate, TaskUpdate};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetContactTasksParams {
    pub contact_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetContactTaskParams {
    pub contact_id: String,
    pub task_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateContactTaskParams {
    pub contact_id: String,
    pub location_id: String,
    pub title: String,
    pub body: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    /// User ID to assign the task to
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateContactTaskParams {
    pub contact_id: String,
    pub task_id: String,
    pub location_id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteContactTaskParams {
    pub contact_id: String,
    pub task_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CompleteContactTaskParams {
    pub contact_id: String,
    pub task_id: String,
    pub location_id: String,
    pub completed: bool,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetContactTasksParams, _, _>(
        "get_contact_tasks",
        "Get all tasks for a contact",
        |client, params| async move {
            let page = client
                .contacts()
                .get_contact_tasks(&params.contact_id, &params.location_id)
                .await?;
            page_envelope("tasks", &page)
        },
    );

    registry.register::<GetContactTaskParams, _, _>(
        "get_contact_task",
        "Get a specific task for a contact",
        |client, params| async move {
            let task = client
                .contacts()
                .get_contact_task(&params.contact_id, &params.task_id, &params.location_id)
                .await?;
            entity_envelope("task", &task)
        },
    );

    registry.register::<CreateContactTaskParams, _, _>(
        "create_contact_task",
        "Create a new task for a contact",
        |client, params| async move {
            let task_data = TaskCreate {
                title: params.title,
                body: params.body,
                due_date: params.due_date,
                assigned_to: params.assigned_to,
                completed: params.completed,
            };
            let task = client
                .contacts()
                .create_contact_task(&params.contact_id, &task_data, &params.location_id)
                .await?;
            entity_envelope("task", &task)
        },
    );

    registry.register::<UpdateContactTaskParams, _, _>(
        "update_contact_task",
        "Update an existing task for a contact",
        |client, params| async move {
            let update_data = TaskUpdate {
                title: params.title,
                body: params.body,
                due_date: params.due_date,
                assigned_to: params.assigned_to,
                completed: params.completed,
            };
            let task = client
                .contacts()
                .update_contact_task(
                    &params.contact_id,
                    &params.task_id,
                    &update_data,
                    &params.location_id,
                )
                .await?;
            entity_envelope("task", &task)
        },
    );

    registry.register::<DeleteContactTaskParams, _, _>(
        "delete_contact_task",
        "Delete a task for a contact",
        |client, params| async move {
            let success = client
                .contacts()
                .delete_contact_task(&params.contact_id, &params.task_id, &params.location_id)
                .await?;
            let message = if success {
                "Task deleted successfully"
            } else {
                "Failed to delete task"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<CompleteContactTaskParams, _, _>(
        "complete_contact_task",
        "Mark a contact task as completed or incomplete",
        |client, params| async move {
            let task = client
                .contacts()
                .complete_contact_task(
                    &params.contact_id,
                    &params.task_id,
                    params.completed,
                    &params.location_id,
                )
                .await?;
            entity_envelope("task", &task)
        },
    );
}
