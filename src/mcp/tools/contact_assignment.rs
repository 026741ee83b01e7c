//! Campaign and workflow assignment tools for contacts.

use crate::mcp::{message_envelope, ToolRegistry};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CampaignAssignmentParams {
    pub contact_id: String,
    pub campaign_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkflowAssignmentParams {
    pub contact_id: String,
    pub workflow_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RemoveAllCampaignsParams {
    pub contact_id: String,
    pub location_id: String,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<CampaignAssignmentParams, _, _>(
        "add_contact_to_campaign",
        "Add a contact to a campaign",
        |client, params| async move {
            let success = client
                .contacts()
                .add_contact_to_campaign(&params.contact_id, &params.campaign_id, &params.location_id)
                .await?;
            let message = if success {
                "Contact added to campaign"
            } else {
                "Failed to add contact to campaign"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<CampaignAssignmentParams, _, _>(
        "remove_contact_from_campaign",
        "Remove a contact from a specific campaign",
        |client, params| async move {
            let success = client
                .contacts()
                .remove_contact_from_campaign(
                    &params.contact_id,
                    &params.campaign_id,
                    &params.location_id,
                )
                .await?;
            let message = if success {
                "Contact removed from campaign"
            } else {
                "Failed to remove contact from campaign"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<RemoveAllCampaignsParams, _, _>(
        "remove_contact_from_all_campaigns",
        "Remove a contact from all campaigns",
        |client, params| async move {
            let success = client
                .contacts()
                .remove_contact_from_all_campaigns(&params.contact_id, &params.location_id)
                .await?;
            let message = if success {
                "Contact removed from all campaigns"
            } else {
                "Failed to remove contact from campaigns"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<WorkflowAssignmentParams, _, _>(
        "add_contact_to_workflow",
        "Add a contact to a workflow",
        |client, params| async move {
            let success = client
                .contacts()
                .add_contact_to_workflow(&params.contact_id, &params.workflow_id, &params.location_id)
                .await?;
            let message = if success {
                "Contact added to workflow"
            } else {
                "Failed to add contact to workflow"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<WorkflowAssignmentParams, _, _>(
        "remove_contact_from_workflow",
        "Remove a contact from a workflow",
        |client, params| async move {
            let success = client
                .contacts()
                .remove_contact_from_workflow(
                    &params.contact_id,
                    &params.workflow_id,
                    &params.location_id,
                )
                .await?;
            let message = if success {
                "Contact removed from workflow"
            } else {
                "Failed to remove contact from workflow"
            };
            Ok(message_envelope(success, message))
        },
    );
}
