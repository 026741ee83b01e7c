//! Payment order, subscription, transaction, and integration tools.

use super::default_limit;
use crate::mcp::{entity_envelope, page_envelope, ToolRegistry};
use crate::models::{PaymentIntegrationCreate, PaymentOrderFulfillmentCreate};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListByLocationParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetOrderParams {
    pub order_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetOrderFulfillmentsParams {
    pub order_id: String,
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateOrderFulfillmentParams {
    pub order_id: String,
    pub location_id: String,
    pub tracking_number: Option<String>,
    pub tracking_url: Option<String>,
    pub carrier: Option<String>,
    /// Whether to notify the customer
    pub notify: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSubscriptionParams {
    pub subscription_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTransactionParams {
    pub transaction_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetIntegrationParams {
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateIntegrationParams {
    pub location_id: String,
    pub provider: String,
    pub configuration: HashMap<String, Value>,
    pub credentials: Option<HashMap<String, Value>>,
    pub webhook_url: Option<String>,
    pub is_active: Option<bool>,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<ListByLocationParams, _, _>(
        "get_payment_orders",
        "Get all payment orders for a location",
        |client, params| async move {
            let page = client
                .payments()
                .get_payment_orders(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("orders", &page)
        },
    );

    registry.register::<GetOrderParams, _, _>(
        "get_payment_order",
        "Get a single payment order by ID",
        |client, params| async move {
            let order = client
                .payments()
                .get_payment_order(&params.order_id, &params.location_id)
                .await?;
            entity_envelope("order", &order)
        },
    );

    registry.register::<GetOrderFulfillmentsParams, _, _>(
        "get_order_fulfillments",
        "Get all fulfillments for a payment order",
        |client, params| async move {
            let page = client
                .payments()
                .get_order_fulfillments(
                    &params.order_id,
                    &params.location_id,
                    params.limit,
                    params.skip,
                )
                .await?;
            page_envelope("fulfillments", &page)
        },
    );

    registry.register::<CreateOrderFulfillmentParams, _, _>(
        "create_order_fulfillment",
        "Create a fulfillment for a payment order",
        |client, params| async move {
            let fulfillment_data = PaymentOrderFulfillmentCreate {
                tracking_number: params.tracking_number,
                tracking_url: params.tracking_url,
                carrier: params.carrier,
                items: None,
                notify: params.notify,
            };
            let fulfillment = client
                .payments()
                .create_order_fulfillment(&params.order_id, &fulfillment_data, &params.location_id)
                .await?;
            entity_envelope("fulfillment", &fulfillment)
        },
    );

    registry.register::<ListByLocationParams, _, _>(
        "get_payment_subscriptions",
        "Get all payment subscriptions for a location",
        |client, params| async move {
            let page = client
                .payments()
                .get_payment_subscriptions(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("subscriptions", &page)
        },
    );

    registry.register::<GetSubscriptionParams, _, _>(
        "get_payment_subscription",
        "Get a single payment subscription by ID",
        |client, params| async move {
            let subscription = client
                .payments()
                .get_payment_subscription(&params.subscription_id, &params.location_id)
                .await?;
            entity_envelope("subscription", &subscription)
        },
    );

    registry.register::<ListByLocationParams, _, _>(
        "get_payment_transactions",
        "Get all payment transactions for a location",
        |client, params| async move {
            let page = client
                .payments()
                .get_payment_transactions(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("transactions", &page)
        },
    );

    registry.register::<GetTransactionParams, _, _>(
        "get_payment_transaction",
        "Get a single payment transaction by ID",
        |client, params| async move {
            let transaction = client
                .payments()
                .get_payment_transaction(&params.transaction_id, &params.location_id)
                .await?;
            entity_envelope("transaction", &transaction)
        },
    );

    registry.register::<GetIntegrationParams, _, _>(
        "get_payment_integration",
        "Get the whitelabel payment integration for a location",
        |client, params| async move {
            let integration = client
                .payments()
                .get_payment_integration(&params.location_id)
                .await?;
            entity_envelope("integration", &integration)
        },
    );

    registry.register::<CreateIntegrationParams, _, _>(
        "create_payment_integration",
        "Create or configure a whitelabel payment integration",
        |client, params| async move {
            let integration_data = PaymentIntegrationCreate {
                provider: params.provider,
                configuration: params.configuration,
                credentials: params.credentials,
                webhook_url: params.webhook_url,
                is_active: params.is_active,
            };
            let integration = client
                .payments()
                .create_payment_integration(&integration_data, &params.location_id)
                .await?;
            entity_envelope("integration", &integration)
        },
    );
}
