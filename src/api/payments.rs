//! Payment order, subscription, transaction, and integration endpoints.

use super::resource::{decode_entity, decode_page, to_body};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{
    Page, PaymentIntegration, PaymentIntegrationCreate, PaymentOrder, PaymentOrderFulfillment,
    PaymentOrderFulfillmentCreate, PaymentSubscription, PaymentTransaction,
};
use reqwest::Method;
use std::sync::Arc;

/// Client for payment-related endpoints
pub struct PaymentsClient {
    transport: Arc<ApiTransport>,
}

impl PaymentsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all payment orders for a location
    pub async fn get_payment_orders(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<PaymentOrder>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/payments/orders/")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "orders").await
    }

    /// Get a specific payment order
    pub async fn get_payment_order(
        &self,
        order_id: &str,
        location_id: &str,
    ) -> Result<PaymentOrder, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, format!("/payments/orders/{order_id}"))
                    .location(location_id),
            )
            .await?;
        decode_entity(response, "order").await
    }

    /// Get all fulfillments for a payment order
    pub async fn get_order_fulfillments(
        &self,
        order_id: &str,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<PaymentOrderFulfillment>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/payments/orders/{order_id}/fulfillments"),
                )
                .query(query)
                .location(location_id),
            )
            .await?;
        decode_page(response, "fulfillments").await
    }

    /// Create a new fulfillment for a payment order
    pub async fn create_order_fulfillment(
        &self,
        order_id: &str,
        fulfillment: &PaymentOrderFulfillmentCreate,
        location_id: &str,
    ) -> Result<PaymentOrderFulfillment, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::POST,
                    format!("/payments/orders/{order_id}/fulfillments"),
                )
                .body(to_body(fulfillment)?)
                .location(location_id),
            )
            .await?;
        decode_entity(response, "fulfillment").await
    }

    /// Get all payment subscriptions for a location
    pub async fn get_payment_subscriptions(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<PaymentSubscription>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/payments/subscriptions/")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "subscriptions").await
    }

    /// Get a specific payment subscription
    pub async fn get_payment_subscription(
        &self,
        subscription_id: &str,
        location_id: &str,
    ) -> Result<PaymentSubscription, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/payments/subscriptions/{subscription_id}"),
                )
                .location(location_id),
            )
            .await?;
        decode_entity(response, "subscription").await
    }

    /// Get all payment transactions for a location
    pub async fn get_payment_transactions(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<PaymentTransaction>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/payments/transactions/")
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "transactions").await
    }

    /// Get a specific payment transaction
    pub async fn get_payment_transaction(
        &self,
        transaction_id: &str,
        location_id: &str,
    ) -> Result<PaymentTransaction, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/payments/transactions/{transaction_id}"),
                )
                .location(location_id),
            )
            .await?;
        decode_entity(response, "transaction").await
    }

    /// Get the whitelabel payment integration for a location
    pub async fn get_payment_integration(
        &self,
        location_id: &str,
    ) -> Result<PaymentIntegration, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, "/payments/integrations/provider/whitelabel")
                    .location(location_id),
            )
            .await?;
        decode_entity(response, "integration").await
    }

    /// Create or configure a whitelabel payment integration
    pub async fn create_payment_integration(
        &self,
        integration: &PaymentIntegrationCreate,
        location_id: &str,
    ) -> Result<PaymentIntegration, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::POST, "/payments/integrations/provider/whitelabel")
                    .body(to_body(integration)?)
                    .location(location_id),
            )
            .await?;
        decode_entity(response, "integration").await
    }
}
