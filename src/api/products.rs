//! Product endpoints plus the price sub-resource.
//!
//! The products service answers single entities unwrapped; the shared
//! fallback rule handles that without special casing.

use super::resource::{decode_entity, decode_page, to_body, ResourceDescriptor};
use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::{
    Page, Product, ProductCreate, ProductPrice, ProductPriceCreate, ProductPriceUpdate,
    ProductUpdate,
};
use reqwest::Method;
use std::sync::Arc;

const PRODUCTS: ResourceDescriptor = ResourceDescriptor {
    collection: "/products/",
    item: "/products",
    singular: "product",
    plural: "products",
    delete_success: &[200],
};

/// Client for product endpoints
pub struct ProductsClient {
    transport: Arc<ApiTransport>,
}

impl ProductsClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Get all products for a location
    pub async fn get_products(
        &self,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<Product>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        self.transport
            .list_resource(&PRODUCTS, query, Some(location_id))
            .await
    }

    /// Get a specific product
    pub async fn get_product(
        &self,
        product_id: &str,
        location_id: &str,
    ) -> Result<Product, ApiError> {
        self.transport
            .get_resource(&PRODUCTS, product_id, Some(location_id))
            .await
    }

    /// Create a new product
    pub async fn create_product(&self, product: &ProductCreate) -> Result<Product, ApiError> {
        self.transport
            .create_resource(&PRODUCTS, product, Some(&product.location_id))
            .await
    }

    /// Update an existing product
    pub async fn update_product(
        &self,
        product_id: &str,
        updates: &ProductUpdate,
        location_id: &str,
    ) -> Result<Product, ApiError> {
        self.transport
            .update_resource(&PRODUCTS, product_id, updates, Some(location_id))
            .await
    }

    /// Delete a product; success is status 200 exactly
    pub async fn delete_product(
        &self,
        product_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        self.transport
            .delete_resource(&PRODUCTS, product_id, Some(location_id))
            .await
    }

    // Price sub-resource

    /// Get all prices for a product
    pub async fn get_product_prices(
        &self,
        product_id: &str,
        location_id: &str,
        limit: u32,
        skip: u32,
    ) -> Result<Page<ProductPrice>, ApiError> {
        let query = QueryParams::new().page(limit, skip);
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::GET, format!("/products/{product_id}/price/"))
                    .query(query)
                    .location(location_id),
            )
            .await?;
        decode_page(response, "prices").await
    }

    /// Get a specific product price
    pub async fn get_product_price(
        &self,
        product_id: &str,
        price_id: &str,
        location_id: &str,
    ) -> Result<ProductPrice, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::GET,
                    format!("/products/{product_id}/price/{price_id}"),
                )
                .location(location_id),
            )
            .await?;
        decode_entity(response, "price").await
    }

    /// Create a new product price
    pub async fn create_product_price(
        &self,
        product_id: &str,
        price: &ProductPriceCreate,
        location_id: &str,
    ) -> Result<ProductPrice, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(Method::POST, format!("/products/{product_id}/price/"))
                    .body(to_body(price)?)
                    .location(location_id),
            )
            .await?;
        decode_entity(response, "price").await
    }

    /// Update an existing product price
    pub async fn update_product_price(
        &self,
        product_id: &str,
        price_id: &str,
        updates: &ProductPriceUpdate,
        location_id: &str,
    ) -> Result<ProductPrice, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/products/{product_id}/price/{price_id}"),
                )
                .body(to_body(updates)?)
                .location(location_id),
            )
            .await?;
        decode_entity(response, "price").await
    }

    /// Delete a product price; success is status 200 exactly
    pub async fn delete_product_price(
        &self,
        product_id: &str,
        price_id: &str,
        location_id: &str,
    ) -> Result<bool, ApiError> {
        let response = self
            .transport
            .request(
                RequestDescriptor::new(
                    Method::DELETE,
                    format!("/products/{product_id}/price/{price_id}"),
                )
                .location(location_id),
            )
            .await?;
        Ok(response.status().as_u16() == 200)
    }
}
