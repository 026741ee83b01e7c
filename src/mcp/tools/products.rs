//! Product and product price tools.

use super::default_limit;
use crate::mcp::{entity_envelope, message_envelope, page_envelope, ToolRegistry};
use crate::models::{
    ProductCreate, ProductPriceCreate, ProductPriceRecurring, ProductPriceUpdate, ProductUpdate,
};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProductsParams {
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProductParams {
    pub product_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateProductParams {
    pub location_id: String,
    pub name: String,
    pub description: Option<String>,
    /// PHYSICAL, DIGITAL, or SERVICE
    pub product_type: Option<String>,
    pub available_in_store: Option<bool>,
    pub image: Option<String>,
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProductParams {
    pub product_id: String,
    pub location_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub product_type: Option<String>,
    pub available_in_store: Option<bool>,
    pub image: Option<String>,
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteProductParams {
    pub product_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProductPricesParams {
    pub product_id: String,
    pub location_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProductPriceParams {
    pub product_id: String,
    pub price_id: String,
    pub location_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateProductPriceParams {
    pub product_id: String,
    pub location_id: String,
    pub name: String,
    /// one_time or recurring
    pub price_type: String,
    pub currency: String,
    /// Amount in minor units
    pub amount: i64,
    /// Billing interval for recurring prices: day, week, month, year
    pub recurring_interval: Option<String>,
    pub recurring_interval_count: Option<i64>,
    pub compare_at_price: Option<i64>,
    pub track_inventory: Option<bool>,
    pub available_quantity: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProductPriceParams {
    pub product_id: String,
    pub price_id: String,
    pub location_id: String,
    pub name: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<i64>,
    pub compare_at_price: Option<i64>,
    pub track_inventory: Option<bool>,
    pub available_quantity: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteProductPriceParams {
    pub product_id: String,
    pub price_id: String,
    pub location_id: String,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetProductsParams, _, _>(
        "get_products",
        "Get all products for a location",
        |client, params| async move {
            let page = client
                .products()
                .get_products(&params.location_id, params.limit, params.skip)
                .await?;
            page_envelope("products", &page)
        },
    );

    registry.register::<GetProductParams, _, _>(
        "get_product",
        "Get a single product by ID",
        |client, params| async move {
            let product = client
                .products()
                .get_product(&params.product_id, &params.location_id)
                .await?;
            entity_envelope("product", &product)
        },
    );

    registry.register::<CreateProductParams, _, _>(
        "create_product",
        "Create a new product",
        |client, params| async move {
            let product_data = ProductCreate {
                location_id: params.location_id,
                name: params.name,
                description: params.description,
                product_type: params.product_type,
                available_in_store: params.available_in_store,
                variants: None,
                medias: None,
                image: params.image,
                statement_descriptor: params.statement_descriptor,
            };
            let product = client.products().create_product(&product_data).await?;
            entity_envelope("product", &product)
        },
    );

    registry.register::<UpdateProductParams, _, _>(
        "update_product",
        "Update an existing product",
        |client, params| async move {
            let update_data = ProductUpdate {
                name: params.name,
                description: params.description,
                product_type: params.product_type,
                available_in_store: params.available_in_store,
                variants: None,
                medias: None,
                image: params.image,
                statement_descriptor: params.statement_descriptor,
            };
            let product = client
                .products()
                .update_product(&params.product_id, &update_data, &params.location_id)
                .await?;
            entity_envelope("product", &product)
        },
    );

    registry.register::<DeleteProductParams, _, _>(
        "delete_product",
        "Delete a product",
        |client, params| async move {
            let success = client
                .products()
                .delete_product(&params.product_id, &params.location_id)
                .await?;
            let message = if success {
                "Product deleted successfully"
            } else {
                "Failed to delete product"
            };
            Ok(message_envelope(success, message))
        },
    );

    registry.register::<GetProductPricesParams, _, _>(
        "get_product_prices",
        "Get all prices for a product",
        |client, params| async move {
            let page = client
                .products()
                .get_product_prices(
                    &params.product_id,
                    &params.location_id,
                    params.limit,
                    params.skip,
                )
                .await?;
            page_envelope("prices", &page)
        },
    );

    registry.register::<GetProductPriceParams, _, _>(
        "get_product_price",
        "Get a single product price by ID",
        |client, params| async move {
            let price = client
                .products()
                .get_product_price(&params.product_id, &params.price_id, &params.location_id)
                .await?;
            entity_envelope("price", &price)
        },
    );

    registry.register::<CreateProductPriceParams, _, _>(
        "create_product_price",
        "Create a new price for a product",
        |client, params| async move {
            let recurring = match (params.recurring_interval, params.recurring_interval_count) {
                (Some(interval), count) => Some(ProductPriceRecurring {
                    interval,
                    interval_count: count.unwrap_or(1),
                }),
                (None, _) => None,
            };
            let price_data = ProductPriceCreate {
                name: params.name,
                price_type: params.price_type,
                currency: params.currency,
                amount: params.amount,
                recurring,
                compare_at_price: params.compare_at_price,
                track_inventory: params.track_inventory,
                available_quantity: params.available_quantity,
            };
            let price = client
                .products()
                .create_product_price(&params.product_id, &price_data, &params.location_id)
                .await?;
            entity_envelope("price", &price)
        },
    );

    registry.register::<UpdateProductPriceParams, _, _>(
        "update_product_price",
        "Update an existing product price",
        |client, params| async move {
            let update_data = ProductPriceUpdate {
                name: params.name,
                currency: params.currency,
                amount: params.amount,
                compare_at_price: params.compare_at_price,
                track_inventory: params.track_inventory,
                available_quantity: params.available_quantity,
            };
            let price = client
                .products()
                .update_product_price(
                    &params.product_id,
                    &params.price_id,
                    &update_data,
                    &params.location_id,
                )
                .await?;
            entity_envelope("price", &price)
        },
    );

    registry.register::<DeleteProductPriceParams, _, _>(
        "delete_product_price",
        "Delete a product price",
        |client, params| async move {
            let success = client
                .products()
                .delete_product_price(&params.product_id, &params.price_id, &params.location_id)
                .await?;
            let message = if success {
                "Price deleted successfully"
            } else {
                "Failed to delete price"
            };
            Ok(message_envelope(success, message))
        },
    );
}
