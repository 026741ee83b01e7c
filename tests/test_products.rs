//! Integration tests for the products client and its price sub-resource.

mod common;

use common::test_client;
use ghl_mcp::models::{ProductCreate, ProductPriceCreate};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_products_trailing_slash_and_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("limit", "10"))
        .and(query_param("skip", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "products": [{"_id": "p1", "name": "Widget", "locationId": "loc_1"}],
            "total": 31
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client.products().get_products("loc_1", 10, 10).await.unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.total, 31);
    // `_id` alias decodes into id
    assert_eq!(page.items[0].id.as_deref(), Some("p1"));
}

#[tokio::test]
async fn test_get_product_decodes_bare_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_id": "p1",
            "name": "Widget",
            "productType": "PHYSICAL"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let product = client.products().get_product("p1", "loc_1").await.unwrap();
    assert_eq!(product.name, "Widget");
    assert_eq!(product.product_type.as_deref(), Some("PHYSICAL"));
}

#[tokio::test]
async fn test_create_product() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_id": "p1", "name": "Widget", "locationId": "loc_1"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let payload = ProductCreate {
        location_id: "loc_1".to_string(),
        name: "Widget".to_string(),
        description: None,
        product_type: None,
        available_in_store: None,
        variants: None,
        medias: None,
        image: None,
        statement_descriptor: None,
    };
    let product = client.products().create_product(&payload).await.unwrap();
    assert_eq!(product.id.as_deref(), Some("p1"));
}

#[tokio::test]
async fn test_product_price_paths() {
    let mock_server = MockServer::start().await;

    let price_body = serde_json::json!({
        "_id": "pr1",
        "product": "p1",
        "name": "Standard",
        "type": "one_time",
        "currency": "USD",
        "amount": 4900
    });

    Mock::given(method("GET"))
        .and(path("/products/p1/price/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "prices": [price_body.clone()],
            "total": 1
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/products/p1/price/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_body.clone()))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/p1/price/pr1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());

    let page = client
        .products()
        .get_product_prices("p1", "loc_1", 100, 0)
        .await
        .unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].amount, 4900);

    let created = client
        .products()
        .create_product_price(
            "p1",
            &ProductPriceCreate {
                name: "Standard".to_string(),
                price_type: "one_time".to_string(),
                currency: "USD".to_string(),
                amount: 4900,
                recurring: None,
                compare_at_price: None,
                track_inventory: None,
                available_quantity: None,
            },
            "loc_1",
        )
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("pr1"));

    let fetched = client
        .products()
        .get_product_price("p1", "pr1", "loc_1")
        .await
        .unwrap();
    assert_eq!(fetched.price_type, "one_time");
}

#[tokio::test]
async fn test_delete_product_and_price_status_semantics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/products/p1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/products/p2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/products/p1/price/pr1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    assert!(client.products().delete_product("p1", "loc_1").await.unwrap());
    assert!(!client.products().delete_product("p2", "loc_1").await.unwrap());
    assert!(client
        .products()
        .delete_product_price("p1", "pr1", "loc_1")
        .await
        .unwrap());
}
