use crate::common::authorised_client;
use epcc_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

const PRODUCT: &str = include_str!("../fixtures/product.json");

const CREATED_CRANE: &str = r#"{
    "data": {
        "type": "product",
        "id": "a5f3d9e0-3c3b-4a4f-9d2f-2b1c0e9b8a77",
        "name": "Origami Crane",
        "slug": "CRANE",
        "sku": "CRANE",
        "manage_stock": false,
        "description": "",
        "price": [{ "amount": 500, "currency": "USD", "includes_tax": true }],
        "status": "draft",
        "commodity_type": "physical",
        "meta": {
            "timestamps": {
                "created_at": "2020-09-04T12:00:00+00:00",
                "updated_at": "2020-09-04T12:00:00+00:00"
            },
            "stock": { "level": 0, "availability": "out-stock" }
        },
        "relationships": {}
    }
}"#;

#[tokio::test]
async fn test_get_product() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/products/78ee7c20-df84-435d-bb1d-531e3537c4dc")
        .with_status(200)
        .with_body(PRODUCT)
        .expect(1)
        .create_async()
        .await;

    let client = authorised_client(&server.url()).await;
    let product = client
        .get_product("78ee7c20-df84-435d-bb1d-531e3537c4dc")
        .await
        .unwrap();

    assert_eq!(product.data.name, "Origami Frog");
    assert_eq!(product.data.meta.unwrap().variations.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_all_products() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v2/products")
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = authorised_client(&server.url()).await;
    let products = client.get_all_products().await.unwrap();

    assert!(products.data.is_empty());
}

#[tokio::test]
async fn test_create_product() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/products")
        .match_body(Matcher::PartialJson(json!({
            "data": { "type": "product", "name": "Origami Crane", "sku": "CRANE" }
        })))
        .with_status(201)
        .with_body(CREATED_CRANE)
        .expect(1)
        .create_async()
        .await;

    let product = Product::new("Origami Crane", "CRANE").with_price(500, "USD", true);

    let client = authorised_client(&server.url()).await;
    let created = client.create_product(&product).await.unwrap();

    assert_eq!(
        created.data.id.as_deref(),
        Some("a5f3d9e0-3c3b-4a4f-9d2f-2b1c0e9b8a77")
    );
    assert_eq!(created.data.name, product.name);
    assert_eq!(created.data.price, product.price);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_invalid_product() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/products")
        .with_status(422)
        .expect(1)
        .create_async()
        .await;

    let client = authorised_client(&server.url()).await;
    let err = client
        .create_product(&Product::new("Invalid product", ""))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "status code 422 is not ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_product() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v2/products/a5f3d9e0-3c3b-4a4f-9d2f-2b1c0e9b8a77")
        .match_body(Matcher::PartialJson(json!({
            "data": { "id": "a5f3d9e0-3c3b-4a4f-9d2f-2b1c0e9b8a77" }
        })))
        .with_status(200)
        .with_body(CREATED_CRANE)
        .expect(1)
        .create_async()
        .await;

    let mut product = Product::new("Origami Crane", "CRANE");
    product.id = Some("a5f3d9e0-3c3b-4a4f-9d2f-2b1c0e9b8a77".to_string());

    let client = authorised_client(&server.url()).await;
    let updated = client.update_product(&product).await.unwrap();

    assert_eq!(updated.data.id, product.id);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_product_without_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = authorised_client(&server.url()).await;
    let err = client
        .update_product(&Product::new("Origami Crane", "CRANE"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "error productID is required");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_product() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v2/products/a5f3d9e0-3c3b-4a4f-9d2f-2b1c0e9b8a77")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let client = authorised_client(&server.url()).await;
    client
        .delete_product("a5f3d9e0-3c3b-4a4f-9d2f-2b1c0e9b8a77")
        .await
        .unwrap();

    mock.assert_async().await;
}
