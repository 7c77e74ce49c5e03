use std::sync::Arc;

use pricepreview_api::config::ServerConfig;
use pricepreview_core::ProductId;
use pricepreview_products::{InMemoryCatalog, Product};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(catalog: InMemoryCatalog) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = pricepreview_api::app::build_app(Arc::new(catalog), &ServerConfig::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn product(id: u64, title: &str, sku: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        sku: sku.to_string(),
        brand: "Test Brand".to_string(),
        category: "Wine".to_string(),
        segment: "Red".to_string(),
        price,
    }
}

fn test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        product(1, "Barossa Shiraz", "SKU-123", 100.0),
        product(2, "Yarra Pinot", "PIN-200", 200.0),
        product(3, "Clare Riesling", "SKU-300", 50.0),
    ])
    .unwrap()
}

#[tokio::test]
async fn products_without_search_returns_whole_catalog_in_order() {
    let srv = TestServer::spawn(test_catalog()).await;

    let res = reqwest::get(format!("{}/api/products", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<Product> = res.json().await.unwrap();
    let ids: Vec<u64> = body.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn products_search_is_case_insensitive_substring() {
    let srv = TestServer::spawn(test_catalog()).await;

    let res = reqwest::get(format!("{}/api/products?search=sku-1", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<Product> = res.json().await.unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].sku, "SKU-123");

    let res = reqwest::get(format!("{}/api/products?search=PINOT", srv.base_url))
        .await
        .unwrap();
    let body: Vec<Product> = res.json().await.unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].id, ProductId::new(2));
}

#[tokio::test]
async fn products_empty_search_returns_everything() {
    let srv = TestServer::spawn(test_catalog()).await;

    let res = reqwest::get(format!("{}/api/products?search=", srv.base_url))
        .await
        .unwrap();
    let body: Vec<Product> = res.json().await.unwrap();
    assert_eq!(body.len(), 3);
}

#[tokio::test]
async fn products_whitespace_search_is_not_trimmed() {
    let srv = TestServer::spawn(test_catalog()).await;

    let res = reqwest::get(format!("{}/api/products?search=%20%20", srv.base_url))
        .await
        .unwrap();
    let body: Vec<Product> = res.json().await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn preview_lifecycle_fixed_decrease() {
    let srv = TestServer::spawn(test_catalog()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .json(&json!({
            "productIds": [2, 1, 99],
            "adjustmentType": "fixed",
            "increment": "decrease",
            "value": 10
        }))
        .send()
        .await
        .unwrap();
    if res.status() != StatusCode::OK {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        panic!("expected 200 OK from preview, got {status} body={body}");
    }

    let rows: serde_json::Value = res.json().await.unwrap();
    let rows = rows.as_array().unwrap();
    // Catalog order, unknown id 99 dropped.
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["title"], "Barossa Shiraz");
    assert_eq!(rows[0]["newPrice"], 90.0);
    assert_eq!(rows[1]["id"], 2);
    assert_eq!(rows[1]["newPrice"], 190.0);
}

#[tokio::test]
async fn preview_dynamic_increase_and_clamp() {
    let srv = TestServer::spawn(test_catalog()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .json(&json!({
            "productIds": [3],
            "adjustmentType": "dynamic",
            "increment": "increase",
            "value": 10
        }))
        .send()
        .await
        .unwrap();
    let rows: serde_json::Value = res.json().await.unwrap();
    assert_eq!(rows[0]["newPrice"], 55.0);

    let res = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .json(&json!({
            "productIds": [1],
            "adjustmentType": "fixed",
            "increment": "decrease",
            "value": 150
        }))
        .send()
        .await
        .unwrap();
    let rows: serde_json::Value = res.json().await.unwrap();
    assert_eq!(rows[0]["newPrice"], 0.0);
}

#[tokio::test]
async fn preview_is_idempotent_and_does_not_mutate_catalog() {
    let srv = TestServer::spawn(test_catalog()).await;
    let client = reqwest::Client::new();
    let body = json!({
        "productIds": [1, 2, 3],
        "adjustmentType": "dynamic",
        "increment": "decrease",
        "value": 15
    });

    let first: serde_json::Value = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);

    let catalog: Vec<Product> = reqwest::get(format!("{}/api/products", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(catalog[0].price, 100.0);
}

#[tokio::test]
async fn malformed_preview_bodies_are_rejected_with_error_kind() {
    let srv = TestServer::spawn(test_catalog()).await;
    let client = reqwest::Client::new();

    // Missing field.
    let res = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .json(&json!({ "productIds": [1], "adjustmentType": "fixed", "value": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_request");

    // Unknown direction.
    let res = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .json(&json!({
            "productIds": [1],
            "adjustmentType": "fixed",
            "increment": "sideways",
            "value": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Not JSON at all.
    let res = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Negative magnitude.
    let res = client
        .post(format!("{}/api/pricing/preview", srv.base_url))
        .json(&json!({
            "productIds": [1],
            "adjustmentType": "fixed",
            "increment": "increase",
            "value": -1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}
