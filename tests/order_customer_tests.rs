//! Integration tests for the order, customer, merchant, and option
//! request components, focused on their split across the two API versions.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bigcommerce_api::rest::ListOptions;
use bigcommerce_api::{
    AccessToken, BigCommerce, BigCommerceConfig, ClientId, ClientSecret, StoreId,
};

fn test_sdk(server: &MockServer) -> BigCommerce {
    let config = BigCommerceConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .client_id(ClientId::new("test-client").unwrap())
        .client_secret(ClientSecret::new("test-secret").unwrap())
        .store_id(StoreId::new("a1b2c3d4e5").unwrap())
        .api_host(server.uri())
        .build()
        .unwrap();
    BigCommerce::new(&config)
}

// === Orders ===

#[tokio::test]
async fn test_order_fetch_uses_legacy_api_with_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/orders"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.order().fetch(1, 50).await.unwrap();
}

#[tokio::test]
async fn test_order_fetch_by_id_uses_legacy_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/orders/118"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": 118}"#))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    let response = sdk.order().fetch_by_id(118).await.unwrap();
    assert_eq!(response.body, r#"{"id": 118}"#);
}

#[tokio::test]
async fn test_order_update_puts_to_legacy_api() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/stores/a1b2c3d4e5/v2/orders/118"))
        .and(body_json(json!({"status_id": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.order().update(118, json!({"status_id": 2})).await.unwrap();
}

#[tokio::test]
async fn test_ordered_products_and_statuses_use_legacy_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/orders/118/products"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/orders/118/products/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/order_statuses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.order().fetch_ordered_products(118, 1, 50).await.unwrap();
    sdk.order().fetch_ordered_product_by_id(118, 5).await.unwrap();
    sdk.order().fetch_statuses().await.unwrap();
}

#[tokio::test]
async fn test_order_transactions_use_current_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v3/orders/118/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.order().fetch_transactions(118).await.unwrap();
}

// === Customers ===

#[tokio::test]
async fn test_customer_fetch_by_id_uses_legacy_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/customers/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": 3}"#))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    let response = sdk.customer().fetch_by_id(3, &[]).await.unwrap();
    assert_eq!(response.body, r#"{"id": 3}"#);
}

#[tokio::test]
async fn test_customer_crud_uses_legacy_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/customers"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/stores/a1b2c3d4e5/v2/customers"))
        .and(body_json(json!({"first_name": "Kofi", "last_name": "Nkansah"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/stores/a1b2c3d4e5/v2/customers/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/stores/a1b2c3d4e5/v2/customers/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.customer().fetch(1, 50, &ListOptions::new()).await.unwrap();
    sdk.customer()
        .create(json!({"first_name": "Kofi", "last_name": "Nkansah"}))
        .await
        .unwrap();
    sdk.customer()
        .update(3, json!({"last_name": "Nkansah-Manu"}))
        .await
        .unwrap();
    sdk.customer().delete_by_id(3).await.unwrap();
}

#[tokio::test]
async fn test_customer_addresses_use_legacy_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/customers/3/addresses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/stores/a1b2c3d4e5/v2/customers/3/addresses"))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/stores/a1b2c3d4e5/v2/customers/3/addresses/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.customer().fetch_addresses(3).await.unwrap();
    let responses = sdk
        .customer()
        .create_addresses(
            3,
            vec![json!({"city": "Accra"}), json!({"city": "Kumasi"})],
        )
        .await
        .unwrap();
    assert_eq!(responses.len(), 2);
    sdk.customer()
        .update_address(3, 9, json!({"city": "Tema"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_subscriber_operations_use_current_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v3/customers/subscribers"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/stores/a1b2c3d4e5/v3/customers/subscribers"))
        .and(body_json(json!({"email": "kofi.nkansah@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/stores/a1b2c3d4e5/v3/customers/subscribers/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/stores/a1b2c3d4e5/v3/customers/subscribers/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.customer()
        .fetch_subscribers(1, 50, &ListOptions::new())
        .await
        .unwrap();
    sdk.customer()
        .create_subscriber(json!({"email": "kofi.nkansah@example.com"}))
        .await
        .unwrap();
    sdk.customer()
        .update_subscriber(2, json!({"first_name": "Kofi"}))
        .await
        .unwrap();
    sdk.customer().delete_subscriber_by_id(2).await.unwrap();
}

// === Merchant ===

#[tokio::test]
async fn test_merchant_details_use_legacy_api() {
    let server = MockServer::start().await;

    let body = r#"{"name": "Test Store", "domain": "store.example.com"}"#;
    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/store"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    let response = sdk.merchant().fetch_details().await.unwrap();
    assert_eq!(response.body, body);
}

// === Options ===

#[tokio::test]
async fn test_option_fetch_defaults_to_larger_page_size() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v3/catalog/options"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.option()
        .fetch(
            1,
            bigcommerce_api::OptionRequest::DEFAULT_LIMIT,
            &ListOptions::new(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_option_count_uses_legacy_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/options/count"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"count": 3}"#))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = test_sdk(&server);
    sdk.option().count().await.unwrap();
}
