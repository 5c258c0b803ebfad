//! Wire-level tests for the HTTP client.
//!
//! These tests point the client at a local mock server and verify header
//! attachment, dual-version base URL routing, error mapping, and the
//! signing hook.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bigcommerce_api::clients::{HttpClient, HttpRequest, RequestSigner};
use bigcommerce_api::rest::routing::ApiVersion;
use bigcommerce_api::{
    AccessToken, BigCommerceConfig, ClientId, ClientSecret, HttpError, HttpMethod, StoreId,
};

fn test_config(server: &MockServer) -> BigCommerceConfig {
    BigCommerceConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .client_id(ClientId::new("test-client").unwrap())
        .client_secret(ClientSecret::new("test-secret").unwrap())
        .store_id(StoreId::new("a1b2c3d4e5").unwrap())
        .api_host(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_current_api_request_carries_fixed_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v3/catalog/products"))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("X-Auth-Client", "test-client"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&test_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V3, "catalog/products")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_legacy_api_request_carries_same_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v2/orders/count"))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("X-Auth-Client", "test-client"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"count": 12}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&test_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V2, "orders/count")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.body, r#"{"count": 12}"#);
}

#[tokio::test]
async fn test_fixed_headers_win_over_extras() {
    let server = MockServer::start().await;

    // The caller-supplied X-Auth-Token must not survive the merge.
    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v3/catalog/products"))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("X-Request-Source", "integration-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&test_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V3, "catalog/products")
        .header("X-Auth-Token", "spoofed")
        .header("X-Request-Source", "integration-test")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_response_body_is_passed_through_unmodified() {
    let server = MockServer::start().await;

    let body = r#"{"data": [{"id": 1, "name": "Shoes"}], "meta": {"pagination": {"total": 1}}}"#;
    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v3/catalog/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = HttpClient::new(&test_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V3, "catalog/categories")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.body, body);
}

#[tokio::test]
async fn test_non_2xx_maps_to_response_error_with_verbatim_body() {
    let server = MockServer::start().await;

    let error_body = r#"{"status": 404, "title": "Resource not found"}"#;
    Mock::given(method("GET"))
        .and(path("/stores/a1b2c3d4e5/v3/catalog/products/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(error_body))
        .mount(&server)
        .await;

    let client = HttpClient::new(&test_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V3, "catalog/products/999")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.body, error_body);
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_network_error_surfaces_as_network_variant() {
    let server = MockServer::start().await;
    let config = test_config(&server);
    drop(server);

    let client = HttpClient::new(&config);
    let request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V3, "catalog/products")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)));
}

#[tokio::test]
async fn test_json_body_sent_verbatim_without_signer() {
    let server = MockServer::start().await;

    let payload = json!({"name": "Shirt", "type": "physical"});
    Mock::given(method("POST"))
        .and(path("/stores/a1b2c3d4e5/v3/catalog/products"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&test_config(&server));
    let request = HttpRequest::builder(HttpMethod::Post, ApiVersion::V3, "catalog/products")
        .json(payload)
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

struct EnvelopeSigner;

impl RequestSigner for EnvelopeSigner {
    fn sign(&self, body: serde_json::Value) -> serde_json::Value {
        json!({"signed": true, "payload": body})
    }
}

#[tokio::test]
async fn test_installed_signer_rewrites_json_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/stores/a1b2c3d4e5/v3/catalog/products"))
        .and(body_json(
            json!({"signed": true, "payload": {"name": "Shirt"}}),
        ))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&test_config(&server)).with_signer(Arc::new(EnvelopeSigner));
    let request = HttpRequest::builder(HttpMethod::Post, ApiVersion::V3, "catalog/products")
        .json(json!({"name": "Shirt"}))
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}
