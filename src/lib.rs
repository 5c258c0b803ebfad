//! # BigCommerce API Rust SDK
//!
//! A Rust SDK for the BigCommerce REST API, providing type-safe
//! configuration and typed request builders for store resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for store credentials
//! - Request components for categories, products, orders, customers,
//!   merchants, and options via the [`BigCommerce`] facade
//! - Transparent routing between the current (v3) and legacy (v2) API
//!   versions, driven by one table in [`rest::routing`]
//! - Batch execution of pending calls with fail-fast or settle semantics
//!   via [`clients::batch`]
//! - Image uploads from URLs or validated local files via [`rest::ImageSource`]
//!
//! Responses are passed through verbatim: the SDK builds and dispatches
//! requests but leaves body interpretation to the caller. There are no
//! retries, no pagination traversal, and no recovery of any kind; every
//! failure surfaces unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{
//!     AccessToken, BigCommerce, BigCommerceConfig, ClientId, ClientSecret, StoreId,
//! };
//!
//! // Create configuration using the builder pattern
//! let config = BigCommerceConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .store_id(StoreId::new("a1b2c3d4e5").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let bigcommerce = BigCommerce::new(&config);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::ListOptions;
//!
//! // Fetch the first page of categories
//! let response = bigcommerce.category().fetch(1, 50, &ListOptions::new()).await?;
//! let categories: serde_json::Value = response.json()?;
//!
//! // Fetch a customer from the legacy API; routing is transparent
//! let response = bigcommerce.customer().fetch_by_id(3, &[]).await?;
//!
//! // Create several products at once; the batch rejects on the first failure
//! let responses = bigcommerce.product().create_many(vec![
//!     serde_json::json!({"name": "Shirt", "type": "physical", "price": 19.99}),
//!     serde_json::json!({"name": "Ebook", "type": "digital", "price": 9.99}),
//! ]).await?;
//! ```
//!
//! ## Image Uploads
//!
//! Upload endpoints accept a URL or a local file path; the argument is
//! classified once and local files are validated (existence, regular file,
//! readability) before any request is made:
//!
//! ```rust,ignore
//! // Remote image: sent as {"image_url": ...}
//! bigcommerce.category().create_image(14, "https://cdn.example.com/banner.png").await?;
//!
//! // Local file: sent as multipart form data under "image_file"
//! bigcommerce.product().upload_image(7, "./images/shirt.png").await?;
//! ```
//!
//! ## Batching
//!
//! Pending calls can be combined under two join policies, named at the
//! call site instead of toggled by a flag:
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::batch;
//!
//! // Reject the whole batch on the first failure
//! let all = batch::fail_fast(vec![
//!     bigcommerce.option().fetch_by_id(5),
//!     bigcommerce.option().fetch_by_id(6),
//! ]).await?;
//!
//! // Or collect every outcome, never failing at the batch level
//! let outcomes = batch::settle(vec![
//!     bigcommerce.option().fetch_by_id(5),
//!     bigcommerce.option().fetch_by_id(6),
//! ]).await;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Pass-through payloads**: Bodies and responses are never transformed

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

mod bigcommerce;

// Re-export public types at crate root for convenience
pub use bigcommerce::BigCommerce;
pub use config::{
    AccessToken, BigCommerceConfig, BigCommerceConfigBuilder, ClientId, ClientSecret, StoreId,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RequestBody, RequestSigner, UploadError,
};

// Re-export REST types for convenience
pub use rest::{
    CategoryRequest, CustomerRequest, ImageSource, ListOptions, MerchantRequest, OptionRequest,
    OrderRequest, ProductRequest, ProductType, UnsupportedProductTypeError,
};
