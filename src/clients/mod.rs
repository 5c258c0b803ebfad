//! HTTP client types for BigCommerce API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests against the current (v3) and legacy (v2) API
//! versions of a store.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client holding both base URLs
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestBody`]: JSON or multipart image bodies
//! - [`RequestSigner`]: Extension point for payload signing (absent by default)
//! - [`batch`]: Joining pending calls under fail-fast or settle semantics
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{HttpClient, HttpRequest};
//! use bigcommerce_api::rest::routing;
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::for_route(&routing::product::FETCH, &[])
//!     .query_param("page", 1)
//!     .query_param("limit", 50)
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! The client performs no retries and no recovery. Network failures and
//! non-2xx responses are surfaced to the caller verbatim; batch joins either
//! reject on the first failure ([`batch::fail_fast`]) or collect every
//! outcome ([`batch::settle`]).

pub mod batch;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, UploadError};
pub use http_client::{HttpClient, RequestSigner, IMAGE_FILE_FIELD};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
