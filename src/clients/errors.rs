//! HTTP-specific error types for the BigCommerce API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, request validation failures, and local upload validation failures.
//!
//! # Error Handling
//!
//! The SDK performs no recovery of any kind: every failure surfaces to the
//! immediate caller as one of these types.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`UploadError`]: When an image upload argument is not a usable local file
//! - [`HttpError`]: Unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::HttpError;
//!
//! match bigcommerce.product().fetch(1, 50, &ListOptions::default()).await {
//!     Ok(response) => println!("Products: {}", response.body()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("Request error: {other}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The response body is carried verbatim; the SDK does not interpret the
/// remote error format.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: r#"{"title":"Not found"}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("Request failed with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body, unmodified.
    pub body: String,
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Error returned when an image upload argument does not point at a usable
/// local file.
///
/// The three conditions are checked in order: existence, then regular-file,
/// then readability. Each failure produces a distinct message naming the
/// offending path. No network call is made when any of them fails.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use bigcommerce_api::UploadError;
///
/// let error = UploadError::Missing {
///     path: PathBuf::from("/tmp/ghost.png"),
/// };
/// assert_eq!(error.to_string(), r#"File "/tmp/ghost.png" does not exist."#);
/// ```
#[derive(Debug, Error)]
pub enum UploadError {
    /// The path does not exist.
    #[error("File \"{}\" does not exist.", .path.display())]
    Missing {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The path exists but is not a regular file (e.g., a directory).
    #[error("File \"{}\" is not a valid file.", .path.display())]
    NotAFile {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The file exists but cannot be opened for reading.
    #[error("File \"{}\" is not readable.", .path.display())]
    Unreadable {
        /// The path that was checked.
        path: PathBuf,
    },
}

/// Unified error type for all request failures.
///
/// This enum provides a single error type for SDK operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A local file intended for upload failed validation.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Network or connection error from the underlying transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
