//! HTTP request types for the BigCommerce API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against either API version.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::clients::errors::InvalidHttpRequestError;
use crate::rest::routing::{build_path, ApiVersion, Route};

/// HTTP methods used by the BigCommerce REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The body of an outgoing request.
///
/// Payloads are pass-through: JSON bodies are sent verbatim, and image
/// files become multipart form data with the field name `image_file`.
#[derive(Clone, Debug)]
pub enum RequestBody {
    /// A JSON body, sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// A local file streamed as multipart form data under the
    /// `image_file` field.
    ImageFile(PathBuf),
}

/// An HTTP request to be sent to the BigCommerce API.
///
/// Use [`HttpRequest::for_route`] to construct requests from routing-table
/// entries, or [`HttpRequest::builder`] for ad-hoc requests.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::{HttpMethod, HttpRequest};
/// use bigcommerce_api::rest::routing::ApiVersion;
///
/// let request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V3, "catalog/products")
///     .query_param("page", "1")
///     .query_param("limit", "50")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "catalog/products");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The API version the request is routed to.
    pub version: ApiVersion,
    /// The path, relative to the versioned base URL.
    pub path: String,
    /// Query parameters in emission order.
    pub query: Vec<(String, String)>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for an ad-hoc request.
    #[must_use]
    pub fn builder(
        method: HttpMethod,
        version: ApiVersion,
        path: impl Into<String>,
    ) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, version, path)
    }

    /// Creates a builder from a routing-table entry, interpolating the
    /// given ids into the route's path template.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::clients::HttpRequest;
    /// use bigcommerce_api::rest::routing;
    ///
    /// let request = HttpRequest::for_route(&routing::order::FETCH_BY_ID, &[("order_id", 9)])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(request.path, "orders/9");
    /// ```
    #[must_use]
    pub fn for_route(route: &Route, ids: &[(&str, u64)]) -> HttpRequestBuilder {
        HttpRequestBuilder::new(route.method, route.version, build_path(route.template, ids))
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty
    /// - `method` is `Post` or `Put` but no body is set
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if matches!(self.method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    version: ApiVersion,
    path: String,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, version: ApiVersion, path: impl Into<String>) -> Self {
        Self {
            method,
            version,
            path: path.into(),
            query: Vec::new(),
            body: None,
            extra_headers: None,
        }
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a batch of query parameters, preserving their order.
    #[must_use]
    pub fn query_pairs<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Sets a multipart image-file body.
    #[must_use]
    pub fn image_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.body = Some(RequestBody::ImageFile(path.into()));
        self
    }

    /// Sets the body directly.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            method: self.method,
            version: self.version,
            path: self.path,
            query: self.query,
            body: self.body,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
