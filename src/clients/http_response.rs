//! HTTP response type for the BigCommerce API SDK.
//!
//! Responses are carried back to the caller verbatim: the SDK does not
//! parse, validate, or transform response bodies. The [`HttpResponse::json`]
//! helper is provided for callers that want to deserialize on their side.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the BigCommerce API.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"data":[]}"#.to_string());
/// assert!(response.is_ok());
///
/// let value: serde_json::Value = response.json().unwrap();
/// assert!(value["data"].as_array().unwrap().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body, unmodified.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the body is not valid
    /// JSON for the requested type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
