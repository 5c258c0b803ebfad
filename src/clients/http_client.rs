//! HTTP client for BigCommerce API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests against both the current (v3) and legacy (v2) API versions of
//! a store.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use reqwest::multipart;

use crate::clients::errors::{HttpError, HttpResponseError, UploadError};
use crate::clients::http_request::{HttpRequest, HttpMethod, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::BigCommerceConfig;
use crate::rest::routing::ApiVersion;

/// Multipart field name used for image file uploads.
pub const IMAGE_FILE_FIELD: &str = "image_file";

/// A hook for signing request payloads before dispatch.
///
/// The BigCommerce API does not currently require signed payloads, so no
/// signer is installed by default and bodies are sent unchanged. Callers
/// that need signing can supply an implementation via
/// [`HttpClient::with_signer`]; it is applied to every JSON body before
/// the request leaves the client.
pub trait RequestSigner: Send + Sync {
    /// Signs a JSON payload, returning the body to send in its place.
    fn sign(&self, body: serde_json::Value) -> serde_json::Value;
}

/// HTTP client for making requests to the BigCommerce API.
///
/// The client handles:
/// - Base URL construction for both API versions from the store id
/// - Fixed auth headers (`X-Auth-Token`, `X-Auth-Client`) on every request
/// - JSON and multipart body encoding
/// - Mapping non-2xx responses to [`HttpError::Response`]
///
/// It performs no retries, no response parsing, and no recovery of any
/// kind; every failure surfaces to the caller unchanged.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// It holds no mutable state after construction.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{AccessToken, BigCommerceConfig, ClientId, ClientSecret, StoreId};
/// use bigcommerce_api::clients::HttpClient;
///
/// let config = BigCommerceConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .client_id(ClientId::new("client").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .store_id(StoreId::new("a1b2c3d4e5").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL for the current (v3) API, with trailing slash.
    base_url: String,
    /// Base URL for the legacy (v2) API, with trailing slash.
    legacy_base_url: String,
    /// Fixed headers attached to every request. These always win over
    /// caller-supplied extras of the same name.
    default_headers: HashMap<String, String>,
    /// Optional payload signer, absent by default.
    signer: Option<Arc<dyn RequestSigner>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("legacy_base_url", &self.legacy_base_url)
            .field("signer", &self.signer.as_ref().map(|_| "RequestSigner"))
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client from store credentials.
    ///
    /// Both base URLs are derived once from the store id and never change.
    /// The same fixed headers are attached to current and legacy requests
    /// alike.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &BigCommerceConfig) -> Self {
        let host = config.api_host();
        let store_id = config.store_id();

        let base_url = format!("{host}/stores/{store_id}/{}/", ApiVersion::V3.as_str());
        let legacy_base_url = format!("{host}/stores/{store_id}/{}/", ApiVersion::V2.as_str());

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "X-Auth-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );
        default_headers.insert(
            "X-Auth-Client".to_string(),
            config.client_id().as_ref().to_string(),
        );
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            legacy_base_url,
            default_headers,
            signer: None,
        }
    }

    /// Installs a payload signer.
    ///
    /// The signer is applied to every JSON body before dispatch. Without
    /// one, bodies are sent unchanged.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Returns the base URL for the given API version.
    #[must_use]
    pub fn base_url(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V3 => &self.base_url,
            ApiVersion::V2 => &self.legacy_base_url,
        }
    }

    /// Returns the fixed headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the BigCommerce API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction against the version-specific base URL
    /// - Header merging (fixed auth headers win over extras)
    /// - JSON and multipart body encoding
    /// - Signing, when a signer is installed
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A multipart file cannot be read (`Upload`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let HttpRequest {
            method,
            version,
            path,
            query,
            body,
            extra_headers,
        } = request;

        let url = format!("{}{}", self.base_url(version), path);

        tracing::debug!(%method, %version, %path, "dispatching request");

        // Flat header merge: extras first, fixed headers overwrite on collision.
        let mut headers = extra_headers.unwrap_or_default();
        for (key, value) in &self.default_headers {
            headers.insert(key.clone(), value.clone());
        }

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        match body {
            Some(RequestBody::Json(payload)) => {
                let payload = match &self.signer {
                    Some(signer) => signer.sign(payload),
                    None => payload,
                };
                builder = builder.body(payload.to_string());
            }
            Some(RequestBody::ImageFile(file_path)) => {
                // reqwest supplies the multipart content type with its boundary.
                headers.remove("Content-Type");

                let contents =
                    tokio::fs::read(&file_path)
                        .await
                        .map_err(|_| UploadError::Unreadable {
                            path: file_path.clone(),
                        })?;
                let file_name = file_path
                    .file_name()
                    .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
                let part = multipart::Part::bytes(contents).file_name(file_name);
                builder = builder.multipart(multipart::Form::new().part(IMAGE_FILE_FIELD, part));
            }
            None => {}
        }

        for (key, value) in &headers {
            builder = builder.header(key, value);
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let response_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let response = HttpResponse::new(code, response_headers, body_text);

        if response.is_ok() {
            Ok(response)
        } else {
            Err(HttpError::Response(HttpResponseError {
                code,
                body: response.body,
            }))
        }
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ClientId, ClientSecret, StoreId};

    fn create_test_config() -> BigCommerceConfig {
        BigCommerceConfig::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .client_id(ClientId::new("test-client-id").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
            .store_id(StoreId::new("a1b2c3d4e5").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_urls_derived_from_store_id() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.base_url(ApiVersion::V3),
            "https://api.bigcommerce.com/stores/a1b2c3d4e5/v3/"
        );
        assert_eq!(
            client.base_url(ApiVersion::V2),
            "https://api.bigcommerce.com/stores/a1b2c3d4e5/v2/"
        );
    }

    #[test]
    fn test_api_host_override_changes_both_bases() {
        let config = BigCommerceConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .client_id(ClientId::new("c").unwrap())
            .client_secret(ClientSecret::new("s").unwrap())
            .store_id(StoreId::new("deadbeef").unwrap())
            .api_host("http://127.0.0.1:8080")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.base_url(ApiVersion::V3),
            "http://127.0.0.1:8080/stores/deadbeef/v3/"
        );
        assert_eq!(
            client.base_url(ApiVersion::V2),
            "http://127.0.0.1:8080/stores/deadbeef/v2/"
        );
    }

    #[test]
    fn test_fixed_headers_are_attached() {
        let client = HttpClient::new(&create_test_config());
        let headers = client.default_headers();

        assert_eq!(
            headers.get("X-Auth-Token"),
            Some(&"test-access-token".to_string())
        );
        assert_eq!(
            headers.get("X-Auth-Client"),
            Some(&"test-client-id".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_secret_not_in_headers() {
        let client = HttpClient::new(&create_test_config());
        assert!(client
            .default_headers()
            .values()
            .all(|v| v != "test-secret"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_debug_output_masks_internals() {
        let client = HttpClient::new(&create_test_config());
        let debug = format!("{client:?}");
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("test-access-token"));
    }
}
