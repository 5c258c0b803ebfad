//! Configuration types for the BigCommerce API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with a BigCommerce store.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BigCommerceConfig`]: The main configuration struct holding store credentials
//! - [`BigCommerceConfigBuilder`]: A builder for constructing [`BigCommerceConfig`] instances
//! - [`AccessToken`]: A validated API access token newtype
//! - [`ClientId`]: A validated app client id newtype
//! - [`ClientSecret`]: A validated client secret newtype with masked debug output
//! - [`StoreId`]: A validated store hash newtype
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, BigCommerceConfig, ClientId, ClientSecret, StoreId};
//!
//! let config = BigCommerceConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .store_id(StoreId::new("a1b2c3d4e5").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ClientId, ClientSecret, StoreId};

use crate::error::ConfigError;

/// Default host for the BigCommerce API.
pub const DEFAULT_API_HOST: &str = "https://api.bigcommerce.com";

/// Configuration for the BigCommerce API SDK.
///
/// Holds the store credentials and the API host. Credentials are immutable
/// after construction; the client secret is accepted for request signing
/// support but is never attached to a header.
///
/// # Thread Safety
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{AccessToken, BigCommerceConfig, ClientId, ClientSecret, StoreId};
///
/// let config = BigCommerceConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .client_id(ClientId::new("client").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .store_id(StoreId::new("a1b2c3d4e5").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.store_id().as_ref(), "a1b2c3d4e5");
/// ```
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    access_token: AccessToken,
    client_id: ClientId,
    client_secret: ClientSecret,
    store_id: StoreId,
    api_host: String,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the store id.
    #[must_use]
    pub const fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Returns the API host requests are sent to.
    #[must_use]
    pub fn api_host(&self) -> &str {
        &self.api_host
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// Required fields are `access_token`, `client_id`, `client_secret`, and
/// `store_id`. The API host defaults to [`DEFAULT_API_HOST`] and only needs
/// overriding when requests should be routed through a proxy or a local
/// test server.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{AccessToken, BigCommerceConfig, ClientId, ClientSecret, StoreId};
///
/// let config = BigCommerceConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .client_id(ClientId::new("client").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .store_id(StoreId::new("a1b2c3d4e5").unwrap())
///     .api_host("https://proxy.example.com")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    access_token: Option<AccessToken>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    store_id: Option<StoreId>,
    api_host: Option<String>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the store id (required).
    #[must_use]
    pub fn store_id(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Overrides the API host.
    ///
    /// Trailing slashes are stripped so base URL assembly stays uniform.
    #[must_use]
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Builds the [`BigCommerceConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field was
    /// not set, or [`ConfigError::InvalidApiHost`] if the host override is
    /// not an absolute http(s) URL.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;
        let client_id = self.client_id.ok_or(ConfigError::MissingRequiredField {
            field: "client_id",
        })?;
        let client_secret = self.client_secret.ok_or(ConfigError::MissingRequiredField {
            field: "client_secret",
        })?;
        let store_id = self.store_id.ok_or(ConfigError::MissingRequiredField {
            field: "store_id",
        })?;

        let api_host = match self.api_host {
            Some(host) => {
                let trimmed = host.trim_end_matches('/').to_string();
                if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
                    return Err(ConfigError::InvalidApiHost { host });
                }
                trimmed
            }
            None => DEFAULT_API_HOST.to_string(),
        };

        Ok(BigCommerceConfig {
            access_token,
            client_id,
            client_secret,
            store_id,
            api_host,
        })
    }
}
