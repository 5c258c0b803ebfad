//! Validated newtype wrappers for store credential values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated BigCommerce API access token.
///
/// This newtype ensures the token is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::AccessToken;
///
/// let token = AccessToken::new("my-access-token").unwrap();
/// assert_eq!(token.as_ref(), "my-access-token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated BigCommerce app client id.
///
/// Sent with every request in the `X-Auth-Client` header.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated BigCommerce app client secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// The secret is accepted at construction for future request signing
/// but is not attached to any header.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated BigCommerce store id (store hash).
///
/// The store id identifies the store within the API base URL:
/// `https://api.bigcommerce.com/stores/{store_id}/v3/`.
///
/// # Accepted Format
///
/// Lowercase letters and digits, non-empty. Whitespace is trimmed.
///
/// # Serialization
///
/// `StoreId` serializes to and deserializes from the plain hash string:
///
/// ```rust
/// use bigcommerce_api::StoreId;
///
/// let store = StoreId::new("a1b2c3d4e5").unwrap();
/// let json = serde_json::to_string(&store).unwrap();
/// assert_eq!(json, r#""a1b2c3d4e5""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a new validated store id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreId`] if the id is empty or
    /// contains characters outside `[a-z0-9]`.
    pub fn new(store_id: impl Into<String>) -> Result<Self, ConfigError> {
        let store_id = store_id.into();
        let store_id = store_id.trim().to_lowercase();

        if store_id.is_empty() || !Self::is_valid_hash(&store_id) {
            return Err(ConfigError::InvalidStoreId { store_id });
        }

        Ok(Self(store_id))
    }

    fn is_valid_hash(hash: &str) -> bool {
        hash.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    }
}

impl AsRef<str> for StoreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(de::Error::custom)
    }
}
