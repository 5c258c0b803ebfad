//! Error types for SDK configuration.
//!
//! This module contains error types used when constructing and validating
//! store credentials and client configuration.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid BigCommerce access token.")]
    EmptyAccessToken,

    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide a valid BigCommerce client id.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid BigCommerce client secret.")]
    EmptyClientSecret,

    /// Store id is invalid.
    #[error("Invalid store id '{store_id}'. Store ids are short alphanumeric hashes (e.g., 'a1b2c3d4e5').")]
    InvalidStoreId {
        /// The invalid store id that was provided.
        store_id: String,
    },

    /// API host is invalid.
    #[error("Invalid API host '{host}'. Please provide a valid URL with scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidApiHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let error = ConfigError::EmptyAccessToken;
        let message = error.to_string();
        assert!(message.contains("Access token cannot be empty"));
        assert!(message.contains("valid BigCommerce access token"));
    }

    #[test]
    fn test_invalid_store_id_error_message() {
        let error = ConfigError::InvalidStoreId {
            store_id: "bad store!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad store!"));
        assert!(message.contains("alphanumeric"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "access_token",
        };
        let message = error.to_string();
        assert!(message.contains("access_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
