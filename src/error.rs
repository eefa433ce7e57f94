//! Error types for SDK configuration.
//!
//! This module contains error types used for configuration and validation
//! failures.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use soanch_api::{ShopId, ConfigError};
//!
//! let result = ShopId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyShopId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.soanch.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Shop identifier is invalid.
    #[error("Invalid shop id '{id}'. Shop ids must be non-empty and cannot contain whitespace or '/'.")]
    InvalidShopId {
        /// The invalid shop id that was provided.
        id: String,
    },

    /// Shop identifier cannot be empty.
    #[error("Shop id cannot be empty. Please provide a valid shop id.")]
    EmptyShopId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("valid URL"));
    }

    #[test]
    fn test_invalid_shop_id_error_message() {
        let error = ConfigError::InvalidShopId {
            id: "has space".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("has space"));
        assert!(message.contains("cannot contain"));
    }

    #[test]
    fn test_empty_shop_id_error_message() {
        let error = ConfigError::EmptyShopId;
        assert!(error.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyShopId;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
