//! Configuration types for the Soanch API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with the shop management API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: The main configuration struct holding all SDK settings
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`ApiBaseUrl`]: A validated API base URL
//! - [`ShopId`]: A validated shop identifier used in request paths
//!
//! # Example
//!
//! ```rust
//! use soanch_api::{ApiConfig, ApiBaseUrl};
//! use std::time::Duration;
//!
//! let config = ApiConfig::builder()
//!     .base_url(ApiBaseUrl::new("https://api.staging.soanch.com").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .user_agent_prefix("MyShopApp/2.1")
//!     .build();
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, ShopId};

use std::time::Duration;

/// Default request timeout, matching the original client's 10 second limit.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Soanch API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// base URL, the per-request timeout, and an optional User-Agent prefix.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use soanch_api::ApiConfig;
///
/// let config = ApiConfig::default();
/// assert_eq!(config.base_url().as_ref(), "https://api.soanch.com");
/// ```
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: ApiBaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// All fields have sensible defaults, so `build()` is infallible.
///
/// # Defaults
///
/// - `base_url`: `https://api.soanch.com` (production)
/// - `timeout`: 10 seconds
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use soanch_api::{ApiConfig, ApiBaseUrl};
/// use std::time::Duration;
///
/// let config = ApiConfig::builder()
///     .base_url(ApiBaseUrl::new("http://localhost:3000").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert_eq!(config.timeout(), Duration::from_secs(30));
/// ```
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: ApiBaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`], filling in defaults for unset fields.
    #[must_use]
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(ApiBaseUrl::production),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ApiConfig::builder().build();

        assert_eq!(config.base_url().as_ref(), "https://api.soanch.com");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_default_matches_builder_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url().as_ref(), "https://api.soanch.com");
    }

    #[test]
    fn test_builder_with_all_fields() {
        let url = ApiBaseUrl::new("http://localhost:3000").unwrap();
        let config = ApiConfig::builder()
            .base_url(url.clone())
            .timeout(Duration::from_secs(3))
            .user_agent_prefix("MyShopApp/2.1")
            .build();

        assert_eq!(config.base_url(), &url);
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.user_agent_prefix(), Some("MyShopApp/2.1"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = ApiConfig::default();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ApiConfig"));
    }
}
