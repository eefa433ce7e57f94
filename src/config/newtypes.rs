//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A validated API base URL.
///
/// This newtype validates that the URL has a proper scheme and host, and
/// normalizes away any trailing slash so paths can be joined predictably.
///
/// # Example
///
/// ```rust
/// use soanch_api::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("https://api.soanch.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.soanch.com");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    scheme_end: usize,
}

impl ApiBaseUrl {
    /// The production API base URL used when none is configured.
    pub const DEFAULT: &'static str = "https://api.soanch.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme,
    /// an invalid scheme, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        // Normalize trailing slash so request paths join cleanly
        while url.ends_with('/') {
            url.pop();
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host = &url[scheme_end + 3..];
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the default production base URL.
    ///
    /// # Panics
    ///
    /// Never panics; the default URL is statically valid.
    #[must_use]
    pub fn production() -> Self {
        Self::new(Self::DEFAULT).expect("default base URL is valid")
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// A validated shop identifier.
///
/// Shop ids are server-assigned opaque strings that appear in request paths
/// (e.g., `/api/shops/{id}`), so they must be non-empty and free of path
/// separators and whitespace.
///
/// # Serialization
///
/// `ShopId` serializes to and deserializes from the raw id string:
///
/// ```rust
/// use soanch_api::ShopId;
///
/// let id = ShopId::new("shop-42").unwrap();
/// let json = serde_json::to_string(&id).unwrap();
/// assert_eq!(json, r#""shop-42""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShopId(String);

impl ShopId {
    /// Creates a new validated shop id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShopId`] if the id is empty, or
    /// [`ConfigError::InvalidShopId`] if it contains whitespace or `/`.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyShopId);
        }
        if id.contains('/') || id.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidShopId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ShopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShopId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShopId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = ApiBaseUrl::new("https://api.soanch.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.soanch.com");
    }

    #[test]
    fn test_base_url_accepts_http_scheme() {
        let url = ApiBaseUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.as_ref(), "http://localhost:3000");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        let result = ApiBaseUrl::new("api.soanch.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_empty_host() {
        assert!(ApiBaseUrl::new("https://").is_err());
        assert!(ApiBaseUrl::new("://host").is_err());
    }

    #[test]
    fn test_production_base_url_is_valid() {
        let url = ApiBaseUrl::production();
        assert_eq!(url.as_ref(), "https://api.soanch.com");
    }

    #[test]
    fn test_shop_id_accepts_plain_ids() {
        let id = ShopId::new("64f1c0ffee").unwrap();
        assert_eq!(id.as_ref(), "64f1c0ffee");
        assert_eq!(id.to_string(), "64f1c0ffee");
    }

    #[test]
    fn test_shop_id_rejects_empty() {
        assert!(matches!(ShopId::new(""), Err(ConfigError::EmptyShopId)));
    }

    #[test]
    fn test_shop_id_rejects_path_separators_and_whitespace() {
        assert!(ShopId::new("a/b").is_err());
        assert!(ShopId::new("a b").is_err());
        assert!(ShopId::new("a\tb").is_err());
    }

    #[test]
    fn test_shop_id_serde_round_trip() {
        let id = ShopId::new("shop-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""shop-42""#);

        let back: ShopId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_shop_id_deserialization_rejects_invalid() {
        let result: Result<ShopId, _> = serde_json::from_str(r#""has space""#);
        assert!(result.is_err());
    }
}
