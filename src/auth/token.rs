//! Access token types for API authentication.
//!
//! This module provides the [`TokenKind`] and [`AuthToken`] types for
//! type-safe handling of the two credentials the API issues.
//!
//! # Token Types
//!
//! The shop management API issues two kinds of bearer tokens:
//!
//! - **Private OAuth tokens**: Long-lived (roughly 90 days), issued only after
//!   password-verified sign-in. They authorize owner-level mutations (shop
//!   updates, catalog CRUD, user management) and are attached automatically to
//!   outgoing requests once cached.
//!
//! - **Public access tokens**: Short-lived (roughly 7 days), issued with or
//!   without credentials. They authorize a narrow set of pre-sign-in
//!   operations (account creation, password reset) and are attached manually,
//!   per call.
//!
//! # Security
//!
//! [`AuthToken`] implements a custom [`Debug`] trait that masks the token
//! value, preventing accidental exposure in logs.
//!
//! # Example
//!
//! ```rust
//! use soanch_api::auth::{AuthToken, TokenKind};
//!
//! let token = AuthToken::Private("oauth-token".to_string());
//! assert_eq!(token.kind(), TokenKind::Private);
//! assert_eq!(token.kind().storage_key(), "authToken");
//!
//! // Debug output masks the token value
//! let debug_output = format!("{:?}", token);
//! assert!(debug_output.contains("*****"));
//! assert!(!debug_output.contains("oauth-token"));
//! ```

use std::fmt;

/// Storage key for the private OAuth token.
pub const PRIVATE_TOKEN_KEY: &str = "authToken";

/// Storage key for the public access token.
pub const PUBLIC_TOKEN_KEY: &str = "publicAccessToken";

/// The two credential kinds issued by the API.
///
/// At most one token of each kind is cached at a time; there is no
/// multi-account support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Long-lived private OAuth token, issued only via password sign-in.
    Private,
    /// Short-lived public access token, issued with or without credentials.
    Public,
}

impl TokenKind {
    /// Returns the fixed key under which this token kind is persisted.
    ///
    /// These keys match the device-storage contract of the original client:
    /// `authToken` for the private token, `publicAccessToken` for the public
    /// one.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Private => PRIVATE_TOKEN_KEY,
            Self::Public => PUBLIC_TOKEN_KEY,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => f.write_str("private"),
            Self::Public => f.write_str("public"),
        }
    }
}

/// A bearer credential of a specific [`TokenKind`].
///
/// # Security
///
/// The [`Debug`] implementation masks token values to prevent accidental
/// exposure:
///
/// ```rust
/// use soanch_api::auth::AuthToken;
///
/// let token = AuthToken::Public("secret-token".to_string());
/// assert_eq!(format!("{:?}", token), "AuthToken::Public(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum AuthToken {
    /// Private OAuth token authorizing owner-level mutations.
    Private(String),
    /// Public access token authorizing pre-sign-in operations.
    Public(String),
}

impl AuthToken {
    /// Creates a token of the given kind.
    #[must_use]
    pub const fn new(kind: TokenKind, value: String) -> Self {
        match kind {
            TokenKind::Private => Self::Private(value),
            TokenKind::Public => Self::Public(value),
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Private(_) => TokenKind::Private,
            Self::Public(_) => TokenKind::Public,
        }
    }

    /// Returns the raw token value.
    ///
    /// This is used to build the `Authorization: Bearer` header value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Private(token) | Self::Public(token) => token,
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private(_) => f.write_str("AuthToken::Private(*****)"),
            Self::Public(_) => f.write_str("AuthToken::Public(*****)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_match_device_storage_contract() {
        assert_eq!(TokenKind::Private.storage_key(), "authToken");
        assert_eq!(TokenKind::Public.storage_key(), "publicAccessToken");
    }

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::Private.to_string(), "private");
        assert_eq!(TokenKind::Public.to_string(), "public");
    }

    #[test]
    fn test_new_constructs_matching_kind() {
        let private = AuthToken::new(TokenKind::Private, "a".to_string());
        assert_eq!(private.kind(), TokenKind::Private);

        let public = AuthToken::new(TokenKind::Public, "b".to_string());
        assert_eq!(public.kind(), TokenKind::Public);
    }

    #[test]
    fn test_as_str_returns_raw_value() {
        let token = AuthToken::Private("my-oauth-token".to_string());
        assert_eq!(token.as_str(), "my-oauth-token");
    }

    #[test]
    fn test_debug_masks_token_values() {
        let private = AuthToken::Private("super-secret".to_string());
        let debug = format!("{private:?}");
        assert_eq!(debug, "AuthToken::Private(*****)");
        assert!(!debug.contains("super-secret"));

        let public = AuthToken::Public("super-secret".to_string());
        let debug = format!("{public:?}");
        assert_eq!(debug, "AuthToken::Public(*****)");
        assert!(!debug.contains("super-secret"));
    }
}
