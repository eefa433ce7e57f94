//! Authentication request and result types.
//!
//! The `/api/shops/auth` endpoint has two modes distinguished by whether a
//! password is supplied. Rather than branching on optional response fields,
//! both the request and the result are tagged unions: the mode chosen up
//! front decides which result variant is produced.
//!
//! # Modes
//!
//! - **Password mode** (sign-in): `userId` + `password` in the body. The
//!   server returns a long-lived private OAuth token and usually a public
//!   access token alongside it; both fields are treated as optional and
//!   whichever is present gets persisted.
//! - **Public mode**: an empty body, or one carrying just a `shopId`. Issues
//!   only a short-lived public access token.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::fmt;

use crate::config::ShopId;

/// A request to the authentication endpoint, tagged by mode.
///
/// # Example
///
/// ```rust
/// use soanch_api::auth::AuthRequest;
///
/// let sign_in = AuthRequest::password("owner@example.com", "secret123");
/// let public = AuthRequest::public();
///
/// // Passwords never appear in debug output
/// let debug = format!("{:?}", sign_in);
/// assert!(!debug.contains("secret123"));
/// ```
#[derive(Clone)]
pub enum AuthRequest {
    /// Password-verified sign-in, yielding both token kinds.
    Password {
        /// The user identifier (typically the owner's email).
        user_id: String,
        /// The account password.
        password: String,
    },
    /// Credential-less authentication, yielding only a public token.
    Public {
        /// Optional shop to scope the public token to.
        shop_id: Option<ShopId>,
    },
}

impl AuthRequest {
    /// Creates a password-mode request.
    pub fn password(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    /// Creates a generic public-mode request (no shop id).
    #[must_use]
    pub const fn public() -> Self {
        Self::Public { shop_id: None }
    }

    /// Creates a public-mode request scoped to a specific shop.
    #[must_use]
    pub const fn public_for_shop(shop_id: ShopId) -> Self {
        Self::Public {
            shop_id: Some(shop_id),
        }
    }

    /// Returns `true` for password-mode requests.
    #[must_use]
    pub const fn is_password_mode(&self) -> bool {
        matches!(self, Self::Password { .. })
    }

    /// Builds the JSON body for the authentication call.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        match self {
            Self::Password { user_id, password } => serde_json::json!({
                "userId": user_id,
                "password": password,
            }),
            Self::Public { shop_id: Some(id) } => serde_json::json!({ "shopId": id }),
            Self::Public { shop_id: None } => serde_json::json!({}),
        }
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password { user_id, .. } => f
                .debug_struct("AuthRequest::Password")
                .field("user_id", user_id)
                .field("password", &"*****")
                .finish(),
            Self::Public { shop_id } => f
                .debug_struct("AuthRequest::Public")
                .field("shop_id", shop_id)
                .finish(),
        }
    }
}

/// Response payload of a password-mode authentication.
///
/// The token fields are optional by contract: whichever the server returns
/// gets persisted, and callers branch on the variant rather than on field
/// presence.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthResult {
    /// The long-lived private OAuth token, when issued.
    pub oauth_token: Option<String>,
    /// The short-lived public access token, when issued.
    pub public_access_token: Option<String>,
    /// Advertised private token lifetime in days (informational only).
    pub oauth_token_expires_in_days: Option<u32>,
    /// Advertised public token lifetime in days (informational only).
    pub public_token_expires_in_days: Option<u32>,
    /// The shop this account belongs to, when the server includes it.
    pub shop_id: Option<ShopId>,
    /// The authenticated user id, when the server includes it.
    pub user_id: Option<String>,
    /// The shop's display name, when the server includes it.
    pub shop_name: Option<String>,
    /// Human-readable status message.
    pub message: Option<String>,
}

impl fmt::Debug for PasswordAuthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordAuthResult")
            .field("oauth_token", &self.oauth_token.as_ref().map(|_| "*****"))
            .field(
                "public_access_token",
                &self.public_access_token.as_ref().map(|_| "*****"),
            )
            .field(
                "oauth_token_expires_in_days",
                &self.oauth_token_expires_in_days,
            )
            .field(
                "public_token_expires_in_days",
                &self.public_token_expires_in_days,
            )
            .field("shop_id", &self.shop_id)
            .field("user_id", &self.user_id)
            .field("shop_name", &self.shop_name)
            .field("message", &self.message)
            .finish()
    }
}

/// Response payload of a public-mode authentication.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAuthResult {
    /// The short-lived public access token, when issued.
    pub public_access_token: Option<String>,
    /// Advertised public token lifetime in days (informational only).
    pub public_token_expires_in_days: Option<u32>,
    /// Human-readable status message.
    pub message: Option<String>,
}

impl PublicAuthResult {
    /// Computes the advertised expiry instant of the public token, relative
    /// to now.
    ///
    /// Informational only: the client never checks expiry before a request.
    /// Expiry is discovered when the server answers 401.
    #[must_use]
    pub fn public_token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.public_token_expires_in_days
            .map(|days| Utc::now() + Duration::days(i64::from(days)))
    }
}

impl fmt::Debug for PublicAuthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicAuthResult")
            .field(
                "public_access_token",
                &self.public_access_token.as_ref().map(|_| "*****"),
            )
            .field(
                "public_token_expires_in_days",
                &self.public_token_expires_in_days,
            )
            .field("message", &self.message)
            .finish()
    }
}

/// The result of an `authenticate` call, tagged by the mode that was used.
#[derive(Clone, Debug)]
pub enum AuthOutcome {
    /// Result of a password-mode authentication.
    Password(PasswordAuthResult),
    /// Result of a public-mode authentication.
    Public(PublicAuthResult),
}

impl AuthOutcome {
    /// Returns the private OAuth token, when the server issued one.
    #[must_use]
    pub fn oauth_token(&self) -> Option<&str> {
        match self {
            Self::Password(result) => result.oauth_token.as_deref(),
            Self::Public(_) => None,
        }
    }

    /// Returns the public access token, when the server issued one.
    #[must_use]
    pub fn public_access_token(&self) -> Option<&str> {
        match self {
            Self::Password(result) => result.public_access_token.as_deref(),
            Self::Public(result) => result.public_access_token.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_request_body_carries_credentials() {
        let request = AuthRequest::password("owner@example.com", "secret123");
        let body = request.to_body();
        assert_eq!(body["userId"], "owner@example.com");
        assert_eq!(body["password"], "secret123");
    }

    #[test]
    fn test_public_request_body_is_empty() {
        let request = AuthRequest::public();
        assert_eq!(request.to_body(), serde_json::json!({}));
    }

    #[test]
    fn test_public_request_body_carries_shop_id() {
        let shop_id = ShopId::new("shop-42").unwrap();
        let request = AuthRequest::public_for_shop(shop_id);
        assert_eq!(request.to_body(), serde_json::json!({"shopId": "shop-42"}));
    }

    #[test]
    fn test_is_password_mode() {
        assert!(AuthRequest::password("a", "b").is_password_mode());
        assert!(!AuthRequest::public().is_password_mode());
    }

    #[test]
    fn test_request_debug_masks_password() {
        let request = AuthRequest::password("owner@example.com", "secret123");
        let debug = format!("{request:?}");
        assert!(debug.contains("owner@example.com"));
        assert!(debug.contains("*****"));
        assert!(!debug.contains("secret123"));
    }

    #[test]
    fn test_password_result_deserializes_optional_fields() {
        let result: PasswordAuthResult = serde_json::from_value(serde_json::json!({
            "oauthToken": "A",
            "publicAccessToken": "B",
            "publicTokenExpiresInDays": 7,
            "shopId": "shop-1",
        }))
        .unwrap();

        assert_eq!(result.oauth_token.as_deref(), Some("A"));
        assert_eq!(result.public_access_token.as_deref(), Some("B"));
        assert_eq!(result.public_token_expires_in_days, Some(7));
        assert!(result.user_id.is_none());
    }

    #[test]
    fn test_password_result_tolerates_missing_tokens() {
        let result: PasswordAuthResult =
            serde_json::from_value(serde_json::json!({"message": "ok"})).unwrap();
        assert!(result.oauth_token.is_none());
        assert!(result.public_access_token.is_none());
    }

    #[test]
    fn test_result_debug_masks_tokens() {
        let result: PasswordAuthResult = serde_json::from_value(serde_json::json!({
            "oauthToken": "secret-a",
            "publicAccessToken": "secret-b",
        }))
        .unwrap();
        let debug = format!("{result:?}");
        assert!(!debug.contains("secret-a"));
        assert!(!debug.contains("secret-b"));
    }

    #[test]
    fn test_public_result_expiry_is_informational() {
        let result: PublicAuthResult = serde_json::from_value(serde_json::json!({
            "publicAccessToken": "B",
            "publicTokenExpiresInDays": 7,
        }))
        .unwrap();

        let expires_at = result.public_token_expires_at().unwrap();
        let in_six_days = Utc::now() + Duration::days(6);
        let in_eight_days = Utc::now() + Duration::days(8);
        assert!(expires_at > in_six_days && expires_at < in_eight_days);
    }

    #[test]
    fn test_outcome_accessors() {
        let password = AuthOutcome::Password(
            serde_json::from_value(serde_json::json!({
                "oauthToken": "A",
                "publicAccessToken": "B",
            }))
            .unwrap(),
        );
        assert_eq!(password.oauth_token(), Some("A"));
        assert_eq!(password.public_access_token(), Some("B"));

        let public = AuthOutcome::Public(
            serde_json::from_value(serde_json::json!({"publicAccessToken": "B"})).unwrap(),
        );
        assert_eq!(public.oauth_token(), None);
        assert_eq!(public.public_access_token(), Some("B"));
    }
}
