//! Typed client for the shop management API.
//!
//! This module provides [`ShopApiClient`], the high-level entry point
//! wrapping every endpoint of the API with typed request and response
//! models, plus the [`models`] they exchange.

pub mod models;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::{
    AuthOutcome, AuthRequest, AuthToken, PasswordAuthResult, PublicAuthResult, SessionError,
    TokenSession, TokenStore,
};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, TokenPolicy};
use crate::config::{ApiConfig, ShopId};
use crate::rest::models::{
    ApiMessage, Catalog, CatalogCreate, CatalogStatus, CatalogUpdate, CreateUserResponse,
    QrCodeResponse, Shop, ShopCreate, ShopMenu, ShopUpdate, ShopUser, ShopUserCreate,
};

/// Which credential a `create_shop` call carries.
///
/// Shop creation is reachable from two flows: signup (only a public token
/// exists yet) and a signed-in owner adding another shop. The caller states
/// which flow it is in; nothing is inferred from session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateShopAuth {
    /// Signed-in flow: attach the cached private OAuth token.
    Private,
    /// Signup flow: attach the public access token. Fails before any
    /// network activity when no public token is available.
    Public,
}

impl CreateShopAuth {
    const fn token_policy(self) -> TokenPolicy {
        match self {
            Self::Private => TokenPolicy::Private,
            Self::Public => TokenPolicy::Public,
        }
    }
}

/// High-level client for the shop management API.
///
/// The client owns a [`TokenSession`] shared with its transport. Signed-in
/// operations pick up the cached private OAuth token automatically; the
/// pre-sign-in operations (`create_user`, `reset_password`, and
/// `create_shop` in the signup flow) attach the public access token
/// explicitly and fail fast when it is missing.
///
/// Requests are sent exactly once. A 401 from any endpoint clears both
/// cached tokens before the error is returned; the caller's recovery path
/// is always `authenticate`.
///
/// # Example
///
/// ```rust,ignore
/// use soanch_api::{ApiConfig, AuthRequest, ShopApiClient};
///
/// let client = ShopApiClient::in_memory(&ApiConfig::default());
///
/// client.authenticate(AuthRequest::password("owner@example.com", "secret")).await?;
/// let shops = client.get_all_shops().await?;
/// ```
#[derive(Debug)]
pub struct ShopApiClient {
    http_client: HttpClient,
    session: Arc<TokenSession>,
}

// Verify ShopApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopApiClient>();
};

impl ShopApiClient {
    /// Creates a client whose session persists tokens through `store`.
    ///
    /// Tokens persisted by an earlier process become visible immediately;
    /// no re-authentication is needed while they remain valid.
    #[must_use]
    pub fn new(config: &ApiConfig, store: Arc<dyn TokenStore>) -> Self {
        Self::with_session(config, Arc::new(TokenSession::new(store)))
    }

    /// Creates a client around an existing session.
    #[must_use]
    pub fn with_session(config: &ApiConfig, session: Arc<TokenSession>) -> Self {
        Self {
            http_client: HttpClient::new(config, Arc::clone(&session)),
            session,
        }
    }

    /// Creates a client whose tokens live only for the process lifetime.
    #[must_use]
    pub fn in_memory(config: &ApiConfig) -> Self {
        Self::with_session(config, Arc::new(TokenSession::in_memory()))
    }

    /// Returns the session this client authenticates through.
    #[must_use]
    pub fn session(&self) -> &Arc<TokenSession> {
        &self.session
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Authenticates against the API and persists the issued tokens.
    ///
    /// In password mode the server issues the private OAuth token and
    /// usually a public access token; whichever is present in the response
    /// is cached and persisted. In public mode only the public token is
    /// issued.
    ///
    /// The returned [`AuthOutcome`] is tagged with the mode that was used.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the issued tokens
    /// cannot be persisted.
    pub async fn authenticate(&self, request: AuthRequest) -> Result<AuthOutcome, HttpError> {
        let http_request = HttpRequest::builder(HttpMethod::Post, "api/shops/auth")
            .body(request.to_body())
            .build()?;
        let response = self.http_client.request(http_request).await?;

        if request.is_password_mode() {
            let result: PasswordAuthResult = decode_body(response)?;
            if let Some(token) = &result.oauth_token {
                self.store_token(AuthToken::Private(token.clone()))?;
            }
            if let Some(token) = &result.public_access_token {
                self.store_token(AuthToken::Public(token.clone()))?;
            }
            tracing::debug!(shop_id = ?result.shop_id, "password authentication succeeded");
            Ok(AuthOutcome::Password(result))
        } else {
            let result: PublicAuthResult = decode_body(response)?;
            if let Some(token) = &result.public_access_token {
                self.store_token(AuthToken::Public(token.clone()))?;
            }
            tracing::debug!("public authentication succeeded");
            Ok(AuthOutcome::Public(result))
        }
    }

    /// Signs out by discarding both cached tokens.
    ///
    /// Purely local: no network call is made, and signing out while already
    /// signed out succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Session`] if the persisted tokens cannot be
    /// removed. The in-memory tokens are gone regardless.
    pub fn logout(&self) -> Result<(), HttpError> {
        self.session.clear().map_err(SessionError::from)?;
        Ok(())
    }

    /// Returns the cached public access token, failing fast when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingPublicToken`] when no public token is
    /// available.
    pub fn public_access_token(&self) -> Result<String, SessionError> {
        self.session.public_access_token()
    }

    /// Creates a user account for a shop. Requires the public access token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Session`] before any network activity when no
    /// public token is cached, or [`HttpError`] if the request fails.
    pub async fn create_user(
        &self,
        shop_id: &ShopId,
        password: &str,
        confirm_password: &str,
    ) -> Result<CreateUserResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "api/shops/user")
            .body(serde_json::json!({
                "shopId": shop_id,
                "password": password,
                "confirmPassword": confirm_password,
            }))
            .token_policy(TokenPolicy::Public)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Resets a user's password. Requires the public access token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Session`] before any network activity when no
    /// public token is cached, or [`HttpError`] if the request fails.
    pub async fn reset_password(
        &self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
        confirm_new_password: &str,
    ) -> Result<ApiMessage, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "api/shops/reset-password")
            .body(serde_json::json!({
                "userId": user_id,
                "oldPassword": old_password,
                "newPassword": new_password,
                "confirmNewPassword": confirm_new_password,
            }))
            .token_policy(TokenPolicy::Public)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Creates a shop, carrying the credential named by `auth`.
    ///
    /// # Errors
    ///
    /// With [`CreateShopAuth::Public`], returns [`HttpError::Session`]
    /// before any network activity when no public token is cached. Returns
    /// [`HttpError`] if the request fails.
    pub async fn create_shop(
        &self,
        shop: &ShopCreate,
        auth: CreateShopAuth,
    ) -> Result<Shop, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "api/shops")
            .body(serde_json::to_value(shop)?)
            .token_policy(auth.token_policy())
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Lists all shops.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_all_shops(&self) -> Result<Vec<Shop>, HttpError> {
        self.get("api/shops".to_string()).await
    }

    /// Fetches a shop by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop(&self, id: &ShopId) -> Result<Shop, HttpError> {
        self.get(format!("api/shops/{id}")).await
    }

    /// Updates a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_shop(&self, id: &ShopId, update: &ShopUpdate) -> Result<Shop, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, format!("api/shops/{id}"))
            .body(serde_json::to_value(update)?)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Deletes a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_shop(&self, id: &ShopId) -> Result<ApiMessage, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("api/shops/{id}")).build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Searches shops by display name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_shops_by_name(&self, name: &str) -> Result<Vec<Shop>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "api/shops/search/name")
            .query_param("name", name)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Searches shops by owner name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_shops_by_owner(&self, owner: &str) -> Result<Vec<Shop>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "api/shops/search/owner")
            .query_param("owner", owner)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Fetches a shop's public menu.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_menu(&self, id: &ShopId) -> Result<ShopMenu, HttpError> {
        self.get(format!("api/shops/{id}/menus")).await
    }

    /// Generates (or regenerates) a shop's QR code.
    ///
    /// When `domain` is given, the generated code points at that domain
    /// instead of the API default.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn generate_qr_code(
        &self,
        shop_id: &ShopId,
        domain: Option<&str>,
    ) -> Result<QrCodeResponse, HttpError> {
        let mut builder =
            HttpRequest::builder(HttpMethod::Post, format!("api/shops/{shop_id}/generate-qr"))
                .body(serde_json::json!({}));
        if let Some(domain) = domain {
            builder = builder.query_param("domain", domain);
        }
        decode_body(self.http_client.request(builder.build()?).await?)
    }

    /// Fetches a shop's existing QR code.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_qr_code(&self, shop_id: &ShopId) -> Result<QrCodeResponse, HttpError> {
        self.get(format!("api/shops/{shop_id}/qr-code")).await
    }

    /// Creates a catalog item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_catalog(&self, catalog: &CatalogCreate) -> Result<Catalog, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "api/catalogs")
            .body(serde_json::to_value(catalog)?)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Lists all catalog items.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_all_catalogs(&self) -> Result<Vec<Catalog>, HttpError> {
        self.get("api/catalogs".to_string()).await
    }

    /// Fetches a catalog item by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_catalog(&self, id: &str) -> Result<Catalog, HttpError> {
        self.get(format!("api/catalogs/{id}")).await
    }

    /// Updates a catalog item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_catalog(
        &self,
        id: &str,
        update: &CatalogUpdate,
    ) -> Result<Catalog, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, format!("api/catalogs/{id}"))
            .body(serde_json::to_value(update)?)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Deletes a catalog item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_catalog(&self, id: &str) -> Result<ApiMessage, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("api/catalogs/{id}")).build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Lists a shop's catalog items.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_catalogs_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Catalog>, HttpError> {
        self.get(format!("api/catalogs/shop/{shop_id}")).await
    }

    /// Lists catalog items in a category, across shops.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_catalogs_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Catalog>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "api/catalogs/search/category")
            .query_param("category", category)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Lists a shop's catalog items within a price range.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_catalogs_by_price_range(
        &self,
        shop_id: &ShopId,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<Catalog>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "api/catalogs/price-range")
            .query_param("shopId", shop_id.to_string())
            .query_param("minPrice", min_price.to_string())
            .query_param("maxPrice", max_price.to_string())
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Lists a shop's currently available catalog items.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_available_catalogs(
        &self,
        shop_id: &ShopId,
    ) -> Result<Vec<Catalog>, HttpError> {
        self.get(format!("api/catalogs/available/{shop_id}")).await
    }

    /// Sets a catalog item's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_catalog_status(
        &self,
        id: &str,
        status: CatalogStatus,
    ) -> Result<Catalog, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Patch, format!("api/catalogs/{id}/status"))
            .query_param("status", status.as_str())
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Lists the user accounts attached to a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_users(&self, shop_id: &ShopId) -> Result<Vec<ShopUser>, HttpError> {
        self.get(format!("api/shops/{shop_id}/users")).await
    }

    /// Attaches a user account to a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn add_shop_user(
        &self,
        shop_id: &ShopId,
        user: &ShopUserCreate,
    ) -> Result<ShopUser, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, format!("api/shops/{shop_id}/users"))
            .body(serde_json::to_value(user)?)
            .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    /// Detaches a user account from its shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn remove_shop_user(&self, user_id: &str) -> Result<ApiMessage, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("api/shops/users/{user_id}"))
                .build()?;
        decode_body(self.http_client.request(request).await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: String) -> Result<T, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        decode_body(self.http_client.request(request).await?)
    }

    fn store_token(&self, token: AuthToken) -> Result<(), HttpError> {
        self.session.set(token).map_err(SessionError::from)?;
        Ok(())
    }
}

fn decode_body<T: DeserializeOwned>(response: HttpResponse) -> Result<T, HttpError> {
    Ok(serde_json::from_value(response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_shop_auth_maps_to_token_policy() {
        assert_eq!(CreateShopAuth::Private.token_policy(), TokenPolicy::Private);
        assert_eq!(CreateShopAuth::Public.token_policy(), TokenPolicy::Public);
    }

    #[test]
    fn test_client_shares_session_with_transport() {
        let client = ShopApiClient::in_memory(&ApiConfig::default());
        assert!(Arc::ptr_eq(client.session(), client.http_client().session()));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShopApiClient>();
    }
}
