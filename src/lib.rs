//! # Soanch API Rust SDK
//!
//! A Rust SDK for the Soanch shop management API, providing dual-token
//! authentication, session handling, and typed endpoint wrappers for shops,
//! catalogs, QR codes, and shop users.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for the API base URL and shop identifiers
//! - Dual-token authentication: a long-lived private OAuth token attached
//!   automatically to signed-in operations, and a short-lived public access
//!   token attached explicitly to pre-sign-in operations
//! - An explicit [`TokenSession`] caching both credentials through an
//!   injectable [`TokenStore`] (in-memory or file-backed)
//! - A single-shot async HTTP client: no retries, no backoff, and no
//!   pre-emptive token refresh
//! - Typed endpoint wrappers via [`ShopApiClient`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soanch_api::{ApiConfig, AuthRequest, ShopApiClient};
//!
//! let client = ShopApiClient::in_memory(&ApiConfig::default());
//!
//! // Password sign-in issues both tokens
//! let outcome = client
//!     .authenticate(AuthRequest::password("owner@example.com", "secret"))
//!     .await?;
//!
//! // Signed-in operations attach the private token automatically
//! let shops = client.get_all_shops().await?;
//! ```
//!
//! ## Signup Flow
//!
//! Account creation runs before any password sign-in, so it uses the public
//! access token, fetched with a credential-less authentication:
//!
//! ```rust,ignore
//! use soanch_api::{ApiConfig, AuthRequest, CreateShopAuth, ShopApiClient, ShopId};
//! use soanch_api::rest::models::ShopCreate;
//!
//! let client = ShopApiClient::in_memory(&ApiConfig::default());
//!
//! // Public mode issues only the short-lived public token
//! client.authenticate(AuthRequest::public()).await?;
//!
//! let shop = client
//!     .create_shop(
//!         &ShopCreate {
//!             name: "Corner Bakery".to_string(),
//!             address: "1 Main St".to_string(),
//!             owner: "Alex".to_string(),
//!             email: None,
//!             mobile_country_code: None,
//!             mobile_number: None,
//!             theme: None,
//!         },
//!         CreateShopAuth::Public,
//!     )
//!     .await?;
//!
//! let shop_id = ShopId::new(shop.id)?;
//! client.create_user(&shop_id, "secret", "secret").await?;
//! ```
//!
//! ## Persistent Sessions
//!
//! Tokens survive process restarts when the session is backed by a
//! [`FileTokenStore`]:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use soanch_api::{ApiConfig, FileTokenStore, ShopApiClient};
//!
//! let store = Arc::new(FileTokenStore::new("/var/lib/myapp/tokens.json"));
//! let client = ShopApiClient::new(&ApiConfig::default(), store);
//!
//! // Previously persisted tokens are picked up automatically; no
//! // re-authentication is needed while they remain valid.
//! let shops = client.get_all_shops().await?;
//! ```
//!
//! ## Expiry Handling
//!
//! The client never inspects token age. When any endpoint answers 401, both
//! cached tokens are cleared before the error is returned, and the caller's
//! recovery path is always `authenticate`:
//!
//! ```rust,ignore
//! use soanch_api::HttpError;
//!
//! match client.get_all_shops().await {
//!     Ok(shops) => { /* ... */ }
//!     Err(HttpError::Response(e)) if e.code == 401 => {
//!         // Session already cleared; sign in again
//!         client.authenticate(AuthRequest::password(user, pass)).await?;
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Sessions are explicit objects with injected storage
//! - **Explicit credentials**: Every request names which token it carries
//! - **Reactive expiry**: One request, one response; 401 means sign in again
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{
    AuthOutcome, AuthRequest, AuthToken, FileTokenStore, MemoryTokenStore, PasswordAuthResult,
    PublicAuthResult, SessionError, StoreError, TokenKind, TokenSession, TokenStore,
};
pub use config::{ApiBaseUrl, ApiConfig, ApiConfigBuilder, ShopId, DEFAULT_TIMEOUT};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, TokenPolicy,
};

// Re-export the typed API client
pub use rest::{CreateShopAuth, ShopApiClient};
