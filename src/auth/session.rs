//! Session management for API authentication.
//!
//! This module provides the [`TokenSession`] type: an explicit session object
//! owning the two cached credentials. Tokens live in an in-memory cache
//! mirrored to an injected [`TokenStore`], which makes the dual-store
//! (memory + disk) consistency explicit and testable instead of hiding it
//! behind module-level globals.

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use crate::auth::store::{MemoryTokenStore, StoreError, TokenStore};
use crate::auth::token::{AuthToken, TokenKind};

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No public access token is cached in memory or persisted in the store.
    ///
    /// This signals a flow error (an endpoint that needs the public token was
    /// called before any authentication), not a server condition. The session
    /// never authenticates implicitly; the caller must run `authenticate`
    /// first.
    #[error("No public access token available. Please authenticate first.")]
    MissingPublicToken,

    /// The backing token store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Default)]
struct TokenCache {
    private: Option<String>,
    public: Option<String>,
}

/// Explicit session object holding the client's cached credentials.
///
/// The session caches at most one token of each [`TokenKind`] (no
/// multi-account support) and mirrors every change to the injected
/// [`TokenStore`]. There is no expiry bookkeeping: token expiry is discovered
/// reactively when the server answers 401, at which point the client clears
/// the session.
///
/// # Thread Safety
///
/// `TokenSession` is `Send + Sync`; the cache is guarded by a mutex so the
/// session can be shared across async tasks.
///
/// # Example
///
/// ```rust
/// use soanch_api::auth::{AuthToken, TokenKind, TokenSession};
///
/// let session = TokenSession::in_memory();
/// session.set(AuthToken::Private("oauth-token".to_string())).unwrap();
///
/// let token = session.get(TokenKind::Private).unwrap().unwrap();
/// assert_eq!(token.as_str(), "oauth-token");
///
/// session.clear().unwrap();
/// assert!(session.get(TokenKind::Private).unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct TokenSession {
    store: Arc<dyn TokenStore>,
    cache: Mutex<TokenCache>,
}

// Verify TokenSession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenSession>();
};

impl TokenSession {
    /// Creates a session backed by the given store.
    ///
    /// Previously persisted tokens become visible lazily, on first
    /// [`get`](Self::get) of each kind.
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            store,
            cache: Mutex::new(TokenCache::default()),
        }
    }

    /// Creates a session backed by a fresh [`MemoryTokenStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Returns the cached token of the given kind, if any.
    ///
    /// Checks the in-memory cache first, then falls back to the store and
    /// caches a hit. Returns `Ok(None)` when neither source has a token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be read.
    pub fn get(&self, kind: TokenKind) -> Result<Option<AuthToken>, StoreError> {
        {
            let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            let slot = match kind {
                TokenKind::Private => &cache.private,
                TokenKind::Public => &cache.public,
            };
            if let Some(token) = slot {
                return Ok(Some(AuthToken::new(kind, token.clone())));
            }
        }

        let Some(token) = self.store.load(kind)? else {
            return Ok(None);
        };

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        match kind {
            TokenKind::Private => cache.private = Some(token.clone()),
            TokenKind::Public => cache.public = Some(token.clone()),
        }
        Ok(Some(AuthToken::new(kind, token)))
    }

    /// Returns the public access token, failing fast when none is available.
    ///
    /// This performs no network call. A missing token means the caller must
    /// run `authenticate` first.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingPublicToken`] when no public token is
    /// cached or persisted, or [`SessionError::Store`] if the store cannot
    /// be read.
    pub fn public_access_token(&self) -> Result<String, SessionError> {
        match self.get(TokenKind::Public)? {
            Some(token) => Ok(token.as_str().to_string()),
            None => Err(SessionError::MissingPublicToken),
        }
    }

    /// Caches the token in memory and mirrors it to the store.
    ///
    /// Replaces any previous token of the same kind; the other kind is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be written. The
    /// in-memory cache is not updated when persistence fails.
    pub fn set(&self, token: AuthToken) -> Result<(), StoreError> {
        let kind = token.kind();
        self.store.save(kind, token.as_str())?;

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        match kind {
            TokenKind::Private => cache.private = Some(token.as_str().to_string()),
            TokenKind::Public => cache.public = Some(token.as_str().to_string()),
        }
        tracing::debug!(kind = %kind, "cached access token");
        Ok(())
    }

    /// Clears both tokens from memory and the store.
    ///
    /// This is the single teardown path used by both `logout` and the 401
    /// handler; both tokens are always cleared together, even when only one
    /// was invalid. Idempotent: clearing an empty session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be written. The
    /// in-memory cache is emptied regardless, so a failed clear never leaves
    /// a token attached to later requests within this process.
    pub fn clear(&self) -> Result<(), StoreError> {
        {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            cache.private = None;
            cache.public = None;
        }
        let private_result = self.store.delete(TokenKind::Private);
        let public_result = self.store.delete(TokenKind::Public);
        private_result?;
        public_result?;
        tracing::debug!("cleared cached credentials");
        Ok(())
    }
}
