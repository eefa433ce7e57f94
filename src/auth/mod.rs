//! Authentication for the Soanch API.
//!
//! This module implements the dual-token credential model:
//!
//! - [`token`]: the [`TokenKind`] and [`AuthToken`] credential types
//! - [`store`]: the injectable [`TokenStore`] persistence trait with
//!   in-memory and file-backed implementations
//! - [`session`]: the [`TokenSession`] object caching both credentials
//! - [`outcome`]: tagged request/result types for the authentication
//!   endpoint's two modes

pub mod outcome;
pub mod session;
pub mod store;
pub mod token;

pub use outcome::{AuthOutcome, AuthRequest, PasswordAuthResult, PublicAuthResult};
pub use session::{SessionError, TokenSession};
pub use store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
pub use token::{AuthToken, TokenKind, PRIVATE_TOKEN_KEY, PUBLIC_TOKEN_KEY};
