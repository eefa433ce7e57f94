//! HTTP request types for the Soanch API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the shop management API, along with the
//! per-request [`TokenPolicy`] naming which credential the request carries.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the shop management API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Which credential a request carries in its `Authorization` header.
///
/// Every request names its policy explicitly instead of relying on an
/// ambient interceptor, which makes the credential choice visible at the
/// call site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Attach the cached private OAuth token if one exists; send the
    /// request unauthenticated otherwise. This is the default, covering
    /// every signed-in operation.
    #[default]
    Private,
    /// Attach the cached public access token. If none is available the
    /// request fails before any network activity.
    Public,
    /// Attach no credential, even when tokens are cached.
    None,
}

/// An HTTP request to be sent to the shop management API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder
/// pattern. Bodies are always JSON.
///
/// # Example
///
/// ```rust
/// use soanch_api::clients::{HttpRequest, HttpMethod, TokenPolicy};
/// use serde_json::json;
///
/// // GET request, private token attached automatically when cached
/// let get_request = HttpRequest::builder(HttpMethod::Get, "api/shops/shop-1")
///     .build()
///     .unwrap();
/// assert_eq!(get_request.token_policy, TokenPolicy::Private);
///
/// // POST request needing the public token
/// let post_request = HttpRequest::builder(HttpMethod::Post, "api/users")
///     .body(json!({"email": "owner@example.com"}))
///     .token_policy(TokenPolicy::Public)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URI) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Which credential this request carries.
    pub token_policy: TokenPolicy,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// A leading slash on `path` is stripped; paths are joined to the base
    /// URI with exactly one separator.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post` or `Put` but `body` is `None`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    token_policy: TokenPolicy,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = path.strip_prefix('/').map_or(path.clone(), str::to_string);
        Self {
            http_method: method,
            path,
            body: None,
            query: None,
            extra_headers: None,
            token_policy: TokenPolicy::default(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets which credential the request carries.
    #[must_use]
    pub const fn token_policy(mut self, policy: TokenPolicy) -> Self {
        self.token_policy = policy;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            token_policy: self.token_policy,
        };
        request.verify()?;
        Ok(request)
    }
}
