//! HTTP client for shop management API communication.
//!
//! This module provides the [`HttpClient`] type: a single-shot transport
//! that resolves each request's [`TokenPolicy`] against the shared
//! [`TokenSession`] and tears the session down when the server answers 401.

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::{SessionError, TokenKind, TokenSession};
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, TokenPolicy};
use crate::clients::http_response::HttpResponse;
use crate::config::ApiConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the shop management API.
///
/// The client handles:
/// - Base URI and default headers (User-Agent, Accept)
/// - Credential attachment per the request's [`TokenPolicy`]
/// - Session teardown on 401 responses
///
/// Every request is sent exactly once: no retries, no backoff, and no
/// pre-emptive token refresh. Expiry is discovered when the server says so.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use soanch_api::{ApiConfig, HttpClient, HttpRequest, HttpMethod, TokenSession};
///
/// let session = Arc::new(TokenSession::in_memory());
/// let client = HttpClient::new(&ApiConfig::default(), Arc::clone(&session));
///
/// let request = HttpRequest::builder(HttpMethod::Get, "api/shops/shop-1")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.soanch.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Shared session supplying credentials.
    session: Arc<TokenSession>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration and session.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use soanch_api::{ApiConfig, TokenSession};
    /// use soanch_api::clients::HttpClient;
    ///
    /// let session = Arc::new(TokenSession::in_memory());
    /// let client = HttpClient::new(&ApiConfig::default(), session);
    /// assert_eq!(client.base_uri(), "https://api.soanch.com");
    /// ```
    #[must_use]
    pub fn new(config: &ApiConfig, session: Arc<TokenSession>) -> Self {
        let base_uri = config.base_url().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Soanch API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
            session,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the session this client attaches credentials from.
    #[must_use]
    pub fn session(&self) -> &Arc<TokenSession> {
        &self.session
    }

    /// Sends an HTTP request to the shop management API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction and header merging
    /// - Credential resolution per the request's [`TokenPolicy`]
    /// - Response parsing
    /// - Session teardown on 401
    ///
    /// With [`TokenPolicy::Public`], a missing public token fails here with
    /// [`HttpError::Session`] before any network activity. With
    /// [`TokenPolicy::Private`], a missing private token is not an error;
    /// the request simply goes out unauthenticated.
    ///
    /// A 401 response clears both cached tokens before the error is
    /// returned, regardless of which token (if any) the request carried.
    /// Network errors leave the session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A required token is missing (`Session`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);

        // Merge headers: defaults, then the credential, then per-request
        // extras (which may override both)
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        match request.token_policy {
            TokenPolicy::Private => {
                if let Some(token) = self.session.get(TokenKind::Private).map_err(SessionError::from)? {
                    headers.insert(
                        "Authorization".to_string(),
                        format!("Bearer {}", token.as_str()),
                    );
                }
            }
            TokenPolicy::Public => {
                let token = self.session.public_access_token()?;
                headers.insert("Authorization".to_string(), format!("Bearer {token}"));
            }
            TokenPolicy::None => {}
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // For 5xx errors, return raw body as string value
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        // 401 means whatever credential we hold is no longer trusted. Both
        // tokens are cleared before the error surfaces, so the very next
        // request already goes out unauthenticated.
        if code == 401 {
            tracing::warn!(path = %request.path, "server rejected credentials, clearing session");
            if let Err(store_error) = self.session.clear() {
                tracing::warn!(error = %store_error, "failed to clear persisted tokens");
            }
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response body to a JSON summary string.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["status", "message", "details"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> HttpClient {
        HttpClient::new(
            &ApiConfig::default(),
            Arc::new(TokenSession::in_memory()),
        )
    }

    #[test]
    fn test_client_construction_uses_config_base_url() {
        let client = create_test_client();
        assert_eq!(client.base_uri(), "https://api.soanch.com");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Soanch API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ApiConfig::builder()
            .user_agent_prefix("MyShopApp/2.1")
            .build();
        let client = HttpClient::new(&config, Arc::new(TokenSession::in_memory()));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShopApp/2.1 | "));
        assert!(user_agent.contains("Soanch API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_test_client();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_no_authorization_in_default_headers() {
        // Credentials are resolved per request, never baked into defaults
        let client = create_test_client();
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_serialize_error_extracts_known_fields() {
        let response = HttpResponse::new(
            400,
            HashMap::new(),
            serde_json::json!({
                "status": "error",
                "message": "Invalid shop id",
                "ignored": "extra",
            }),
        );

        let serialized = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["message"], "Invalid shop id");
        assert!(parsed.get("ignored").is_none());
    }

    #[test]
    fn test_serialize_error_includes_request_id_reference() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
        let response = HttpResponse::new(500, headers, serde_json::json!({"message": "boom"}));

        let serialized = HttpClient::serialize_error(&response);
        assert!(serialized.contains("abc-123"));
    }
}
