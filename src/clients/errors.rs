//! HTTP-specific error types for the Soanch API SDK.
//!
//! This module contains error types for HTTP operations: response errors,
//! request validation failures, and the unified [`HttpError`] callers match
//! on.
//!
//! # Example
//!
//! ```rust,ignore
//! use soanch_api::{HttpError, ShopApiClient};
//!
//! match client.get_shop(&shop_id).await {
//!     Ok(shop) => println!("Shop: {}", shop.name),
//!     Err(HttpError::Response(e)) if e.code == 401 => {
//!         println!("Signed out; authenticate again");
//!     }
//!     Err(HttpError::Session(e)) => println!("{e}"),
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::SessionError;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message field carries a serialized JSON summary of the server's error
/// body (`status`, `message`, `details` when present).
///
/// # Example
///
/// ```rust
/// use soanch_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"message":"Shop not found"}"#.to_string(),
///     error_reference: None,
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to handle specific failure modes. Note that a 401
/// surfaces as [`HttpError::Response`] after the client has already cleared
/// the session; the caller's only job is to re-authenticate.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error (includes timeouts).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The session could not supply a required token.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code, when this error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_message_is_serialized_body() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"message":"Shop not found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"message":"Shop not found"}"#);
    }

    #[test]
    fn test_http_response_error_includes_request_id() {
        let error = HttpResponseError {
            code: 500,
            message: r#"{"message":"Internal Server Error","error_reference":"If you report this error, please include this id: abc-123."}"#.to_string(),
            error_reference: Some("abc-123".to_string()),
        };
        assert_eq!(error.error_reference, Some("abc-123".to_string()));
        assert!(error.to_string().contains("abc-123"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_status_helper() {
        let error: HttpError = HttpResponseError {
            code: 401,
            message: "{}".to_string(),
            error_reference: None,
        }
        .into();
        assert_eq!(error.status(), Some(401));

        let error: HttpError = SessionError::MissingPublicToken.into();
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_session_error_converts_transparently() {
        let error: HttpError = SessionError::MissingPublicToken.into();
        assert_eq!(
            error.to_string(),
            "No public access token available. Please authenticate first."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
        };
        let _ = response_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _ = invalid_error;
    }
}
