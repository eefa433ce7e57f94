//! HTTP transport for the Soanch API.
//!
//! This module provides the low-level request machinery used by the typed
//! endpoint wrappers:
//!
//! - [`HttpClient`]: single-shot transport with per-request credential
//!   resolution and 401 session teardown
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: request construction with an
//!   explicit [`TokenPolicy`]
//! - [`HttpResponse`]: parsed responses
//! - [`HttpError`]: unified error type

pub mod errors;
pub mod http_client;
pub mod http_request;
pub mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, TokenPolicy};
pub use http_response::HttpResponse;
