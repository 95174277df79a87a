//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the endpoint
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: the unified error returned by every [`Transport`](crate::clients::Transport)
//!
//! # Example
//!
//! ```rust,ignore
//! use sheet_storefront::clients::{HttpError, Transport};
//!
//! match client.send(request).await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("HTTP {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidBody(e)) => println!("Not JSON: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the endpoint answers with a non-2xx status.
///
/// # Example
///
/// ```rust
/// use sheet_storefront::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Not Found".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: Not Found");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The service's `message` field, or the status' canonical reason.
    pub message: String,
}

/// Error returned when a request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The response body is not valid JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the endpoint answered with one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
