//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder for the two
//! requests the storefront sends to its endpoint.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used against the endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Reads the catalog.
    Get,
    /// Records an order.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Content type for HTTP request bodies.
///
/// Both variants carry the same JSON text; they differ only in the
/// `Content-Type` header sent with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain;charset=utf-8`).
    ///
    /// A "simple" content type, so browsers skip the CORS preflight.
    PlainText,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain;charset=utf-8",
        }
    }
}

/// An HTTP request to be sent to the endpoint.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use sheet_storefront::clients::{HttpRequest, HttpMethod, DataType};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get).build().unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post)
///     .body(r#"{"Nome":"Ana"}"#)
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The serialized request body, if any.
    pub body: Option<String>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub const fn builder(method: HttpMethod) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method == HttpMethod::Post && self.body.is_none() {
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
    body: Option<String>,
    body_type: Option<DataType>,
}

impl HttpRequestBuilder {
    const fn new(method: HttpMethod) -> Self {
        Self {
            http_method: method,
            body: None,
            body_type: None,
        }
    }

    /// Sets the serialized request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
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
            body: self.body,
            body_type: self.body_type,
        };
        request.verify()?;
        Ok(request)
    }
}
