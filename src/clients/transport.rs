//! The seam between the storefront flows and the network.

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends requests to the storefront endpoint.
///
/// [`HttpClient`](crate::clients::HttpClient) is the network implementation.
/// The catalog and order flows only see this trait, so another implementation
/// can stand in for the remote service.
///
/// Implementations return `Ok` only for 2xx responses whose body is JSON (or
/// empty); any other status maps to [`HttpError::Response`].
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Sends one request and waits for its response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
