//! HTTP client types for the storefront endpoint.
//!
//! # Overview
//!
//! - [`Transport`]: the trait the catalog and order flows send through
//! - [`HttpClient`]: the reqwest-backed [`Transport`]
//! - [`HttpRequest`]: a request to be sent to the endpoint
//! - [`HttpResponse`]: a parsed response from the endpoint
//! - [`HttpMethod`]: `GET` (catalog) and `POST` (orders)
//! - [`DataType`]: content types for request bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use sheet_storefront::clients::{HttpClient, HttpRequest, HttpMethod, Transport};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get).build().unwrap();
//! let response = client.send(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;

#[cfg(test)]
pub(crate) use transport::stub;
