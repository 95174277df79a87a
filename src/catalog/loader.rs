//! The catalog read: one GET, one view.

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{CatalogView, Product, ProductCard};
use crate::clients::{HttpError, HttpMethod, HttpRequest, Transport};
use crate::config::StorefrontConfig;
use crate::envelope::ResponseEnvelope;

/// Errors returned by [`CatalogLoader::fetch_products`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The service answered with `status: "ERROR"`.
    #[error("Catalog service reported an error: {}", .message.as_deref().unwrap_or("no message"))]
    Service {
        /// The service's message, if it sent one.
        message: Option<String>,
    },

    /// The request failed or the response could not be decoded.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Loads the product catalog from the endpoint.
///
/// Each call to [`load`](Self::load) or [`fetch_products`](Self::fetch_products)
/// issues exactly one GET. There is no retry or cancellation.
///
/// # Example
///
/// ```rust,ignore
/// use sheet_storefront::Storefront;
///
/// let storefront = Storefront::new(config)?;
/// let view = storefront.catalog().load().await;
/// let html = view.to_html(storefront.config().messages());
/// ```
#[derive(Clone, Debug)]
pub struct CatalogLoader {
    transport: Arc<dyn Transport>,
    config: Arc<StorefrontConfig>,
}

impl CatalogLoader {
    /// Creates a loader sending through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, config: Arc<StorefrontConfig>) -> Self {
        Self { transport, config }
    }

    /// Fetches the products, in response order.
    ///
    /// A missing `data` field yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Service`] when the service reports `ERROR`, and
    /// [`CatalogError::Http`] for HTTP, transport, and decoding failures.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let request = HttpRequest::builder(HttpMethod::Get)
            .build()
            .map_err(HttpError::from)?;

        let response = self.transport.send(request).await?;
        let envelope: ResponseEnvelope = response.json().map_err(HttpError::from)?;

        // The rows are only read once the service has not reported an error.
        if envelope.is_error() {
            return Err(CatalogError::Service {
                message: envelope.message,
            });
        }

        match envelope.data {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(data) => serde_json::from_value(data).map_err(|e| CatalogError::Http(e.into())),
        }
    }

    /// Fetches the products and turns the outcome into the container's view.
    ///
    /// Failures never escape: each one becomes a message variant of
    /// [`CatalogView`] and is logged.
    pub async fn load(&self) -> CatalogView {
        let messages = self.config.messages();

        match self.fetch_products().await {
            Ok(products) if products.is_empty() => CatalogView::Empty {
                message: messages.catalog_empty.clone(),
            },
            Ok(products) => CatalogView::Cards(
                products
                    .iter()
                    .map(|product| ProductCard::from_product(product, &self.config))
                    .collect(),
            ),
            Err(CatalogError::Service { message }) => {
                tracing::error!(service_message = ?message, "catalog service reported an error");
                CatalogView::ServiceError {
                    message: message.unwrap_or_else(|| messages.catalog_unknown_error.clone()),
                }
            }
            Err(CatalogError::Http(HttpError::Response(e))) => {
                tracing::error!(status = e.code, error = %e, "catalog request failed");
                CatalogView::HttpFailure {
                    status: e.code,
                    message: messages.http_status(e.code),
                }
            }
            Err(CatalogError::Http(e)) => {
                tracing::error!(error = %e, "catalog fetch error");
                CatalogView::ConnectionFailure {
                    message: messages.catalog_connection(&e),
                }
            }
        }
    }
}
