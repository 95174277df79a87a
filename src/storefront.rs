//! Entry points for the two storefront views.
//!
//! [`Storefront`] wires the configuration and a [`Transport`] into the
//! catalog and order components. [`Route`] maps a request path to the view
//! it belongs to.

use std::sync::Arc;

use crate::catalog::CatalogLoader;
use crate::clients::{HttpClient, HttpError, Transport};
use crate::config::StorefrontConfig;
use crate::order::{product_from_query, OrderForm, OrderPage, OrderSubmitter};

/// Path of the catalog page besides `/`.
pub const CATALOG_PAGE: &str = "index.html";

/// The view a request path belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The product catalog.
    Catalog,
    /// The order form.
    Order {
        /// The decoded `produto` query parameter, if any.
        product: Option<String>,
    },
}

impl Route {
    /// Resolves a path with optional query (`/encomenda.html?produto=Mesa`).
    ///
    /// `/` and `/index.html` are the catalog; the configured order page is
    /// the order form. Any other path resolves to `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sheet_storefront::{EndpointUrl, Route, StorefrontConfig};
    ///
    /// let config = StorefrontConfig::builder()
    ///     .endpoint(EndpointUrl::new("https://script.example.com/exec").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(Route::resolve("/", &config), Some(Route::Catalog));
    /// assert_eq!(
    ///     Route::resolve("/encomenda.html?produto=Mesa", &config),
    ///     Some(Route::Order { product: Some("Mesa".to_string()) })
    /// );
    /// ```
    #[must_use]
    pub fn resolve(path_and_query: &str, config: &StorefrontConfig) -> Option<Self> {
        let without_fragment = path_and_query.split('#').next().unwrap_or_default();
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));
        let path = path.trim_start_matches('/');

        if path.is_empty() || path == CATALOG_PAGE {
            Some(Self::Catalog)
        } else if path == config.order_page().trim_start_matches('/') {
            Some(Self::Order {
                product: product_from_query(query),
            })
        } else {
            None
        }
    }
}

/// The storefront: one configuration, one transport, two views.
///
/// # Example
///
/// ```rust,ignore
/// use sheet_storefront::{EndpointUrl, Storefront, StorefrontConfig};
///
/// let config = StorefrontConfig::builder()
///     .endpoint(EndpointUrl::new("https://script.example.com/exec").unwrap())
///     .build()
///     .unwrap();
/// let storefront = Storefront::new(config)?;
///
/// // Catalog view
/// let view = storefront.catalog().load().await;
///
/// // Order view
/// let mut page = storefront.order_page("?produto=Mesa");
/// page.form_mut().set("Nome", "Ana");
/// storefront.orders().submit(&mut page).await;
/// ```
#[derive(Clone, Debug)]
pub struct Storefront {
    config: Arc<StorefrontConfig>,
    transport: Arc<dyn Transport>,
}

// Verify Storefront is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Storefront>();
};

impl Storefront {
    /// Creates a storefront talking to the configured endpoint over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, HttpError> {
        let transport = HttpClient::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a storefront sending through `transport`.
    #[must_use]
    pub fn with_transport(config: StorefrontConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Returns the catalog view's loader.
    #[must_use]
    pub fn catalog(&self) -> CatalogLoader {
        CatalogLoader::new(self.transport.clone(), self.config.clone())
    }

    /// Returns the order view's submitter.
    #[must_use]
    pub fn orders(&self) -> OrderSubmitter {
        OrderSubmitter::new(self.transport.clone(), self.config.clone())
    }

    /// Builds a fresh order page from the configured fields, pre-filled from
    /// `query`.
    #[must_use]
    pub fn order_page(&self, query: &str) -> OrderPage {
        let form = OrderForm::new(self.config.order_fields().iter().cloned());
        OrderPage::new(form, self.config.messages().clone()).with_query(query)
    }
}
