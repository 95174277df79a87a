//! Configuration types for the storefront client.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: all settings shared by the catalog and order flows
//! - [`StorefrontConfigBuilder`]: a builder for [`StorefrontConfig`]
//! - [`EndpointUrl`]: the validated address of the remote service
//! - [`Messages`]: the texts shown to visitors
//!
//! # Example
//!
//! ```rust
//! use sheet_storefront::{StorefrontConfig, EndpointUrl};
//!
//! let config = StorefrontConfig::builder()
//!     .endpoint(EndpointUrl::new("https://script.example.com/exec").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.order_page(), "encomenda.html");
//! ```

mod messages;
mod newtypes;

pub use messages::Messages;
pub use newtypes::EndpointUrl;

use crate::clients::DataType;
use crate::error::ConfigError;

/// Default path of the order page linked from every product card.
pub const DEFAULT_ORDER_PAGE: &str = "encomenda.html";

/// Default currency glyph placed before formatted prices.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Field names of a fresh order form when none are configured.
pub const DEFAULT_ORDER_FIELDS: [&str; 2] = ["Nome", "Produto"];

/// Configuration shared by the catalog and order flows.
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`. It replaces the single
/// global endpoint constant: pass it to [`Storefront`](crate::Storefront) or
/// directly to the loaders.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    endpoint: EndpointUrl,
    order_page: String,
    order_body_type: DataType,
    order_fields: Vec<String>,
    currency_symbol: String,
    user_agent_prefix: Option<String>,
    messages: Messages,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Returns the endpoint serving both the catalog and the orders.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the path of the order page.
    #[must_use]
    pub fn order_page(&self) -> &str {
        &self.order_page
    }

    /// Returns the content type used for order submissions.
    #[must_use]
    pub const fn order_body_type(&self) -> DataType {
        self.order_body_type
    }

    /// Returns the field names of a fresh order form.
    #[must_use]
    pub fn order_fields(&self) -> &[String] {
        &self.order_fields
    }

    /// Returns the currency glyph placed before prices.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the visitor-facing texts.
    #[must_use]
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// Only `endpoint` is required.
///
/// # Defaults
///
/// - `order_page`: `encomenda.html`
/// - `order_body_type`: [`DataType::Json`]
/// - `order_fields`: `Nome`, `Produto`
/// - `currency_symbol`: `€`
/// - `user_agent_prefix`: `None`
/// - `messages`: [`Messages::default`]
///
/// # Example
///
/// ```rust
/// use sheet_storefront::{StorefrontConfig, EndpointUrl};
/// use sheet_storefront::clients::DataType;
///
/// let config = StorefrontConfig::builder()
///     .endpoint(EndpointUrl::new("https://script.example.com/exec").unwrap())
///     .order_body_type(DataType::PlainText)
///     .order_fields(["Nome", "Email", "Produto", "Quantidade"])
///     .user_agent_prefix("Loja/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.order_body_type(), DataType::PlainText);
/// assert_eq!(config.order_fields().len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    endpoint: Option<EndpointUrl>,
    order_page: Option<String>,
    order_body_type: Option<DataType>,
    order_fields: Option<Vec<String>>,
    currency_symbol: Option<String>,
    user_agent_prefix: Option<String>,
    messages: Option<Messages>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint URL (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the path of the order page linked from product cards.
    #[must_use]
    pub fn order_page(mut self, page: impl Into<String>) -> Self {
        self.order_page = Some(page.into());
        self
    }

    /// Sets the content type of order submissions.
    ///
    /// [`DataType::PlainText`] avoids a CORS preflight when the endpoint does
    /// not answer `OPTIONS` requests.
    #[must_use]
    pub const fn order_body_type(mut self, body_type: DataType) -> Self {
        self.order_body_type = Some(body_type);
        self
    }

    /// Sets the field names of a fresh order form.
    ///
    /// The names must match the order sheet's column headers.
    #[must_use]
    pub fn order_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the currency glyph placed before prices.
    #[must_use]
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the visitor-facing texts.
    #[must_use]
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Builds the [`StorefrontConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` is not set,
    /// or [`ConfigError::EmptyOrderPage`] if the order page is blank.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        let order_page = self
            .order_page
            .unwrap_or_else(|| DEFAULT_ORDER_PAGE.to_string());
        if order_page.trim().is_empty() {
            return Err(ConfigError::EmptyOrderPage);
        }

        Ok(StorefrontConfig {
            endpoint,
            order_page,
            order_body_type: self.order_body_type.unwrap_or(DataType::Json),
            order_fields: self.order_fields.unwrap_or_else(|| {
                DEFAULT_ORDER_FIELDS.iter().map(ToString::to_string).collect()
            }),
            currency_symbol: self
                .currency_symbol
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
            user_agent_prefix: self.user_agent_prefix,
            messages: self.messages.unwrap_or_default(),
        })
    }
}
