//! Product cards: the display form of a [`Product`].

use crate::catalog::Product;
use crate::config::StorefrontConfig;
use crate::order::PRODUCT_QUERY_PARAM;

/// One rendered catalog entry.
///
/// Every field is already display-ready: placeholders are filled in and the
/// price is formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    /// Product name, or the unnamed-product placeholder.
    pub name: String,
    /// Formatted price (`€ 12.50`), or the price placeholder.
    pub price: String,
    /// Description, or the no-description placeholder.
    pub description: String,
    /// Units in stock.
    pub stock: i64,
    /// Link to the order page with the product name pre-filled.
    pub order_href: String,
}

impl ProductCard {
    /// Builds the card for `product` using the configured texts.
    #[must_use]
    pub fn from_product(product: &Product, config: &StorefrontConfig) -> Self {
        let messages = config.messages();

        let name = non_empty(product.name.as_deref())
            .unwrap_or(messages.unnamed_product.as_str())
            .to_string();
        let price = product.price.filter(|p| p.is_finite()).map_or_else(
            || messages.price_unavailable.clone(),
            |p| format_price(p, config.currency_symbol()),
        );
        let description = non_empty(product.description.as_deref())
            .unwrap_or(messages.no_description.as_str())
            .to_string();
        let order_href = format!(
            "{}?{PRODUCT_QUERY_PARAM}={}",
            config.order_page(),
            urlencoding::encode(&name)
        );

        Self {
            name,
            price,
            description,
            stock: product.stock,
            order_href,
        }
    }
}

/// Formats a price with two decimals after the currency glyph.
#[must_use]
pub fn format_price(price: f64, currency_symbol: &str) -> String {
    format!("{currency_symbol} {price:.2}")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
