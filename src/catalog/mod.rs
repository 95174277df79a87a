//! The catalog view: products read from the endpoint, rendered as cards.
//!
//! # Overview
//!
//! - [`CatalogLoader`]: issues the read and produces a [`CatalogView`]
//! - [`Product`]: one decoded row of the products sheet
//! - [`ProductCard`]: the display form of a product
//! - [`CatalogView`]: what the catalog container shows, renderable to HTML
//!
//! # Example
//!
//! ```rust,ignore
//! use sheet_storefront::catalog::CatalogView;
//!
//! match storefront.catalog().load().await {
//!     CatalogView::Cards(cards) => {
//!         for card in &cards {
//!             println!("{} - {} ({} em stock)", card.name, card.price, card.stock);
//!         }
//!     }
//!     other => println!("{}", other.message().unwrap_or_default()),
//! }
//! ```

mod card;
mod loader;
mod product;
mod view;

pub use card::{format_price, ProductCard};
pub use loader::{CatalogError, CatalogLoader};
pub use product::Product;
pub use view::{escape_html, CatalogView};
