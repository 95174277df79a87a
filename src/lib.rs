//! # Sheet Storefront
//!
//! A client for a spreadsheet-backed storefront: one web-app endpoint serves
//! the product catalog (`GET`) and records orders (`POST`).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - The catalog view via [`catalog::CatalogLoader`], rendered as [`catalog::ProductCard`]s
//! - The order view via [`order::OrderPage`] and [`order::OrderSubmitter`]
//! - Product pre-fill from the `produto` query parameter
//! - Explicit routing between the two views via [`Route`]
//! - A swappable [`clients::Transport`] with a reqwest-backed [`clients::HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use sheet_storefront::{EndpointUrl, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .endpoint(EndpointUrl::new("https://script.example.com/macros/s/abc/exec").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Catalog
//!
//! ```rust,ignore
//! use sheet_storefront::Storefront;
//!
//! let storefront = Storefront::new(config)?;
//! let view = storefront.catalog().load().await;
//!
//! // Inner HTML of the catalog container
//! let html = view.to_html(storefront.config().messages());
//! ```
//!
//! ## Orders
//!
//! ```rust,ignore
//! use sheet_storefront::Storefront;
//!
//! let storefront = Storefront::new(config)?;
//! let mut page = storefront.order_page("?produto=Mesa%20Grande");
//! page.form_mut().set("Nome", "Ana");
//!
//! storefront.orders().submit(&mut page).await;
//! println!("{}", page.feedback().text);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the endpoint is injected configuration
//! - **One request per action**: no retries, no timeouts, no cancellation
//! - **Failures are views**: HTTP, transport, and service errors become
//!   visitor-facing messages and are logged with `tracing`
//! - **Thread-safe**: all client types are `Send + Sync`

pub mod catalog;
pub mod clients;
pub mod config;
pub mod envelope;
pub mod error;
pub mod order;
pub mod storefront;

pub use config::{EndpointUrl, Messages, StorefrontConfig, StorefrontConfigBuilder};
pub use envelope::{ApiStatus, ResponseEnvelope};
pub use error::ConfigError;
pub use storefront::{Route, Storefront};

pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, Transport,
};

pub use catalog::{CatalogError, CatalogLoader, CatalogView, Product, ProductCard};
pub use order::{
    OrderError, OrderForm, OrderPage, OrderPayload, OrderReceipt, OrderSubmitter,
    SubmissionOutcome,
};
