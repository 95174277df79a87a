//! Error types for storefront configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use sheet_storefront::{EndpointUrl, ConfigError};
//!
//! let result = EndpointUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidEndpointUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`StorefrontConfig`](crate::StorefrontConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an http or https URL (e.g., 'https://script.example.com/exec').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The order page path is empty.
    #[error("Order page cannot be empty. Please provide the path of the order page (e.g., 'encomenda.html').")]
    EmptyOrderPage,
}
