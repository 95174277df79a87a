//! HTTP client for the storefront endpoint.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`Transport`] used outside of tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{EndpointUrl, StorefrontConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the storefront endpoint.
///
/// The client handles:
/// - Default headers (`User-Agent`, `Accept`)
/// - `Content-Type` selection from the request's [`DataType`](crate::clients::DataType)
/// - Redirect following (the hosted endpoint redirects to a content host)
/// - JSON body parsing and non-2xx mapping to [`HttpError::Response`]
///
/// There is no retry, timeout, or cancellation: each request runs once to
/// completion or failure.
///
/// # Example
///
/// ```rust,ignore
/// use sheet_storefront::{StorefrontConfig, EndpointUrl};
/// use sheet_storefront::clients::{HttpClient, HttpRequest, HttpMethod, Transport};
///
/// let config = StorefrontConfig::builder()
///     .endpoint(EndpointUrl::new("https://script.example.com/exec").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get).build().unwrap();
/// let response = client.send(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The endpoint every request is sent to.
    endpoint: EndpointUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &StorefrontConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}sheet-storefront v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
            default_headers,
        })
    }

    /// Returns the endpoint this client sends to.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Builds the error message for a non-2xx response.
    ///
    /// Prefers the service's own `message` field, then the status' canonical
    /// reason.
    fn error_message(code: u16, body: &serde_json::Value) -> String {
        body.get("message")
            .and_then(serde_json::Value::as_str)
            .map(String::from)
            .or_else(|| {
                reqwest::StatusCode::from_u16(code)
                    .ok()
                    .and_then(|status| status.canonical_reason())
                    .map(String::from)
            })
            .unwrap_or_else(|| "Unknown status".to_string())
    }
}

#[async_trait]
impl Transport for HttpClient {
    /// Sends an HTTP request to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx body is not JSON (`InvalidBody`)
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.endpoint.as_ref();
        tracing::debug!(method = %request.http_method, %url, "sending storefront request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body_type) = request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let ok = (200..=299).contains(&code);
        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(body) => body,
                Err(e) if ok => return Err(HttpError::InvalidBody(e)),
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::error_message(code, &response.body),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_config(prefix: Option<&str>) -> StorefrontConfig {
        let builder = StorefrontConfig::builder()
            .endpoint(EndpointUrl::new("https://script.example.com/exec").unwrap());
        let builder = match prefix {
            Some(prefix) => builder.user_agent_prefix(prefix),
            None => builder,
        };
        builder.build().unwrap()
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(client.endpoint().as_ref(), "https://script.example.com/exec");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("sheet-storefront v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(&create_test_config(Some("Loja/1.0"))).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Loja/1.0 | "));
        assert!(user_agent.contains("sheet-storefront"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_error_message_prefers_service_message() {
        let message = HttpClient::error_message(500, &json!({"message": "Script failed"}));
        assert_eq!(message, "Script failed");
    }

    #[test]
    fn test_error_message_falls_back_to_canonical_reason() {
        assert_eq!(HttpClient::error_message(404, &json!({})), "Not Found");
        assert_eq!(HttpClient::error_message(599, &json!({})), "Unknown status");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
