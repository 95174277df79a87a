//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A validated endpoint URL.
///
/// The endpoint is the single remote address serving both the catalog read
/// and the order write. Only `http` and `https` URLs with a non-empty host
/// are accepted.
///
/// # Example
///
/// ```rust
/// use sheet_storefront::EndpointUrl;
///
/// let url = EndpointUrl::new("https://script.example.com/macros/s/abc/exec").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "script.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL has no
    /// `http`/`https` scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidEndpointUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_start >= host_end || url[host_start..host_end].contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for EndpointUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for EndpointUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_accepts_web_app_url() {
        let url = EndpointUrl::new("https://script.google.com/macros/s/AKfy/exec").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "script.google.com");
        assert_eq!(url.as_ref(), "https://script.google.com/macros/s/AKfy/exec");
    }

    #[test]
    fn test_endpoint_url_accepts_local_port() {
        let url = EndpointUrl::new("http://127.0.0.1:8080/exec").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_endpoint_url_trims_whitespace() {
        let url = EndpointUrl::new("  https://example.com/exec \n").unwrap();
        assert_eq!(url.as_ref(), "https://example.com/exec");
    }

    #[test]
    fn test_endpoint_url_rejects_invalid() {
        assert!(EndpointUrl::new("example.com/exec").is_err());
        assert!(EndpointUrl::new("https://").is_err());
        assert!(EndpointUrl::new("https:///exec").is_err());
        assert!(EndpointUrl::new("ftp://example.com").is_err());
        assert!(EndpointUrl::new("://example.com").is_err());
        assert!(EndpointUrl::new("").is_err());
    }

    #[test]
    fn test_endpoint_url_deserializes_with_validation() {
        let url: EndpointUrl = serde_json::from_str(r#""https://example.com/exec""#).unwrap();
        assert_eq!(url.host_name(), "example.com");

        let bad: Result<EndpointUrl, _> = serde_json::from_str(r#""example.com""#);
        assert!(bad.is_err());
    }
}
