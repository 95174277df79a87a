//! The `{status, message, data}` wrapper around every endpoint response.

use serde::{Deserialize, Serialize};

/// Outcome reported by the service inside a successful HTTP response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    /// `"SUCCESS"`.
    Success,
    /// `"ERROR"`.
    Error,
    /// Any other value, or no status at all.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A decoded response envelope.
///
/// # Example
///
/// ```rust
/// use sheet_storefront::{ApiStatus, ResponseEnvelope};
///
/// let envelope: ResponseEnvelope =
///     serde_json::from_str(r#"{"status":"ERROR","message":"Folha não encontrada"}"#).unwrap();
///
/// assert_eq!(envelope.status, ApiStatus::Error);
/// assert_eq!(envelope.message.as_deref(), Some("Folha não encontrada"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = serde_json::Value> {
    /// The service-reported outcome.
    #[serde(default, deserialize_with = "status_or_unknown")]
    pub status: ApiStatus,

    /// Human-readable message, mostly present on errors and order receipts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The payload, present on catalog reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Returns `true` if the service reported `SUCCESS`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }

    /// Returns `true` if the service reported `ERROR`.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == ApiStatus::Error
    }
}

/// Treats a null status like a missing one.
fn status_or_unknown<'de, D>(deserializer: D) -> Result<ApiStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<ApiStatus>::deserialize(deserializer)?.unwrap_or_default())
}
