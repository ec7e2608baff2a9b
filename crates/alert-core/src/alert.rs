//! The Alert wire type and body parsing.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PayloadError;

/// Marker the alerts endpoint sends when nothing is active.
const NO_ALERT: &str = "null";

/// Byte-order mark some upstream proxies prepend to the body.
const BOM: char = '\u{feff}';

/// One broadcast event.
///
/// Field names follow the wire format of `/api/alerts` and `/api/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Opaque identity; the only deduplication key.
    #[serde(default)]
    pub id: String,

    /// Numeric category code as a string, e.g. `"1"` or `"13"`.
    #[serde(rename = "cat", default)]
    pub category: String,

    /// Human-readable headline.
    #[serde(default)]
    pub title: String,

    /// Affected location names, in broadcast order.
    #[serde(rename = "data", default, deserialize_with = "null_as_empty")]
    pub locations: Vec<String>,

    /// Optional free text.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the event happened (ISO-8601). Present on history items.
    #[serde(rename = "alertDate", default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,

    /// When the event was stored (ISO-8601). Fallback timestamp.
    #[serde(rename = "savedAt", default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,

    /// Set on demo-origin alerts.
    #[serde(rename = "demo", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_synthetic: bool,
}

impl Alert {
    /// Create a live alert with no description or timestamps.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        locations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            locations: locations.into_iter().map(Into::into).collect(),
            description: None,
            occurred_at: None,
            saved_at: None,
            is_synthetic: false,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this alert as demo-origin.
    pub fn synthetic(mut self) -> Self {
        self.is_synthetic = true;
        self
    }

    /// The description, treating an empty string as absent.
    ///
    /// The upstream server always sends `desc`, often as `""`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// The timestamp to show for this alert, if any.
    pub fn timestamp(&self) -> Option<&str> {
        self.occurred_at
            .as_deref()
            .or(self.saved_at.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// The upstream server encodes an empty location list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Strip a leading BOM and surrounding whitespace (CRLF-only bodies included).
fn clean_body(body: &str) -> &str {
    body.trim().trim_start_matches(BOM).trim()
}

/// Parse a body from the current-alert endpoint.
///
/// Returns `Ok(None)` for an empty body or the literal `null` marker.
/// A body that is present but not a valid alert is a [`PayloadError`].
pub fn parse_current_payload(body: &str) -> Result<Option<Alert>, PayloadError> {
    let body = clean_body(body);
    if body.is_empty() || body == NO_ALERT {
        return Ok(None);
    }

    let alert: Alert = serde_json::from_str(body)?;
    if alert.id.is_empty() {
        return Err(PayloadError::MissingId);
    }
    Ok(Some(alert))
}

/// Parse a body from the history endpoint.
///
/// An empty body or `null` is an empty history.
pub fn parse_history_payload(body: &str) -> Result<Vec<Alert>, PayloadError> {
    let body = clean_body(body);
    if body.is_empty() || body == NO_ALERT {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(body)?)
}
