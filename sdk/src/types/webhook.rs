//! Webhook types for the PostGrid SDK.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// A webhook registered at PostGrid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook ID, e.g. `webhook_...`.
    pub id: String,

    /// Always `webhook`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,

    /// True for live-mode records.
    #[serde(default, deserialize_with = "null_as_default")]
    pub live: bool,

    /// Endpoint PostGrid calls.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Enabled events.
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled_events: Vec<String>,

    /// True if the webhook is active.
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Webhook {
    /// Returns true if the webhook listens for `event`.
    #[must_use]
    pub fn listens_to(&self, event: &str) -> bool {
        self.enabled && self.enabled_events.iter().any(|e| e == event)
    }
}

/// One delivery attempt of a webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookInvocation {
    /// Invocation ID.
    pub id: String,

    /// Always `webhook_invocation`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,

    /// Webhook ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub webhook: String,

    /// Event type, e.g. `letter.created`.
    #[serde(rename = "type", default)]
    pub event_type: String,

    /// HTTP status returned by the endpoint.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_code: u16,

    /// ID of the mail piece the event is about.
    #[serde(rename = "orderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl WebhookInvocation {
    /// Returns true if the endpoint answered with a 2xx status.
    #[must_use]
    pub fn delivered(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Parameters for creating or updating a webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCreate {
    /// Endpoint PostGrid calls.
    pub url: String,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Events to enable.
    pub enabled_events: Vec<String>,

    /// Whether the webhook is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl WebhookCreate {
    /// Creates webhook parameters.
    #[must_use]
    pub fn new<I, S>(url: impl Into<String>, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            url: url.into(),
            enabled_events: events.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}
