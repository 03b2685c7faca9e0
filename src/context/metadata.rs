//! Platform-provided event metadata.
//!
//! Background functions receive an envelope of the form
//! `{"context": {"eventId": ..., ...}, "data": ...}`. The `context` object is
//! the invocation metadata; its event id is the most reliable execution id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::execution::Context;

/// Metadata describing one event delivery.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Unique id of the event.
    pub event_id: String,

    /// When the event was produced.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Type of the event, e.g. `google.pubsub.topic.publish`.
    #[serde(default)]
    pub event_type: String,

    /// Resource that emitted the event.
    #[serde(default)]
    pub resource: Option<EventResource>,
}

/// Resource that emitted an event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventResource {
    pub service: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Metadata {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp: None,
            event_type: String::new(),
            resource: None,
        }
    }

    /// Extract metadata from the `context` object of an event envelope.
    pub fn from_envelope(envelope: &Value) -> Option<Self> {
        let context = envelope.get("context")?;
        serde_json::from_value(context.clone()).ok()
    }
}

/// Build a context for a background event envelope.
///
/// Envelopes without readable metadata yield an empty context.
pub fn for_event(envelope: &Value) -> Context {
    match Metadata::from_envelope(envelope) {
        Some(metadata) => Context::new().with_metadata(metadata),
        None => Context::new(),
    }
}
