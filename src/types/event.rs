//! Webhook event types
//!
//! A `WebhookEvent` is an immutable record of one inbound request: its
//! headers, a best-effort decoded body, and receipt metadata. Events are
//! constructed once at ingest time and never mutated afterwards.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Best-effort decode result for a request body.
///
/// The fallback chain at ingest is explicit rather than relying on swallowed
/// decode errors: structured decode for JSON-family content types, UTF-8 text
/// for everything else, `Unparsed` when no attempt succeeded.
///
/// On the wire the variants are untagged, so `Json` serializes as the decoded
/// value, `Text` as a plain string, and `Unparsed` as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventBody {
    /// Structured decode succeeded
    Json(serde_json::Value),
    /// Textual decode succeeded
    Text(String),
    /// Every decode attempt failed; serialized as `null`
    Unparsed,
}

impl EventBody {
    /// Whether no decode attempt succeeded
    pub fn is_unparsed(&self) -> bool {
        matches!(self, EventBody::Unparsed)
    }
}

/// One recorded inbound request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Unique identifier, assigned at receipt and never reused
    pub id: Uuid,
    /// Receipt timestamp, ISO-8601 on the wire
    pub received_at: DateTime<Utc>,
    /// Request headers, header name to value (last-wins on duplicates)
    pub headers: HashMap<String, String>,
    /// Decoded payload
    pub body: EventBody,
}

impl WebhookEvent {
    /// Create an event for a request received now, with a fresh id
    pub fn new(headers: HashMap<String, String>, body: EventBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            headers,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unparsed_body_serializes_as_null() {
        let value = serde_json::to_value(EventBody::Unparsed).unwrap();
        assert_eq!(value, serde_json::Value::Null);
    }

    #[test]
    fn test_json_body_serializes_untagged() {
        let body = EventBody::Json(json!({"hello": "world"}));
        assert_eq!(serde_json::to_value(body).unwrap(), json!({"hello": "world"}));
    }

    #[test]
    fn test_text_body_serializes_as_string() {
        let body = EventBody::Text("hello".to_string());
        assert_eq!(serde_json::to_value(body).unwrap(), json!("hello"));
    }

    #[test]
    fn test_event_wire_format_uses_camel_case() {
        let event = WebhookEvent::new(HashMap::new(), EventBody::Unparsed);
        let value = serde_json::to_value(&event).unwrap();

        assert!(value.get("receivedAt").is_some());
        assert!(value.get("id").is_some());
        assert!(value.get("headers").is_some());
        assert_eq!(value.get("body"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_fresh_events_get_distinct_ids() {
        let a = WebhookEvent::new(HashMap::new(), EventBody::Unparsed);
        let b = WebhookEvent::new(HashMap::new(), EventBody::Unparsed);
        assert_ne!(a.id, b.id);
    }
}
