//! Webhook ingest and query handlers
//!
//! Ingest turns one inbound request into one stored event and always
//! acknowledges with the new event id; malformed bodies are absorbed by the
//! decode fallback chain, never rejected. Query returns the full current
//! history, most-recent-first.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::state::AppState;
use crate::types::{EventBody, WebhookEvent};

/// Acknowledgment for a stored webhook
#[derive(Debug, Serialize)]
pub struct IngestAck {
    pub ok: bool,
    /// Id of the event that was appended
    pub stored: Uuid,
}

/// Full event history response
#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<WebhookEvent>,
}

/// POST /api/webhook - Store one inbound request as an event
///
/// Accepts any headers and any body. Always responds `200` with
/// `{ "ok": true, "stored": "<event-id>" }`.
pub async fn ingest_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<IngestAck> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let decoded = decode_body(content_type, &body);

    let event = WebhookEvent::new(extract_headers(&headers), decoded);
    let id = event.id;
    debug!(event_id = %id, payload_size = body.len(), "storing webhook event");

    state.store.append(event);

    Json(IngestAck { ok: true, stored: id })
}

/// GET /api/webhook - Return all stored events, most-recent-first
pub async fn list_events(State(state): State<Arc<AppState>>) -> Json<EventsResponse> {
    Json(EventsResponse {
        events: state.store.read_all(),
    })
}

/// Extracts headers into a map for storage.
///
/// Duplicate header names collapse last-wins; values that are not valid
/// UTF-8 are skipped. No filtering or redaction.
fn extract_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (name, value) in headers {
        if let Ok(value_str) = value.to_str() {
            map.insert(name.as_str().to_string(), value_str.to_string());
        }
    }
    map
}

/// Best-effort body decode, never fails the request.
///
/// JSON-family content types get a structured decode attempt; a declared-JSON
/// body that fails to parse is recorded `Unparsed` rather than degrading to
/// text. Everything else falls back to UTF-8 text, with `Unparsed` for bytes
/// that are not valid UTF-8.
fn decode_body(content_type: Option<&str>, body: &[u8]) -> EventBody {
    if is_json_content_type(content_type.unwrap_or("")) {
        return match serde_json::from_slice(body) {
            Ok(value) => EventBody::Json(value),
            Err(_) => EventBody::Unparsed,
        };
    }

    match std::str::from_utf8(body) {
        Ok(text) => EventBody::Text(text.to_string()),
        Err(_) => EventBody::Unparsed,
    }
}

/// Whether a content-type declares a JSON-family payload
/// (`application/json` or any `+json` suffix type).
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
