//! Wire-format fixtures.
//!
//! Builders return the JSON exactly as the server would put it in the
//! `data:` field of a `session_event` frame.

use serde_json::{Value, json};
use sessionfeed_runtime::{SESSION_EVENT, SseFrame};
use sessionfeed_types::SessionEvent;

/// Timestamp shared by fixture events (five minutes before `FixedClock::fixture`)
pub const FIXTURE_TIMESTAMP: &str = "2024-05-01T11:55:00Z";

/// Generic event envelope
pub fn event(id: &str, event_type: &str, payload: Value) -> Value {
    json!({
        "id": id,
        "type": event_type,
        "timestamp": FIXTURE_TIMESTAMP,
        "source": { "kind": "agent", "label": "Builder" },
        "payload": payload,
    })
}

pub fn status(id: &str, state: &str, message: &str) -> Value {
    event(id, "status", json!({ "state": state, "message": message }))
}

pub fn progress(id: &str, percent: f64, message: &str) -> Value {
    event(id, "progress", json!({ "percent": percent, "message": message }))
}

pub fn output(id: &str, text: &str, stream: &str) -> Value {
    event(id, "output", json!({ "text": text, "stream": stream }))
}

pub fn error(id: &str, message: &str) -> Value {
    event(id, "error", json!({ "message": message }))
}

pub fn artifact(id: &str, name: &str, uri: &str) -> Value {
    event(
        id,
        "artifact",
        json!({ "name": name, "uri": uri, "kind": "file", "size_bytes": 2048 }),
    )
}

/// Decoded form of a fixture.
///
/// # Panics
/// If `value` is not a JSON object.
pub fn decoded(value: &Value) -> SessionEvent {
    SessionEvent::from_value(value.clone()).expect("fixture must be a JSON object")
}

pub fn frame(event_name: &str, data: &str) -> SseFrame {
    SseFrame {
        event: event_name.to_string(),
        data: data.to_string(),
        id: None,
        retry: None,
    }
}

/// `session_event` frame carrying `value`
pub fn session_frame(value: &Value) -> SseFrame {
    let mut frame = frame(SESSION_EVENT, &value.to_string());
    frame.id = value.get("id").and_then(Value::as_str).map(str::to_string);
    frame
}

/// One event in `text/event-stream` framing
pub fn sse_chunk(value: &Value) -> String {
    let mut chunk = String::new();
    if let Some(id) = value.get("id").and_then(Value::as_str) {
        chunk.push_str(&format!("id: {}\n", id));
    }
    chunk.push_str(&format!("event: {}\ndata: {}\n\n", SESSION_EVENT, value));
    chunk
}

/// Full response body for a list of events
pub fn sse_body(values: &[Value]) -> String {
    values.iter().map(sse_chunk).collect()
}
