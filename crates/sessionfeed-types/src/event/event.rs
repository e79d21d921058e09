use serde_json::{Map, Value};

use super::kind::EventKind;
use super::payload::{EventPayload, ProgressFields};
use super::scalar::{string_field, truthy_text};
use crate::cursor::Cursor;

/// Origin of an event inside the running session (a worker, a tool, ...)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSource {
    pub kind: Option<String>,
    pub label: Option<String>,
}

/// One notification emitted by a running background session.
///
/// Immutable once received. `raw` keeps the event exactly as it arrived for
/// the JSON detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    /// Server-assigned cursor, monotonic per session
    pub id: Option<Cursor>,

    pub kind: EventKind,

    /// Wire `type` as received ("unknown" when missing)
    pub type_name: String,

    /// ISO-8601 timestamp string, unparsed
    pub timestamp: Option<String>,

    pub source: Option<EventSource>,

    pub progress: ProgressFields,

    pub payload: EventPayload,

    pub raw: Value,
}

impl SessionEvent {
    /// Build an event from a decoded frame. Only JSON objects describe
    /// events; any other value yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        let object = value.as_object()?;

        let type_name = truthy_text(object, "type").unwrap_or_else(|| "unknown".to_string());
        let kind = EventKind::from_type_name(&type_name);

        let empty = Map::new();
        let payload_object = object
            .get("payload")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let source = object
            .get("source")
            .and_then(Value::as_object)
            .map(|source| EventSource {
                kind: truthy_text(source, "kind"),
                label: truthy_text(source, "label"),
            });

        Some(Self {
            id: object.get("id").and_then(Cursor::from_value),
            kind,
            type_name,
            timestamp: string_field(object, "timestamp"),
            source,
            progress: ProgressFields::from_object(payload_object),
            payload: EventPayload::from_object(kind, payload_object),
            raw: value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::payload::StatusPayload;
    use crate::event::scalar::Scalar;
    use serde_json::json;

    #[test]
    fn test_status_event_from_value() {
        let event = SessionEvent::from_value(json!({
            "id": "c-12",
            "type": "status",
            "timestamp": "2026-01-02T03:04:05Z",
            "source": {"kind": "worker", "label": "Builder"},
            "payload": {"state": "running", "message": "Compiling", "percent": 40}
        }))
        .unwrap();

        assert_eq!(event.id, Some(Cursor::new("c-12")));
        assert_eq!(event.kind, EventKind::Status);
        assert_eq!(event.type_name, "status");
        assert_eq!(event.timestamp.as_deref(), Some("2026-01-02T03:04:05Z"));
        assert_eq!(
            event.source,
            Some(EventSource {
                kind: Some("worker".to_string()),
                label: Some("Builder".to_string()),
            })
        );
        assert_eq!(event.progress.percent, Some(Scalar::Number(40.0)));
        assert_eq!(
            event.payload,
            EventPayload::Status(StatusPayload {
                state: Some("running".to_string()),
                message: Some("Compiling".to_string()),
            })
        );
    }

    #[test]
    fn test_missing_type_and_payload_degrade() {
        let event = SessionEvent::from_value(json!({"payload": "not an object"})).unwrap();

        assert_eq!(event.kind, EventKind::Unknown);
        assert_eq!(event.type_name, "unknown");
        assert_eq!(event.payload, EventPayload::Unknown);
        assert_eq!(event.progress, ProgressFields::default());
        assert_eq!(event.id, None);
    }

    #[test]
    fn test_unrecognised_type_keeps_wire_name() {
        let event = SessionEvent::from_value(json!({"type": "heartbeat"})).unwrap();
        assert_eq!(event.kind, EventKind::Unknown);
        assert_eq!(event.type_name, "heartbeat");
    }

    #[test]
    fn test_non_object_is_not_an_event() {
        assert!(SessionEvent::from_value(json!([1, 2])).is_none());
        assert!(SessionEvent::from_value(json!("status")).is_none());
    }
}
