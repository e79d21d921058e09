use serde_json::Value;

use super::event::SessionEvent;
use crate::error::Result;

/// Decode the data of one `session_event` frame.
///
/// Invalid JSON is an error. Valid JSON that does not describe an event
/// (anything but an object) decodes to `Ok(None)` and is skipped by callers.
pub fn decode_event(data: &str) -> Result<Option<SessionEvent>> {
    let value: Value = serde_json::from_str(data)?;
    Ok(SessionEvent::from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::kind::EventKind;

    #[test]
    fn test_decode_valid_event() {
        let event = decode_event(r#"{"id":1,"type":"output","payload":{"text":"hi"}}"#)
            .unwrap()
            .unwrap();
        assert_eq!(event.kind, EventKind::Output);
    }

    #[test]
    fn test_decode_invalid_json_is_error() {
        let err = decode_event("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid event payload"));
    }

    #[test]
    fn test_decode_scalar_json_is_skipped() {
        assert!(decode_event("42").unwrap().is_none());
    }
}
