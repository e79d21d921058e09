use sessionfeed_types::{EventKind, EventPayload, SessionEvent};

use super::text::{SUMMARY_MAX_CHARS, capitalize, truncate_with_marker};

/// One-line description of an event, empty when nothing useful is known
pub fn summary(event: &SessionEvent) -> String {
    let progress = &event.progress;

    match &event.payload {
        EventPayload::Status(status) => {
            let mut parts = Vec::new();
            parts.extend(status.state.clone());
            parts.extend(status.message.clone());
            if let Some(percent) = &progress.percent {
                parts.push(format!("{}%", percent));
            }
            parts.join(" - ")
        }
        EventPayload::Progress(payload) => {
            let mut parts = Vec::new();
            if let Some(percent) = &progress.percent {
                parts.push(format!("{}%", percent));
            } else if let (Some(current), Some(total)) = (&progress.current, &progress.total) {
                let unit = payload.unit.as_deref().unwrap_or_default();
                parts.push(format!("{}/{} {}", current, total, unit).trim().to_string());
            }
            parts.extend(payload.message.clone());
            parts.join(" - ")
        }
        EventPayload::Output(output) => output
            .text
            .as_deref()
            .map(|text| truncate_with_marker(text, SUMMARY_MAX_CHARS))
            .unwrap_or_default(),
        EventPayload::Error(error) => error.message.clone().unwrap_or_default(),
        EventPayload::Artifact(artifact) => artifact
            .name
            .clone()
            .or_else(|| artifact.uri.clone())
            .unwrap_or_default(),
        EventPayload::Unknown => String::new(),
    }
}

/// Single-letter badge for the event type
pub fn type_icon(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Status => "S",
        EventKind::Progress => "P",
        EventKind::Output => "O",
        EventKind::Error => "E",
        EventKind::Artifact => "A",
        EventKind::Unknown => "?",
    }
}

/// Badge text: the wire type name, capitalised
pub fn type_label(type_name: &str) -> String {
    capitalize(type_name)
}
