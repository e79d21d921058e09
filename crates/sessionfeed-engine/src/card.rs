//! Display card for a single event.
//!
//! A card depends only on its own event (and the viewer clock), so the
//! visible list can be rebuilt with a plain map over the filtered buffer.

use chrono::{DateTime, Utc};
use sessionfeed_types::{EventKind, EventPayload};

use crate::buffer::BufferedEvent;
use crate::format::{
    TimestampLabel, artifact_detail, artifact_label, format_timestamp, is_image_artifact,
    output_is_open_by_default, percent_label, progress_percent, source_label, summary, type_icon,
    type_label,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub seq: u64,
    pub kind: EventKind,
    pub type_name: String,
    pub type_label: String,
    pub icon: &'static str,
    pub timestamp: Option<TimestampLabel>,
    pub source: String,
    pub summary: Option<String>,
    pub progress: Option<ProgressBar>,
    pub artifact: Option<ArtifactView>,
    pub output: Option<OutputBlock>,
    /// Pretty-printed wire event for the collapsible detail block
    pub raw_json: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    /// Always within [0, 100]
    pub percent: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactView {
    pub uri: String,
    pub label: String,
    pub is_image: bool,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputBlock {
    pub text: String,
    /// Upper-cased stream name ("STDERR")
    pub stream: Option<String>,
    pub open_by_default: bool,
}

pub fn build_card(entry: &BufferedEvent, now: DateTime<Utc>) -> EventCard {
    let event = &entry.event;

    let progress = progress_percent(&event.progress).map(|percent| ProgressBar {
        percent,
        label: percent_label(percent),
    });

    let artifact = match &event.payload {
        EventPayload::Artifact(payload) => payload.uri.as_ref().map(|uri| {
            let detail = artifact_detail(payload);
            ArtifactView {
                uri: uri.clone(),
                label: artifact_label(payload),
                is_image: is_image_artifact(payload),
                detail: (!detail.is_empty()).then_some(detail),
            }
        }),
        _ => None,
    };

    let output = match &event.payload {
        EventPayload::Output(payload) => payload.text.as_ref().map(|text| OutputBlock {
            text: text.clone(),
            stream: payload.stream.as_ref().map(|s| s.to_uppercase()),
            open_by_default: output_is_open_by_default(text),
        }),
        _ => None,
    };

    let summary = summary(event);

    EventCard {
        seq: entry.seq,
        kind: event.kind,
        type_name: event.type_name.clone(),
        type_label: type_label(&event.type_name),
        icon: type_icon(event.kind),
        timestamp: format_timestamp(event.timestamp.as_deref(), now),
        source: source_label(event.source.as_ref()),
        summary: (!summary.is_empty()).then_some(summary),
        progress,
        artifact,
        output,
        raw_json: serde_json::to_string_pretty(&event.raw).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sessionfeed_types::SessionEvent;
    use serde_json::{Value, json};

    fn card(value: Value) -> EventCard {
        let entry = BufferedEvent {
            seq: 7,
            event: SessionEvent::from_value(value).unwrap(),
        };
        build_card(&entry, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_progress_card() {
        let c = card(json!({
            "id": "9",
            "type": "progress",
            "source": {"kind": "worker"},
            "payload": {"current": 1, "total": 8, "message": "Fetching"}
        }));

        assert_eq!(c.seq, 7);
        assert_eq!(c.icon, "P");
        assert_eq!(c.type_label, "Progress");
        assert_eq!(c.source, "Worker");
        assert_eq!(c.summary.as_deref(), Some("1/8 - Fetching"));
        assert_eq!(
            c.progress,
            Some(ProgressBar {
                percent: 12.5,
                label: "12.5%".to_string()
            })
        );
        assert_eq!(c.artifact, None);
        assert_eq!(c.output, None);
        assert_eq!(c.timestamp, None);
    }

    #[test]
    fn test_status_with_percent_gets_progress_bar() {
        let c = card(json!({"type": "status", "payload": {"state": "running", "percent": 100}}));
        assert_eq!(c.progress.unwrap().label, "100%");
    }

    #[test]
    fn test_image_artifact_card() {
        let c = card(json!({
            "type": "artifact",
            "payload": {"name": "Coverage", "uri": "https://ci/cov.PNG", "kind": "report", "size_bytes": 500}
        }));

        assert_eq!(
            c.artifact,
            Some(ArtifactView {
                uri: "https://ci/cov.PNG".to_string(),
                label: "Coverage".to_string(),
                is_image: true,
                detail: Some("report - 500 B".to_string()),
            })
        );
    }

    #[test]
    fn test_artifact_without_uri_has_no_link() {
        let c = card(json!({"type": "artifact", "payload": {"name": "orphan"}}));
        assert_eq!(c.artifact, None);
        assert_eq!(c.summary.as_deref(), Some("orphan"));
    }

    #[test]
    fn test_output_block() {
        let c = card(json!({"type": "output", "payload": {"text": "warning: unused", "stream": "stderr"}}));
        assert_eq!(
            c.output,
            Some(OutputBlock {
                text: "warning: unused".to_string(),
                stream: Some("STDERR".to_string()),
                open_by_default: true,
            })
        );

        let long = card(json!({"type": "output", "payload": {"text": "l".repeat(300)}}));
        assert!(!long.output.unwrap().open_by_default);
    }

    #[test]
    fn test_malformed_event_still_renders() {
        let c = card(json!({"type": "error", "payload": {"message": {"nested": true}}, "source": 3}));
        assert_eq!(c.summary, None);
        assert_eq!(c.source, "System");
        assert!(c.raw_json.contains("\"nested\": true"));
    }
}
