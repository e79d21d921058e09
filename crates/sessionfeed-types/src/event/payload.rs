use serde_json::{Map, Value};

use super::kind::EventKind;
use super::scalar::{Scalar, number_field, scalar_field, string_field, truthy_text};

/// Type-specific event content.
///
/// Built leniently from the wire `payload` object: a field with the wrong
/// JSON type is treated as absent so that a partially malformed event still
/// renders.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Status(StatusPayload),
    Progress(ProgressPayload),
    Output(OutputPayload),
    Error(ErrorPayload),
    Artifact(ArtifactPayload),
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusPayload {
    pub state: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressPayload {
    /// Unit for `current`/`total` ("files", "MB", ...)
    pub unit: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputPayload {
    pub text: Option<String>,
    /// Originating stream, e.g. "stdout" or "stderr"
    pub stream: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorPayload {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactPayload {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub kind: Option<String>,
    pub content_type: Option<String>,
    pub size_bytes: Option<f64>,
}

/// Numeric progress fields. Any event kind may carry them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressFields {
    pub percent: Option<Scalar>,
    pub current: Option<Scalar>,
    pub total: Option<Scalar>,
}

impl EventPayload {
    pub fn from_object(kind: EventKind, object: &Map<String, Value>) -> Self {
        match kind {
            EventKind::Status => EventPayload::Status(StatusPayload {
                state: truthy_text(object, "state"),
                message: truthy_text(object, "message"),
            }),
            EventKind::Progress => EventPayload::Progress(ProgressPayload {
                unit: truthy_text(object, "unit"),
                message: truthy_text(object, "message"),
            }),
            EventKind::Output => EventPayload::Output(OutputPayload {
                text: string_field(object, "text"),
                stream: truthy_text(object, "stream"),
            }),
            EventKind::Error => EventPayload::Error(ErrorPayload {
                message: truthy_text(object, "message"),
            }),
            EventKind::Artifact => EventPayload::Artifact(ArtifactPayload {
                name: truthy_text(object, "name"),
                uri: string_field(object, "uri"),
                kind: string_field(object, "kind"),
                content_type: string_field(object, "content_type"),
                size_bytes: number_field(object, "size_bytes"),
            }),
            EventKind::Unknown => EventPayload::Unknown,
        }
    }
}

impl ProgressFields {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            percent: scalar_field(object, "percent"),
            current: scalar_field(object, "current"),
            total: scalar_field(object, "total"),
        }
    }
}
