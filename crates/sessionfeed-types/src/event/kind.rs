use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event type discriminator as sent in the wire `type` field
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Status,
    Progress,
    Output,
    Error,
    Artifact,
    /// Missing or unrecognised `type`
    Unknown,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::Status,
        EventKind::Progress,
        EventKind::Output,
        EventKind::Error,
        EventKind::Artifact,
        EventKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Status => "status",
            EventKind::Progress => "progress",
            EventKind::Output => "output",
            EventKind::Error => "error",
            EventKind::Artifact => "artifact",
            EventKind::Unknown => "unknown",
        }
    }

    /// Classify a wire type name. Matching is exact, as the server emits
    /// lowercase names; anything else is `Unknown`.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "status" => EventKind::Status,
            "progress" => EventKind::Progress,
            "output" => EventKind::Output,
            "error" => EventKind::Error,
            "artifact" => EventKind::Artifact,
            _ => EventKind::Unknown,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse used for user-supplied filter names
impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| {
                format!(
                    "unknown event type '{}' (expected one of: status, progress, output, error, artifact, unknown)",
                    s.trim()
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_name_is_exact() {
        assert_eq!(EventKind::from_type_name("progress"), EventKind::Progress);
        assert_eq!(EventKind::from_type_name("Progress"), EventKind::Unknown);
        assert_eq!(EventKind::from_type_name("heartbeat"), EventKind::Unknown);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Output ".parse::<EventKind>(), Ok(EventKind::Output));
        assert_eq!("UNKNOWN".parse::<EventKind>(), Ok(EventKind::Unknown));
        assert!("logs".parse::<EventKind>().is_err());
    }
}
