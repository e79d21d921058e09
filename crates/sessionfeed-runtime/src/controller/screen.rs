use crate::stream::ConnectionState;
use sessionfeed_engine::{EmptyState, EventCard, FilterState};

/// Severity of the connection indicator, used by containers for colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusIndicator {
    pub label: &'static str,
    pub level: StatusLevel,
}

impl StatusIndicator {
    /// Indicator for a connection state; a pending decode failure overrides it
    pub fn new(state: ConnectionState, stream_error: bool) -> Self {
        if stream_error && state != ConnectionState::Closed {
            return Self {
                label: "Stream error",
                level: StatusLevel::Error,
            };
        }

        let (label, level) = match state {
            ConnectionState::Idle => ("Idle", StatusLevel::Info),
            ConnectionState::Connecting => ("Connecting…", StatusLevel::Info),
            ConnectionState::Live => ("Live", StatusLevel::Success),
            ConnectionState::Reconnecting => ("Reconnecting…", StatusLevel::Warning),
            ConnectionState::Closed => ("Closed", StatusLevel::Info),
        };
        Self { label, level }
    }
}

/// Everything a container needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub status: StatusIndicator,
    /// Visible cards only, oldest first
    pub cards: Vec<EventCard>,
    /// Events held in the buffer, visible or not
    pub total: usize,
    pub capacity: usize,
    pub filter: FilterState,
    pub empty_state: Option<EmptyState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let label = |state| StatusIndicator::new(state, false).label;
        assert_eq!(label(ConnectionState::Idle), "Idle");
        assert_eq!(label(ConnectionState::Connecting), "Connecting…");
        assert_eq!(label(ConnectionState::Live), "Live");
        assert_eq!(label(ConnectionState::Reconnecting), "Reconnecting…");
        assert_eq!(label(ConnectionState::Closed), "Closed");
    }

    #[test]
    fn test_stream_error_overrides_open_states() {
        let indicator = StatusIndicator::new(ConnectionState::Live, true);
        assert_eq!(indicator.label, "Stream error");
        assert_eq!(indicator.level, StatusLevel::Error);

        assert_eq!(
            StatusIndicator::new(ConnectionState::Closed, true).label,
            "Closed"
        );
    }
}
