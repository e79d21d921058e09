use std::collections::BTreeSet;
use std::fmt;

use sessionfeed_types::EventKind;

use crate::buffer::{BufferedEvent, EventBuffer};

/// Set of event kinds the observer has enabled.
///
/// The empty set is valid and shows nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    enabled: BTreeSet<EventKind>,
}

impl FilterState {
    pub fn all() -> Self {
        Self::from_kinds(EventKind::ALL)
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_kinds(kinds: impl IntoIterator<Item = EventKind>) -> Self {
        Self {
            enabled: kinds.into_iter().collect(),
        }
    }

    /// Parse a comma-separated list of type names ("status,output").
    /// Blank items are skipped; an unknown name is an error.
    pub fn parse(list: &str) -> Result<Self, String> {
        let kinds = list
            .split(',')
            .filter(|item| !item.trim().is_empty())
            .map(str::parse::<EventKind>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_kinds(kinds))
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.enabled.contains(&kind)
    }

    pub fn enable(&mut self, kind: EventKind) {
        self.enabled.insert(kind);
    }

    pub fn disable(&mut self, kind: EventKind) {
        self.enabled.remove(&kind);
    }

    /// Flip one kind; returns whether it is enabled afterwards
    pub fn toggle(&mut self, kind: EventKind) -> bool {
        if self.enabled.remove(&kind) {
            false
        } else {
            self.enabled.insert(kind);
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Enabled kinds in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.enabled.iter().copied()
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.enabled.iter().map(EventKind::as_str).collect();
        f.write_str(&names.join(","))
    }
}

/// Visible subsequence of the buffer, in buffer order.
///
/// An event is visible iff the filter is non-empty and contains its kind.
pub fn visible<'a>(buffer: &'a EventBuffer, filter: &FilterState) -> Vec<&'a BufferedEvent> {
    if filter.is_empty() {
        return Vec::new();
    }
    buffer
        .entries()
        .filter(|entry| filter.contains(entry.event.kind))
        .collect()
}

/// Placeholder shown instead of (or in the absence of) event cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoTypeSelected,
    NoMatches,
    NoEvents,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoTypeSelected => "Select at least one event type.",
            EmptyState::NoMatches => "No events match the selected filters.",
            EmptyState::NoEvents => "No events yet.",
        }
    }
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Which placeholder to show, or `None` when at least one card is visible.
pub fn empty_state(total: usize, visible: usize, filter: &FilterState) -> Option<EmptyState> {
    if filter.is_empty() {
        Some(EmptyState::NoTypeSelected)
    } else if visible > 0 {
        None
    } else if total > 0 {
        Some(EmptyState::NoMatches)
    } else {
        Some(EmptyState::NoEvents)
    }
}
