//! TUI View Components
//!
//! Ratatui widgets that borrow parts of a `Screen`. Views only map data to
//! widgets; every label and number is already formatted by the engine.

pub mod detail;
pub mod event_list;
pub mod filter_bar;
pub mod status_bar;

pub use detail::{DetailView, EmptyStateView};
pub use event_list::{EventListComponent, EventListView};
pub use filter_bar::FilterBarView;
pub use status_bar::StatusBarView;

use ratatui::style::Color;
use sessionfeed_runtime::StatusLevel;
use sessionfeed_types::EventKind;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn kind_to_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Status => Color::Cyan,
        EventKind::Progress => Color::Blue,
        EventKind::Output => Color::White,
        EventKind::Error => Color::Red,
        EventKind::Artifact => Color::Green,
        EventKind::Unknown => Color::DarkGray,
    }
}
