//! Pure core of the session event viewer.
//!
//! - [`buffer`]: capacity-bounded, insertion-ordered event log
//! - [`filter`]: visibility of buffered events under a type filter
//! - [`format`]: per-field formatting rules
//! - [`card`]: one display card per event, built from the formatting rules
//!
//! Nothing here performs I/O; every function is safe to call after each
//! append and each filter change.

pub mod buffer;
pub mod card;
pub mod filter;
pub mod format;

pub use buffer::{BufferedEvent, DEFAULT_CAPACITY, EventBuffer};
pub use card::{ArtifactView, EventCard, OutputBlock, ProgressBar, build_card};
pub use filter::{EmptyState, FilterState, empty_state, visible};
