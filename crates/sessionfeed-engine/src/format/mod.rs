//! Formatting rules for one session event.
//!
//! Every function is total: malformed or missing input yields an empty
//! string or `None`, never a panic.

pub mod artifact;
pub mod number;
pub mod progress;
pub mod source;
pub mod summary;
pub mod text;
pub mod time;

pub use artifact::{artifact_detail, artifact_label, is_image_artifact};
pub use number::{file_size, percent_label};
pub use progress::progress_percent;
pub use source::source_label;
pub use summary::{summary, type_icon, type_label};
pub use text::{OUTPUT_OPEN_MAX_CHARS, SUMMARY_MAX_CHARS, capitalize, output_is_open_by_default, truncate_with_marker};
pub use time::{TimestampLabel, format_relative_time, format_timestamp};
