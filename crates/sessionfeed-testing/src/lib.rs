//! Testing infrastructure for sessionfeed integration tests.
//!
//! - `fixtures`: wire-format event builders and SSE bodies
//! - `source`: in-memory stream sources (`ScriptedSource`, `ChannelSource`)
//! - `container`: `RecordingContainer` that keeps every rendered screen
//! - `clock`: `FixedClock`
//! - `process`: background process management for long-running commands
//! - `world`: `TestWorld`, an isolated environment for CLI tests

pub mod clock;
pub mod container;
pub mod fixtures;
pub mod process;
pub mod source;
pub mod world;

pub use clock::FixedClock;
pub use container::RecordingContainer;
pub use source::{ChannelSource, Connection, ScriptedSource};
pub use world::TestWorld;
