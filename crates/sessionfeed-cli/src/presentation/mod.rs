//! Terminal containers for the session event viewer.
//!
//! - `views`: ratatui widgets over the runtime `Screen` and its cards
//! - `renderers`: the two containers (`tui`, `console`)

pub mod renderers;
pub mod views;
