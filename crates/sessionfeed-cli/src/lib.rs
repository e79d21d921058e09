// NOTE: Viewer Architecture
//
// The runtime crate owns everything stateful (stream connection, buffer,
// filter) inside one ViewController. This crate only supplies containers:
// - TUI: the controller runs on a tokio runtime in the main thread and sends
//   whole Screens to a renderer thread; the renderer sends ViewerInputs back.
// - Console: the controller prints new cards as they arrive; Ctrl+C is
//   turned into ViewerInput::Quit so the stream is always closed on exit.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, WatchArgs};
pub use commands::run;
