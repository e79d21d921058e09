pub mod config;
pub mod watch;
pub mod watch_console;
pub mod watch_tui;
