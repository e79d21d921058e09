pub mod console;
pub mod tui;

pub use console::ConsoleContainer;
pub use tui::{TuiContainer, TuiEvent, TuiRenderer};
