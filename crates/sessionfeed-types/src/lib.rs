pub mod cursor;
pub mod error;
pub mod event;

pub use cursor::Cursor;
pub use error::{DecodeError, Result};
pub use event::*;
