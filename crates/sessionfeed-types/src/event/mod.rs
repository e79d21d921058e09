pub mod decode;
pub mod event;
pub mod kind;
pub mod payload;
pub mod scalar;

pub use decode::*;
pub use event::*;
pub use kind::*;
pub use payload::*;
pub use scalar::*;
