//! Server-push transport for session events.
//!
//! A [`StreamSource`] opens one connection and yields decoded [`SseFrame`]s;
//! [`StreamConnection`] wraps it with the retry loop, resume cursor and
//! connection state machine.

mod connection;
mod http;
mod source;
mod sse;
mod target;

pub use connection::{ConnectionState, SESSION_EVENT, StreamConnection, StreamUpdate};
pub use http::{HttpStreamSource, decode_frames};
pub use source::{ConnectRequest, FrameStream, StreamSource};
pub use sse::{SseDecoder, SseFrame};
pub use target::{ResumePolicy, StreamRequest};
