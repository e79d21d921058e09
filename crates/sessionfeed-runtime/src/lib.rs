//! Live side of the session event viewer.
//!
//! - [`stream`]: SSE transport, automatic reconnection and the
//!   [`StreamConnection`] state machine
//! - [`controller`]: [`ViewController`], which wires a connection into the
//!   event buffer and renders [`Screen`]s into a [`Container`]
//! - [`config`]: viewer configuration and config-file resolution

pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod stream;

pub use clock::{Clock, SystemClock};
pub use config::{ConfigFile, ViewerConfig, resolve_config_path};
pub use controller::{Container, Screen, StatusIndicator, StatusLevel, ViewController, ViewerInput};
pub use error::{Error, Result, TransportError};
pub use stream::{
    ConnectRequest, ConnectionState, FrameStream, HttpStreamSource, ResumePolicy, SESSION_EVENT,
    SseDecoder, SseFrame, StreamConnection, StreamRequest, StreamSource, StreamUpdate,
};
