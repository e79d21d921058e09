use crate::TransportError;
use crate::stream::SseFrame;
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use reqwest::Url;

/// Frames from one established connection. Ends (or yields an error) when
/// the connection drops.
pub type FrameStream = BoxStream<'static, Result<SseFrame, TransportError>>;

/// One connection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectRequest {
    pub url: Url,
    /// Value for the `Last-Event-ID` header
    pub last_event_id: Option<String>,
}

/// Opens single event-stream connections. Retrying is the caller's job.
pub trait StreamSource: Send + Sync {
    fn connect(&self, request: ConnectRequest)
    -> BoxFuture<'static, Result<FrameStream, TransportError>>;
}
