use crate::TransportError;
use crate::stream::{ConnectRequest, FrameStream, SseFrame, StreamRequest, StreamSource};
use futures::future::{self, BoxFuture};
use futures::{StreamExt, ready};
use sessionfeed_types::{Cursor, DecodeError, SessionEvent, decode_event};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::Sleep;
use tracing::{debug, info, trace, warn};

/// Event name carrying session events on the stream
pub const SESSION_EVENT: &str = "session_event";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Live,
    Reconnecting,
    Closed,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Idle => "idle",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Live => "live",
            ConnectionState::Reconnecting => "reconnecting",
            ConnectionState::Closed => "closed",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a connection reports to its owner, in server-send order
#[derive(Debug)]
pub enum StreamUpdate {
    State(ConnectionState),
    Event(SessionEvent),
    DecodeFailed(DecodeError),
}

/// Where the transport currently is. Every resource lives here, so dropping
/// the phase releases it.
enum Phase {
    Connecting(BoxFuture<'static, Result<FrameStream, TransportError>>),
    Streaming(FrameStream),
    Waiting(Pin<Box<Sleep>>),
    Closed,
}

/// A self-reconnecting event stream.
///
/// The connection owns its transport outright and only makes progress
/// while [`next`](Self::next) is polled: connecting, reading frames and
/// waiting out the retry interval all happen there. [`close`](Self::close)
/// (or drop) releases the transport before returning, after which `next`
/// only returns `None`.
pub struct StreamConnection {
    source: Arc<dyn StreamSource>,
    request: StreamRequest,
    phase: Phase,
    state: ConnectionState,
    /// Id of the last decoded event, or the initial cursor before any
    cursor: Option<Cursor>,
    /// Id of the last decoded event on this connection
    latest: Option<Cursor>,
    /// Last SSE `id:` field seen, echoed as `Last-Event-ID`
    last_event_id: Option<String>,
    retry: Duration,
    attempt: u64,
}

impl StreamConnection {
    /// Start connecting. Retry timers need a tokio runtime while polling.
    pub fn open(source: Arc<dyn StreamSource>, request: StreamRequest) -> Self {
        let mut connection = Self {
            cursor: request.initial_cursor.clone(),
            retry: request.retry,
            source,
            request,
            phase: Phase::Closed,
            state: ConnectionState::Connecting,
            latest: None,
            last_event_id: None,
            attempt: 0,
        };
        connection.phase = Phase::Connecting(connection.connect());
        connection
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Id of the last decoded event, or the initial cursor before any
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.state == ConnectionState::Closed
    }

    /// Next update; `None` once closed. Cancel-safe: all progress is kept
    /// in the connection, not in the returned future.
    pub async fn next(&mut self) -> Option<StreamUpdate> {
        future::poll_fn(|cx| self.poll_update(cx)).await
    }

    /// Release the transport and stop for good
    pub fn close(&mut self) {
        if self.is_closed() {
            return;
        }

        self.state = ConnectionState::Closed;
        self.phase = Phase::Closed;
        info!("event stream closed");
    }

    fn poll_update(&mut self, cx: &mut Context<'_>) -> Poll<Option<StreamUpdate>> {
        loop {
            match &mut self.phase {
                Phase::Closed => return Poll::Ready(None),
                Phase::Connecting(connect) => {
                    let update = match ready!(connect.as_mut().poll(cx)) {
                        Ok(frames) => {
                            info!("event stream live");
                            self.phase = Phase::Streaming(frames);
                            self.transition(ConnectionState::Live)
                        }
                        Err(err) => self.fail(err),
                    };
                    if let Some(update) = update {
                        return Poll::Ready(Some(update));
                    }
                }
                Phase::Streaming(frames) => {
                    let update = match ready!(frames.poll_next_unpin(cx)) {
                        Some(Ok(frame)) => self.accept(frame),
                        Some(Err(err)) => self.fail(err),
                        None => self.fail(TransportError::Ended),
                    };
                    if let Some(update) = update {
                        return Poll::Ready(Some(update));
                    }
                }
                Phase::Waiting(sleep) => {
                    ready!(sleep.as_mut().poll(cx));
                    self.attempt += 1;
                    self.phase = Phase::Connecting(self.connect());
                }
            }
        }
    }

    fn connect(&self) -> BoxFuture<'static, Result<FrameStream, TransportError>> {
        let url = self
            .request
            .target(self.request.resume_cursor(self.latest.as_ref()));
        if self.attempt == 0 {
            info!(url = %url, "connecting to event stream");
        } else {
            info!(url = %url, attempt = self.attempt, "reconnecting to event stream");
        }

        self.source.connect(ConnectRequest {
            url,
            last_event_id: self.last_event_id.clone(),
        })
    }

    fn accept(&mut self, frame: SseFrame) -> Option<StreamUpdate> {
        if let Some(ms) = frame.retry {
            self.retry = Duration::from_millis(ms);
        }
        if frame.id.is_some() {
            self.last_event_id = frame.id.clone();
        }

        let update = decode_frame(frame)?;
        if let StreamUpdate::Event(event) = &update
            && let Some(id) = &event.id
        {
            self.latest = Some(id.clone());
            self.cursor = Some(id.clone());
        }
        Some(update)
    }

    /// Drop the current transport and schedule a reconnect
    fn fail(&mut self, err: TransportError) -> Option<StreamUpdate> {
        warn!(error = %err, retry_ms = self.retry.as_millis() as u64, "event stream dropped");
        self.phase = Phase::Waiting(Box::pin(tokio::time::sleep(self.retry)));
        self.transition(ConnectionState::Reconnecting)
    }

    fn transition(&mut self, next: ConnectionState) -> Option<StreamUpdate> {
        if self.state == next {
            return None;
        }
        debug!(from = %self.state, to = %next, "connection state changed");
        self.state = next;
        Some(StreamUpdate::State(next))
    }
}

impl Drop for StreamConnection {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for StreamConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamConnection")
            .field("state", &self.state)
            .field("cursor", &self.cursor)
            .field("attempt", &self.attempt)
            .finish_non_exhaustive()
    }
}

fn decode_frame(frame: SseFrame) -> Option<StreamUpdate> {
    if frame.event != SESSION_EVENT {
        debug!(event = %frame.event, "ignoring frame with foreign event name");
        return None;
    }

    trace!(data = %frame.data, "session event frame");
    match decode_event(&frame.data) {
        Ok(Some(event)) => Some(StreamUpdate::Event(event)),
        Ok(None) => {
            debug!("ignoring session event that is not a JSON object");
            None
        }
        Err(err) => {
            warn!(error = %err, "failed to decode session event");
            Some(StreamUpdate::DecodeFailed(err))
        }
    }
}
