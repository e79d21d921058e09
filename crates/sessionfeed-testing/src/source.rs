//! In-memory stream sources.

use futures::channel::mpsc;
use futures::future::{self, BoxFuture};
use futures::stream::{self, StreamExt};
use sessionfeed_runtime::{ConnectRequest, FrameStream, SseFrame, StreamSource, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Behaviour of one scripted connection attempt
#[derive(Debug, Clone)]
pub enum Connection {
    /// Fail before the stream opens
    Refuse(TransportError),
    /// Open, deliver the items, then end (the server closed the response)
    Frames(Vec<Result<SseFrame, TransportError>>),
    /// Open, deliver the frames, then stay open forever
    Hold(Vec<SseFrame>),
}

/// Source that plays back one [`Connection`] per connect call.
///
/// Once the script runs out every further connection is held open empty.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Connection>>,
    requests: Mutex<Vec<ConnectRequest>>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Connection>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every connect request received so far, in order
    pub fn requests(&self) -> Vec<ConnectRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `after` query value of each request
    pub fn after_params(&self) -> Vec<Option<String>> {
        self.requests()
            .iter()
            .map(|request| {
                request
                    .url
                    .query_pairs()
                    .find(|(key, _)| key == "after")
                    .map(|(_, value)| value.into_owned())
            })
            .collect()
    }
}

impl StreamSource for ScriptedSource {
    fn connect(&self, request: ConnectRequest) -> BoxFuture<'static, Result<FrameStream, TransportError>> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Connection::Hold(Vec::new()));

        let result = match next {
            Connection::Refuse(err) => Err(err),
            Connection::Frames(items) => Ok(stream::iter(items).boxed()),
            Connection::Hold(frames) => Ok(stream::iter(frames.into_iter().map(Ok))
                .chain(stream::pending())
                .boxed()),
        };
        Box::pin(future::ready(result))
    }
}

type FrameSender = mpsc::UnboundedSender<Result<SseFrame, TransportError>>;

/// Source whose frames are pushed by the test while the viewer runs.
///
/// Each connect opens a fresh channel; the `send`/`fail` helpers act on the
/// most recent one.
#[derive(Debug, Default)]
pub struct ChannelSource {
    senders: Mutex<Vec<FrameSender>>,
    requests: Mutex<Vec<ConnectRequest>>,
}

impl ChannelSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection_count(&self) -> usize {
        self.senders.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ConnectRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Push a frame on the latest connection. Returns `false` when no
    /// connection is open or its receiving side is gone.
    pub fn send(&self, frame: SseFrame) -> bool {
        self.push(Ok(frame))
    }

    /// Fail the latest connection with a read error
    pub fn fail(&self, err: TransportError) -> bool {
        self.push(Err(err))
    }

    /// Whether the viewer still listens on the latest connection
    pub fn is_listening(&self) -> bool {
        self.senders
            .lock()
            .unwrap()
            .last()
            .is_some_and(|sender| !sender.is_closed())
    }

    fn push(&self, item: Result<SseFrame, TransportError>) -> bool {
        match self.senders.lock().unwrap().last() {
            Some(sender) => sender.unbounded_send(item).is_ok(),
            None => false,
        }
    }
}

impl StreamSource for ChannelSource {
    fn connect(&self, request: ConnectRequest) -> BoxFuture<'static, Result<FrameStream, TransportError>> {
        let (tx, rx) = mpsc::unbounded();
        self.requests.lock().unwrap().push(request);
        self.senders.lock().unwrap().push(tx);
        Box::pin(future::ready(Ok(rx.boxed())))
    }
}
