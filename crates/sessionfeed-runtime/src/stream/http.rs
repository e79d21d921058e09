use crate::stream::{ConnectRequest, FrameStream, SseDecoder, StreamSource};
use crate::{Error, Result, TransportError};
use futures::future::BoxFuture;
use futures::stream::{self, Stream, StreamExt};
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, HeaderValue};
use std::collections::VecDeque;
use std::fmt::Display;
use tracing::{debug, trace};

const EVENT_STREAM: &str = "text/event-stream";

/// Event stream over HTTP using reqwest
#[derive(Debug, Clone)]
pub struct HttpStreamSource {
    client: reqwest::Client,
}

impl HttpStreamSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sessionfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl StreamSource for HttpStreamSource {
    fn connect(
        &self,
        request: ConnectRequest,
    ) -> BoxFuture<'static, std::result::Result<FrameStream, TransportError>> {
        let client = self.client.clone();

        Box::pin(async move {
            let mut builder = client
                .get(request.url.clone())
                .header(ACCEPT, EVENT_STREAM)
                .header(CACHE_CONTROL, "no-cache");

            if let Some(id) = &request.last_event_id
                && let Ok(value) = HeaderValue::from_str(id)
            {
                builder = builder.header("Last-Event-ID", value);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::Connect(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status(status.as_u16()));
            }

            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if !content_type
                .to_ascii_lowercase()
                .starts_with(EVENT_STREAM)
            {
                return Err(TransportError::ContentType(content_type));
            }

            debug!(url = %request.url, "event stream response accepted");
            Ok(decode_frames(response.bytes_stream()))
        })
    }
}

/// Turn a stream of body chunks into SSE frames.
///
/// A chunk error is yielded once as [`TransportError::Read`] and ends the
/// stream; a clean end of body simply ends it.
pub fn decode_frames<S, B, E>(chunks: S) -> FrameStream
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Display + Send + 'static,
{
    let state = DecodeState {
        chunks: Box::pin(chunks),
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
        done: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(frame) = state.pending.pop_front() {
                return Some((Ok(frame), state));
            }
            if state.done {
                return None;
            }

            match state.chunks.next().await {
                Some(Ok(bytes)) => {
                    trace!(len = bytes.as_ref().len(), "event stream chunk");
                    let frames = state.decoder.feed(bytes.as_ref());
                    state.pending.extend(frames);
                }
                Some(Err(err)) => {
                    state.done = true;
                    return Some((Err(TransportError::Read(err.to_string())), state));
                }
                None => return None,
            }
        }
    })
    .boxed()
}

struct DecodeState<S> {
    chunks: std::pin::Pin<Box<S>>,
    decoder: SseDecoder,
    pending: VecDeque<crate::stream::SseFrame>,
    done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(parts: &[&'static str]) -> Vec<std::result::Result<&'static [u8], String>> {
        parts.iter().map(|part| Ok(part.as_bytes())).collect()
    }

    #[tokio::test]
    async fn test_frames_across_chunk_boundaries() {
        let body = stream::iter(chunks(&[
            "event: session_event\nda",
            "ta: {\"type\":\"status\"}\n",
            "\nevent: session_event\ndata: {}\n\n",
        ]));

        let frames: Vec<_> = decode_frames(body).collect().await;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].as_ref().unwrap().data, "{\"type\":\"status\"}");
        assert_eq!(frames[1].as_ref().unwrap().data, "{}");
    }

    #[tokio::test]
    async fn test_read_error_ends_stream() {
        let body = stream::iter(vec![
            Ok(b"data: a\n\n".as_slice()),
            Err("connection reset".to_string()),
            Ok(b"data: b\n\n".as_slice()),
        ]);

        let frames: Vec<_> = decode_frames(body).collect().await;
        assert_eq!(frames.len(), 2);
        assert!(frames[0].is_ok());
        assert_eq!(
            frames[1],
            Err(TransportError::Read("connection reset".to_string()))
        );
    }

    #[tokio::test]
    async fn test_partial_frame_discarded_at_end() {
        let body = stream::iter(chunks(&["data: a\n\ndata: partial"]));
        let frames: Vec<_> = decode_frames(body).collect().await;
        assert_eq!(frames.len(), 1);
    }
}
