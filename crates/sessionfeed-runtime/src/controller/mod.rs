//! Binds one stream connection, one event buffer and one container.

mod container;
mod input;
mod screen;

pub use container::Container;
pub use input::ViewerInput;
pub use screen::{Screen, StatusIndicator, StatusLevel};

use crate::stream::{ConnectionState, StreamConnection, StreamRequest, StreamSource, StreamUpdate};
use crate::{Clock, Result, ViewerConfig};
use sessionfeed_engine::{EventBuffer, FilterState, build_card, empty_state, visible};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Owns the viewer state and its single stream connection.
///
/// Lifecycle: [`mount`](Self::mount) opens the stream, updates are applied
/// through [`apply`](Self::apply) (or [`run`](Self::run) drives everything),
/// [`unmount`](Self::unmount) closes the stream. Dropping a mounted
/// controller unmounts it, so the container still sees the final frame.
pub struct ViewController<C: Container> {
    request: StreamRequest,
    source: Arc<dyn StreamSource>,
    clock: Arc<dyn Clock>,
    container: C,
    buffer: EventBuffer,
    filter: FilterState,
    connection: Option<StreamConnection>,
    state: ConnectionState,
    stream_error: bool,
}

enum Step {
    Stream(Option<StreamUpdate>),
    Input(Option<ViewerInput>),
}

impl<C: Container> ViewController<C> {
    /// Validate `config` and prepare an unmounted viewer
    pub fn new(
        config: &ViewerConfig,
        source: Arc<dyn StreamSource>,
        clock: Arc<dyn Clock>,
        container: C,
    ) -> Result<Self> {
        let request = config.stream_request()?;

        Ok(Self {
            buffer: EventBuffer::new(request.capacity),
            filter: config.filter(),
            request,
            source,
            clock,
            container,
            connection: None,
            state: ConnectionState::Idle,
            stream_error: false,
        })
    }

    /// Open the stream and draw the first frame. No-op when mounted.
    pub fn mount(&mut self) {
        if self.connection.is_some() {
            return;
        }

        info!(
            url = %self.request.events_url,
            capacity = self.request.capacity,
            resume = self.request.resume.as_str(),
            "mounting session event viewer"
        );
        let connection = StreamConnection::open(self.source.clone(), self.request.clone());
        self.state = connection.state();
        self.stream_error = false;
        self.connection = Some(connection);
        self.render();
    }

    /// Close the stream. Updates produced afterwards are never applied.
    pub fn unmount(&mut self) {
        let Some(mut connection) = self.connection.take() else {
            return;
        };

        connection.close();
        self.state = ConnectionState::Closed;
        self.stream_error = false;
        info!(events = self.buffer.len(), "session event viewer unmounted");
        self.render();
    }

    pub fn is_mounted(&self) -> bool {
        self.connection.is_some()
    }

    /// Next update from the mounted connection; `None` when unmounted
    pub async fn next_update(&mut self) -> Option<StreamUpdate> {
        self.connection.as_mut()?.next().await
    }

    pub fn apply(&mut self, update: StreamUpdate) {
        if !self.is_mounted() {
            debug!("dropping update for unmounted viewer");
            return;
        }

        match update {
            StreamUpdate::State(state) => {
                self.state = state;
                self.stream_error = false;
            }
            StreamUpdate::Event(event) => {
                self.buffer.append(event);
            }
            StreamUpdate::DecodeFailed(_) => {
                self.stream_error = true;
            }
        }
        self.render();
    }

    /// Apply a user input. Returns `false` when the viewer should stop.
    pub fn handle_input(&mut self, input: ViewerInput) -> bool {
        match input {
            ViewerInput::Toggle(kind) => {
                self.filter.toggle(kind);
            }
            ViewerInput::ShowAll => self.filter = FilterState::all(),
            ViewerInput::ShowNone => self.filter = FilterState::none(),
            ViewerInput::Refresh => {}
            ViewerInput::Quit => return false,
        }

        debug!(filter = %self.filter, "filter updated");
        self.render();
        true
    }

    /// Mount, then process stream updates and inputs one at a time until
    /// quit, input close or stream close. Always unmounts before returning.
    pub async fn run(&mut self, mut inputs: mpsc::UnboundedReceiver<ViewerInput>) {
        self.mount();

        loop {
            let step = {
                let Some(connection) = self.connection.as_mut() else {
                    break;
                };
                tokio::select! {
                    update = connection.next() => Step::Stream(update),
                    input = inputs.recv() => Step::Input(input),
                }
            };

            match step {
                Step::Stream(Some(update)) => self.apply(update),
                Step::Input(Some(input)) => {
                    if !self.handle_input(input) {
                        break;
                    }
                }
                Step::Stream(None) | Step::Input(None) => break,
            }
        }

        inputs.close();
        self.unmount();
    }

    pub fn screen(&self) -> Screen {
        let now = self.clock.now();
        let cards: Vec<_> = visible(&self.buffer, &self.filter)
            .into_iter()
            .map(|entry| build_card(entry, now))
            .collect();
        let empty_state = empty_state(self.buffer.len(), cards.len(), &self.filter);

        Screen {
            status: self.status(),
            cards,
            total: self.buffer.len(),
            capacity: self.buffer.capacity(),
            filter: self.filter.clone(),
            empty_state,
        }
    }

    pub fn status(&self) -> StatusIndicator {
        StatusIndicator::new(self.state, self.stream_error)
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn buffer(&self) -> &EventBuffer {
        &self.buffer
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    fn render(&mut self) {
        let screen = self.screen();
        self.container.render(&screen);
    }
}

impl<C: Container> Drop for ViewController<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
