//! Watch Handler for TUI
//!
//! - The controller runs on a tokio runtime in the calling thread and owns
//!   all viewer state (buffer, filter, connection)
//! - Each render sends a Screen to the renderer thread
//! - The renderer sends filter changes and quit back as `ViewerInput`s

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use sessionfeed_runtime::{HttpStreamSource, SystemClock, ViewController, ViewerConfig};
use tokio::sync::mpsc as async_mpsc;
use tracing::info;

use crate::presentation::renderers::tui::{TuiContainer, TuiRenderer};

pub fn handle(config: &ViewerConfig) -> Result<()> {
    let source = Arc::new(HttpStreamSource::new()?);
    let (event_tx, event_rx) = mpsc::channel(); // Controller -> Renderer (screens)
    let (input_tx, input_rx) = async_mpsc::unbounded_channel(); // Renderer -> Controller

    let mut controller = ViewController::new(
        config,
        source,
        Arc::new(SystemClock),
        TuiContainer::new(event_tx),
    )?;

    let tui_handle = thread::spawn(move || TuiRenderer::new(input_tx).run(event_rx));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(controller.run(input_rx));
    info!(events = controller.buffer().len(), "viewer closed");

    // Dropping the controller closes the screen channel, which stops the renderer
    drop(controller);

    match tui_handle.join() {
        Ok(result) => result,
        Err(_) => anyhow::bail!("TUI thread panicked"),
    }
}
