use std::sync::Arc;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use sessionfeed_runtime::{
    HttpStreamSource, SystemClock, ViewController, ViewerConfig, ViewerInput,
};
use tokio::sync::mpsc;

use crate::presentation::renderers::console::ConsoleContainer;

/// Stream events to stdout until Ctrl+C
pub fn handle(config: &ViewerConfig) -> Result<()> {
    let source = Arc::new(HttpStreamSource::new()?);
    let color = std::io::stdout().is_terminal();

    let mut controller = ViewController::new(
        config,
        source,
        Arc::new(SystemClock),
        ConsoleContainer::new(color),
    )?;

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    ctrlc::set_handler(move || {
        let _ = input_tx.send(ViewerInput::Quit);
    })
    .context("Failed to install Ctrl+C handler")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(controller.run(input_rx));

    Ok(())
}
