use crate::args::WatchArgs;
use anyhow::{Context, Result};
use sessionfeed_engine::FilterState;
use sessionfeed_runtime::{ConfigFile, ViewerConfig};
use std::path::Path;
use tracing::debug;

/// Config file values overridden by command-line flags, validated
pub fn effective_config(config_path: &Path, args: &WatchArgs) -> Result<ViewerConfig> {
    let file = ConfigFile::load_from(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let config = apply_overrides(file.viewer, args)?;
    config.validate()?;
    debug!(
        config = %config_path.display(),
        capacity = config.capacity,
        retry_ms = config.retry_ms,
        "resolved viewer config"
    );
    Ok(config)
}

fn apply_overrides(mut config: ViewerConfig, args: &WatchArgs) -> Result<ViewerConfig> {
    if let Some(url) = &args.events_url {
        config.events_url = Some(url.clone());
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Some(after) = &args.after {
        config.initial_cursor = Some(after.clone());
    }
    if let Some(types) = &args.types {
        let filter = FilterState::parse(types).map_err(|e| anyhow::anyhow!("--types: {}", e))?;
        config.enabled_types = filter.kinds().collect();
    }
    if let Some(resume) = args.resume {
        config.resume = resume.into();
    }
    if let Some(retry_ms) = args.retry_ms {
        config.retry_ms = retry_ms;
    }
    Ok(config)
}
