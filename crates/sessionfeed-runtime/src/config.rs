use crate::stream::{ResumePolicy, StreamRequest};
use crate::{Error, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use sessionfeed_engine::{DEFAULT_CAPACITY, FilterState};
use sessionfeed_types::{Cursor, EventKind};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default reconnect delay, matching the browser EventSource default
pub const DEFAULT_RETRY_MS: u64 = 3000;

/// Environment variable that points at a config file
pub const CONFIG_ENV: &str = "SESSIONFEED_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SESSIONFEED_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.sessionfeed/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("sessionfeed").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".sessionfeed").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Settings for one mounted viewer.
///
/// Every field has a default so a partial `[viewer]` table is valid; only
/// `events_url` must be supplied somewhere (file or command line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,
    pub capacity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_cursor: Option<String>,
    pub enabled_types: Vec<EventKind>,
    pub resume: ResumePolicy,
    pub retry_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            events_url: None,
            capacity: DEFAULT_CAPACITY,
            initial_cursor: None,
            enabled_types: EventKind::ALL.to_vec(),
            resume: ResumePolicy::default(),
            retry_ms: DEFAULT_RETRY_MS,
        }
    }
}

impl ViewerConfig {
    /// Report the first problem that would keep the viewer from mounting
    pub fn validate(&self) -> Result<()> {
        self.events_url()?;
        if self.capacity == 0 {
            return Err(Error::Config("capacity must be at least 1".to_string()));
        }
        if self.retry_ms == 0 {
            return Err(Error::Config("retry_ms must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn events_url(&self) -> Result<Url> {
        let raw = self
            .events_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::Config("no events URL configured".to_string()))?;

        let url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                raw, other
            ))),
        }
    }

    pub fn filter(&self) -> FilterState {
        FilterState::from_kinds(self.enabled_types.iter().copied())
    }

    pub fn initial_cursor(&self) -> Option<Cursor> {
        self.initial_cursor
            .as_deref()
            .filter(|cursor| !cursor.is_empty())
            .map(Cursor::from)
    }

    /// Validate and build the request used for every (re)connection
    pub fn stream_request(&self) -> Result<StreamRequest> {
        self.validate()?;
        Ok(StreamRequest {
            events_url: self.events_url()?,
            capacity: self.capacity,
            initial_cursor: self.initial_cursor(),
            resume: self.resume,
            retry: Duration::from_millis(self.retry_ms),
        })
    }
}

/// On-disk layout of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl ConfigFile {
    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_with_url(url: &str) -> ViewerConfig {
        ViewerConfig {
            events_url: Some(url.to_string()),
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.capacity, 200);
        assert_eq!(config.retry_ms, 3000);
        assert_eq!(config.resume, ResumePolicy::Latest);
        assert_eq!(config.enabled_types.len(), 6);
        assert_eq!(config.filter(), FilterState::all());
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let err = ViewerConfig::default().validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        let err = config_with_url("ftp://example.com/events").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = config_with_url("not a url").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let mut config = config_with_url("http://localhost:4000/events");
        config.capacity = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_stream_request() {
        let mut config = config_with_url("http://localhost:4000/sessions/7/events");
        config.capacity = 50;
        config.initial_cursor = Some("ev-10".to_string());
        config.retry_ms = 250;

        let request = config.stream_request().unwrap();
        assert_eq!(request.capacity, 50);
        assert_eq!(request.initial_cursor, Some(Cursor::from("ev-10")));
        assert_eq!(request.retry, Duration::from_millis(250));
    }

    #[test]
    fn test_empty_initial_cursor_is_absent() {
        let mut config = config_with_url("http://localhost:4000/events");
        config.initial_cursor = Some(String::new());
        assert_eq!(config.initial_cursor(), None);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = ConfigFile::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(config, ConfigFile::default());
        Ok(())
    }

    #[test]
    fn test_load_partial_viewer_table() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[viewer]
events_url = "http://localhost:4000/events"
enabled_types = ["output", "error"]
resume = "initial"
"#,
        )?;

        let config = ConfigFile::load_from(&path)?.viewer;
        assert_eq!(
            config.events_url.as_deref(),
            Some("http://localhost:4000/events")
        );
        assert_eq!(config.capacity, 200);
        assert_eq!(config.resume, ResumePolicy::Initial);
        assert_eq!(
            config.filter(),
            FilterState::from_kinds([EventKind::Output, EventKind::Error])
        );
        Ok(())
    }

    #[test]
    fn test_unknown_type_name_is_a_toml_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[viewer]\nenabled_types = [\"bogus\"]\n")?;

        assert!(matches!(ConfigFile::load_from(&path), Err(Error::Toml(_))));
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut file = ConfigFile::default();
        file.viewer.events_url = Some("https://example.com/events".to_string());
        file.viewer.capacity = 75;
        file.save_to(&path)?;

        assert_eq!(ConfigFile::load_from(&path)?, file);
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/custom.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
        Ok(())
    }
}
