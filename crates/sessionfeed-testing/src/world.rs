//! Isolated environment for CLI tests.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp directory acting as HOME, with an optional config file.
///
/// # Example
/// ```ignore
/// use sessionfeed_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_config("[viewer]\ncapacity = 10\n")
///     .unwrap();
///
/// let mut cmd = world.command(env!("CARGO_BIN_EXE_sessionfeed"));
/// cmd.args(["config", "show"]).assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("sessionfeed").join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path handed to the CLI through `SESSIONFEED_CONFIG`
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write the config file.
    pub fn with_config(self, content: &str) -> Result<Self> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, content)?;
        Ok(self)
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point a command at this environment: HOME, XDG config dir and
    /// `SESSIONFEED_CONFIG` all live inside the temp directory.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for (key, value) in self.env_pairs() {
            cmd.env(key, value);
        }
        cmd.env_remove("RUST_LOG")
    }

    /// Same as [`configure_command`](Self::configure_command) for
    /// `std::process::Command`, used with background processes.
    pub fn configure_std_command<'a>(
        &self,
        cmd: &'a mut std::process::Command,
    ) -> &'a mut std::process::Command {
        for (key, value) in self.env_pairs() {
            cmd.env(key, value);
        }
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn command(&self, bin_path: impl AsRef<std::ffi::OsStr>) -> Command {
        let mut cmd = Command::new(bin_path);
        self.configure_command(&mut cmd);
        cmd
    }

    fn env_pairs(&self) -> Vec<(String, String)> {
        let home = self.temp_dir.path();
        let mut pairs = vec![
            ("HOME".to_string(), home.display().to_string()),
            (
                "XDG_CONFIG_HOME".to_string(),
                home.join(".config").display().to_string(),
            ),
            (
                "SESSIONFEED_CONFIG".to_string(),
                self.config_path.display().to_string(),
            ),
        ];
        pairs.extend(
            self.env_vars
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        pairs
    }
}
