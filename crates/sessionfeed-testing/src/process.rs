//! Background process management for long-running commands.
//!
//! `watch` never exits on its own, so tests spawn it in the background,
//! read its output line by line and kill it when done.

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// A background process handle. The process is killed on drop.
pub struct BackgroundProcess {
    child: Child,
}

impl BackgroundProcess {
    pub fn spawn(mut command: Command) -> std::io::Result<Self> {
        let child = command.spawn()?;
        Ok(Self { child })
    }

    /// Spawn with piped stdout and stderr so output can be read while it runs.
    ///
    /// # Example
    /// ```no_run
    /// # use std::process::Command;
    /// # use std::time::Duration;
    /// # use sessionfeed_testing::process::BackgroundProcess;
    /// let mut cmd = Command::new("sessionfeed");
    /// cmd.args(["watch", "--mode", "console", "http://localhost:4000/events"]);
    ///
    /// let mut proc = BackgroundProcess::spawn_piped(cmd).unwrap();
    /// let mut lines = proc.stdout_lines().unwrap();
    /// let live = lines.wait_for(|line| line.contains("Live"), Duration::from_secs(5));
    /// assert!(live.is_some());
    /// ```
    pub fn spawn_piped(mut command: Command) -> std::io::Result<Self> {
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        let child = command.spawn()?;
        Ok(Self { child })
    }

    /// Wait for the process to exit with a timeout.
    pub fn wait_timeout(
        &mut self,
        timeout: Duration,
    ) -> std::io::Result<Option<std::process::ExitStatus>> {
        let start = Instant::now();
        loop {
            match self.child.try_wait()? {
                Some(status) => return Ok(Some(status)),
                None => {
                    if start.elapsed() > timeout {
                        return Ok(None);
                    }
                    thread::sleep(Duration::from_millis(50));
                }
            }
        }
    }

    pub fn kill(&mut self) -> std::io::Result<()> {
        self.child.kill()
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Returns `None` if stdout was not captured (use `spawn_piped`).
    pub fn stdout(&mut self) -> Option<&mut ChildStdout> {
        self.child.stdout.as_mut()
    }

    pub fn stderr(&mut self) -> Option<&mut std::process::ChildStderr> {
        self.child.stderr.as_mut()
    }

    /// Move stdout to a reader thread so lines can be awaited with a timeout.
    /// Returns `None` if stdout was not captured or was already taken.
    pub fn stdout_lines(&mut self) -> Option<LineReader> {
        self.child.stdout.take().map(LineReader::spawn)
    }

    /// Same as [`stdout_lines`](Self::stdout_lines) for stderr.
    pub fn stderr_lines(&mut self) -> Option<LineReader> {
        self.child.stderr.take().map(LineReader::spawn)
    }
}

impl Drop for BackgroundProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Lines of a child's output, collected on a background thread
pub struct LineReader {
    rx: mpsc::Receiver<String>,
    seen: Vec<String>,
}

impl LineReader {
    fn spawn<R: Read + Send + 'static>(output: R) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(output).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self {
            rx,
            seen: Vec::new(),
        }
    }

    /// Block until a line matching `predicate` arrives, the output closes,
    /// or `timeout` passes.
    pub fn wait_for(
        &mut self,
        predicate: impl Fn(&str) -> bool,
        timeout: Duration,
    ) -> Option<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let line = self.rx.recv_timeout(remaining).ok()?;
            self.seen.push(line.clone());
            if predicate(&line) {
                return Some(line);
            }
        }
    }

    /// Every line read so far
    pub fn seen(&self) -> &[String] {
        &self.seen
    }
}
