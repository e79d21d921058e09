use clap::ValueEnum;
use sessionfeed_runtime::ResumePolicy;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum WatchMode {
    Tui,
    Console,
}

impl fmt::Display for WatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchMode::Tui => write!(f, "tui"),
            WatchMode::Console => write!(f, "console"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ResumeArg {
    Latest,
    Initial,
}

impl fmt::Display for ResumeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeArg::Latest => write!(f, "latest"),
            ResumeArg::Initial => write!(f, "initial"),
        }
    }
}

impl From<ResumeArg> for ResumePolicy {
    fn from(arg: ResumeArg) -> Self {
        match arg {
            ResumeArg::Latest => ResumePolicy::Latest,
            ResumeArg::Initial => ResumePolicy::Initial,
        }
    }
}
