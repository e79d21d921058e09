use crate::types::{LogLevel, ResumeArg, WatchMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sessionfeed")]
#[command(about = "Live viewer for background session event streams", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $SESSIONFEED_CONFIG, then the user config dir)"
    )]
    pub config: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Append logs to this file (the TUI never logs to the terminal)"
    )]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Follow a session event stream")]
    Watch(WatchArgs),

    #[command(about = "Inspect viewer configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    #[arg(help = "Events endpoint, e.g. https://host/sessions/42/events")]
    pub events_url: Option<String>,

    #[arg(long, help = "Maximum number of events kept in memory")]
    pub capacity: Option<usize>,

    #[arg(long, help = "Start after this event id")]
    pub after: Option<String>,

    #[arg(
        long,
        help = "Comma-separated event types to show (status,progress,output,error,artifact,unknown)"
    )]
    pub types: Option<String>,

    #[arg(
        long,
        default_value = "tui",
        help = "Display mode: tui (interactive) or console (streaming text)"
    )]
    pub mode: WatchMode,

    #[arg(long, help = "Cursor to resume from after a reconnect")]
    pub resume: Option<ResumeArg>,

    #[arg(long, help = "Reconnect delay in milliseconds")]
    pub retry_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration as TOML")]
    Show,

    #[command(about = "Print the config file location")]
    Path,
}
