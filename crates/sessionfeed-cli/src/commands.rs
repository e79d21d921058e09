use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging::{self, LogTarget};
use crate::types::WatchMode;
use anyhow::Result;
use sessionfeed_runtime::resolve_config_path;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let config_path = resolve_config_path(cli.config.as_deref())?;

    match command {
        Commands::Watch(args) => {
            let target = match args.mode {
                WatchMode::Tui => LogTarget::FileOnly,
                WatchMode::Console => LogTarget::Stderr,
            };
            logging::init(cli.log_level, cli.log_file.as_deref(), target)?;

            let config = handlers::watch::effective_config(&config_path, &args)?;
            match args.mode {
                WatchMode::Tui => handlers::watch_tui::handle(&config),
                WatchMode::Console => handlers::watch_console::handle(&config),
            }
        }

        Commands::Config { command } => {
            logging::init(cli.log_level, cli.log_file.as_deref(), LogTarget::Stderr)?;

            match command {
                ConfigCommand::Show => handlers::config::show(&config_path),
                ConfigCommand::Path => handlers::config::path(&config_path),
            }
        }
    }
}

fn show_guidance() {
    println!("sessionfeed - Live viewer for background session event streams\n");

    println!("Get started:");
    println!("  sessionfeed watch <EVENTS_URL>                  # Interactive viewer");
    println!("  sessionfeed watch <EVENTS_URL> --mode console   # Plain streaming output\n");

    println!("Configuration:");
    println!("  sessionfeed config path                         # Where settings are read from");
    println!("  sessionfeed config show                         # Effective settings\n");

    println!("For more commands:");
    println!("  sessionfeed --help");
}
