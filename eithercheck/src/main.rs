// eithercheck/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // Logs go to stderr so `script` output can be piped as-is.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            config,
            record,
            locale,
            format,
        } => commands::check::execute(config, record, locale, format),

        Commands::Script {
            config,
            record,
            attribute,
            locale,
        } => commands::script::execute(config, record, attribute, locale),

        Commands::Runtime => commands::runtime::execute(),
    }
}
