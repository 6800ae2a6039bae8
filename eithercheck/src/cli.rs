// eithercheck/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eithercheck")]
#[command(about = "Either-required form validation: server check and browser mirror", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ✅ Validates a JSON record against the declared rules
    Check {
        /// Rule file (YAML)
        #[arg(long, short, default_value = "eithercheck.yaml")]
        config: PathBuf,

        /// Record to validate (JSON object)
        #[arg(long, short)]
        record: PathBuf,

        /// Locale used to format messages (overrides the rule file and EITHERCHECK_LOCALE)
        #[arg(long)]
        locale: Option<String>,

        /// Output format: table | json
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// 🧩 Prints the browser-side checks for a record
    Script {
        #[arg(long, short, default_value = "eithercheck.yaml")]
        config: PathBuf,

        #[arg(long, short)]
        record: PathBuf,

        /// Only render the check of this attribute
        #[arg(long, short)]
        attribute: Option<String>,

        #[arg(long)]
        locale: Option<String>,
    },

    /// 📦 Prints the reusable browser runtime
    Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_check_defaults() -> Result<()> {
        let args = Cli::parse_from(["eithercheck", "check", "--record", "r.json"]);
        match args.command {
            Commands::Check {
                config,
                record,
                format,
                ..
            } => {
                assert_eq!(config.to_string_lossy(), "eithercheck.yaml");
                assert_eq!(record.to_string_lossy(), "r.json");
                assert_eq!(format, OutputFormat::Table);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_check_json() -> Result<()> {
        let args = Cli::parse_from([
            "eithercheck",
            "check",
            "-c",
            "rules.yaml",
            "-r",
            "r.json",
            "--format",
            "json",
            "--locale",
            "fr-FR",
        ]);
        match args.command {
            Commands::Check {
                config,
                format,
                locale,
                ..
            } => {
                assert_eq!(config.to_string_lossy(), "rules.yaml");
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(locale.as_deref(), Some("fr-FR"));
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_script_attribute() -> Result<()> {
        let args = Cli::parse_from(["eithercheck", "script", "-r", "r.json", "-a", "email"]);
        match args.command {
            Commands::Script { attribute, .. } => {
                assert_eq!(attribute.as_deref(), Some("email"));
                Ok(())
            }
            _ => bail!("Expected Script command"),
        }
    }

    #[test]
    fn test_cli_parse_runtime() {
        let args = Cli::parse_from(["eithercheck", "runtime"]);
        assert!(matches!(args.command, Commands::Runtime));
    }
}
