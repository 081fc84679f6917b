//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Vigil using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Vigil - CI compliance checks with PII detection
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(version, about, long_about = None)]
#[command(author = "Vigil Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "vigil.toml", env = "VIGIL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VIGIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the gated check pipeline against a CI event
    Run(commands::run::RunArgs),

    /// Scan an event's changed files for PII, without the run gates
    Scan(commands::scan::ScanArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["vigil", "run", "--event", "push", "--sha", "0a1b2c3d"]);
        assert_eq!(cli.config, "vigil.toml");
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.event, "push");
                assert_eq!(args.sha.as_deref(), Some("0a1b2c3d"));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "vigil",
            "--config",
            "custom.toml",
            "run",
            "--event",
            "push",
        ]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from([
            "vigil",
            "--log-level",
            "debug",
            "scan",
            "--event",
            "push",
            "--sha",
            "0a1b2c3d",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Scan(_)));
    }

    #[test]
    fn test_cli_parse_pull_request_event() {
        let cli = Cli::parse_from([
            "vigil",
            "run",
            "--event",
            "pull_request",
            "--pull-request",
            "42",
            "--sha",
            "0a1b2c3d",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.event, "pull_request");
                assert_eq!(args.pull_request, Some(42));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["vigil", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["vigil", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
