//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Almanac CLI - Migrate legacy knowledge-base data into the Almanac model.
#[derive(Debug, Parser)]
#[command(name = "almanac")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ALMANAC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (status only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Migrate a legacy data document
    Migrate(MigrateArgs),

    /// Show the confidence tier a set of source kinds earns
    Confidence(ConfidenceArgs),
}

/// Arguments for the migrate command.
#[derive(Debug, Parser)]
pub struct MigrateArgs {
    /// JSON file containing the legacy collections
    #[arg(short, long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read the legacy document from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Write the full migration result to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the confidence command.
#[derive(Debug, Parser)]
pub struct ConfidenceArgs {
    /// Source kinds (e.g. in_game_verified wiki video)
    pub kinds: Vec<String>,
}

impl Cli {
    /// Default log filter for the `-v` count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_migrate_command() {
        let cli = Cli::parse_from(["almanac", "migrate", "--file", "legacy.json", "-o", "out.json"]);
        match cli.command {
            Command::Migrate(args) => {
                assert_eq!(args.file, Some(PathBuf::from("legacy.json")));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
                assert!(!args.stdin);
            }
            _ => panic!("Expected Migrate command"),
        }
    }

    #[test]
    fn test_file_conflicts_with_stdin() {
        let result = Cli::try_parse_from(["almanac", "migrate", "--file", "a.json", "--stdin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_confidence_command() {
        let cli = Cli::parse_from(["almanac", "confidence", "in_game_verified", "wiki"]);
        match cli.command {
            Command::Confidence(args) => assert_eq!(args.kinds, vec!["in_game_verified", "wiki"]),
            _ => panic!("Expected Confidence command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["almanac", "confidence", "wiki", "--format", "json", "-vv", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_log_filter() {
        let quiet = Cli::parse_from(["almanac", "confidence"]);
        assert_eq!(quiet.log_filter(), "warn");

        let verbose = Cli::parse_from(["almanac", "-v", "confidence"]);
        assert_eq!(verbose.log_filter(), "info");

        let loud = Cli::parse_from(["almanac", "-vvv", "confidence"]);
        assert_eq!(loud.log_filter(), "debug");
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, OutputFormat::Quiet);
    }
}
