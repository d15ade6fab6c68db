//! Almanac CLI - Command-line interface for the Almanac data migration engine.

use almanac_cli::commands;
use almanac_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Exit status when a migration report lists errors.
const EXIT_MIGRATION_FAILED: i32 = 2;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so stdout stays machine-readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> almanac_cli::Result<i32> {
    // Load config; a missing file means defaults
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled, config.pretty);

    match cli.command {
        Command::Migrate(args) => {
            let success = commands::execute_migrate(args, &formatter, config.pretty)?;
            if !success && config.fail_on_errors {
                return Ok(EXIT_MIGRATION_FAILED);
            }
        }
        Command::Confidence(args) => {
            commands::execute_confidence(args, &formatter)?;
        }
    }

    Ok(0)
}
