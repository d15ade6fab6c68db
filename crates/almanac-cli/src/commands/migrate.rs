//! Migrate command implementation.

use crate::cli::MigrateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use almanac_migrator::{migrate, MigrationResult, RawInput};
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Execute the migrate command.
///
/// Returns whether the migration report was successful.
pub fn execute_migrate(args: MigrateArgs, formatter: &Formatter, pretty: bool) -> Result<bool> {
    let result = run_migration(&args, pretty)?;

    println!("{}", formatter.format_migration(&result, args.output.is_some())?);

    Ok(result.report.success)
}

/// Read the input, migrate it and write the result file if one was requested.
pub fn run_migration(args: &MigrateArgs, pretty: bool) -> Result<MigrationResult> {
    // Read the document from file or stdin
    let json_data = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let input = RawInput::from_json_str(&json_data)?;
    let result = migrate(&input);

    if let Some(output) = &args.output {
        fs::write(output, result.to_json(pretty)?)?;
        info!("Wrote migration result to {}", output.display());
    }

    Ok(result)
}
