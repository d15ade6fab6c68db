//! Confidence command implementation.

use crate::cli::ConfidenceArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use almanac_domain::{infer_confidence, SourceKind, SourceReference};
use chrono::Utc;

/// Execute the confidence command.
pub fn execute_confidence(args: ConfidenceArgs, formatter: &Formatter) -> Result<()> {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let sources = parse_kinds(&args.kinds, &today)?;
    let confidence = infer_confidence(&sources);

    println!("{}", formatter.format_confidence(&sources, confidence)?);

    Ok(())
}

/// Turn source kind names into references dated `date`.
fn parse_kinds(kinds: &[String], date: &str) -> Result<Vec<SourceReference>> {
    kinds
        .iter()
        .map(|name| {
            SourceKind::parse(name)
                .map(|kind| SourceReference::new(kind, date))
                .ok_or_else(|| {
                    let known: Vec<&str> = SourceKind::ALL.iter().map(SourceKind::as_str).collect();
                    CliError::InvalidInput(format!(
                        "Unknown source kind '{}'. Expected one of: {}",
                        name,
                        known.join(", ")
                    ))
                })
        })
        .collect()
}
