//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use almanac_domain::{Confidence, SourceReference};
use almanac_migrator::{MigrationReport, MigrationResult, MigrationStats};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    pretty: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, pretty: bool) -> Self {
        Self {
            format,
            color_enabled,
            pretty,
        }
    }

    /// Format the outcome of a migration run.
    ///
    /// In JSON mode the entities are included unless `entities_written`
    /// says they already went to a file, in which case only the report is
    /// printed.
    pub fn format_migration(&self, result: &MigrationResult, entities_written: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json if entities_written => self.to_json(&result.report),
            OutputFormat::Json => Ok(result.to_json(self.pretty)?),
            OutputFormat::Table => Ok(self.format_report_table(&result.report)),
            OutputFormat::Quiet => Ok(if result.report.success { "ok" } else { "failed" }.to_string()),
        }
    }

    /// Format the report as a table plus diagnostic lists.
    fn format_report_table(&self, report: &MigrationReport) -> String {
        let mut sections = Vec::new();

        let headline = report.summary.lines().next().unwrap_or_default();
        sections.push(if report.success {
            self.success(headline)
        } else {
            self.error(headline)
        });
        sections.push(format!("Run {} at {}", report.run_id, report.timestamp));
        sections.push(stats_table(&report.stats));

        for (title, lines, color) in [
            ("Errors", &report.errors, "red"),
            ("Warnings", &report.warnings, "yellow"),
            ("Gaps", &report.gaps, "cyan"),
        ] {
            if lines.is_empty() {
                continue;
            }
            let mut section = self.colorize(&format!("{} ({}):", title, lines.len()), color);
            for line in lines {
                section.push_str("\n  - ");
                section.push_str(line);
            }
            sections.push(section);
        }

        sections.join("\n\n")
    }

    /// Format the tier earned by a set of source references.
    pub fn format_confidence(&self, sources: &[SourceReference], confidence: Confidence) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let kinds: Vec<&str> = sources.iter().map(|s| s.kind.as_str()).collect();
                self.to_json(&serde_json::json!({
                    "kinds": kinds,
                    "sources": sources.len(),
                    "confidence": confidence,
                }))
            }
            OutputFormat::Quiet => Ok(confidence.as_str().to_string()),
            OutputFormat::Table => {
                let verdict = self.colorize(
                    &format!("Confidence: {}", confidence),
                    match confidence {
                        Confidence::High => "green",
                        Confidence::Medium => "yellow",
                        Confidence::Low => "red",
                    },
                );

                if sources.is_empty() {
                    return Ok(format!("{}\n{}", self.warning("No sources given."), verdict));
                }

                let mut builder = Builder::default();
                builder.push_record(["Kind", "Direct observation"]);
                for source in sources {
                    let direct = if source.kind.is_direct_observation() { "yes" } else { "no" };
                    builder.push_record([source.kind.as_str(), direct]);
                }

                Ok(format!("{}\n{}", styled(builder), verdict))
            }
        }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn stats_table(stats: &MigrationStats) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Domain", "Migrated"]);
    for (domain, count) in [
        ("Items", stats.items),
        ("Formulas", stats.formulas),
        ("Animals", stats.animals),
        ("Waypoint nodes", stats.waypoint_nodes),
        ("Waypoint routes", stats.waypoint_routes),
        ("Collectibles", stats.collectible_entries),
        ("Roles", stats.roles),
    ] {
        builder.push_record([domain.to_string(), count.to_string()]);
    }
    builder.push_record([
        "Confidence (H/M/L)".to_string(),
        format!(
            "{}/{}/{}",
            stats.high_confidence_count, stats.medium_confidence_count, stats.low_confidence_count
        ),
    ]);

    styled(builder)
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
