//! Report generation

use crate::diagnostics::{ConfidenceTally, Diagnostics};
use crate::migrators::MigrationContext;
use crate::types::{MigrationReport, MigrationStats};

/// Render the human-readable summary of a run
///
/// Pure: the same arguments always produce the same string. Lines for
/// errors, warnings and gaps appear only when the list is non-empty.
pub fn summarize(
    stats: &MigrationStats,
    errors: &[String],
    warnings: &[String],
    gaps: &[String],
) -> String {
    let mut lines = vec![
        format!(
            "Migrated {} entities (items: {}, formulas: {}, animals: {}, waypoint nodes: {}, waypoint routes: {}, collectibles: {}, roles: {})",
            stats.total_migrated(),
            stats.items,
            stats.formulas,
            stats.animals,
            stats.waypoint_nodes,
            stats.waypoint_routes,
            stats.collectible_entries,
            stats.roles,
        ),
        format!(
            "Confidence: {} high, {} medium, {} low",
            stats.high_confidence_count,
            stats.medium_confidence_count,
            stats.low_confidence_count,
        ),
    ];

    if !errors.is_empty() {
        lines.push(format!("Errors: {}", errors.len()));
    }
    if !warnings.is_empty() {
        lines.push(format!("Warnings: {}", warnings.len()));
    }
    if !gaps.is_empty() {
        lines.push(format!("Gaps: {} record(s) need verification", gaps.len()));
    }

    lines.join("\n")
}

impl MigrationStats {
    /// Fold confidence counts into the stats
    pub fn with_tally(mut self, tally: ConfidenceTally) -> Self {
        self.high_confidence_count = tally.high;
        self.medium_confidence_count = tally.medium;
        self.low_confidence_count = tally.low;
        self
    }
}

impl MigrationReport {
    /// Assemble the report for a completed run
    pub fn new(ctx: &MigrationContext, stats: MigrationStats, diagnostics: Diagnostics) -> Self {
        let Diagnostics {
            errors,
            warnings,
            gaps,
        } = diagnostics;
        let summary = summarize(&stats, &errors, &warnings, &gaps);

        Self {
            success: errors.is_empty(),
            run_id: ctx.run_id().to_string(),
            timestamp: ctx.timestamp().to_string(),
            stats,
            warnings,
            errors,
            gaps,
            summary,
        }
    }

    /// Report for a run aborted by an internal failure
    ///
    /// Partial work is discarded: counters are zero and only the fatal error
    /// is listed.
    pub fn fatal(ctx: &MigrationContext, cause: impl std::fmt::Display) -> Self {
        let mut diagnostics = Diagnostics::new();
        diagnostics
            .errors
            .push(format!("Fatal migration error: {}", cause));
        Self::new(ctx, MigrationStats::default(), diagnostics)
    }
}
