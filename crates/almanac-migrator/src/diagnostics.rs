//! Per-domain diagnostics and confidence counters
//!
//! Each domain accumulates into its own [`Diagnostics`] and
//! [`ConfidenceTally`]; the orchestrator merges them once every domain is
//! done, so there is no shared mutable state between domains.

use almanac_domain::Confidence;

/// Errors, warnings and gaps recorded during migration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Record-level defects that dropped a record from a load-bearing domain
    pub errors: Vec<String>,

    /// Recoverable defects
    pub warnings: Vec<String>,

    /// Migrated records whose confidence is LOW
    pub gaps: Vec<String>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn error(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.errors.push(message);
    }

    /// Record a warning
    pub fn warning(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }

    /// Record a gap
    pub fn gap(&mut self, message: String) {
        tracing::debug!("{}", message);
        self.gaps.push(message);
    }

    /// Append another set of diagnostics, preserving order
    pub fn merge(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.gaps.extend(other.gaps);
    }
}

/// Count of migrated records per confidence tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfidenceTally {
    /// Records at HIGH
    pub high: usize,
    /// Records at MEDIUM
    pub medium: usize,
    /// Records at LOW
    pub low: usize,
}

impl ConfidenceTally {
    /// Count one record
    pub fn record(&mut self, confidence: Confidence) {
        match confidence {
            Confidence::High => self.high += 1,
            Confidence::Medium => self.medium += 1,
            Confidence::Low => self.low += 1,
        }
    }

    /// Add another tally
    pub fn merge(&mut self, other: ConfidenceTally) {
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
    }
}
