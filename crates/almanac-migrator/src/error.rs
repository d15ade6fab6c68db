//! Error types for the migrator
//!
//! Bad input never surfaces here: it becomes a diagnostic on the report.
//! These are internal failures, which abort the run.

use almanac_domain::EntityKind;
use thiserror::Error;

/// Unexpected failures during a migration run
#[derive(Error, Debug)]
pub enum MigrationError {
    /// A field has no entry in the defaults table
    #[error("No default registered for {kind}.{field}")]
    MissingDefault {
        /// Entity the field belongs to
        kind: EntityKind,
        /// Field name
        field: &'static str,
    },

    /// A default exists but has the wrong type for the field
    #[error("Default for {kind}.{field} is a {found}, not a {expected}")]
    DefaultTypeMismatch {
        /// Entity the field belongs to
        kind: EntityKind,
        /// Field name
        field: &'static str,
        /// Type the migrator asked for
        expected: &'static str,
        /// Type registered in the table
        found: &'static str,
    },

    /// A migrator panicked mid-run
    #[error("Panic during migration: {0}")]
    Panicked(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for MigrationError {
    fn from(e: serde_json::Error) -> Self {
        MigrationError::Json(e.to_string())
    }
}
