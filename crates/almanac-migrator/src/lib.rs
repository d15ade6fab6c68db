//! Almanac Migrator
//!
//! Turns loosely-structured legacy knowledge-base records into the validated,
//! source-attributed Almanac model, plus a structured migration report.
//!
//! # Overview
//!
//! The migrator is a pure, synchronous batch transform. It performs no I/O
//! and keeps no state between runs.
//!
//! # Architecture
//!
//! ```text
//! RawInput → per-domain Migrators (Validator + Inferencer + defaults)
//!          → Orchestrator (merge) → MigrationResult { entities, report }
//! ```
//!
//! # Diagnostics
//!
//! - **Errors**: a load-bearing record (item, formula, animal, collectible,
//!   role) missing its identity, or a fatal internal failure. Any error makes
//!   `report.success` false.
//! - **Warnings**: recoverable defects (all source references invalid, or a
//!   way-point/route missing its identity).
//! - **Gaps**: migrated records at LOW confidence, flagged for review.
//!
//! # Example Usage
//!
//! ```
//! use almanac_migrator::{migrate, RawInput};
//!
//! let input = RawInput::from_json_str(r#"{
//!     "items": [{
//!         "id": "honey",
//!         "name": "Honey",
//!         "sellPrice": 35,
//!         "sources": [
//!             {"kind": "in_game_verified", "date": "2024-07-01"},
//!             {"kind": "wiki", "date": "2024-06-12"},
//!             {"kind": "video", "date": "2024-06-20"}
//!         ]
//!     }],
//!     "waypointRoutes": [{"fromId": "farm"}]
//! }"#).unwrap();
//!
//! let result = migrate(&input);
//!
//! assert!(result.report.success);
//! assert_eq!(result.report.stats.high_confidence_count, 1);
//! assert_eq!(result.report.warnings.len(), 1);
//! println!("{}", result.report.summary);
//! ```

#![warn(missing_docs)]

mod error;
mod types;
mod record;
mod orchestrator;

pub mod defaults;
pub mod diagnostics;
pub mod migrators;
pub mod report;
pub mod validator;


pub use error::MigrationError;
pub use types::{MigrationReport, MigrationResult, MigrationStats, RawInput};
pub use record::RawRecord;
pub use orchestrator::{migrate, migrate_at};
pub use report::summarize;
pub use diagnostics::{ConfidenceTally, Diagnostics};
