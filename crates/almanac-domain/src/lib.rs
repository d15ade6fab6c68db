//! Almanac Domain Layer
//!
//! This crate contains the core domain model for Almanac's knowledge base
//! migration. It has no I/O and a single external dependency (`serde`, so the
//! migrated model can be handed to tooling as JSON).
//!
//! ## Key Concepts
//!
//! - **SourceReference**: One citation recording where a fact came from
//! - **Confidence**: A coarse LOW / MEDIUM / HIGH tier derived from provenance
//! - **Attribution**: Sanitized sources plus the confidence inferred from them
//! - **VersionedFact**: A value bundled with its attribution
//! - **Entities**: The seven migrated record types (items, formulas, animals,
//!   waypoint nodes and routes, collectible entries, roles)
//!
//! ## Invariant
//!
//! Confidence is never assigned by hand. [`Attribution::new`] runs the
//! inferencer over the sources it is given, and every entity and fact takes its
//! confidence from an attribution.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod confidence_computation;
pub mod entity;
pub mod fact;
pub mod provenance;
pub mod traits;

// Re-exports for convenience
pub use confidence::Confidence;
pub use confidence_computation::infer_confidence;
pub use entity::{
    Animal, CollectibleEntry, EntityKind, Formula, Item, Role, WaypointNode, WaypointRoute,
};
pub use fact::{Attribution, VersionedFact};
pub use provenance::{SourceKind, SourceReference};
pub use traits::Entity;
