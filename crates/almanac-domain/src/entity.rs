//! Migrated entities
//!
//! Every entity embeds an [`Attribution`] (flattened into its JSON as
//! `confidence`, `sources` and `lastVerified`). Fields the legacy schema
//! attaches provenance to are wrapped as [`VersionedFact`]s stamped from that
//! same attribution; everything else is a plain value.

use crate::{Attribution, VersionedFact};
use serde::Serialize;
use std::fmt;

/// The seven entity domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EntityKind {
    /// Catalog item
    Item,
    /// Economic formula
    Formula,
    /// Animal
    Animal,
    /// Map way-point
    WaypointNode,
    /// Route between way-points
    WaypointRoute,
    /// Entry in a collection set
    CollectibleEntry,
    /// Progression role
    Role,
}

impl EntityKind {
    /// Every kind, in migration order
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Item,
        EntityKind::Formula,
        EntityKind::Animal,
        EntityKind::WaypointNode,
        EntityKind::WaypointRoute,
        EntityKind::CollectibleEntry,
        EntityKind::Role,
    ];

    /// Display label used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Item => "Item",
            EntityKind::Formula => "Formula",
            EntityKind::Animal => "Animal",
            EntityKind::WaypointNode => "WaypointNode",
            EntityKind::WaypointRoute => "WaypointRoute",
            EntityKind::CollectibleEntry => "CollectibleEntry",
            EntityKind::Role => "Role",
        }
    }

    /// Whether a record of this kind missing its identity is a hard error
    ///
    /// Geography (way-points and routes) is supplementary data: a record
    /// without identity there is skipped with a warning instead.
    pub fn is_load_bearing(&self) -> bool {
        !matches!(self, EntityKind::WaypointNode | EntityKind::WaypointRoute)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Description text
    pub description: String,
    /// Rarity label
    pub rarity: String,
    /// Maximum stack size
    pub stack_size: i64,
    /// Purchase price
    pub buy_price: VersionedFact<f64>,
    /// Resale price
    pub sell_price: VersionedFact<f64>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Patch the record was captured in
    pub patch_version: String,
    /// Set when the item is being phased out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    /// Provenance and confidence
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// An economic formula
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    /// Unique identifier
    pub id: String,
    /// Economic system the formula belongs to
    pub system: String,
    /// Display name
    pub name: String,
    /// Formula expression
    pub expression: VersionedFact<String>,
    /// Variables referenced by the expression
    pub variables: Vec<String>,
    /// Unit of the result
    pub unit: String,
    /// Description text
    pub description: String,
    /// Patch the record was captured in
    pub patch_version: String,
    /// Set when the formula is being phased out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    /// Provenance and confidence
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// An animal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Species
    pub species: String,
    /// Where it lives
    pub habitat: String,
    /// Base health
    pub base_health: VersionedFact<f64>,
    /// Movement speed multiplier
    pub speed: f64,
    /// Whether it can be tamed
    pub tameable: bool,
    /// Item ids it drops
    pub drops: Vec<String>,
    /// Patch the record was captured in
    pub patch_version: String,
    /// Set when the animal is being phased out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    /// Provenance and confidence
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// A map way-point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointNode {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Map region
    pub region: String,
    /// Kind of location
    pub kind: String,
    /// Horizontal map coordinate
    pub x: f64,
    /// Vertical map coordinate
    pub y: f64,
    /// Patch the record was captured in
    pub patch_version: String,
    /// Set when the way-point is being phased out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    /// Provenance and confidence
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// A route between two way-points
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointRoute {
    /// Unique identifier (`"{from_id}->{to_id}"` unless given)
    pub id: String,
    /// Start way-point
    pub from_id: String,
    /// End way-point
    pub to_id: String,
    /// Route length
    pub distance: VersionedFact<f64>,
    /// Travel time in minutes
    pub travel_minutes: f64,
    /// Whether the route can be walked both ways
    pub bidirectional: bool,
    /// Patch the record was captured in
    pub patch_version: String,
    /// Set when the route is being phased out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    /// Provenance and confidence
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// An entry in a collection set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectibleEntry {
    /// Unique identifier
    pub id: String,
    /// Owning collection set
    pub collection_set_id: String,
    /// Display name
    pub name: String,
    /// Rarity label
    pub rarity: String,
    /// Where to find it
    pub location_hint: String,
    /// Reward for completing it
    pub reward: String,
    /// Patch the record was captured in
    pub patch_version: String,
    /// Set when the entry is being phased out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    /// Provenance and confidence
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// A progression role
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Description text
    pub description: String,
    /// Progression tier
    pub tier: i64,
    /// Level at which the role unlocks
    pub unlock_level: i64,
    /// What the role is responsible for
    pub responsibilities: Vec<String>,
    /// Patch the record was captured in
    pub patch_version: String,
    /// Set when the role is being phased out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    /// Provenance and confidence
    #[serde(flatten)]
    pub attribution: Attribution,
}
