//! Input and output types for a migration run

use crate::error::MigrationError;
use almanac_domain::{
    Animal, CollectibleEntry, Formula, Item, Role, WaypointNode, WaypointRoute,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Raw legacy data, one optional collection per domain
///
/// Elements are kept untyped: the upstream extraction gives no guarantees
/// beyond "JSON-like objects". The document itself must be a JSON object;
/// unknown keys are ignored and a `null` collection counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct RawInput {
    /// Catalog items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Value>>,

    /// Economic formulas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formulas: Option<Vec<Value>>,

    /// Animals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animals: Option<Vec<Value>>,

    /// Map way-points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoint_nodes: Option<Vec<Value>>,

    /// Routes between way-points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoint_routes: Option<Vec<Value>>,

    /// Collection-set entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collectible_entries: Option<Vec<Value>>,

    /// Progression roles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Value>>,
}

impl TryFrom<Map<String, Value>> for RawInput {
    type Error = String;

    fn try_from(mut document: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut collection = |key: &str| match document.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(records)) => Ok(Some(records)),
            Some(other) => Err(format!(
                "collection `{}` must be an array, got {}",
                key,
                json_type(&other)
            )),
        };

        Ok(Self {
            items: collection("items")?,
            formulas: collection("formulas")?,
            animals: collection("animals")?,
            waypoint_nodes: collection("waypointNodes")?,
            waypoint_routes: collection("waypointRoutes")?,
            collectible_entries: collection("collectibleEntries")?,
            roles: collection("roles")?,
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl RawInput {
    /// Parse raw input from a JSON document
    ///
    /// The document root must be an object; arrays and scalars are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, MigrationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of raw records across all collections
    pub fn record_count(&self) -> usize {
        [
            &self.items,
            &self.formulas,
            &self.animals,
            &self.waypoint_nodes,
            &self.waypoint_routes,
            &self.collectible_entries,
            &self.roles,
        ]
        .into_iter()
        .flatten()
        .map(Vec::len)
        .sum()
    }
}

/// Counters for a migration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationStats {
    /// Items in the output
    pub items: usize,
    /// Formulas in the output
    pub formulas: usize,
    /// Animals in the output
    pub animals: usize,
    /// Way-point nodes in the output
    pub waypoint_nodes: usize,
    /// Way-point routes in the output
    pub waypoint_routes: usize,
    /// Collectible entries in the output
    pub collectible_entries: usize,
    /// Roles in the output
    pub roles: usize,
    /// Migrated records at HIGH confidence
    pub high_confidence_count: usize,
    /// Migrated records at MEDIUM confidence
    pub medium_confidence_count: usize,
    /// Migrated records at LOW confidence
    pub low_confidence_count: usize,
}

impl MigrationStats {
    /// Entities across all domains
    pub fn total_migrated(&self) -> usize {
        self.items
            + self.formulas
            + self.animals
            + self.waypoint_nodes
            + self.waypoint_routes
            + self.collectible_entries
            + self.roles
    }
}

/// Structured report of a migration run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    /// True exactly when `errors` is empty
    pub success: bool,
    /// Unique identifier of the run (UUIDv7)
    pub run_id: String,
    /// Run start time (RFC 3339, UTC)
    pub timestamp: String,
    /// Counters
    pub stats: MigrationStats,
    /// Recoverable defects
    pub warnings: Vec<String>,
    /// Record-level or fatal defects
    pub errors: Vec<String>,
    /// Low-confidence records needing verification
    pub gaps: Vec<String>,
    /// Human-readable summary
    pub summary: String,
}

/// Output of a migration run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationResult {
    /// Items by id
    pub items: BTreeMap<String, Item>,
    /// Formulas by id
    pub formulas: BTreeMap<String, Formula>,
    /// Animals by id
    pub animals: BTreeMap<String, Animal>,
    /// Way-point nodes by id
    pub waypoint_nodes: BTreeMap<String, WaypointNode>,
    /// Way-point routes by id
    pub waypoint_routes: BTreeMap<String, WaypointRoute>,
    /// Collectible entries by id
    pub collectible_entries: BTreeMap<String, CollectibleEntry>,
    /// Roles by id
    pub roles: BTreeMap<String, Role>,
    /// Report for the run
    pub report: MigrationReport,
}

impl MigrationResult {
    /// Serialize the whole result as JSON
    pub fn to_json(&self, pretty: bool) -> Result<String, MigrationError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
