//! Default values for optional fields
//!
//! One static, declarative table keyed by `(entity, field)`. Migrators read
//! every default through it; nothing is inferred from other data. Field names
//! are the legacy JSON keys.

use crate::error::MigrationError;
use almanac_domain::EntityKind;

/// Sentinel for an unknown patch version
pub const UNKNOWN_VERSION: &str = "UNKNOWN";

/// A fixed default value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// Literal text
    Text(&'static str),
    /// Floating-point number
    Number(f64),
    /// Whole number
    Integer(i64),
    /// Boolean
    Flag(bool),
    /// Empty list of strings
    EmptyList,
    /// The run's date (`YYYY-MM-DD`)
    Today,
}

impl DefaultValue {
    /// Name of the value's type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            DefaultValue::Text(_) | DefaultValue::Today => "text",
            DefaultValue::Number(_) => "number",
            DefaultValue::Integer(_) => "integer",
            DefaultValue::Flag(_) => "flag",
            DefaultValue::EmptyList => "list",
        }
    }
}

/// One row of the defaults table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDefault {
    /// Entity the field belongs to
    pub kind: EntityKind,
    /// Legacy JSON key
    pub field: &'static str,
    /// Value used when the field is absent
    pub value: DefaultValue,
}

const fn row(kind: EntityKind, field: &'static str, value: DefaultValue) -> FieldDefault {
    FieldDefault { kind, field, value }
}

use DefaultValue::{EmptyList, Flag, Integer, Number, Text, Today};
use EntityKind::{Animal, CollectibleEntry, Formula, Item, Role, WaypointNode, WaypointRoute};

/// The defaults table
pub static DEFAULTS: &[FieldDefault] = &[
    // Item
    row(Item, "category", Text("misc")),
    row(Item, "description", Text("")),
    row(Item, "rarity", Text("common")),
    row(Item, "stackSize", Integer(1)),
    row(Item, "buyPrice", Number(0.0)),
    row(Item, "sellPrice", Number(0.0)),
    row(Item, "tags", EmptyList),
    row(Item, "patchVersion", Text(UNKNOWN_VERSION)),
    row(Item, "lastVerified", Today),
    // Formula
    row(Formula, "name", Text("")),
    row(Formula, "expression", Text("")),
    row(Formula, "variables", EmptyList),
    row(Formula, "unit", Text("")),
    row(Formula, "description", Text("")),
    row(Formula, "patchVersion", Text(UNKNOWN_VERSION)),
    row(Formula, "lastVerified", Today),
    // Animal
    row(Animal, "species", Text("unknown")),
    row(Animal, "habitat", Text("unknown")),
    row(Animal, "baseHealth", Number(100.0)),
    row(Animal, "speed", Number(1.0)),
    row(Animal, "tameable", Flag(false)),
    row(Animal, "drops", EmptyList),
    row(Animal, "patchVersion", Text(UNKNOWN_VERSION)),
    row(Animal, "lastVerified", Today),
    // WaypointNode
    row(WaypointNode, "region", Text("unknown")),
    row(WaypointNode, "kind", Text("landmark")),
    row(WaypointNode, "x", Number(0.0)),
    row(WaypointNode, "y", Number(0.0)),
    row(WaypointNode, "patchVersion", Text(UNKNOWN_VERSION)),
    row(WaypointNode, "lastVerified", Today),
    // WaypointRoute
    row(WaypointRoute, "distance", Number(0.0)),
    row(WaypointRoute, "travelMinutes", Number(0.0)),
    row(WaypointRoute, "bidirectional", Flag(true)),
    row(WaypointRoute, "patchVersion", Text(UNKNOWN_VERSION)),
    row(WaypointRoute, "lastVerified", Today),
    // CollectibleEntry
    row(CollectibleEntry, "name", Text("Unnamed collectible")),
    row(CollectibleEntry, "rarity", Text("common")),
    row(CollectibleEntry, "locationHint", Text("")),
    row(CollectibleEntry, "reward", Text("")),
    row(CollectibleEntry, "patchVersion", Text(UNKNOWN_VERSION)),
    row(CollectibleEntry, "lastVerified", Today),
    // Role
    row(Role, "description", Text("")),
    row(Role, "tier", Integer(1)),
    row(Role, "unlockLevel", Integer(0)),
    row(Role, "responsibilities", EmptyList),
    row(Role, "patchVersion", Text(UNKNOWN_VERSION)),
    row(Role, "lastVerified", Today),
];

/// Look up the default for a field in `table`
pub fn lookup(
    table: &[FieldDefault],
    kind: EntityKind,
    field: &'static str,
) -> Result<DefaultValue, MigrationError> {
    table
        .iter()
        .find(|row| row.kind == kind && row.field == field)
        .map(|row| row.value)
        .ok_or(MigrationError::MissingDefault { kind, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_rows() {
        let mut seen = HashSet::new();
        for row in DEFAULTS {
            assert!(
                seen.insert((row.kind, row.field)),
                "duplicate default for {}.{}",
                row.kind,
                row.field
            );
        }
    }

    #[test]
    fn test_every_kind_defaults_last_verified_to_today() {
        for kind in EntityKind::ALL {
            assert_eq!(lookup(DEFAULTS, kind, "lastVerified").unwrap(), Today);
        }
    }

    #[test]
    fn test_version_sentinel() {
        for kind in EntityKind::ALL {
            assert_eq!(
                lookup(DEFAULTS, kind, "patchVersion").unwrap(),
                Text("UNKNOWN")
            );
        }
    }

    #[test]
    fn test_documented_baselines() {
        assert_eq!(lookup(DEFAULTS, Animal, "baseHealth").unwrap(), Number(100.0));
        assert_eq!(lookup(DEFAULTS, Item, "stackSize").unwrap(), Integer(1));
        assert_eq!(lookup(DEFAULTS, WaypointRoute, "bidirectional").unwrap(), Flag(true));
        assert_eq!(lookup(DEFAULTS, Role, "tier").unwrap(), Integer(1));
    }

    #[test]
    fn test_missing_row_is_error() {
        let err = lookup(DEFAULTS, Item, "weight").unwrap_err();
        assert!(matches!(
            err,
            MigrationError::MissingDefault { kind: Item, field: "weight" }
        ));
        assert_eq!(err.to_string(), "No default registered for Item.weight");
    }
}
