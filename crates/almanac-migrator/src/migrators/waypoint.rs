//! Way-point node and route migration
//!
//! Geography is supplementary data: a node or route missing its identity is
//! skipped with a warning rather than failing the run.

use super::{versioned, Fields, Identity, Migrator};
use crate::error::MigrationError;
use crate::record::RawRecord;
use almanac_domain::{Attribution, WaypointNode, WaypointRoute};

const FROM_KEYS: &[&str] = &["fromId", "from"];
const TO_KEYS: &[&str] = &["toId", "to"];

/// Migrates legacy map way-points
pub struct WaypointNodeMigrator;

impl Migrator for WaypointNodeMigrator {
    type Entity = WaypointNode;

    const REQUIRED: &'static [&'static str] = &["id", "name"];

    fn identity(record: &RawRecord<'_>) -> Option<Identity> {
        let id = record.key(&["id"])?;
        let name = record.key(&["name"])?;
        Some(Identity::new(id, name))
    }

    fn build(
        fields: &Fields<'_>,
        identity: Identity,
        attribution: Attribution,
    ) -> Result<WaypointNode, MigrationError> {
        let patch_version = fields.text("patchVersion")?;
        let deprecation_warning = fields.optional_text("deprecationWarning");

        Ok(WaypointNode {
            id: identity.id,
            name: identity.display,
            region: fields.text("region")?,
            kind: fields.text("kind")?,
            x: fields.number("x")?,
            y: fields.number("y")?,
            patch_version,
            deprecation_warning,
            attribution,
        })
    }
}

/// Migrates legacy routes between way-points
///
/// Routes are identified by their endpoints. A record without its own `id` is
/// keyed as `"{fromId}->{toId}"`.
pub struct WaypointRouteMigrator;

impl Migrator for WaypointRouteMigrator {
    type Entity = WaypointRoute;

    const REQUIRED: &'static [&'static str] = &["fromId", "toId"];

    fn identity(record: &RawRecord<'_>) -> Option<Identity> {
        let from = record.key(FROM_KEYS)?;
        let to = record.key(TO_KEYS)?;
        let key = format!("{}->{}", from, to);
        let id = record.key(&["id"]).unwrap_or_else(|| key.clone());
        Some(Identity::new(id, key))
    }

    fn build(
        fields: &Fields<'_>,
        identity: Identity,
        attribution: Attribution,
    ) -> Result<WaypointRoute, MigrationError> {
        let record = fields.record();
        // identity() already proved both endpoints present
        let from_id = record.key(FROM_KEYS).unwrap_or_default();
        let to_id = record.key(TO_KEYS).unwrap_or_default();
        let patch_version = fields.text("patchVersion")?;
        let deprecation_warning = fields.optional_text("deprecationWarning");

        Ok(WaypointRoute {
            id: identity.id,
            from_id,
            to_id,
            distance: versioned(
                &attribution,
                fields.number("distance")?,
                &patch_version,
                deprecation_warning.as_deref(),
            ),
            travel_minutes: fields.number("travelMinutes")?,
            bidirectional: fields.flag("bidirectional")?,
            patch_version,
            deprecation_warning,
            attribution,
        })
    }
}
