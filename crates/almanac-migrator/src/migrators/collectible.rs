//! Collectible entry migration

use super::{Fields, Identity, Migrator};
use crate::error::MigrationError;
use crate::record::RawRecord;
use almanac_domain::{Attribution, CollectibleEntry};

/// Migrates legacy collection-set entries
pub struct CollectibleEntryMigrator;

impl Migrator for CollectibleEntryMigrator {
    type Entity = CollectibleEntry;

    const REQUIRED: &'static [&'static str] = &["id", "collectionSetId"];

    fn identity(record: &RawRecord<'_>) -> Option<Identity> {
        let id = record.key(&["id"])?;
        let set = record.key(&["collectionSetId", "setId"])?;
        Some(Identity::new(id, set))
    }

    fn build(
        fields: &Fields<'_>,
        identity: Identity,
        attribution: Attribution,
    ) -> Result<CollectibleEntry, MigrationError> {
        let patch_version = fields.text("patchVersion")?;
        let deprecation_warning = fields.optional_text("deprecationWarning");

        Ok(CollectibleEntry {
            id: identity.id,
            collection_set_id: identity.display,
            name: fields.text("name")?,
            rarity: fields.text("rarity")?,
            location_hint: fields.text("locationHint")?,
            reward: fields.text("reward")?,
            patch_version,
            deprecation_warning,
            attribution,
        })
    }
}
