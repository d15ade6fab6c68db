//! Animal migration

use super::{versioned, Fields, Identity, Migrator};
use crate::error::MigrationError;
use crate::record::RawRecord;
use almanac_domain::{Animal, Attribution};

/// Migrates legacy animal records
pub struct AnimalMigrator;

impl Migrator for AnimalMigrator {
    type Entity = Animal;

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
    ) -> Result<Animal, MigrationError> {
        let patch_version = fields.text("patchVersion")?;
        let deprecation_warning = fields.optional_text("deprecationWarning");

        Ok(Animal {
            id: identity.id,
            name: identity.display,
            species: fields.text("species")?,
            habitat: fields.text("habitat")?,
            base_health: versioned(
                &attribution,
                fields.number("baseHealth")?,
                &patch_version,
                deprecation_warning.as_deref(),
            ),
            speed: fields.number("speed")?,
            tameable: fields.flag("tameable")?,
            drops: fields.list("drops")?,
            patch_version,
            deprecation_warning,
            attribution,
        })
    }
}
