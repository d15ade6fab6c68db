//! Progression role migration

use super::{Fields, Identity, Migrator};
use crate::error::MigrationError;
use crate::record::RawRecord;
use almanac_domain::{Attribution, Role};

/// Migrates legacy progression roles
pub struct RoleMigrator;

impl Migrator for RoleMigrator {
    type Entity = Role;

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
    ) -> Result<Role, MigrationError> {
        let patch_version = fields.text("patchVersion")?;
        let deprecation_warning = fields.optional_text("deprecationWarning");

        Ok(Role {
            id: identity.id,
            name: identity.display,
            description: fields.text("description")?,
            tier: fields.integer("tier")?,
            unlock_level: fields.integer("unlockLevel")?,
            responsibilities: fields.list("responsibilities")?,
            patch_version,
            deprecation_warning,
            attribution,
        })
    }
}
