//! Economic formula migration

use super::{versioned, Fields, Identity, Migrator};
use crate::error::MigrationError;
use crate::record::RawRecord;
use almanac_domain::{Attribution, Formula};

/// Migrates legacy economic formulas
///
/// Formulas are identified by `id` plus the economic system they belong to
/// (`system`, or `systemTag` in older exports).
pub struct FormulaMigrator;

impl Migrator for FormulaMigrator {
    type Entity = Formula;

    const REQUIRED: &'static [&'static str] = &["id", "system"];

    fn identity(record: &RawRecord<'_>) -> Option<Identity> {
        let id = record.key(&["id"])?;
        let system = record.key(&["system", "systemTag"])?;
        Some(Identity::new(id, system))
    }

    fn build(
        fields: &Fields<'_>,
        identity: Identity,
        attribution: Attribution,
    ) -> Result<Formula, MigrationError> {
        let patch_version = fields.text("patchVersion")?;
        let deprecation_warning = fields.optional_text("deprecationWarning");

        Ok(Formula {
            id: identity.id,
            system: identity.display,
            name: fields.text("name")?,
            expression: versioned(
                &attribution,
                fields.text("expression")?,
                &patch_version,
                deprecation_warning.as_deref(),
            ),
            variables: fields.list("variables")?,
            unit: fields.text("unit")?,
            description: fields.text("description")?,
            patch_version,
            deprecation_warning,
            attribution,
        })
    }
}
