//! Catalog item migration

use super::{versioned, Fields, Identity, Migrator};
use crate::error::MigrationError;
use crate::record::RawRecord;
use almanac_domain::{Attribution, Item};

/// Migrates legacy catalog items
pub struct ItemMigrator;

impl Migrator for ItemMigrator {
    type Entity = Item;

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
    ) -> Result<Item, MigrationError> {
        let patch_version = fields.text("patchVersion")?;
        let deprecation_warning = fields.optional_text("deprecationWarning");
        let deprecation = deprecation_warning.as_deref();

        Ok(Item {
            id: identity.id,
            name: identity.display,
            category: fields.text("category")?,
            description: fields.text("description")?,
            rarity: fields.text("rarity")?,
            stack_size: fields.integer("stackSize")?,
            buy_price: versioned(
                &attribution,
                fields.number("buyPrice")?,
                &patch_version,
                deprecation,
            ),
            sell_price: versioned(
                &attribution,
                fields.number("sellPrice")?,
                &patch_version,
                deprecation,
            ),
            tags: fields.list("tags")?,
            patch_version,
            deprecation_warning,
            attribution,
        })
    }
}
