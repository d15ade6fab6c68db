//! Trait definitions shared by all entities

use crate::{
    Animal, Attribution, CollectibleEntry, Confidence, EntityKind, Formula, Item, Role,
    WaypointNode, WaypointRoute,
};

/// Common view over the seven entity types
///
/// The migrator keys its output maps by [`Entity::id`] and does its
/// confidence bookkeeping through [`Entity::confidence`].
pub trait Entity {
    /// Which domain the entity belongs to
    const KIND: EntityKind;

    /// Identifier, unique within the entity's collection
    fn id(&self) -> &str;

    /// Provenance and inferred confidence
    fn attribution(&self) -> &Attribution;

    /// Confidence aggregated over the entity's facts
    fn confidence(&self) -> Confidence {
        self.attribution().confidence()
    }
}

macro_rules! impl_entity {
    ($ty:ty, $kind:expr) => {
        impl Entity for $ty {
            const KIND: EntityKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn attribution(&self) -> &Attribution {
                &self.attribution
            }
        }
    };
}

impl_entity!(Item, EntityKind::Item);
impl_entity!(Formula, EntityKind::Formula);
impl_entity!(Animal, EntityKind::Animal);
impl_entity!(WaypointNode, EntityKind::WaypointNode);
impl_entity!(WaypointRoute, EntityKind::WaypointRoute);
impl_entity!(CollectibleEntry, EntityKind::CollectibleEntry);
impl_entity!(Role, EntityKind::Role);
