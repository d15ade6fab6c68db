//! Per-domain entity migrators
//!
//! All seven migrators share one skeleton ([`migrate_one`]):
//!
//! 1. Required-field check (error on load-bearing domains, warning otherwise)
//! 2. Provenance sanitization
//! 3. Confidence inference (via [`Attribution`])
//! 4. Field materialization from the record and the defaults table
//! 5. Confidence bookkeeping
//! 6. Low-confidence gap flagging
//!
//! Each domain differs only in its [`Migrator`] impl: which fields identify a
//! record and how the entity is built.

mod animal;
mod collectible;
mod formula;
mod item;
mod role;
mod waypoint;

pub use animal::AnimalMigrator;
pub use collectible::CollectibleEntryMigrator;
pub use formula::FormulaMigrator;
pub use item::ItemMigrator;
pub use role::RoleMigrator;
pub use waypoint::{WaypointNodeMigrator, WaypointRouteMigrator};

use crate::defaults::{self, DefaultValue, FieldDefault, DEFAULTS};
use crate::diagnostics::{ConfidenceTally, Diagnostics};
use crate::error::MigrationError;
use crate::record::RawRecord;
use crate::validator::{is_iso_date, sanitize_sources};
use almanac_domain::{Attribution, Confidence, Entity, EntityKind, VersionedFact};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-run values shared by every migrator
///
/// Captured once at the start of a run so that every defaulted date in the
/// run agrees.
#[derive(Debug, Clone)]
pub struct MigrationContext {
    run_id: String,
    timestamp: String,
    today: String,
    defaults: &'static [FieldDefault],
}

impl MigrationContext {
    /// Create a context for a run starting at `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_defaults(now, DEFAULTS)
    }

    /// Create a context reading defaults from another table
    pub(crate) fn with_defaults(now: DateTime<Utc>, defaults: &'static [FieldDefault]) -> Self {
        Self {
            run_id: uuid::Uuid::now_v7().to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            today: now.format("%Y-%m-%d").to_string(),
            defaults,
        }
    }

    /// Unique identifier of the run (UUIDv7)
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Run start time (RFC 3339, UTC)
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Run date (`YYYY-MM-DD`)
    pub fn today(&self) -> &str {
        &self.today
    }
}

/// The fields that identify a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Key in the output map
    pub id: String,
    /// Mandatory display field, used in diagnostics
    pub display: String,
}

impl Identity {
    /// Create an identity
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
        }
    }
}

/// Optional-field access with defaults from the table
pub struct Fields<'a> {
    record: RawRecord<'a>,
    kind: EntityKind,
    ctx: &'a MigrationContext,
}

impl<'a> Fields<'a> {
    fn new(record: RawRecord<'a>, kind: EntityKind, ctx: &'a MigrationContext) -> Self {
        Self { record, kind, ctx }
    }

    /// The underlying record
    pub fn record(&self) -> RawRecord<'a> {
        self.record
    }

    fn default(&self, field: &'static str) -> Result<DefaultValue, MigrationError> {
        defaults::lookup(self.ctx.defaults, self.kind, field)
    }

    fn mismatch(
        &self,
        field: &'static str,
        expected: &'static str,
        found: DefaultValue,
    ) -> MigrationError {
        MigrationError::DefaultTypeMismatch {
            kind: self.kind,
            field,
            expected,
            found: found.type_name(),
        }
    }

    // The default is resolved before the record is consulted so that a gap in
    // the table fails the same way whatever the data looks like.

    /// Text field
    pub fn text(&self, field: &'static str) -> Result<String, MigrationError> {
        let fallback = match self.default(field)? {
            DefaultValue::Text(text) => text,
            DefaultValue::Today => self.ctx.today(),
            other => return Err(self.mismatch(field, "text", other)),
        };
        Ok(self.record.text(&[field]).unwrap_or(fallback).to_string())
    }

    /// Date field (`YYYY-MM-DD`); other shapes fall back to the default
    pub fn date(&self, field: &'static str) -> Result<String, MigrationError> {
        let fallback = match self.default(field)? {
            DefaultValue::Text(text) => text,
            DefaultValue::Today => self.ctx.today(),
            other => return Err(self.mismatch(field, "date", other)),
        };
        Ok(self
            .record
            .text(&[field])
            .filter(|d| is_iso_date(d))
            .unwrap_or(fallback)
            .to_string())
    }

    /// Floating-point field
    pub fn number(&self, field: &'static str) -> Result<f64, MigrationError> {
        let default = self.default(field)?;
        let DefaultValue::Number(fallback) = default else {
            return Err(self.mismatch(field, "number", default));
        };
        Ok(self.record.number(&[field]).unwrap_or(fallback))
    }

    /// Whole-number field
    pub fn integer(&self, field: &'static str) -> Result<i64, MigrationError> {
        let default = self.default(field)?;
        let DefaultValue::Integer(fallback) = default else {
            return Err(self.mismatch(field, "integer", default));
        };
        Ok(self.record.integer(&[field]).unwrap_or(fallback))
    }

    /// Boolean field
    pub fn flag(&self, field: &'static str) -> Result<bool, MigrationError> {
        let default = self.default(field)?;
        let DefaultValue::Flag(fallback) = default else {
            return Err(self.mismatch(field, "flag", default));
        };
        Ok(self.record.flag(&[field]).unwrap_or(fallback))
    }

    /// List-of-strings field
    pub fn list(&self, field: &'static str) -> Result<Vec<String>, MigrationError> {
        let default = self.default(field)?;
        let DefaultValue::EmptyList = default else {
            return Err(self.mismatch(field, "list", default));
        };
        Ok(self.record.list(&[field]).unwrap_or_default())
    }

    /// Text field with no default (absent stays absent)
    pub fn optional_text(&self, field: &str) -> Option<String> {
        self.record.text(&[field]).map(str::to_string)
    }
}

/// Wrap a value as a fact tagged with the record's patch version
pub(crate) fn versioned<T>(
    attribution: &Attribution,
    value: T,
    patch_version: &str,
    deprecation_warning: Option<&str>,
) -> VersionedFact<T> {
    let fact = attribution.fact(value).with_patch_version(patch_version);
    match deprecation_warning {
        Some(warning) => fact.with_deprecation_warning(warning),
        None => fact,
    }
}

/// Domain-specific half of a migrator
pub trait Migrator {
    /// Entity produced
    type Entity: Entity;

    /// Required fields, as named in diagnostics
    const REQUIRED: &'static [&'static str];

    /// Extract the identifying fields, or `None` if any is missing
    fn identity(record: &RawRecord<'_>) -> Option<Identity>;

    /// Materialize the entity
    fn build(
        fields: &Fields<'_>,
        identity: Identity,
        attribution: Attribution,
    ) -> Result<Self::Entity, MigrationError>;
}

/// Migrate a single raw record
///
/// Returns `Ok(None)` when the record is dropped; the reason is recorded in
/// `diagnostics`. `Err` is reserved for internal failures.
pub fn migrate_one<M: Migrator>(
    raw: &Value,
    ctx: &MigrationContext,
    diagnostics: &mut Diagnostics,
    tally: &mut ConfidenceTally,
) -> Result<Option<M::Entity>, MigrationError> {
    let kind = <M::Entity as Entity>::KIND;
    let record = RawRecord::new(raw);

    let Some(identity) = M::identity(&record) else {
        let message = format!(
            "{} missing required fields ({}): {}",
            kind,
            M::REQUIRED.join(", "),
            record.preview()
        );
        if kind.is_load_bearing() {
            diagnostics.error(message);
        } else {
            diagnostics.warning(message);
        }
        return Ok(None);
    };

    let sanitized = sanitize_sources(record.get("sources"));
    if sanitized.all_rejected() {
        diagnostics.warning(format!(
            "{} {}: invalid source references, proceeding with none",
            kind, identity.id
        ));
    } else if sanitized.dropped() > 0 {
        debug!(
            "{} {}: dropped {} of {} source references",
            kind,
            identity.id,
            sanitized.dropped(),
            sanitized.offered
        );
    }

    let fields = Fields::new(record, kind, ctx);
    let attribution = Attribution::new(sanitized.sources, fields.date("lastVerified")?);
    let gap = format!(
        "{} {} ({}): low confidence, needs verification",
        kind, identity.id, identity.display
    );

    let entity = M::build(&fields, identity, attribution)?;
    let confidence = entity.confidence();

    tally.record(confidence);
    if confidence == Confidence::Low {
        diagnostics.gap(gap);
    }

    debug!("Migrated {} {} at {} confidence", kind, entity.id(), confidence);
    Ok(Some(entity))
}

/// Everything one domain produced
#[derive(Debug, Clone)]
pub struct DomainOutcome<T> {
    /// Migrated entities keyed by id
    pub entities: BTreeMap<String, T>,
    /// Diagnostics recorded for this domain
    pub diagnostics: Diagnostics,
    /// Confidence counts for this domain
    pub tally: ConfidenceTally,
}

impl<T> Default for DomainOutcome<T> {
    fn default() -> Self {
        Self {
            entities: BTreeMap::new(),
            diagnostics: Diagnostics::default(),
            tally: ConfidenceTally::default(),
        }
    }
}

/// Migrate every record of one domain
///
/// Records are independent: a dropped record never stops the loop. On an id
/// collision the later record wins.
pub fn migrate_domain<M: Migrator>(
    records: &[Value],
    ctx: &MigrationContext,
) -> Result<DomainOutcome<M::Entity>, MigrationError> {
    let mut outcome = DomainOutcome::default();

    for raw in records {
        let migrated = migrate_one::<M>(raw, ctx, &mut outcome.diagnostics, &mut outcome.tally)?;
        if let Some(entity) = migrated {
            outcome.entities.insert(entity.id().to_string(), entity);
        }
    }

    Ok(outcome)
}
