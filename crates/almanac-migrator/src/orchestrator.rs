//! Migration orchestration
//!
//! Drives the seven domain migrators, then merges their outcomes in a fixed
//! order. Domains never share counters or diagnostics while running.

use crate::diagnostics::{ConfidenceTally, Diagnostics};
use crate::error::MigrationError;
use crate::migrators::{
    migrate_domain, AnimalMigrator, CollectibleEntryMigrator, DomainOutcome, FormulaMigrator,
    ItemMigrator, MigrationContext, Migrator, RoleMigrator, WaypointNodeMigrator,
    WaypointRouteMigrator,
};
use crate::types::{MigrationReport, MigrationResult, MigrationStats, RawInput};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

/// Migrate a batch of legacy records
///
/// Always returns a complete result; problems with the input are reported as
/// diagnostics on `result.report`. Internal failures, panics included, end
/// the run with a single fatal error and no entities.
///
/// # Examples
///
/// ```
/// use almanac_migrator::{migrate, RawInput};
///
/// let input = RawInput::from_json_str(r#"{"items": [{"id": "egg", "name": "Egg"}]}"#).unwrap();
/// let result = migrate(&input);
///
/// assert!(result.report.success);
/// assert_eq!(result.items["egg"].name, "Egg");
/// assert_eq!(result.report.gaps.len(), 1);
/// ```
pub fn migrate(input: &RawInput) -> MigrationResult {
    migrate_at(input, Utc::now())
}

/// Migrate with an explicit run time
///
/// `now` stamps the report and is the default for missing `lastVerified`
/// dates, so fixing it makes a run fully reproducible.
pub fn migrate_at(input: &RawInput, now: DateTime<Utc>) -> MigrationResult {
    run_guarded(input, &MigrationContext::new(now), run)
}

/// Migrate reading defaults from a different table
#[cfg(test)]
pub(crate) fn migrate_with_defaults(
    input: &RawInput,
    now: DateTime<Utc>,
    defaults: &'static [crate::defaults::FieldDefault],
) -> MigrationResult {
    run_guarded(input, &MigrationContext::with_defaults(now, defaults), run)
}

/// Execute `runner`, converting any failure into a fatal report
pub(crate) fn run_guarded<F>(input: &RawInput, ctx: &MigrationContext, runner: F) -> MigrationResult
where
    F: FnOnce(&RawInput, &MigrationContext) -> Result<MigrationResult, MigrationError>,
{
    info!(
        "Starting migration run {} over {} records",
        ctx.run_id(),
        input.record_count()
    );

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| runner(input, ctx)))
        .unwrap_or_else(|payload| Err(MigrationError::Panicked(panic_message(payload.as_ref()))));

    match outcome {
        Ok(result) => {
            info!(
                "Migration run {} finished: {} entities, {} errors, {} warnings, {} gaps",
                ctx.run_id(),
                result.report.stats.total_migrated(),
                result.report.errors.len(),
                result.report.warnings.len(),
                result.report.gaps.len()
            );
            result
        }
        Err(e) => {
            error!("Migration run {} aborted: {}", ctx.run_id(), e);
            MigrationResult::empty(MigrationReport::fatal(ctx, e))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

fn run(input: &RawInput, ctx: &MigrationContext) -> Result<MigrationResult, MigrationError> {
    let items = domain::<ItemMigrator>(&input.items, ctx)?;
    let formulas = domain::<FormulaMigrator>(&input.formulas, ctx)?;
    let animals = domain::<AnimalMigrator>(&input.animals, ctx)?;
    let waypoint_nodes = domain::<WaypointNodeMigrator>(&input.waypoint_nodes, ctx)?;
    let waypoint_routes = domain::<WaypointRouteMigrator>(&input.waypoint_routes, ctx)?;
    let collectible_entries =
        domain::<CollectibleEntryMigrator>(&input.collectible_entries, ctx)?;
    let roles = domain::<RoleMigrator>(&input.roles, ctx)?;

    let mut merger = Merger::default();
    let items = merger.absorb(items);
    let formulas = merger.absorb(formulas);
    let animals = merger.absorb(animals);
    let waypoint_nodes = merger.absorb(waypoint_nodes);
    let waypoint_routes = merger.absorb(waypoint_routes);
    let collectible_entries = merger.absorb(collectible_entries);
    let roles = merger.absorb(roles);

    let stats = MigrationStats {
        items: items.len(),
        formulas: formulas.len(),
        animals: animals.len(),
        waypoint_nodes: waypoint_nodes.len(),
        waypoint_routes: waypoint_routes.len(),
        collectible_entries: collectible_entries.len(),
        roles: roles.len(),
        ..Default::default()
    }
    .with_tally(merger.tally);

    Ok(MigrationResult {
        items,
        formulas,
        animals,
        waypoint_nodes,
        waypoint_routes,
        collectible_entries,
        roles,
        report: MigrationReport::new(ctx, stats, merger.diagnostics),
    })
}

/// Migrate one collection; an absent collection yields an empty outcome
fn domain<M: Migrator>(
    records: &Option<Vec<Value>>,
    ctx: &MigrationContext,
) -> Result<DomainOutcome<M::Entity>, MigrationError> {
    match records {
        Some(records) => migrate_domain::<M>(records, ctx),
        None => Ok(DomainOutcome::default()),
    }
}

/// Reduce step: folds domain outcomes into run-wide diagnostics and counts
#[derive(Default)]
struct Merger {
    diagnostics: Diagnostics,
    tally: ConfidenceTally,
}

impl Merger {
    fn absorb<T>(&mut self, outcome: DomainOutcome<T>) -> BTreeMap<String, T> {
        self.diagnostics.merge(outcome.diagnostics);
        self.tally.merge(outcome.tally);
        outcome.entities
    }
}

impl MigrationResult {
    /// A result with no entities
    pub fn empty(report: MigrationReport) -> Self {
        Self {
            items: BTreeMap::new(),
            formulas: BTreeMap::new(),
            animals: BTreeMap::new(),
            waypoint_nodes: BTreeMap::new(),
            waypoint_routes: BTreeMap::new(),
            collectible_entries: BTreeMap::new(),
            roles: BTreeMap::new(),
            report,
        }
    }
}
