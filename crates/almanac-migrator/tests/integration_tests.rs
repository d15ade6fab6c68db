//! Integration tests for almanac-migrator
//!
//! These tests drive full runs through the public API.

use almanac_domain::{Confidence, SourceKind};
use almanac_migrator::{migrate_at, summarize, MigrationResult, MigrationStats, RawInput};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn run(value: Value) -> MigrationResult {
    let input: RawInput = serde_json::from_value(value).unwrap();
    migrate_at(&input, now())
}

fn source(kind: &str) -> Value {
    json!({"kind": kind, "date": "2025-05-20"})
}

#[test]
fn test_missing_identity_is_error_on_load_bearing_domains() {
    let cases = [
        ("items", json!({"name": "Egg"}), "Item"),
        ("formulas", json!({"id": "sell-price"}), "Formula"),
        ("animals", json!({"id": "cow"}), "Animal"),
        ("collectibleEntries", json!({"id": "shell-1"}), "CollectibleEntry"),
        ("roles", json!({"name": "Rancher"}), "Role"),
    ];

    for (collection, record, label) in cases {
        let result = run(json!({ collection: [record] }));

        assert!(!result.report.success, "{} should fail the run", collection);
        assert_eq!(result.report.errors.len(), 1);
        assert!(
            result.report.errors[0].starts_with(&format!("{} missing required fields", label)),
            "unexpected message: {}",
            result.report.errors[0]
        );
        assert_eq!(result.report.stats.total_migrated(), 0);
    }
}

#[test]
fn test_missing_identity_is_warning_on_waypoints() {
    let result = run(json!({
        "waypointNodes": [{"id": "well"}],
        "waypointRoutes": [{"toId": "town"}]
    }));

    assert!(result.report.success);
    assert!(result.report.errors.is_empty());
    assert_eq!(result.report.warnings.len(), 2);
    assert!(result.report.warnings[0].starts_with("WaypointNode missing required fields (id, name)"));
    assert!(result.report.warnings[1].starts_with("WaypointRoute missing required fields (fromId, toId)"));
}

#[test]
fn test_error_preview_is_truncated() {
    let long_name = "x".repeat(200);
    let result = run(json!({"items": [{"name": long_name}]}));

    let message = &result.report.errors[0];
    assert!(message.ends_with("..."));
    assert!(message.len() < 200);
}

#[test]
fn test_high_confidence_item() {
    let result = run(json!({
        "items": [{
            "id": "truffle",
            "name": "Truffle",
            "sellPrice": 625,
            "sources": [source("in_game_verified"), source("wiki"), source("video")]
        }]
    }));

    let item = &result.items["truffle"];
    assert_eq!(item.attribution.confidence(), Confidence::High);
    assert_eq!(item.sell_price.confidence(), Confidence::High);
    assert_eq!(item.attribution.sources().len(), 3);
    assert_eq!(result.report.stats.high_confidence_count, 1);
    assert_eq!(result.report.stats.medium_confidence_count, 0);
    assert_eq!(result.report.stats.low_confidence_count, 0);
    assert!(result.report.gaps.is_empty());
}

#[test]
fn test_zero_source_item_is_gap() {
    let result = run(json!({"items": [{"id": "pebble", "name": "Pebble"}]}));

    assert!(result.report.success);
    assert_eq!(result.items["pebble"].attribution.confidence(), Confidence::Low);
    assert_eq!(result.report.stats.low_confidence_count, 1);
    assert_eq!(result.report.gaps.len(), 1);
    assert!(result.report.gaps[0].contains("pebble"));
    assert!(result.report.gaps[0].contains("Pebble"));
}

#[test]
fn test_invalid_sources_warn_and_proceed() {
    let result = run(json!({
        "animals": [{
            "id": "goat",
            "name": "Goat",
            "sources": [{"kind": "rumour", "date": "2025-01-01"}, {"kind": "wiki", "date": "Jan 1"}]
        }]
    }));

    assert!(result.report.success);
    assert_eq!(result.animals.len(), 1);
    assert_eq!(
        result.report.warnings,
        vec!["Animal goat: invalid source references, proceeding with none"]
    );
    assert!(result.animals["goat"].attribution.sources().is_empty());
    assert_eq!(result.report.gaps.len(), 1);
}

#[test]
fn test_partially_valid_sources_keep_survivors() {
    let result = run(json!({
        "roles": [{
            "id": "forager",
            "name": "Forager",
            "sources": [source("wiki"), {"kind": "wiki"}, source("map_data"), source("forum_post")]
        }]
    }));

    let role = &result.roles["forager"];
    assert!(result.report.warnings.is_empty());
    assert_eq!(role.attribution.sources().len(), 3);
    assert_eq!(role.attribution.confidence(), Confidence::Medium);
    assert_eq!(role.attribution.sources()[1].kind, SourceKind::MapData);
}

#[test]
fn test_defaults_are_filled() {
    let result = run(json!({
        "items": [{"id": "egg", "name": "Egg"}],
        "animals": [{"id": "cow", "name": "Cow"}],
        "waypointRoutes": [{"fromId": "farm", "toId": "town"}]
    }));

    let item = &result.items["egg"];
    assert_eq!(item.category, "misc");
    assert_eq!(item.stack_size, 1);
    assert_eq!(item.patch_version, "UNKNOWN");
    assert_eq!(item.attribution.last_verified(), "2025-06-01");

    let animal = &result.animals["cow"];
    assert_eq!(*animal.base_health.value(), 100.0);
    assert!(!animal.tameable);

    let route = &result.waypoint_routes["farm->town"];
    assert!(route.bidirectional);
    assert_eq!(route.from_id, "farm");
}

#[test]
fn test_numeric_identity_fields() {
    let result = run(json!({
        "items": [{"id": 42, "name": "Answer"}],
        "roles": [{"id": "r1", "name": 7}]
    }));

    assert!(result.report.success);
    assert!(result.report.errors.is_empty());
    assert_eq!(result.items["42"].id, "42");
    assert_eq!(result.items["42"].name, "Answer");
    assert_eq!(result.roles["r1"].name, "7");
}

#[test]
fn test_patch_and_deprecation_on_every_domain() {
    let result = run(json!({
        "formulas": [{"id": "sell", "system": "economy", "patchVersion": "1.6"}],
        "waypointNodes": [{"id": "farm", "name": "Farm", "deprecationWarning": "merged into ranch"}],
        "collectibleEntries": [{"id": "s1", "collectionSetId": "shells"}],
        "roles": [{"id": "r1", "name": "Rancher", "patchVersion": "1.5"}]
    }));

    assert_eq!(result.formulas["sell"].patch_version, "1.6");
    assert_eq!(result.waypoint_nodes["farm"].patch_version, "UNKNOWN");
    assert_eq!(
        result.waypoint_nodes["farm"].deprecation_warning.as_deref(),
        Some("merged into ranch")
    );
    assert_eq!(result.collectible_entries["s1"].patch_version, "UNKNOWN");
    assert_eq!(result.roles["r1"].patch_version, "1.5");
    assert!(result.roles["r1"].deprecation_warning.is_none());
}

#[test]
fn test_last_verified_kept_when_well_formed() {
    let result = run(json!({
        "collectibleEntries": [
            {"id": "s1", "collectionSetId": "shells", "lastVerified": "2024-08-14"},
            {"id": "s2", "collectionSetId": "shells", "lastVerified": "14/08/2024"}
        ]
    }));

    assert_eq!(result.collectible_entries["s1"].attribution.last_verified(), "2024-08-14");
    assert_eq!(result.collectible_entries["s2"].attribution.last_verified(), "2025-06-01");
}

#[test]
fn test_rerun_is_identical_apart_from_run_metadata() {
    let input = json!({
        "items": [{"id": "egg", "name": "Egg", "sources": [source("wiki")]}],
        "formulas": [{"id": "f", "systemTag": "shipping", "expression": "base * 1.25"}],
        "waypointNodes": [{"id": "farm", "name": "Farm", "x": 12, "y": -3}],
        "roles": [{"name": "nobody"}]
    });

    let first = run(input.clone());
    let second = run(input);

    assert_eq!(first.items, second.items);
    assert_eq!(first.formulas, second.formulas);
    assert_eq!(first.waypoint_nodes, second.waypoint_nodes);
    assert_eq!(first.roles, second.roles);
    assert_eq!(first.report.stats, second.report.stats);
    assert_eq!(first.report.errors, second.report.errors);
    assert_eq!(first.report.warnings, second.report.warnings);
    assert_eq!(first.report.gaps, second.report.gaps);
    assert_eq!(first.report.summary, second.report.summary);
    assert_eq!(first.report.timestamp, second.report.timestamp);
    assert_ne!(first.report.run_id, second.report.run_id);
}

#[test]
fn test_summary_reports_total() {
    let result = run(json!({
        "items": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
        "roles": [{"id": "r", "name": "R"}]
    }));

    assert!(result.report.summary.starts_with("Migrated 3 entities (items: 2,"));
    assert!(result.report.summary.contains("Gaps: 3 record(s) need verification"));

    let stats: MigrationStats = result.report.stats;
    let again = summarize(
        &stats,
        &result.report.errors,
        &result.report.warnings,
        &result.report.gaps,
    );
    assert_eq!(again, result.report.summary);
}

#[test]
fn test_result_serializes_camel_case() {
    let result = run(json!({
        "items": [{"id": "egg", "name": "Egg", "sources": [source("in_game_verified")]}]
    }));

    let json: Value = serde_json::from_str(&result.to_json(false).unwrap()).unwrap();
    let item = &json["items"]["egg"];

    assert_eq!(item["confidence"], "MEDIUM");
    assert_eq!(item["lastVerified"], "2025-06-01");
    assert_eq!(item["sources"][0]["kind"], "in_game_verified");
    assert_eq!(item["sellPrice"]["patchVersion"], "UNKNOWN");
    assert_eq!(json["report"]["stats"]["mediumConfidenceCount"], 1);
    assert!(json["report"]["runId"].is_string());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const KINDS: [&str; 8] = [
        "in_game_verified",
        "wiki",
        "video",
        "map_data",
        "derived",
        "community_consensus",
        "forum_post",
        "calculated",
    ];

    fn record_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0..KINDS.len(), 0..6)
    }

    fn items(records: &[Vec<usize>]) -> Value {
        let items: Vec<Value> = records
            .iter()
            .enumerate()
            .map(|(i, kinds)| {
                let sources: Vec<Value> = kinds.iter().map(|k| source(KINDS[*k])).collect();
                json!({"id": format!("item-{}", i), "name": format!("Item {}", i), "sources": sources})
            })
            .collect();
        json!({ "items": items })
    }

    proptest! {
        #[test]
        fn record_order_does_not_matter(records in prop::collection::vec(record_strategy(), 0..12)) {
            let forward = run(items(&records));

            let mut reversed_items = items(&records);
            if let Some(list) = reversed_items["items"].as_array_mut() {
                list.reverse();
            }
            let reversed = run(reversed_items);

            prop_assert_eq!(&forward.items, &reversed.items);
            prop_assert_eq!(forward.report.stats, reversed.report.stats);
        }

        #[test]
        fn counters_cover_every_record(records in prop::collection::vec(record_strategy(), 0..12)) {
            let result = run(items(&records));
            let stats = result.report.stats;

            prop_assert_eq!(stats.items, records.len());
            prop_assert_eq!(
                stats.high_confidence_count + stats.medium_confidence_count + stats.low_confidence_count,
                records.len()
            );
            prop_assert_eq!(result.report.gaps.len(), stats.low_confidence_count);
            prop_assert!(result.report.success);
        }

        #[test]
        fn rerun_is_stable(records in prop::collection::vec(record_strategy(), 0..8)) {
            let first = run(items(&records));
            let second = run(items(&records));

            prop_assert_eq!(&first.items, &second.items);
            prop_assert_eq!(&first.report.summary, &second.report.summary);
        }
    }
}
