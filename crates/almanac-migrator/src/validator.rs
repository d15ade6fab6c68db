//! Source reference validation
//!
//! A raw provenance entry is either a well-formed [`SourceReference`] or it is
//! dropped. Nothing is partially trusted.

use almanac_domain::{SourceKind, SourceReference};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Check whether a string has the `YYYY-MM-DD` shape
///
/// Only the shape is checked, not the calendar.
pub fn is_iso_date(s: &str) -> bool {
    ISO_DATE.is_match(s)
}

/// Check a single raw provenance entry
///
/// Accepts only objects whose `kind` is a known [`SourceKind`] and whose
/// `date` has the `YYYY-MM-DD` shape.
pub fn validate(raw: &Value) -> bool {
    parse_source(raw).is_some()
}

/// Parse a raw provenance entry, or `None` if it is not a valid reference
pub fn parse_source(raw: &Value) -> Option<SourceReference> {
    let obj = raw.as_object()?;

    let kind = obj
        .get("kind")
        .and_then(Value::as_str)
        .and_then(SourceKind::parse)?;

    let date = obj
        .get("date")
        .and_then(Value::as_str)
        .filter(|d| is_iso_date(d))?;

    let optional = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

    Some(SourceReference {
        kind,
        date: date.to_string(),
        url: optional("url"),
        verified_by: optional("verifiedBy"),
        notes: optional("notes"),
    })
}

/// Outcome of sanitizing a record's `sources` field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SanitizedSources {
    /// Entries that passed validation, in input order
    pub sources: Vec<SourceReference>,

    /// Number of raw entries that were offered
    pub offered: usize,
}

impl SanitizedSources {
    /// Number of entries that were dropped
    pub fn dropped(&self) -> usize {
        self.offered - self.sources.len()
    }

    /// True when entries were offered but none survived
    pub fn all_rejected(&self) -> bool {
        self.offered > 0 && self.sources.is_empty()
    }
}

/// Keep only the valid entries of a raw `sources` field
///
/// An absent or null field offers nothing. A field that is present but not an
/// array counts as a single invalid entry.
pub fn sanitize_sources(raw: Option<&Value>) -> SanitizedSources {
    match raw {
        None | Some(Value::Null) => SanitizedSources::default(),
        Some(Value::Array(entries)) => SanitizedSources {
            sources: entries.iter().filter_map(parse_source).collect(),
            offered: entries.len(),
        },
        Some(_) => SanitizedSources {
            sources: Vec::new(),
            offered: 1,
        },
    }
}
