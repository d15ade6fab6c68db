//! Loose field access over legacy JSON records
//!
//! Upstream extraction gives no format guarantees, so every accessor treats a
//! value of the wrong type as absent instead of failing.

use serde_json::Value;

/// Maximum characters of a record shown in a diagnostic
pub const PREVIEW_LEN: usize = 80;

/// Floats that convert to `i64` without saturating
const I64_RANGE: std::ops::Range<f64> = i64::MIN as f64..i64::MAX as f64;

/// A single untyped legacy record
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    value: &'a Value,
}

impl<'a> RawRecord<'a> {
    /// Wrap a raw JSON value
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Get a raw field by name (None if the record is not an object)
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.as_object()?.get(key)
    }

    /// Get the first present field among `keys`
    fn first(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter().find_map(|key| self.get(key).filter(|v| !v.is_null()))
    }

    /// Trimmed, non-empty string field
    pub fn text(&self, keys: &[&str]) -> Option<&'a str> {
        self.first(keys)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Identifying field: a trimmed, non-empty string or a number
    ///
    /// Numbers are rendered in their canonical JSON form, so `42` and `"42"`
    /// name the same record.
    pub fn key(&self, keys: &[&str]) -> Option<String> {
        match self.first(keys)? {
            Value::String(s) => Some(s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Numeric field; numeric strings are accepted
    pub fn number(&self, keys: &[&str]) -> Option<f64> {
        let number = match self.first(keys)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        number.filter(|n| n.is_finite())
    }

    /// Integer field; whole floats and integer strings are accepted
    pub fn integer(&self, keys: &[&str]) -> Option<i64> {
        match self.first(keys)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && I64_RANGE.contains(f))
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Boolean field
    pub fn flag(&self, keys: &[&str]) -> Option<bool> {
        self.first(keys).and_then(Value::as_bool)
    }

    /// List of non-empty strings; non-string elements are skipped
    pub fn list(&self, keys: &[&str]) -> Option<Vec<String>> {
        let array = self.first(keys)?.as_array()?;
        Some(
            array
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Compact JSON of the record, truncated for diagnostics
    pub fn preview(&self) -> String {
        let compact = self.value.to_string();
        if compact.chars().count() <= PREVIEW_LEN {
            return compact;
        }
        let truncated: String = compact.chars().take(PREVIEW_LEN).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_trims_and_rejects_blank() {
        let value = json!({"name": "  Copper Ore ", "blank": "   ", "num": 3});
        let record = RawRecord::new(&value);

        assert_eq!(record.text(&["name"]), Some("Copper Ore"));
        assert_eq!(record.text(&["blank"]), None);
        assert_eq!(record.text(&["num"]), None);
        assert_eq!(record.text(&["missing"]), None);
    }

    #[test]
    fn test_first_present_key_wins() {
        let value = json!({"systemTag": "trade", "system": null});
        let record = RawRecord::new(&value);
        assert_eq!(record.text(&["system", "systemTag"]), Some("trade"));
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let value = json!({"a": 12.5, "b": " 40 ", "c": "lots", "d": true});
        let record = RawRecord::new(&value);

        assert_eq!(record.number(&["a"]), Some(12.5));
        assert_eq!(record.number(&["b"]), Some(40.0));
        assert_eq!(record.number(&["c"]), None);
        assert_eq!(record.number(&["d"]), None);
    }

    #[test]
    fn test_integer_accepts_whole_floats_only() {
        let value = json!({"a": 5, "b": 5.0, "c": 5.5, "d": "7"});
        let record = RawRecord::new(&value);

        assert_eq!(record.integer(&["a"]), Some(5));
        assert_eq!(record.integer(&["b"]), Some(5));
        assert_eq!(record.integer(&["c"]), None);
        assert_eq!(record.integer(&["d"]), Some(7));
    }

    #[test]
    fn test_integer_rejects_out_of_range_floats() {
        let value = json!({"huge": 1e30, "tiny": -1e30, "edge": 9.2e18});
        let record = RawRecord::new(&value);

        assert_eq!(record.integer(&["huge"]), None);
        assert_eq!(record.integer(&["tiny"]), None);
        assert_eq!(record.integer(&["edge"]), Some(9_200_000_000_000_000_000));
    }

    #[test]
    fn test_key_accepts_numbers() {
        let value = json!({"id": 42, "ratio": 1.5, "name": " Answer ", "blank": "", "flag": true});
        let record = RawRecord::new(&value);

        assert_eq!(record.key(&["id"]).as_deref(), Some("42"));
        assert_eq!(record.key(&["ratio"]).as_deref(), Some("1.5"));
        assert_eq!(record.key(&["name"]).as_deref(), Some("Answer"));
        assert_eq!(record.key(&["blank"]), None);
        assert_eq!(record.key(&["flag"]), None);
        assert_eq!(record.key(&["missing"]), None);
    }

    #[test]
    fn test_list_skips_non_strings() {
        let value = json!({"tags": ["ore", 3, "", "metal"], "bad": "ore"});
        let record = RawRecord::new(&value);

        assert_eq!(
            record.list(&["tags"]),
            Some(vec!["ore".to_string(), "metal".to_string()])
        );
        assert_eq!(record.list(&["bad"]), None);
    }

    #[test]
    fn test_non_object_record_has_no_fields() {
        let value = json!("just a string");
        let record = RawRecord::new(&value);
        assert!(record.get("id").is_none());
        assert_eq!(record.preview(), "\"just a string\"");
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(200);
        let value = json!({ "notes": long });
        let preview = RawRecord::new(&value).preview();

        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_LEN + 3);
    }
}
