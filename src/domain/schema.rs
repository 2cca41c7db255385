//! Schema-tolerant field resolution shared by every model constructor.
//!
//! The server emits fields under snake_case or camelCase keys depending on the
//! API version that produced the response. Every lookup therefore takes an
//! ordered key list and resolves the first non-null hit: snake_case first,
//! camelCase second, then the typed default. The same order applies to every
//! model; endpoints differ in which convention they emit, not in precedence.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::domain::Metadata;

/// First non-null value among `keys`, in order. A JSON `null` under an earlier
/// key falls through to the later key rather than shadowing it.
pub(crate) fn field<'a>(raw: &'a Metadata, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| raw.get(*key).filter(|v| !v.is_null()))
}

pub(crate) fn str_field(raw: &Metadata, keys: &[&str]) -> Option<String> {
    field(raw, keys).and_then(Value::as_str).map(ToOwned::to_owned)
}

pub(crate) fn bool_field(raw: &Metadata, keys: &[&str], default: bool) -> bool {
    field(raw, keys).and_then(Value::as_bool).unwrap_or(default)
}

/// Integer lookup with coercion: accepts JSON numbers (floats truncate) and
/// numeric strings. Anything else resolves to `default`.
pub(crate) fn i64_field(raw: &Metadata, keys: &[&str], default: i64) -> i64 {
    match field(raw, keys) {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .unwrap_or(default),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(default),
        _ => default,
    }
}

pub(crate) fn opt_i64_field(raw: &Metadata, keys: &[&str]) -> Option<i64> {
    field(raw, keys).map(|_| i64_field(raw, keys, 0))
}

pub(crate) fn f64_field(raw: &Metadata, keys: &[&str], default: f64) -> f64 {
    match field(raw, keys) {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(default),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(default),
        _ => default,
    }
}

pub(crate) fn map_field(raw: &Metadata, keys: &[&str]) -> Metadata {
    field(raw, keys)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

pub(crate) fn opt_map_field(raw: &Metadata, keys: &[&str]) -> Option<Metadata> {
    field(raw, keys).and_then(Value::as_object).cloned()
}

/// List of strings, defaulting to empty; non-string entries are skipped.
pub(crate) fn str_list_field(raw: &Metadata, keys: &[&str]) -> Vec<String> {
    field(raw, keys)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(ToOwned::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// Raw array access for nested object lists. Absence stays `None`, which
/// distinguishes "field omitted by server" from "present but empty".
pub(crate) fn array_field<'a>(raw: &'a Metadata, keys: &[&str]) -> Option<&'a Vec<Value>> {
    field(raw, keys).and_then(Value::as_array)
}

pub(crate) fn value_list_field(raw: &Metadata, keys: &[&str]) -> Vec<Value> {
    field(raw, keys)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Lenient timestamp lookup: any parse failure resolves to `None` so a
/// malformed timestamp never aborts decoding of an otherwise-valid record.
pub(crate) fn timestamp_field(raw: &Metadata, keys: &[&str]) -> Option<DateTime<Utc>> {
    str_field(raw, keys)
        .as_deref()
        .and_then(parse_timestamp)
}

pub(crate) fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Naive forms are taken as UTC.
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Drop null entries from a fully-built output mapping. Serializers insert the
/// complete key set first (absent fields as `null`) and compact as a distinct
/// final step, so the populated-keys-only contract lives in one place.
pub(crate) fn compact(full: Map<String, Value>) -> Value {
    Value::Object(full.into_iter().filter(|(_, v)| !v.is_null()).collect())
}

pub(crate) fn put_str(out: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    out.insert(
        key.to_owned(),
        value.clone().map(Value::String).unwrap_or(Value::Null),
    );
}

pub(crate) fn put_bool(out: &mut Map<String, Value>, key: &str, value: bool) {
    out.insert(key.to_owned(), Value::Bool(value));
}

pub(crate) fn put_i64(out: &mut Map<String, Value>, key: &str, value: i64) {
    out.insert(key.to_owned(), Value::from(value));
}

pub(crate) fn put_opt_i64(out: &mut Map<String, Value>, key: &str, value: Option<i64>) {
    out.insert(key.to_owned(), value.map(Value::from).unwrap_or(Value::Null));
}

pub(crate) fn put_f64(out: &mut Map<String, Value>, key: &str, value: f64) {
    out.insert(
        key.to_owned(),
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    );
}

pub(crate) fn put_map(out: &mut Map<String, Value>, key: &str, value: &Metadata) {
    out.insert(key.to_owned(), Value::Object(value.clone()));
}

pub(crate) fn put_opt_map(out: &mut Map<String, Value>, key: &str, value: &Option<Metadata>) {
    out.insert(
        key.to_owned(),
        value.clone().map(Value::Object).unwrap_or(Value::Null),
    );
}

pub(crate) fn put_str_list(out: &mut Map<String, Value>, key: &str, value: &[String]) {
    out.insert(
        key.to_owned(),
        Value::Array(value.iter().cloned().map(Value::String).collect()),
    );
}

pub(crate) fn put_timestamp(out: &mut Map<String, Value>, key: &str, value: &Option<DateTime<Utc>>) {
    out.insert(
        key.to_owned(),
        value
            .as_ref()
            .map(|ts| Value::String(format_timestamp(ts)))
            .unwrap_or(Value::Null),
    );
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn obj(value: Value) -> Metadata {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn snake_case_wins_over_camel_case() {
        let raw = obj(json!({"created_at": "snake", "createdAt": "camel"}));
        assert_eq!(str_field(&raw, &["created_at", "createdAt"]).as_deref(), Some("snake"));
    }

    #[test]
    fn camel_case_is_used_when_snake_case_is_absent_or_null() {
        let raw = obj(json!({"createdAt": "camel"}));
        assert_eq!(str_field(&raw, &["created_at", "createdAt"]).as_deref(), Some("camel"));

        let raw = obj(json!({"created_at": null, "createdAt": "camel"}));
        assert_eq!(str_field(&raw, &["created_at", "createdAt"]).as_deref(), Some("camel"));
    }

    #[test]
    fn numeric_fields_coerce_strings_and_floats() {
        let raw = obj(json!({"count": "42"}));
        assert_eq!(i64_field(&raw, &["count"], 0), 42);

        let raw = obj(json!({"count": 41.7}));
        assert_eq!(i64_field(&raw, &["count"], 0), 41);

        let raw = obj(json!({"count": "not-a-number"}));
        assert_eq!(i64_field(&raw, &["count"], 7), 7);

        let raw = obj(json!({"credits": "1.5"}));
        assert!((f64_field(&raw, &["credits"], 0.0) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn timestamps_parse_leniently() {
        assert!(parse_timestamp("2024-01-15T10:30:00Z").is_some());
        assert!(parse_timestamp("2024-01-15T10:30:00+03:00").is_some());
        assert!(parse_timestamp("2024-01-15T10:30:00.250").is_some());
        assert!(parse_timestamp("2024-01-15 10:30:00").is_some());
        assert!(parse_timestamp("2024-01-15").is_some());
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn malformed_timestamp_field_resolves_to_none() {
        let raw = obj(json!({"created_at": "not-a-date"}));
        assert_eq!(timestamp_field(&raw, &["created_at", "createdAt"]), None);

        let raw = obj(json!({"created_at": 12345}));
        assert_eq!(timestamp_field(&raw, &["created_at", "createdAt"]), None);
    }

    #[test]
    fn timestamp_formats_as_rfc3339_z() {
        let parsed = parse_timestamp("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-01-15T10:30:00Z");

        let offset = parse_timestamp("2024-01-15T10:30:00+03:00").unwrap();
        assert_eq!(format_timestamp(&offset), "2024-01-15T07:30:00Z");
    }

    #[test]
    fn map_and_list_fields_default_to_empty() {
        let raw = obj(json!({}));
        assert!(map_field(&raw, &["metadata"]).is_empty());
        assert!(str_list_field(&raw, &["variables"]).is_empty());
        assert!(value_list_field(&raw, &["errors"]).is_empty());
        assert!(array_field(&raw, &["contacts"]).is_none());
    }

    #[test]
    fn array_field_preserves_present_but_empty() {
        let raw = obj(json!({"contacts": []}));
        assert_eq!(array_field(&raw, &["contacts"]).map(Vec::len), Some(0));
    }

    #[test]
    fn compact_drops_only_nulls() {
        let mut full = Map::new();
        put_str(&mut full, "id", &Some("c1".to_owned()));
        put_str(&mut full, "name", &None);
        put_bool(&mut full, "opted_out", false);
        put_map(&mut full, "metadata", &Metadata::new());

        let compacted = compact(full);
        let compacted = compacted.as_object().unwrap();
        assert_eq!(
            compacted.keys().collect::<Vec<_>>(),
            vec!["id", "metadata", "opted_out"]
        );
    }
}
