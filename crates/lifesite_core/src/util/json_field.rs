//! JSON-encoded sub-field parsing.
//!
//! Several snapshots store lists as strings (`"[\"a\",\"b\"]"`). These helpers
//! decode them and fall back to empty values instead of failing the record.

use serde::de::DeserializeOwned;

/// Decodes a JSON-encoded array. Missing, blank or malformed input yields
/// an empty list.
pub fn parse_json_list<T: DeserializeOwned>(field: Option<&str>) -> Vec<T> {
    match field.map(str::trim) {
        Some(raw) if !raw.is_empty() => serde_json::from_str(raw).unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Decodes a JSON-encoded array of strings.
///
/// Non-string elements are skipped rather than discarding the whole list.
pub fn parse_json_field(field: Option<&str>) -> Vec<String> {
    parse_json_list::<serde_json::Value>(field)
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(text) => Some(text),
            _ => None,
        })
        .collect()
}

/// Decodes a JSON-encoded object, falling back to `T::default()`.
pub fn parse_json_object<T: DeserializeOwned + Default>(field: Option<&str>) -> T {
    match field.map(str::trim) {
        Some(raw) if !raw.is_empty() => serde_json::from_str(raw).unwrap_or_default(),
        _ => T::default(),
    }
}
