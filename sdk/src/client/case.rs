//! Response key normalization.
//!
//! PostGrid mixes snake_case and camelCase keys in its payloads. Every
//! response is rewritten so that the typed records only ever see camelCase.

use serde_json::{Map, Value};

/// Recursively rewrites object keys to camelCase.
///
/// Only keys containing `_` or `-` are touched, so keys that are already
/// camelCase (including acronyms such as `uploadedPDF`) pass through as is.
#[must_use]
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camelize(&key), camelize_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}

/// Converts a single snake_case or kebab-case key to camelCase.
#[must_use]
pub fn camelize(key: &str) -> String {
    if !key.contains(['_', '-']) {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    for word in key.split(['_', '-']).filter(|w| !w.is_empty()) {
        // all-caps words are shouted, not acronyms inside a camelCase word
        let word = if word.chars().all(|c| !c.is_lowercase()) {
            word.to_lowercase()
        } else {
            word.to_string()
        };

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if out.is_empty() {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }

    if out.is_empty() {
        key.to_string()
    } else {
        out
    }
}
