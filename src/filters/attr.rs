//! Attribute filters: set, concatenate and select by attribute.

use serde_json::{Map, Value};

use super::{FilterError, type_name};
use crate::log;

/// Copy of `obj` with `key` set to `value`.
///
/// Anything that is not an object is treated as an empty object.
pub fn attr_set(obj: &Value, key: &str, value: Value) -> Value {
    let mut map = as_map(obj);
    map.insert(key.to_owned(), value);
    Value::Object(map)
}

/// Copy of `obj` with `values` appended to the `attr` array, without duplicates.
///
/// `values` may be an array, a string holding a JSON array (`"[1, 2]"`), or
/// a single value. Strings that do not parse as a JSON array are appended
/// as one value.
pub fn attr_concat(obj: &Value, attr: &str, values: Value) -> Value {
    let mut map = as_map(obj);

    let existing = match map.remove(attr) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            log!("error"; "attr_concat: expected `{attr}` to be an array, got {}", type_name(&other));
            Vec::new()
        }
    };

    let mut combined: Vec<Value> = Vec::with_capacity(existing.len());
    for item in existing.into_iter().chain(values_to_add(values)) {
        if !combined.contains(&item) {
            combined.push(item);
        }
    }

    map.insert(attr.to_owned(), Value::Array(combined));
    Value::Object(map)
}

fn values_to_add(values: Value) -> Vec<Value> {
    match values {
        Value::Array(items) => items,
        Value::String(s) if s.len() >= 2 && s.starts_with('[') && s.ends_with(']') => {
            match serde_json::from_str::<Value>(&s) {
                Ok(Value::Array(items)) => items,
                _ => vec![Value::String(s)],
            }
        }
        other => vec![other],
    }
}

/// Items whose `path` attribute is an array containing `target`.
///
/// `path` may be dotted (`data.tags`). Items whose attribute is not an
/// array are skipped.
pub fn attr_includes(collection: &Value, path: &str, target: &Value) -> Result<Vec<Value>, FilterError> {
    let Value::Array(items) = collection else {
        return Err(FilterError::NotACollection {
            filter: "attr_includes",
            found: type_name(collection),
        });
    };

    Ok(items
        .iter()
        .filter(|item| {
            matches!(resolve_path(item, path), Some(Value::Array(values)) if values.contains(target))
        })
        .cloned()
        .collect())
}

/// Items whose `path` attribute equals `target`, or is an array containing it.
///
/// Anything that is not an array yields an empty result.
pub fn where_in(collection: &Value, path: &str, target: &Value) -> Vec<Value> {
    let Value::Array(items) = collection else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| match resolve_path(item, path) {
            None | Some(Value::Null) => false,
            Some(Value::Array(values)) => values.contains(target),
            Some(value) => value == target,
        })
        .cloned()
        .collect()
}

/// Follow a dotted attribute path (`data.meta.status`).
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| current.get(segment))
}

fn as_map(obj: &Value) -> Map<String, Value> {
    match obj {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    }
}
