use serde_json::{Map, Value};

/// Shallow-merge objects; later values override earlier ones.
///
/// A null `first` counts as `{}`. Any other non-object `first` yields `{}`,
/// and non-object items in `rest` are ignored.
pub fn merge(first: &Value, rest: &[Value]) -> Value {
    let mut merged = match first {
        Value::Null => Map::new(),
        Value::Object(map) => map.clone(),
        _ => return Value::Object(Map::new()),
    };

    for item in rest {
        if let Value::Object(map) = item {
            merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }

    Value::Object(merged)
}
