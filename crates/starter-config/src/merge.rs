use serde_json::{Map, Value};

/// Deep-merge `update` into `target`; objects merge key by key, everything
/// else is replaced. A `null` key in an update object keeps the target value.
pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                if value.is_null() {
                    continue;
                }
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

/// Layer caller overrides on top of `defaults`.
pub(crate) fn layered(defaults: Value, overrides: Option<&Map<String, Value>>) -> Value {
    let mut base = defaults;
    if let Some(overrides) = overrides {
        merge_values(&mut base, &Value::Object(overrides.clone()));
    }
    base
}
