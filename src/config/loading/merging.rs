use toml::{Value, map::Map};

/// Folds imported files into one table, later imports winning over earlier
/// ones and `main` winning over all of them.
pub(super) fn merge_toml_configs(imports: Vec<Value>, main: Value) -> Value {
    imports
        .into_iter()
        .chain([main])
        .fold(Value::Table(Map::new()), deep_merge)
}

/// Tables merge key by key; any other overlay value replaces the base.
fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Table(base), Value::Table(mut merged)) => {
            for (key, base_value) in base {
                let value = match merged.remove(&key) {
                    Some(overlay_value) => deep_merge(base_value, overlay_value),
                    None => base_value,
                };
                merged.insert(key, value);
            }

            Value::Table(merged)
        }
        (_, overlay) => overlay,
    }
}
