//! Merging user-supplied field collections into request bodies

use serde_json::{Map, Value};

/// Copy `fields` into `body`, overwriting same-named keys only.
///
/// `customProperties: { property: [{name, value}] }` is flattened into
/// `body[name] = value`.
pub fn add_additional_fields(body: &mut Map<String, Value>, fields: &Map<String, Value>) {
    for (key, value) in fields {
        if key == "customProperties" {
            if let Some(Value::Array(properties)) = value.get("property") {
                for property in properties {
                    if let Some(name) = property.get("name").and_then(Value::as_str) {
                        let value = property.get("value").cloned().unwrap_or(Value::Null);
                        body.insert(name.to_string(), value);
                    }
                }
                continue;
            }
        }
        body.insert(key.clone(), value.clone());
    }
}

/// E-commerce customers take the marketing flag as `"1"` / `"0"`
pub fn coerce_accepts_marketing(fields: &mut Map<String, Value>) {
    if let Some(flag) = fields.get_mut("acceptsMarketing") {
        let coerced = if *flag == Value::Bool(true) { "1" } else { "0" };
        *flag = Value::String(coerced.to_string());
    }
}
