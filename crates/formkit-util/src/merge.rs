//! # Object Merge
//!
//! Shallow union of JSON objects. Keys from later objects replace keys from
//! earlier ones; nested objects are replaced whole, not merged.

use serde_json::{Map, Value};

use formkit_core::{json_type_name, MergeError};

/// Merge objects left to right into a new object.
pub fn merge_objects<'a, I>(objects: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    let mut merged = Map::new();
    for object in objects {
        for (key, value) in object {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Merge JSON values left to right, skipping `null` entries.
///
/// # Errors
///
/// Returns [`MergeError::NotAnObject`] for the first entry that is neither
/// an object nor `null`.
pub fn merge_values(values: &[Value]) -> Result<Map<String, Value>, MergeError> {
    let mut objects = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        match value {
            Value::Object(map) => objects.push(map),
            Value::Null => {}
            other => {
                return Err(MergeError::NotAnObject {
                    index,
                    found: json_type_name(other),
                })
            }
        }
    }
    Ok(merge_objects(objects))
}
