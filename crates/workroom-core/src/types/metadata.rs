//! Folder metadata sanitization.
//!
//! Folder metadata is an open key-value map supplied by clients. Each entry
//! is serialized on its own before being stored; entries that fail (for
//! example pathological nesting past the serializer's recursion limit) or
//! that hold `null` are dropped rather than failing the whole request.

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::result::AppResult;

/// Sanitize a client-supplied metadata value.
///
/// Returns `Ok(None)` when no metadata was supplied, `Ok(Some(object))`
/// with the surviving entries otherwise. A non-object value (other than
/// `null`) is a validation error.
pub fn sanitize_metadata(value: Option<&Value>) -> AppResult<Option<Value>> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };

    let entries = value
        .as_object()
        .ok_or_else(|| AppError::validation("Folder metadata must be a JSON object"))?;

    let mut kept = Map::with_capacity(entries.len());
    for (key, entry) in entries {
        if entry.is_null() {
            continue;
        }
        match serde_json::to_string(entry) {
            Ok(_) => {
                kept.insert(key.clone(), entry.clone());
            }
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "Dropping non-serializable metadata entry");
            }
        }
    }

    Ok(Some(Value::Object(kept)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_metadata_is_none() {
        assert_eq!(sanitize_metadata(None).expect("ok"), None);
        assert_eq!(sanitize_metadata(Some(&Value::Null)).expect("ok"), None);
    }

    #[test]
    fn test_object_entries_survive() {
        let input = json!({"client": "studio", "revision": 3, "flags": ["a", "b"]});
        let out = sanitize_metadata(Some(&input)).expect("ok").expect("some");
        assert_eq!(out, input);
    }

    #[test]
    fn test_null_entries_dropped() {
        let input = json!({"keep": 1, "drop": null});
        let out = sanitize_metadata(Some(&input)).expect("ok").expect("some");
        assert_eq!(out, json!({"keep": 1}));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(sanitize_metadata(Some(&json!("just a string"))).is_err());
        assert!(sanitize_metadata(Some(&json!([1, 2, 3]))).is_err());
    }

    #[test]
    fn test_empty_object_kept_empty() {
        let out = sanitize_metadata(Some(&json!({}))).expect("ok").expect("some");
        assert_eq!(out, json!({}));
    }
}
