//! Query string encoding for option objects.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// Flattens a serializable options struct into query parameters.
///
/// Unset (`null`) fields are skipped, arrays are comma-joined and timestamps
/// keep their RFC 3339 form. Options structs mark every field with
/// `skip_serializing_if = "Option::is_none"`, so only set fields appear.
///
/// ```rust
/// use serde::Serialize;
/// use shopify_draft_orders::rest::to_query;
///
/// #[derive(Serialize)]
/// struct Options {
///     limit: Option<u32>,
///     ids: Vec<u64>,
///     status: Option<String>,
/// }
///
/// let query = to_query(&Options { limit: Some(50), ids: vec![1, 2], status: None }).unwrap();
/// assert_eq!(query.get("limit").map(String::as_str), Some("50"));
/// assert_eq!(query.get("ids").map(String::as_str), Some("1,2"));
/// assert!(!query.contains_key("status"));
/// ```
///
/// # Errors
///
/// Returns [`ResourceError::Json`] if `options` fails to serialize.
pub fn to_query<T: Serialize>(options: &T) -> Result<HashMap<String, String>, ResourceError> {
    let Value::Object(map) = serde_json::to_value(options)? else {
        return Ok(HashMap::new());
    };

    let mut query = HashMap::with_capacity(map.len());
    for (key, value) in map {
        let encoded = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter_map(scalar_to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                if joined.is_empty() {
                    continue;
                }
                joined
            }
            object @ Value::Object(_) => object.to_string(),
        };
        query.insert(key, encoded);
    }

    Ok(query)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
