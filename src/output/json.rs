//
//  vector-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output helpers.
//!
//! Machine-readable output always has the same outer shape:
//!
//! ```json
//! {
//!   "data": ...,
//!   "meta": { ... }
//! }
//! ```
//!
//! `meta` only appears for paginated lists.

use serde::Serialize;
use serde_json::{Map, Value};

/// Wraps `data` (and optionally `meta`) in the output envelope.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vector_cli::output::envelope;
///
/// assert_eq!(envelope(json!([1]), None), json!({"data": [1]}));
/// assert_eq!(
///     envelope(json!([]), Some(json!({"total": 0}))),
///     json!({"data": [], "meta": {"total": 0}})
/// );
/// ```
pub fn envelope(data: Value, meta: Option<Value>) -> Value {
    let mut map = Map::new();
    map.insert("data".to_string(), data);
    if let Some(meta) = meta {
        map.insert("meta".to_string(), meta);
    }
    Value::Object(map)
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_keeps_slashes() {
        let out = to_pretty_json(&envelope(json!({"url": "https://x.test/a"}), None)).unwrap();

        assert!(out.contains("https://x.test/a"));
        assert!(out.contains("  \"data\""));
    }
}
