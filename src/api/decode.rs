//
//  vector-cli
//  api/decode.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response Decoder
//!
//! An empty body decodes to `{}` whatever the status. Everything else must be
//! valid JSON or the call fails with [`DecodeError`]; there is no partial
//! result.

use serde_json::{Map, Value};

use super::common::DecodeError;

/// Decodes a raw response body.
///
/// # Parameters
///
/// * `status` - HTTP status the body arrived with, kept for diagnostics
/// * `raw` - Body text exactly as received
///
/// # Returns
///
/// `{}` for an empty body, the parsed value otherwise.
///
/// # Errors
///
/// Returns [`DecodeError`] carrying `raw` when the body is not JSON.
/// Whitespace-only bodies are not considered empty.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vector_cli::api::decode::decode_body;
///
/// assert_eq!(decode_body(204, "").unwrap(), json!({}));
/// assert_eq!(decode_body(200, r#"{"ok":true}"#).unwrap(), json!({"ok": true}));
/// assert!(decode_body(200, "not valid json").is_err());
/// ```
pub fn decode_body(status: u16, raw: &str) -> Result<Value, DecodeError> {
    if raw.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(raw).map_err(|e| DecodeError::new(status, raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(decode_body(200, "").unwrap(), json!({}));
        assert_eq!(decode_body(204, "").unwrap(), json!({}));
        assert_eq!(decode_body(500, "").unwrap(), json!({}));
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert!(decode_body(200, "   ").is_err());
    }

    #[test]
    fn test_decode_error_keeps_raw_body() {
        let err = decode_body(200, "not valid json").unwrap_err();
        assert_eq!(err.raw_body(), "not valid json");
        assert_eq!(err.status_code(), Some(200));
        assert!(!err.reason().is_empty());
    }

    #[test]
    fn test_non_object_json_is_accepted() {
        assert_eq!(decode_body(200, "[1,2]").unwrap(), json!([1, 2]));
    }
}
