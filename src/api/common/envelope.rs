//
//  vector-cli
//  api/common/envelope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Success envelope shapes
//!
//! Most endpoints wrap their payload as `{"data": ..., "meta"?: ...}`, a few
//! return the resource bare. [`Envelope`] names the two cases explicitly so the
//! difference stays visible to callers and tests.

use serde_json::Value;

/// The shape of a successful, decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// An object carrying a `data` key, with optional `meta`.
    Wrapped { data: Value, meta: Option<Value> },

    /// Anything else: the body is the resource itself.
    Bare(Value),
}

impl Envelope {
    /// Classifies a decoded body.
    ///
    /// Only a JSON object with a `data` key counts as wrapped. A `data` key
    /// holding `null` is still wrapped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vector_cli::api::common::Envelope;
    ///
    /// let wrapped = Envelope::from_value(json!({"data": {"id": "1"}}));
    /// assert!(wrapped.is_wrapped());
    /// assert_eq!(wrapped.into_data(), json!({"id": "1"}));
    ///
    /// let bare = Envelope::from_value(json!({"id": "1"}));
    /// assert!(!bare.is_wrapped());
    /// assert_eq!(bare.into_data(), json!({"id": "1"}));
    /// ```
    pub fn from_value(body: Value) -> Self {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) => Envelope::Wrapped {
                    data,
                    meta: map.remove("meta"),
                },
                None => Envelope::Bare(Value::Object(map)),
            },
            other => Envelope::Bare(other),
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, Envelope::Wrapped { .. })
    }

    /// The payload: `data` when wrapped, the whole body otherwise.
    pub fn data(&self) -> &Value {
        match self {
            Envelope::Wrapped { data, .. } => data,
            Envelope::Bare(body) => body,
        }
    }

    /// Pagination or other metadata, only present on wrapped bodies.
    pub fn meta(&self) -> Option<&Value> {
        match self {
            Envelope::Wrapped { meta, .. } => meta.as_ref(),
            Envelope::Bare(_) => None,
        }
    }

    /// Consumes the envelope and returns the payload.
    pub fn into_data(self) -> Value {
        match self {
            Envelope::Wrapped { data, .. } => data,
            Envelope::Bare(body) => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_data_is_still_wrapped() {
        let envelope = Envelope::from_value(json!({"data": null}));
        assert!(envelope.is_wrapped());
        assert_eq!(envelope.into_data(), Value::Null);
    }

    #[test]
    fn test_meta_is_split_out() {
        let envelope = Envelope::from_value(json!({"data": [], "meta": {"total": 0}}));
        assert_eq!(envelope.meta(), Some(&json!({"total": 0})));
    }

    #[test]
    fn test_non_object_bodies_are_bare() {
        let envelope = Envelope::from_value(json!([1, 2]));
        assert!(!envelope.is_wrapped());
        assert_eq!(envelope.data(), &json!([1, 2]));
        assert_eq!(envelope.meta(), None);
    }

    #[test]
    fn test_empty_object_is_bare() {
        let envelope = Envelope::from_value(json!({}));
        assert_eq!(envelope.into_data(), json!({}));
    }
}
