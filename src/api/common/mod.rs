//
//  vector-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error taxonomy and error classification for the platform API
//!
//! Every pipeline call fails with exactly one of three distinguishable kinds:
//!
//! | Type | Raised when | Exit code |
//! |------|-------------|-----------|
//! | [`TransportError`] | The request never produced an HTTP response | 5 |
//! | [`DecodeError`] | The response body is not valid JSON | 1 |
//! | [`ApiError`] | The status is outside `200..300` | by status |
//!
//! [`ClientError`] wraps the three so callers can use `?` while still matching
//! on the kind.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use vector_cli::api::common::classify;
//!
//! let body = json!({"message": "Validation failed", "errors": {"name": ["required"]}});
//! let err = classify(422, &body).unwrap_err();
//!
//! assert!(err.is_validation_error());
//! assert_eq!(err.first_error(), Some("required"));
//! ```
//!
//! # Notes
//!
//! - Classification is a pure function of `(status, body)`.
//! - Errors are never mutated after construction.

use serde_json::Value;
use thiserror::Error;

mod envelope;
mod pagination;

pub use envelope::*;
pub use pagination::*;

use crate::exit_codes;

/// Message used when an error body has no string `message`.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Network-level failure: no HTTP response was received.
///
/// Never converted into a synthetic status code.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connecting, sending or reading the response failed.
    #[error("Connection failed: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport's configured timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be constructed by the transport (bad URL, bad header).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// The response body could not be parsed into the expected shape.
///
/// Carries the raw body for diagnostics.
#[derive(Error, Debug)]
#[error("Invalid JSON response from API")]
pub struct DecodeError {
    status_code: Option<u16>,
    raw_body: String,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    /// Creates a decode error for a body received with `status_code`.
    pub fn new(status_code: u16, raw_body: impl Into<String>, source: serde_json::Error) -> Self {
        Self {
            status_code: Some(status_code),
            raw_body: raw_body.into(),
            source,
        }
    }

    /// Creates a decode error for a decoded value that did not match the
    /// expected entity shape.
    pub fn shape(value: &Value, source: serde_json::Error) -> Self {
        Self {
            status_code: None,
            raw_body: value.to_string(),
            source,
        }
    }

    /// Status of the response, when the failure happened while decoding one.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// The body that failed to decode.
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    /// Parser message describing the failure.
    pub fn reason(&self) -> String {
        self.source.to_string()
    }
}

/// Field-level validation messages, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    /// Normalizes an `errors` value.
    ///
    /// - A string becomes a one-element list.
    /// - A list keeps its elements in order; non-string scalars are rendered
    ///   as JSON text.
    /// - Any other shape is dropped.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(Value::Object(map)) = value else {
            return Self::default();
        };

        let fields = map
            .iter()
            .filter_map(|(field, messages)| {
                let messages = match messages {
                    Value::String(s) => vec![s.clone()],
                    Value::Array(items) => items
                        .iter()
                        .map(|item| match item {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect(),
                    _ => return None,
                };
                Some((field.clone(), messages))
            })
            .collect();

        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates `(field, messages)` in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(f, m)| (f.as_str(), m.as_slice()))
    }

    /// Messages for `field`, empty when the field has none.
    pub fn get(&self, field: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_slice())
            .unwrap_or(&[])
    }

    /// First message of the first field that has any.
    pub fn first(&self) -> Option<&str> {
        self.fields
            .iter()
            .find_map(|(_, messages)| messages.first())
            .map(String::as_str)
    }
}

/// A well-formed error response from the API.
///
/// Built by [`classify`] when the status is outside `200..300`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vector_cli::api::common::ApiError;
///
/// let err = ApiError::from_response(404, &json!({"message": "Site not found"}));
/// assert_eq!(err.message(), "Site not found");
/// assert!(err.is_not_found_error());
/// assert!(!err.is_server_error());
/// ```
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ApiError {
    status_code: u16,
    message: String,
    validation_errors: ValidationErrors,
    body: Value,
}

impl ApiError {
    /// Builds an error from a status and a decoded error envelope.
    pub fn from_response(status_code: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string();

        Self {
            status_code,
            message,
            validation_errors: ValidationErrors::from_value(body.get("errors")),
            body: body.clone(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The full decoded error body.
    pub fn response_body(&self) -> &Value {
        &self.body
    }

    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    /// Messages reported for `field`.
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.validation_errors.get(field)
    }

    /// `true` when `field` has at least one message.
    pub fn has_error_for(&self, field: &str) -> bool {
        !self.errors_for(field).is_empty()
    }

    /// First message across all fields, in server order.
    pub fn first_error(&self) -> Option<&str> {
        self.validation_errors.first()
    }

    /// 401 Unauthorized.
    pub fn is_authentication_error(&self) -> bool {
        self.status_code == 401
    }

    /// 403 Forbidden.
    pub fn is_authorization_error(&self) -> bool {
        self.status_code == 403
    }

    /// 404 Not Found.
    pub fn is_not_found_error(&self) -> bool {
        self.status_code == 404
    }

    /// 422 Unprocessable Entity.
    pub fn is_validation_error(&self) -> bool {
        self.status_code == 422
    }

    /// Any status in `500..=599`.
    pub fn is_server_error(&self) -> bool {
        (500..=599).contains(&self.status_code)
    }
}

/// Decides whether `(status, body)` is a success.
///
/// Success is a status in `200..300`. Anything else becomes an [`ApiError`].
pub fn classify(status: u16, body: &Value) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::from_response(status, body))
    }
}

/// Error returned by every pipeline call.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ClientError {
    /// HTTP status, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api(e) => Some(e.status_code()),
            ClientError::Decode(e) => e.status_code(),
            ClientError::Transport(_) => None,
        }
    }

    /// Returns the API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Api(e) => exit_codes::for_status(e.status_code()),
            ClientError::Transport(_) => exit_codes::NETWORK_ERROR,
            ClientError::Decode(_) => exit_codes::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_success_band() {
        assert!(classify(200, &json!({})).is_ok());
        assert!(classify(204, &json!({})).is_ok());
        assert!(classify(299, &json!({})).is_ok());
        assert!(classify(300, &json!({})).is_err());
        assert!(classify(199, &json!({})).is_err());
    }

    #[test]
    fn test_message_fallback() {
        let err = classify(400, &json!({})).unwrap_err();
        assert_eq!(err.message(), DEFAULT_ERROR_MESSAGE);

        let err = classify(400, &json!({"message": 42})).unwrap_err();
        assert_eq!(err.message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_validation_normalization() {
        let body = json!({
            "message": "Invalid",
            "errors": {
                "name": "required",
                "tags": ["too many", 3],
                "nested": {"a": "b"},
                "empty": []
            }
        });
        let err = ApiError::from_response(422, &body);

        assert_eq!(err.errors_for("name"), ["required".to_string()]);
        assert_eq!(err.errors_for("tags"), ["too many".to_string(), "3".to_string()]);
        assert!(err.errors_for("nested").is_empty());
        assert!(!err.has_error_for("nested"));
        assert!(!err.has_error_for("empty"));
        assert_eq!(err.validation_errors().len(), 3);
    }

    #[test]
    fn test_first_error_skips_empty_fields() {
        let body = json!({"errors": {"a": [], "b": ["second"], "c": ["third"]}});
        let err = ApiError::from_response(422, &body);
        assert_eq!(err.first_error(), Some("second"));
    }

    #[test]
    fn test_first_error_none_without_errors() {
        let err = ApiError::from_response(422, &json!({"errors": "nope"}));
        assert_eq!(err.first_error(), None);
        assert!(err.validation_errors().is_empty());
    }

    #[test]
    fn test_predicates_are_exclusive() {
        let cases = [401u16, 403, 404, 422, 500];
        for status in cases {
            let err = ApiError::from_response(status, &json!({"message": "X"}));
            let flags = [
                err.is_authentication_error(),
                err.is_authorization_error(),
                err.is_not_found_error(),
                err.is_validation_error(),
                err.is_server_error(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "status {status}");
        }
    }

    #[test]
    fn test_server_error_range() {
        assert!(ApiError::from_response(599, &json!({})).is_server_error());
        assert!(!ApiError::from_response(600, &json!({})).is_server_error());
        assert!(!ApiError::from_response(499, &json!({})).is_server_error());
    }

    #[test]
    fn test_client_error_exit_codes() {
        let api = |s| ClientError::Api(ApiError::from_response(s, &json!({})));
        assert_eq!(api(401).exit_code(), exit_codes::AUTH_ERROR);
        assert_eq!(api(403).exit_code(), exit_codes::AUTH_ERROR);
        assert_eq!(api(404).exit_code(), exit_codes::NOT_FOUND);
        assert_eq!(api(422).exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(api(503).exit_code(), exit_codes::NETWORK_ERROR);
        assert_eq!(api(409).exit_code(), exit_codes::ERROR);
        assert_eq!(
            ClientError::Transport(TransportError::Timeout).exit_code(),
            exit_codes::NETWORK_ERROR
        );
    }
}
