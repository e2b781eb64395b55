//
//  vector-cli
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Builder
//!
//! Turns `(method, path, query, body)` plus the configured base URL and API key
//! into a fully addressed, fully headered [`ApiRequest`] that a
//! [`Transport`](super::transport::Transport) can send as-is.
//!
//! ## Rules
//!
//! - The path is joined to the base URL with exactly one separator trimmed from
//!   each side. Nothing else is normalized.
//! - Query parameters are only serialized for `GET`, in insertion order.
//! - A body is only attached for non-`GET` methods, and only when it is not
//!   `null` or empty. An empty body means *no payload at all*, not `""`.
//! - Every request carries exactly three headers: `Authorization`, `Accept`
//!   and `Content-Type`.
//!
//! ## Example
//!
//! ```rust
//! use vector_cli::api::request::{Method, Query, RequestBuilder};
//!
//! let builder = RequestBuilder::new("https://api.builtfast.com/", "secret");
//! let query = Query::new().with("a", 1).with("b", 2);
//! let request = builder.build(Method::Get, "/api/v1/vector/sites", &query, None);
//!
//! assert_eq!(request.url(), "https://api.builtfast.com/api/v1/vector/sites?a=1&b=2");
//! assert!(request.body().is_none());
//! ```

use std::fmt;

use serde_json::Value;
use url::form_urlencoded;

/// Name of the bearer token header.
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Name of the accepted media type header.
pub const HEADER_ACCEPT: &str = "Accept";

/// Name of the payload media type header.
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Media type used for both `Accept` and `Content-Type`.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// HTTP verbs supported by the platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the upper-case verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A scalar query string value.
///
/// Booleans are rendered as `1` and `0`, matching the form encoding the
/// platform expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
}

impl QueryValue {
    /// Renders the value as it appears in the query string, before encoding.
    pub fn render(&self) -> String {
        match self {
            QueryValue::Str(s) => s.clone(),
            QueryValue::Int(n) => n.to_string(),
            QueryValue::UInt(n) => n.to_string(),
            QueryValue::Bool(true) => "1".to_string(),
            QueryValue::Bool(false) => "0".to_string(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::UInt(u64::from(value))
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::UInt(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

/// Insertion-ordered query parameters.
///
/// Order is significant: the wire query string lists keys in the order they
/// were added, never sorted. Adding a key twice appends a second pair.
///
/// # Example
///
/// ```rust
/// use vector_cli::api::request::Query;
///
/// let query = Query::new().with("page", 2u64).with("per_page", 50u64);
/// assert_eq!(query.to_query_string(), "page=2&per_page=50");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, QueryValue)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard `page` / `per_page` pair used by every list endpoint.
    pub fn pagination(page: u64, per_page: u64) -> Self {
        Self::new().with("page", page).with("per_page", per_page)
    }

    /// Appends a pair and returns the query, for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a pair in place.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Form-url-encodes the pairs in insertion order, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, &value.render());
        }
        serializer.finish()
    }
}

/// A request ready to hand to a transport.
///
/// Immutable once built: there are accessors and no setters. The `Debug`
/// output redacts the bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    url: String,
    headers: [(&'static str, String); 3],
    body: Option<String>,
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        self.method
    }

    /// Fully addressed URL including any query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The three headers, in the order Authorization, Accept, Content-Type.
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The serialized JSON payload, or `None` when no payload is attached.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if *name == HEADER_AUTHORIZATION {
                    (*name, "Bearer [redacted]")
                } else {
                    (*name, value.as_str())
                }
            })
            .collect();

        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Builds [`ApiRequest`]s against a fixed base URL and API key.
///
/// The builder holds no mutable state and can be shared freely across tasks.
#[derive(Clone)]
pub struct RequestBuilder {
    base_url: String,
    api_key: String,
}

impl RequestBuilder {
    /// Creates a builder for the given base URL and bearer token.
    ///
    /// # Parameters
    ///
    /// * `base_url` - API root, with or without a trailing slash
    /// * `api_key` - Token sent as `Authorization: Bearer <api_key>`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request.
    ///
    /// # Parameters
    ///
    /// * `method` - HTTP verb
    /// * `path` - Path relative to the base URL
    /// * `query` - Query parameters, only used for `GET`
    /// * `body` - JSON payload, only used for non-`GET` methods
    ///
    /// # Notes
    ///
    /// - A query passed with a non-`GET` method is ignored.
    /// - `null`, `{}` and `[]` bodies are treated as "no body" and no payload
    ///   is attached.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> ApiRequest {
        let mut url = join_url(&self.base_url, path);

        if method == Method::Get && !query.is_empty() {
            url.push('?');
            url.push_str(&query.to_query_string());
        }

        let body = match (method, body) {
            (Method::Get, _) => None,
            (_, Some(value)) if !is_empty_body(value) => Some(value.to_string()),
            _ => None,
        };

        ApiRequest {
            method,
            url,
            headers: [
                (HEADER_AUTHORIZATION, format!("Bearer {}", self.api_key)),
                (HEADER_ACCEPT, JSON_MEDIA_TYPE.to_string()),
                (HEADER_CONTENT_TYPE, JSON_MEDIA_TYPE.to_string()),
            ],
            body,
        }
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

/// Joins a base URL and a path with a single `/`.
///
/// Exactly one trailing `/` is trimmed from `base` and exactly one leading
/// `/` from `path`.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{base}/{path}")
}

fn is_empty_body(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
