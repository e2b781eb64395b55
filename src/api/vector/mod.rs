//
//  vector-cli
//  api/vector/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Vector Pro API endpoint wrappers and types
//!
//! Each wrapper borrows a [`VectorClient`](super::VectorClient) and maps one
//! method to one HTTP call under [`API_PREFIX`]. Wrappers only fix the path
//! template and payload shape; everything else is the client's pipeline.
//!
//! # Resources
//!
//! | Wrapper | Paths |
//! |---------|-------|
//! | [`SitesApi`] | `/sites`, `/sites/{site}` |
//! | [`EnvironmentsApi`] | `/sites/{site}/environments/{env}` |
//! | [`DeploymentsApi`] | `.../environments/{env}/deployments` |
//! | [`SslApi`] | `.../environments/{env}/ssl` |
//! | [`DatabaseApi`] | `/sites/{site}/db` |
//! | [`SecretsApi`] | `.../environments/{env}/secrets` |
//! | [`GlobalSecretsApi`] | `/secrets` |
//! | [`WebhooksApi`] | `/webhooks` |
//! | [`SshKeysApi`] | `/ssh-keys`, `/sites/{site}/ssh-keys` |
//! | [`WafApi`] | `/sites/{site}/waf` |
//! | [`EventsApi`] | `/events` |
//! | [`ApiKeysApi`] | `/api-keys` |
//! | [`PhpVersionsApi`] | `/php-versions` |
//!
//! # Notes
//!
//! - Path segments supplied by callers are percent-encoded.
//! - Entities come back as [`Resource`]s: the typed view plus the decoded
//!   JSON it was read from. Serializing a `Resource` writes that JSON back
//!   untouched, so ids stay numbers and `null` fields stay `null`.
//! - Identifiers may arrive as strings or numbers; the typed view holds both
//!   as `String`.

use serde::de::DeserializeOwned;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use url::form_urlencoded;

use super::common::{ClientError, DecodeError, PaginatedResult, TransportError};

pub mod account;
pub mod database;
pub mod deployments;
pub mod environments;
pub mod events;
pub mod secrets;
pub mod sites;
pub mod ssh_keys;
pub mod ssl;
pub mod waf;
pub mod webhooks;

pub use account::*;
pub use database::*;
pub use deployments::*;
pub use environments::*;
pub use events::*;
pub use secrets::*;
pub use sites::*;
pub use ssh_keys::*;
pub use ssl::*;
pub use waf::*;
pub use webhooks::*;

/// Root of every platform endpoint.
pub const API_PREFIX: &str = "/api/v1/vector";

/// Builds `API_PREFIX` + `/` + the encoded segments.
pub(crate) fn endpoint(segments: &[&str]) -> String {
    let mut path = String::from(API_PREFIX);
    for segment in segments {
        path.push('/');
        path.push_str(&encode_segment(segment));
    }
    path
}

/// Percent-encodes one path segment.
pub fn encode_segment(segment: &str) -> String {
    // form encoding writes spaces as '+', which is literal in a path
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Converts a decoded value into an entity.
///
/// A shape mismatch is reported as a [`DecodeError`].
pub(crate) fn typed<D: DeserializeOwned>(value: Value) -> Result<D, ClientError> {
    D::deserialize(&value).map_err(|e| DecodeError::shape(&value, e).into())
}

/// Serializes a request payload.
pub(crate) fn payload<B: Serialize + ?Sized>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body)
        .map_err(|e| {
            TransportError::InvalidRequest(format!("cannot encode request body: {e}")).into()
        })
}

/// Converts a decoded value that should be a list into entities.
///
/// Accepts both a bare array and a `{"data": [...]}` body.
pub(crate) fn typed_list<D: DeserializeOwned>(value: Value) -> Result<Vec<D>, ClientError> {
    list_items(value).into_iter().map(typed).collect()
}

fn list_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// A typed entity together with the JSON it was decoded from.
///
/// Field access goes through [`Deref`] to the typed view. [`Serialize`]
/// writes the original JSON, so output shows exactly what the API sent.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vector_cli::api::vector::{Resource, Site};
///
/// let site: Resource<Site> = Resource::from_value(json!({"id": 7, "tags": null})).unwrap();
/// assert_eq!(site.id, "7");
/// assert_eq!(serde_json::to_value(&site).unwrap(), json!({"id": 7, "tags": null}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    item: T,
    raw: Value,
}

impl<T: DeserializeOwned> Resource<T> {
    /// Reads the typed view out of `raw`, keeping `raw` alongside it.
    pub fn from_value(raw: Value) -> Result<Self, ClientError> {
        let item = typed(raw.clone())?;
        Ok(Self { item, raw })
    }
}

impl<T> Resource<T> {
    /// The decoded JSON, as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> Deref for Resource<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

impl<T> Serialize for Resource<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

pub(crate) fn resource<D: DeserializeOwned>(value: Value) -> Result<Resource<D>, ClientError> {
    Resource::from_value(value)
}

pub(crate) fn resource_page<D: DeserializeOwned>(
    page: PaginatedResult<Value>,
) -> Result<PaginatedResult<Resource<D>>, ClientError> {
    page.try_map(resource)
}

pub(crate) fn resource_list<D: DeserializeOwned>(
    value: Value,
) -> Result<Vec<Resource<D>>, ClientError> {
    list_items(value).into_iter().map(resource).collect()
}

/// Accepts `"abc"`, `12` or `-3` and yields a string.
pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}

/// Like [`de_id`] but also accepts `null` or a missing field.
pub(crate) fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "de_id")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|w| w.0))
}

/// A list of strings where `null` means empty.
pub(crate) fn de_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// PHP runtimes the platform supports.
///
/// # Example
///
/// ```rust
/// use vector_cli::api::vector::PhpVersion;
///
/// let version: PhpVersion = "8.3".parse().unwrap();
/// assert_eq!(version.as_str(), "8.3");
/// assert!("7.4".parse::<PhpVersion>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhpVersion {
    #[serde(rename = "8.1")]
    Php81,
    #[serde(rename = "8.2")]
    Php82,
    #[serde(rename = "8.3")]
    Php83,
    #[serde(rename = "8.4")]
    Php84,
}

impl PhpVersion {
    pub const ALL: [PhpVersion; 4] = [
        PhpVersion::Php81,
        PhpVersion::Php82,
        PhpVersion::Php83,
        PhpVersion::Php84,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhpVersion::Php81 => "8.1",
            PhpVersion::Php82 => "8.2",
            PhpVersion::Php83 => "8.3",
            PhpVersion::Php84 => "8.4",
        }
    }
}

impl std::fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PhpVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhpVersion::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| {
                let supported: Vec<&str> = PhpVersion::ALL.iter().map(|v| v.as_str()).collect();
                format!(
                    "unsupported PHP version '{}' (supported: {})",
                    s,
                    supported.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_encodes_segments() {
        assert_eq!(endpoint(&["sites"]), "/api/v1/vector/sites");
        assert_eq!(
            endpoint(&["sites", "a b/c", "ssh-keys"]),
            "/api/v1/vector/sites/a%20b%2Fc/ssh-keys"
        );
        assert_eq!(encode_segment("2001:db8::1"), "2001%3Adb8%3A%3A1");
    }

    #[test]
    fn test_de_id_accepts_numbers() {
        #[derive(Deserialize)]
        struct Thing {
            #[serde(deserialize_with = "de_id")]
            id: String,
        }

        let a: Thing = serde_json::from_value(json!({"id": 42})).unwrap();
        let b: Thing = serde_json::from_value(json!({"id": "site_1"})).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(b.id, "site_1");
    }

    #[test]
    fn test_optional_helpers_accept_null() {
        #[derive(Deserialize)]
        struct Thing {
            #[serde(default, deserialize_with = "de_opt_id")]
            owner: Option<String>,
            #[serde(default, deserialize_with = "de_string_list")]
            tags: Vec<String>,
        }

        let a: Thing = serde_json::from_value(json!({"owner": null, "tags": null})).unwrap();
        let b: Thing = serde_json::from_value(json!({"owner": 7, "tags": ["x"]})).unwrap();
        let c: Thing = serde_json::from_value(json!({})).unwrap();
        assert_eq!(a.owner, None);
        assert!(a.tags.is_empty());
        assert_eq!(b.owner.as_deref(), Some("7"));
        assert_eq!(b.tags, vec!["x"]);
        assert_eq!(c.owner, None);
    }

    #[test]
    fn test_typed_shape_mismatch_is_decode_error() {
        let result: Result<PhpVersion, ClientError> = typed(json!({"nope": true}));
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_resource_serializes_what_was_received() {
        let raw = json!({
            "id": 7,
            "status": null,
            "tags": null,
            "partner_customer_id": 12,
            "dev_domain": "a.test"
        });
        let site: Resource<Site> = resource(raw.clone()).unwrap();

        assert_eq!(site.id, "7");
        assert_eq!(site.partner_customer_id.as_deref(), Some("12"));
        assert!(site.tags.is_empty());
        assert_eq!(serde_json::to_value(&site).unwrap(), raw);
    }

    #[test]
    fn test_resource_list_keeps_raw_items() {
        let items: Vec<Resource<Site>> =
            resource_list(json!({"data": [{"id": 1, "status": null}]})).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].raw(), &json!({"id": 1, "status": null}));
    }

    #[test]
    fn test_typed_list_accepts_both_shapes() {
        let bare: Vec<PhpVersion> = typed_list(json!(["8.1", "8.4"])).unwrap();
        let wrapped: Vec<PhpVersion> = typed_list(json!({"data": ["8.2"]})).unwrap();
        assert_eq!(bare, vec![PhpVersion::Php81, PhpVersion::Php84]);
        assert_eq!(wrapped, vec![PhpVersion::Php82]);
    }
}
