//
//  vector-cli
//  api/vector/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account-level resources: the account summary, API keys and the PHP
//! version catalogue.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de_id, endpoint, payload, resource, resource_page, typed_list, Resource};
use crate::api::common::{ClientError, PaginatedResult};
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// An API key. `token` is only present in the response to
/// [`ApiKeysApi::create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiKeyRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

pub struct AccountApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> AccountApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    /// Plan, usage and owner details of the authenticated account.
    ///
    /// The shape depends on the plan, so the body is returned as decoded.
    pub async fn summary(&self) -> Result<Value, ClientError> {
        self.client
            .get_resource(&endpoint(&["account"]), &Query::new())
            .await
    }
}

pub struct ApiKeysApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> ApiKeysApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedResult<Resource<ApiKey>>, ClientError> {
        let page = self
            .client
            .get_page(&endpoint(&["api-keys"]), &Query::pagination(page, per_page))
            .await?;
        resource_page(page)
    }

    pub async fn create(&self, request: &ApiKeyRequest) -> Result<Resource<ApiKey>, ClientError> {
        let body = payload(request)?;
        resource(self.client.post_resource(&endpoint(&["api-keys"]), Some(&body)).await?)
    }

    pub async fn delete(&self, key_id: &str) -> Result<Value, ClientError> {
        self.client
            .delete_resource(&endpoint(&["api-keys", key_id]))
            .await
    }
}

pub struct PhpVersionsApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> PhpVersionsApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    /// Versions currently offered for new sites and environments.
    ///
    /// Entries may be plain strings or objects with a `version` field; both
    /// are reduced to the version string.
    pub async fn list(&self) -> Result<Vec<String>, ClientError> {
        let items: Vec<Value> = typed_list(
            self.client
                .get(&endpoint(&["php-versions"]), &Query::new())
                .await?,
        )?;
        Ok(items.into_iter().filter_map(version_string).collect())
    }
}

fn version_string(item: Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("version")
            .or_else(|| map.get("value"))
            .and_then(|v| v.as_str())
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_string_shapes() {
        assert_eq!(version_string(json!("8.3")), Some("8.3".to_string()));
        assert_eq!(version_string(json!({"version": "8.2"})), Some("8.2".to_string()));
        assert_eq!(version_string(json!(null)), None);
    }

    #[test]
    fn test_api_key_request_omits_empty_scopes() {
        let request = ApiKeyRequest {
            name: "ci".to_string(),
            scopes: vec![],
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"name": "ci"}));
    }
}
