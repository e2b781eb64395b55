//
//  vector-cli
//  api/vector/secrets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Secret API types and operations.
//!
//! Secrets exist at two scopes: per environment, nested under the
//! environment path, and account-wide under `/secrets`. Values are write
//! only; the API never returns them.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::environments::environment_path;
use super::{de_id, endpoint, resource, resource_list, resource_page, Resource};
use crate::api::common::{ClientError, PaginatedResult};
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// A named secret. The value itself is never part of the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Environment-scoped secrets.
pub struct SecretsApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> SecretsApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    /// All secrets of an environment. This endpoint is not paginated.
    pub async fn list(
        &self,
        site_id: &str,
        env_id: &str,
    ) -> Result<Vec<Resource<Secret>>, ClientError> {
        let path = environment_path(site_id, &[env_id, "secrets"]);
        resource_list(self.client.get(&path, &Query::new()).await?)
    }

    pub async fn get(
        &self,
        site_id: &str,
        env_id: &str,
        secret_id: &str,
    ) -> Result<Resource<Secret>, ClientError> {
        let path = environment_path(site_id, &[env_id, "secrets", secret_id]);
        resource(self.client.get_resource(&path, &Query::new()).await?)
    }

    pub async fn create(
        &self,
        site_id: &str,
        env_id: &str,
        name: &str,
        value: &str,
    ) -> Result<Resource<Secret>, ClientError> {
        let path = environment_path(site_id, &[env_id, "secrets"]);
        let body = json!({ "name": name, "value": value });
        resource(self.client.post_resource(&path, Some(&body)).await?)
    }

    pub async fn update(
        &self,
        site_id: &str,
        env_id: &str,
        secret_id: &str,
        value: &str,
    ) -> Result<Resource<Secret>, ClientError> {
        let path = environment_path(site_id, &[env_id, "secrets", secret_id]);
        let body = json!({ "value": value });
        resource(self.client.put_resource(&path, Some(&body)).await?)
    }

    pub async fn delete(
        &self,
        site_id: &str,
        env_id: &str,
        secret_id: &str,
    ) -> Result<Value, ClientError> {
        let path = environment_path(site_id, &[env_id, "secrets", secret_id]);
        self.client.delete_resource(&path).await
    }
}

/// Account-wide secrets.
pub struct GlobalSecretsApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> GlobalSecretsApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedResult<Resource<Secret>>, ClientError> {
        let page = self
            .client
            .get_page(&endpoint(&["secrets"]), &Query::pagination(page, per_page))
            .await?;
        resource_page(page)
    }

    pub async fn create(&self, name: &str, value: &str) -> Result<Resource<Secret>, ClientError> {
        let body = json!({ "name": name, "value": value });
        resource(self.client.post_resource(&endpoint(&["secrets"]), Some(&body)).await?)
    }

    pub async fn get(&self, secret_id: &str) -> Result<Resource<Secret>, ClientError> {
        resource(
            self.client
                .get_resource(&endpoint(&["secrets", secret_id]), &Query::new())
                .await?,
        )
    }

    pub async fn update(
        &self,
        secret_id: &str,
        value: &str,
    ) -> Result<Resource<Secret>, ClientError> {
        let body = json!({ "value": value });
        resource(
            self.client
                .put_resource(&endpoint(&["secrets", secret_id]), Some(&body))
                .await?,
        )
    }

    pub async fn delete(&self, secret_id: &str) -> Result<Value, ClientError> {
        self.client
            .delete_resource(&endpoint(&["secrets", secret_id]))
            .await
    }
}
