//
//  vector-cli
//  api/vector/ssh_keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! SSH key API types and operations.
//!
//! Keys are registered on the account, then attached to individual sites.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{de_id, endpoint, resource, resource_list, resource_page, Resource};
use crate::api::common::{ClientError, PaginatedResult};
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SshKey {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct SshKeysApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> SshKeysApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedResult<Resource<SshKey>>, ClientError> {
        let page = self
            .client
            .get_page(&endpoint(&["ssh-keys"]), &Query::pagination(page, per_page))
            .await?;
        resource_page(page)
    }

    pub async fn get(&self, key_id: &str) -> Result<Resource<SshKey>, ClientError> {
        resource(
            self.client
                .get_resource(&endpoint(&["ssh-keys", key_id]), &Query::new())
                .await?,
        )
    }

    /// Registers a public key on the account.
    pub async fn create(
        &self,
        name: &str,
        public_key: &str,
    ) -> Result<Resource<SshKey>, ClientError> {
        let body = json!({ "name": name, "public_key": public_key.trim() });
        resource(self.client.post_resource(&endpoint(&["ssh-keys"]), Some(&body)).await?)
    }

    pub async fn delete(&self, key_id: &str) -> Result<Value, ClientError> {
        self.client
            .delete_resource(&endpoint(&["ssh-keys", key_id]))
            .await
    }

    /// Keys attached to a site. Not paginated.
    pub async fn list_for_site(&self, site_id: &str) -> Result<Vec<Resource<SshKey>>, ClientError> {
        resource_list(
            self.client
                .get(&endpoint(&["sites", site_id, "ssh-keys"]), &Query::new())
                .await?,
        )
    }

    pub async fn attach(&self, site_id: &str, key_id: &str) -> Result<Value, ClientError> {
        self.client
            .post_resource(&endpoint(&["sites", site_id, "ssh-keys", key_id]), None)
            .await
    }

    pub async fn detach(&self, site_id: &str, key_id: &str) -> Result<Value, ClientError> {
        self.client
            .delete_resource(&endpoint(&["sites", site_id, "ssh-keys", key_id]))
            .await
    }
}
