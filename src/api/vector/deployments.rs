//
//  vector-cli
//  api/vector/deployments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deployment API types and operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::environments::environment_path;
use super::{de_id, resource, resource_page, Resource};
use crate::api::common::{ClientError, PaginatedResult};
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// One deployment of an environment.
///
/// `status` moves through values such as `pending`, `running`, `completed`
/// and `failed`; the set is owned by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Deployment operations for one environment.
pub struct DeploymentsApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> DeploymentsApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        site_id: &str,
        env_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedResult<Resource<Deployment>>, ClientError> {
        let path = environment_path(site_id, &[env_id, "deployments"]);
        let page = self
            .client
            .get_page(&path, &Query::pagination(page, per_page))
            .await?;
        resource_page(page)
    }

    pub async fn get(
        &self,
        site_id: &str,
        env_id: &str,
        deployment_id: &str,
    ) -> Result<Resource<Deployment>, ClientError> {
        let path = environment_path(site_id, &[env_id, "deployments", deployment_id]);
        resource(self.client.get_resource(&path, &Query::new()).await?)
    }

    /// Starts a deployment of the environment's current branch. No body is
    /// sent.
    pub async fn create(
        &self,
        site_id: &str,
        env_id: &str,
    ) -> Result<Resource<Deployment>, ClientError> {
        let path = environment_path(site_id, &[env_id, "deployments"]);
        resource(self.client.post_resource(&path, None).await?)
    }

    /// Rolls the environment back to an earlier deployment.
    pub async fn rollback(
        &self,
        site_id: &str,
        env_id: &str,
        deployment_id: &str,
    ) -> Result<Resource<Deployment>, ClientError> {
        let path = environment_path(site_id, &[env_id, "deployments", deployment_id, "rollback"]);
        resource(self.client.post_resource(&path, None).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deployment_parses_minimal() {
        let d: Deployment =
            serde_json::from_value(json!({"id": 9, "commit_sha": "abc123"})).unwrap();
        assert_eq!(d.id, "9");
        assert!(d.status.is_none());
        assert_eq!(d.extra["commit_sha"], json!("abc123"));
    }

    #[test]
    fn test_deployment_requires_id() {
        assert!(serde_json::from_value::<Deployment>(json!({"status": "running"})).is_err());
    }
}
