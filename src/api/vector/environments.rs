//
//  vector-cli
//  api/vector/environments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Environment API types and operations.
//!
//! Environments are deployable copies of a site (production, staging, ...).
//! Every path is nested under `/sites/{site}/environments`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de_id, endpoint, payload, resource, resource_page, Resource};
use crate::api::common::{ClientError, PaginatedResult};
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// An environment of a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,

    #[serde(default)]
    pub is_production: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating or updating an environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnvironmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Environment kind, e.g. `staging` or `production`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub environment_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_production: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
}

/// `/sites/{site}/environments` followed by `rest`.
pub(crate) fn environment_path(site_id: &str, rest: &[&str]) -> String {
    let mut segments = vec!["sites", site_id, "environments"];
    segments.extend_from_slice(rest);
    endpoint(&segments)
}

/// Environment operations.
pub struct EnvironmentsApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> EnvironmentsApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        site_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedResult<Resource<Environment>>, ClientError> {
        let page = self
            .client
            .get_page(&environment_path(site_id, &[]), &Query::pagination(page, per_page))
            .await?;
        resource_page(page)
    }

    pub async fn get(
        &self,
        site_id: &str,
        env_id: &str,
    ) -> Result<Resource<Environment>, ClientError> {
        resource(
            self.client
                .get_resource(&environment_path(site_id, &[env_id]), &Query::new())
                .await?,
        )
    }

    pub async fn create(
        &self,
        site_id: &str,
        request: &EnvironmentRequest,
    ) -> Result<Resource<Environment>, ClientError> {
        let body = payload(request)?;
        resource(
            self.client
                .post_resource(&environment_path(site_id, &[]), Some(&body))
                .await?,
        )
    }

    pub async fn update(
        &self,
        site_id: &str,
        env_id: &str,
        request: &EnvironmentRequest,
    ) -> Result<Resource<Environment>, ClientError> {
        let body = payload(request)?;
        resource(
            self.client
                .put_resource(&environment_path(site_id, &[env_id]), Some(&body))
                .await?,
        )
    }

    pub async fn delete(&self, site_id: &str, env_id: &str) -> Result<Value, ClientError> {
        self.client
            .delete_resource(&environment_path(site_id, &[env_id]))
            .await
    }

    pub async fn suspend(&self, site_id: &str, env_id: &str) -> Result<Value, ClientError> {
        self.client
            .put_resource(&environment_path(site_id, &[env_id, "suspend"]), None)
            .await
    }

    pub async fn unsuspend(&self, site_id: &str, env_id: &str) -> Result<Value, ClientError> {
        self.client
            .put_resource(&environment_path(site_id, &[env_id, "unsuspend"]), None)
            .await
    }

    pub async fn reset_database_password(
        &self,
        site_id: &str,
        env_id: &str,
    ) -> Result<Value, ClientError> {
        self.client
            .put_resource(
                &environment_path(site_id, &[env_id, "reset-database-password"]),
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_nesting() {
        assert_eq!(
            environment_path("s1", &["e1", "suspend"]),
            "/api/v1/vector/sites/s1/environments/e1/suspend"
        );
        assert_eq!(
            environment_path("s1", &[]),
            "/api/v1/vector/sites/s1/environments"
        );
    }

    #[test]
    fn test_environment_defaults() {
        let env: Environment =
            serde_json::from_value(json!({"id": "e1", "name": "staging"})).unwrap();
        assert!(!env.is_production);
        assert_eq!(env.name.as_deref(), Some("staging"));
    }

    #[test]
    fn test_request_renames_type() {
        let request = EnvironmentRequest {
            name: Some("qa".to_string()),
            environment_type: Some("staging".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "qa", "type": "staging"})
        );
    }
}
