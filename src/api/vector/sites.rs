//
//  vector-cli
//  api/vector/sites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site API types and operations.
//!
//! A site is the top-level hosting unit. Environments, WAF rules, SSH key
//! attachments and databases all hang off a site.
//!
//! # Example
//!
//! ```rust,no_run
//! use vector_cli::api::{ClientConfig, VectorClient};
//! use vector_cli::api::vector::SiteRequest;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = VectorClient::with_default_transport(ClientConfig::new("key"))?;
//!
//! let request = SiteRequest {
//!     name: Some("Blog".to_string()),
//!     domain: Some("blog.example.com".to_string()),
//!     ..Default::default()
//! };
//! let site = client.sites().create(&request).await?;
//! println!("created {}", site.id);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de_id, de_opt_id, de_string_list, endpoint, payload, resource, resource_page, Resource};
use crate::api::common::{ClientError, PaginatedResult};
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// A hosted site.
///
/// # Fields
///
/// * `id` - Platform identifier
/// * `partner_customer_id` - Reseller-side customer reference
/// * `dev_php_version` - PHP runtime of the development environment
/// * `tags` - Free-form labels
/// * `status` - Provisioning state, e.g. `active` or `suspended`
/// * `extra` - Fields not modelled here, such as `dev_domain`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, deserialize_with = "de_opt_id", skip_serializing_if = "Option::is_none")]
    pub partner_customer_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_php_version: Option<String>,

    #[serde(default, deserialize_with = "de_string_list")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating or updating a site.
///
/// Unset fields are left out of the request, so the same type serves partial
/// updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_repository: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_php_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Options for fetching site logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Log kind, e.g. `error` or `access`.
    pub log_type: Option<String>,

    /// Number of trailing lines.
    pub lines: Option<u64>,
}

impl LogOptions {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(log_type) = &self.log_type {
            query.push("type", log_type.as_str());
        }
        if let Some(lines) = self.lines {
            query.push("lines", lines);
        }
        query
    }
}

/// Site operations.
pub struct SitesApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> SitesApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    /// Lists sites one page at a time.
    ///
    /// # Parameters
    ///
    /// * `page` - 1-based page number
    /// * `per_page` - Page size
    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedResult<Resource<Site>>, ClientError> {
        let page = self
            .client
            .get_page(&endpoint(&["sites"]), &Query::pagination(page, per_page))
            .await?;
        resource_page(page)
    }

    pub async fn get(&self, site_id: &str) -> Result<Resource<Site>, ClientError> {
        resource(
            self.client
                .get_resource(&endpoint(&["sites", site_id]), &Query::new())
                .await?,
        )
    }

    pub async fn create(&self, request: &SiteRequest) -> Result<Resource<Site>, ClientError> {
        let body = payload(request)?;
        resource(self.client.post_resource(&endpoint(&["sites"]), Some(&body)).await?)
    }

    pub async fn update(
        &self,
        site_id: &str,
        request: &SiteRequest,
    ) -> Result<Resource<Site>, ClientError> {
        let body = payload(request)?;
        resource(
            self.client
                .put_resource(&endpoint(&["sites", site_id]), Some(&body))
                .await?,
        )
    }

    /// Deletes a site and returns whatever the API reports.
    pub async fn delete(&self, site_id: &str) -> Result<Value, ClientError> {
        self.client.delete_resource(&endpoint(&["sites", site_id])).await
    }

    /// Clones a site, optionally under another customer.
    pub async fn clone_site(
        &self,
        site_id: &str,
        partner_customer_id: Option<&str>,
    ) -> Result<Resource<Site>, ClientError> {
        let body = partner_customer_id.map(|id| serde_json::json!({ "partner_customer_id": id }));
        resource(
            self.client
                .post_resource(&endpoint(&["sites", site_id, "clone"]), body.as_ref())
                .await?,
        )
    }

    pub async fn suspend(&self, site_id: &str) -> Result<Value, ClientError> {
        self.client
            .put_resource(&endpoint(&["sites", site_id, "suspend"]), None)
            .await
    }

    pub async fn unsuspend(&self, site_id: &str) -> Result<Value, ClientError> {
        self.client
            .put_resource(&endpoint(&["sites", site_id, "unsuspend"]), None)
            .await
    }

    /// Rotates the SFTP password. The result usually carries the new one.
    pub async fn reset_sftp_password(&self, site_id: &str) -> Result<Value, ClientError> {
        self.client
            .put_resource(&endpoint(&["sites", site_id, "reset-sftp-password"]), None)
            .await
    }

    /// Rotates the database password. The result usually carries the new one.
    pub async fn reset_database_password(&self, site_id: &str) -> Result<Value, ClientError> {
        self.client
            .put_resource(&endpoint(&["sites", site_id, "reset-database-password"]), None)
            .await
    }

    /// Purges the CDN cache, everything when `paths` is empty.
    pub async fn purge_cache(&self, site_id: &str, paths: &[String]) -> Result<Value, ClientError> {
        let body = (!paths.is_empty()).then(|| serde_json::json!({ "paths": paths }));
        self.client
            .post_resource(&endpoint(&["sites", site_id, "purge-cache"]), body.as_ref())
            .await
    }

    pub async fn logs(&self, site_id: &str, options: &LogOptions) -> Result<Value, ClientError> {
        self.client
            .get_resource(&endpoint(&["sites", site_id, "logs"]), &options.to_query())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_site_keeps_unknown_fields() {
        let site: Site = serde_json::from_value(json!({
            "id": 12,
            "dev_domain": "blog.vector.dev",
            "status": "active",
            "tags": null
        }))
        .unwrap();

        assert_eq!(site.id, "12");
        assert_eq!(site.status.as_deref(), Some("active"));
        assert!(site.tags.is_empty());
        assert_eq!(site.extra.get("dev_domain"), Some(&json!("blog.vector.dev")));

        let back = serde_json::to_value(&site).unwrap();
        assert_eq!(back["dev_domain"], json!("blog.vector.dev"));
    }

    #[test]
    fn test_site_request_omits_unset_fields() {
        let request = SiteRequest {
            name: Some("Blog".to_string()),
            git_branch: Some("main".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Blog", "git_branch": "main"})
        );
        assert_eq!(serde_json::to_value(SiteRequest::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_log_options_query() {
        let options = LogOptions {
            log_type: Some("error".to_string()),
            lines: Some(50),
        };
        assert_eq!(options.to_query().to_query_string(), "type=error&lines=50");
        assert!(LogOptions::default().to_query().is_empty());
    }
}
