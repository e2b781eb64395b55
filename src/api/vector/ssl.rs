//
//  vector-cli
//  api/vector/ssl.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! SSL certificate status for an environment.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::environments::environment_path;
use super::{de_opt_id, resource, Resource};
use crate::api::common::ClientError;
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// Certificate state of an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslStatus {
    #[serde(default, deserialize_with = "de_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct SslApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> SslApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn status(
        &self,
        site_id: &str,
        env_id: &str,
    ) -> Result<Resource<SslStatus>, ClientError> {
        let path = environment_path(site_id, &[env_id, "ssl"]);
        resource(self.client.get_resource(&path, &Query::new()).await?)
    }

    /// Asks the platform to retry issuing or renewing the certificate.
    pub async fn nudge(&self, site_id: &str, env_id: &str) -> Result<Value, ClientError> {
        let path = environment_path(site_id, &[env_id, "ssl", "nudge"]);
        self.client.post_resource(&path, None).await
    }
}
