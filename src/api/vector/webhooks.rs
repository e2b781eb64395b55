//
//  vector-cli
//  api/vector/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook API types and operations.
//!
//! Webhooks deliver platform [events](super::events) to an HTTP endpoint.
//! Each delivery is signed with the webhook's secret, which is only shown on
//! creation and after [`WebhooksApi::rotate_secret`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de_id, de_string_list, endpoint, payload, resource, resource_page, Resource};
use crate::api::common::{ClientError, PaginatedResult};
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Event names this webhook subscribes to.
    #[serde(default, deserialize_with = "de_string_list")]
    pub events: Vec<String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Signing secret. Only present on create and rotate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One delivery attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookLog {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// HTTP status the receiver answered with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_status: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating or updating a webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    /// Delivery format, e.g. `http` or `slack`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub webhook_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

pub struct WebhooksApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> WebhooksApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedResult<Resource<Webhook>>, ClientError> {
        let page = self
            .client
            .get_page(&endpoint(&["webhooks"]), &Query::pagination(page, per_page))
            .await?;
        resource_page(page)
    }

    pub async fn get(&self, webhook_id: &str) -> Result<Resource<Webhook>, ClientError> {
        resource(
            self.client
                .get_resource(&endpoint(&["webhooks", webhook_id]), &Query::new())
                .await?,
        )
    }

    pub async fn create(&self, request: &WebhookRequest) -> Result<Resource<Webhook>, ClientError> {
        let body = payload(request)?;
        resource(self.client.post_resource(&endpoint(&["webhooks"]), Some(&body)).await?)
    }

    pub async fn update(
        &self,
        webhook_id: &str,
        request: &WebhookRequest,
    ) -> Result<Resource<Webhook>, ClientError> {
        let body = payload(request)?;
        resource(
            self.client
                .put_resource(&endpoint(&["webhooks", webhook_id]), Some(&body))
                .await?,
        )
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<Value, ClientError> {
        self.client
            .delete_resource(&endpoint(&["webhooks", webhook_id]))
            .await
    }

    /// Issues a new signing secret. The old one stops working immediately.
    pub async fn rotate_secret(&self, webhook_id: &str) -> Result<Resource<Webhook>, ClientError> {
        resource(
            self.client
                .post_resource(&endpoint(&["webhooks", webhook_id, "rotate-secret"]), None)
                .await?,
        )
    }

    /// Delivery history, newest first.
    pub async fn logs(
        &self,
        webhook_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedResult<Resource<WebhookLog>>, ClientError> {
        let page = self
            .client
            .get_page(
                &endpoint(&["webhooks", webhook_id, "logs"]),
                &Query::pagination(page, per_page),
            )
            .await?;
        resource_page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_enabled_by_default() {
        let hook: Webhook =
            serde_json::from_value(json!({"id": "w1", "url": "https://x.test"})).unwrap();
        assert!(hook.enabled);
        assert!(hook.events.is_empty());
        assert!(hook.secret.is_none());
    }

    #[test]
    fn test_webhook_request_shape() {
        let request = WebhookRequest {
            url: Some("https://hooks.example.com".to_string()),
            events: Some(vec!["deployment.completed".to_string()]),
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "url": "https://hooks.example.com",
                "events": ["deployment.completed"],
                "enabled": false
            })
        );
    }
}
