//
//  vector-cli
//  api/vector/waf.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Web application firewall rules for a site.
//!
//! Three simple rule lists share one shape and differ only in their path and
//! payload key, see [`WafRuleKind`]. Rate limits are richer and have their
//! own calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{de_id, de_opt_id, endpoint, payload, resource, resource_list, Resource};
use crate::api::common::ClientError;
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// Which WAF list a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WafRuleKind {
    AllowedReferrers,
    BlockedReferrers,
    BlockedIps,
}

impl WafRuleKind {
    /// Path segment under `/sites/{site}/waf`.
    pub fn segment(&self) -> &'static str {
        match self {
            WafRuleKind::AllowedReferrers => "allowed-referrers",
            WafRuleKind::BlockedReferrers => "blocked-referrers",
            WafRuleKind::BlockedIps => "blocked-ips",
        }
    }

    /// Payload key carrying the rule's value.
    pub fn value_key(&self) -> &'static str {
        match self {
            WafRuleKind::BlockedIps => "ip",
            _ => "hostname",
        }
    }
}

impl fmt::Display for WafRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// A referrer or IP rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WafRule {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WafRule {
    /// The hostname or IP, whichever the rule carries.
    pub fn value(&self) -> Option<&str> {
        self.hostname.as_deref().or(self.ip.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimit {
    #[serde(default, deserialize_with = "de_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_second: Option<u64>,

    /// Seconds a client stays blocked after exceeding the limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_duration: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating or updating a rate limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_second: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_duration: Option<u64>,
}

pub struct WafApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> WafApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        site_id: &str,
        kind: WafRuleKind,
    ) -> Result<Vec<Resource<WafRule>>, ClientError> {
        let path = endpoint(&["sites", site_id, "waf", kind.segment()]);
        resource_list(self.client.get(&path, &Query::new()).await?)
    }

    /// Adds `value` (a hostname, or an IP for [`WafRuleKind::BlockedIps`]).
    pub async fn add(
        &self,
        site_id: &str,
        kind: WafRuleKind,
        value: &str,
    ) -> Result<Resource<WafRule>, ClientError> {
        let path = endpoint(&["sites", site_id, "waf", kind.segment()]);
        let mut body = Map::new();
        body.insert(kind.value_key().to_string(), json!(value));
        resource(
            self.client
                .post_resource(&path, Some(&Value::Object(body)))
                .await?,
        )
    }

    pub async fn remove(
        &self,
        site_id: &str,
        kind: WafRuleKind,
        rule_id: &str,
    ) -> Result<Value, ClientError> {
        let path = endpoint(&["sites", site_id, "waf", kind.segment(), rule_id]);
        self.client.delete_resource(&path).await
    }

    pub async fn rate_limits(
        &self,
        site_id: &str,
    ) -> Result<Vec<Resource<RateLimit>>, ClientError> {
        let path = endpoint(&["sites", site_id, "waf", "rate-limits"]);
        resource_list(self.client.get(&path, &Query::new()).await?)
    }

    pub async fn rate_limit(
        &self,
        site_id: &str,
        rule_id: &str,
    ) -> Result<Resource<RateLimit>, ClientError> {
        let path = endpoint(&["sites", site_id, "waf", "rate-limits", rule_id]);
        resource(self.client.get_resource(&path, &Query::new()).await?)
    }

    /// Replaces the site-wide rate limit settings in one call.
    pub async fn set_rate_limits(
        &self,
        site_id: &str,
        settings: &Value,
    ) -> Result<Value, ClientError> {
        let path = endpoint(&["sites", site_id, "waf", "rate-limits"]);
        self.client.put_resource(&path, Some(settings)).await
    }

    pub async fn create_rate_limit(
        &self,
        site_id: &str,
        request: &RateLimitRequest,
    ) -> Result<Resource<RateLimit>, ClientError> {
        let body = payload(request)?;
        let path = endpoint(&["sites", site_id, "waf", "rate-limits"]);
        resource(self.client.post_resource(&path, Some(&body)).await?)
    }

    pub async fn update_rate_limit(
        &self,
        site_id: &str,
        rule_id: &str,
        request: &RateLimitRequest,
    ) -> Result<Resource<RateLimit>, ClientError> {
        let body = payload(request)?;
        let path = endpoint(&["sites", site_id, "waf", "rate-limits", rule_id]);
        resource(self.client.put_resource(&path, Some(&body)).await?)
    }

    pub async fn delete_rate_limit(
        &self,
        site_id: &str,
        rule_id: &str,
    ) -> Result<Value, ClientError> {
        let path = endpoint(&["sites", site_id, "waf", "rate-limits", rule_id]);
        self.client.delete_resource(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_kind_segments() {
        assert_eq!(WafRuleKind::AllowedReferrers.segment(), "allowed-referrers");
        assert_eq!(WafRuleKind::BlockedIps.value_key(), "ip");
        assert_eq!(WafRuleKind::BlockedReferrers.value_key(), "hostname");
        assert_eq!(WafRuleKind::BlockedIps.to_string(), "blocked-ips");
    }

    #[test]
    fn test_rule_value() {
        let rule: WafRule = serde_json::from_value(json!({"id": 3, "ip": "10.0.0.1"})).unwrap();
        assert_eq!(rule.value(), Some("10.0.0.1"));
    }
}
