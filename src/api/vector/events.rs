//
//  vector-cli
//  api/vector/events.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account audit events.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de_id, endpoint, resource_page, Resource};
use crate::api::common::{ClientError, PaginatedResult};
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// Who triggered an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventActor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Name of the API key used, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    /// Event name, e.g. `site.created`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<EventActor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filters for [`EventsApi::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub site_id: Option<String>,
    pub event_type: Option<String>,
}

pub struct EventsApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> EventsApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
        filter: &EventFilter,
    ) -> Result<PaginatedResult<Resource<Event>>, ClientError> {
        let mut query = Query::pagination(page, per_page);
        if let Some(site_id) = &filter.site_id {
            query.push("site_id", site_id.as_str());
        }
        if let Some(event_type) = &filter.event_type {
            query.push("type", event_type.as_str());
        }

        let page = self.client.get_page(&endpoint(&["events"]), &query).await?;
        resource_page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_with_actor() {
        let event: Event = serde_json::from_value(json!({
            "id": 1,
            "event": "site.created",
            "model_id": 44,
            "actor": {"ip": "203.0.113.9", "token_name": "ci"}
        }))
        .unwrap();

        assert_eq!(event.event.as_deref(), Some("site.created"));
        assert_eq!(event.model_id, Some(json!(44)));
        assert_eq!(event.actor.unwrap().token_name.as_deref(), Some("ci"));
    }
}
