//
//  vector-cli
//  api/vector/database.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Database import and export for a site.
//!
//! Both directions are asynchronous on the platform side: a call starts the
//! job and returns its record, and the status endpoint is polled until the
//! job settles.
//!
//! # Import Flow
//!
//! 1. [`DatabaseApi::create_import_session`] returns an `upload_url`
//! 2. The dump is uploaded to that URL out of band
//! 3. [`DatabaseApi::run_import`] starts the import
//! 4. [`DatabaseApi::import_status`] reports progress
//!
//! [`DatabaseApi::import_from_url`] collapses all of this when the dump is
//! already reachable over HTTP.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de_id, endpoint, payload, resource, Resource};
use crate::api::common::ClientError;
use crate::api::request::Query;
use crate::api::transport::Transport;
use crate::api::VectorClient;

/// One search/replace pass applied while importing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReplace {
    pub search: String,
    pub replace: String,
}

impl std::str::FromStr for SearchReplace {
    type Err = String;

    /// Parses `search=replace`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((search, replace)) if !search.is_empty() => Ok(Self {
                search: search.to_string(),
                replace: replace.to_string(),
            }),
            _ => Err(format!("expected SEARCH=REPLACE, got '{s}'")),
        }
    }
}

/// Payload for starting an import.
///
/// Exactly one of `url` or `filename` is expected: `url` for a direct import,
/// `filename` for an upload session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseImportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_replace: Vec<SearchReplace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportStatus {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Present once the export has finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportStatus {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Where to upload the dump for a session-based import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct DatabaseApi<'a, T> {
    client: &'a VectorClient<T>,
}

impl<'a, T: Transport> DatabaseApi<'a, T> {
    pub fn new(client: &'a VectorClient<T>) -> Self {
        Self { client }
    }

    /// Imports a dump the platform can download itself.
    pub async fn import_from_url(
        &self,
        site_id: &str,
        request: &DatabaseImportRequest,
    ) -> Result<Resource<ImportStatus>, ClientError> {
        let body = payload(request)?;
        let path = endpoint(&["sites", site_id, "db", "import"]);
        resource(self.client.post_resource(&path, Some(&body)).await?)
    }

    pub async fn create_import_session(
        &self,
        site_id: &str,
        request: &DatabaseImportRequest,
    ) -> Result<Resource<ImportStatus>, ClientError> {
        let body = payload(request)?;
        let path = endpoint(&["sites", site_id, "db", "imports"]);
        resource(self.client.post_resource(&path, Some(&body)).await?)
    }

    pub async fn run_import(
        &self,
        site_id: &str,
        import_id: &str,
    ) -> Result<Resource<ImportStatus>, ClientError> {
        let path = endpoint(&["sites", site_id, "db", "imports", import_id, "run"]);
        resource(self.client.post_resource(&path, None).await?)
    }

    pub async fn import_status(
        &self,
        site_id: &str,
        import_id: &str,
    ) -> Result<Resource<ImportStatus>, ClientError> {
        let path = endpoint(&["sites", site_id, "db", "imports", import_id]);
        resource(self.client.get_resource(&path, &Query::new()).await?)
    }

    /// Starts an export. `format` is passed through when given.
    pub async fn create_export(
        &self,
        site_id: &str,
        format: Option<&str>,
    ) -> Result<Resource<ExportStatus>, ClientError> {
        let body = format.map(|f| serde_json::json!({ "format": f }));
        let path = endpoint(&["sites", site_id, "db", "export"]);
        resource(self.client.post_resource(&path, body.as_ref()).await?)
    }

    pub async fn export_status(
        &self,
        site_id: &str,
        export_id: &str,
    ) -> Result<Resource<ExportStatus>, ClientError> {
        let path = endpoint(&["sites", site_id, "db", "exports", export_id]);
        resource(self.client.get_resource(&path, &Query::new()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_replace_parsing() {
        let pair: SearchReplace = "old.example.com=new.example.com".parse().unwrap();
        assert_eq!(pair.search, "old.example.com");
        assert_eq!(pair.replace, "new.example.com");

        let empty_replace: SearchReplace = "http://=".parse().unwrap();
        assert_eq!(empty_replace.replace, "");

        assert!("no-separator".parse::<SearchReplace>().is_err());
        assert!("=value".parse::<SearchReplace>().is_err());
    }

    #[test]
    fn test_import_request_shape() {
        let request = DatabaseImportRequest {
            url: Some("https://dumps.example.com/db.sql.gz".to_string()),
            search_replace: vec![SearchReplace {
                search: "a".to_string(),
                replace: "b".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "url": "https://dumps.example.com/db.sql.gz",
                "search_replace": [{"search": "a", "replace": "b"}]
            })
        );
    }
}
