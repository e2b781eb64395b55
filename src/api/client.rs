//
//  vector-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Vector Pro API
//!
//! [`VectorClient`] runs every call through the same pipeline:
//!
//! ```text
//! Built -> Sent -> Decoded -> Classified -> Unwrapped
//!            |        |           |
//!            |        |           +-> ApiError
//!            |        +-> DecodeError
//!            +-> TransportError
//! ```
//!
//! Nothing is retried. A call either returns a value or exactly one error.
//!
//! ## Features
//!
//! - Bearer authentication on every request
//! - Injected [`Transport`] for testing and custom HTTP stacks
//! - Raw, single-resource and paginated response conventions
//! - Immutable state, safe to share across tasks

use std::fmt;

use serde_json::Value;
use tracing::debug;

use super::common::{
    classify, ClientError, Envelope, PaginatedResult, TransportError, DEFAULT_PER_PAGE,
};
use super::decode::decode_body;
use super::request::{Method, Query, QueryValue, RequestBuilder};
use super::transport::{ReqwestTransport, Transport};
use super::vector::{
    AccountApi, ApiKeysApi, DatabaseApi, DeploymentsApi, EnvironmentsApi, EventsApi,
    GlobalSecretsApi, PhpVersionsApi, SecretsApi, SitesApi, SshKeysApi, SslApi, WafApi,
    WebhooksApi,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.builtfast.com";

/// Connection settings, supplied once at construction.
///
/// # Example
///
/// ```rust
/// use vector_cli::api::ClientConfig;
///
/// let config = ClientConfig::new("my-key");
/// assert_eq!(config.base_url(), "https://api.builtfast.com");
///
/// let staging = ClientConfig::new("my-key").with_base_url("https://staging.example.com");
/// assert_eq!(staging.base_url(), "https://staging.example.com");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
}

impl ClientConfig {
    /// Config for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Replaces the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// The Vector Pro API client.
///
/// Generic over its [`Transport`] so tests can inject fakes. The default is
/// [`ReqwestTransport`].
///
/// # Creating a Client
///
/// ```rust,no_run
/// use vector_cli::api::{ClientConfig, VectorClient};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = VectorClient::with_default_transport(ClientConfig::new("my-key"))?;
/// let sites = client.sites().list(1, 15).await?;
/// println!("{} sites", sites.meta.total);
/// # Ok(())
/// # }
/// ```
///
/// # Notes
///
/// - All methods take `&self`; the client holds no mutable state.
/// - Clone it (when the transport is `Clone`) or share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct VectorClient<T = ReqwestTransport> {
    config: ClientConfig,
    builder: RequestBuilder,
    transport: T,
}

impl VectorClient<ReqwestTransport> {
    /// Creates a client backed by a fresh [`ReqwestTransport`].
    pub fn with_default_transport(config: ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::new(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> VectorClient<T> {
    /// Creates a client with an injected transport.
    pub fn new(config: ClientConfig, transport: T) -> Self {
        let builder = RequestBuilder::new(config.base_url(), config.api_key());
        Self {
            config,
            builder,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one request through the pipeline and returns the decoded body
    /// untouched.
    ///
    /// # Parameters
    ///
    /// * `method` - HTTP verb
    /// * `path` - Path relative to the base URL
    /// * `query` - Query parameters, sent for `GET` only
    /// * `body` - JSON payload, sent for non-`GET` only and only when non-empty
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] when no response was received
    /// - [`ClientError::Decode`] when the body is not JSON
    /// - [`ClientError::Api`] when the status is outside `200..300`
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let request = self.builder.build(method, path, query, body);
        debug!(
            method = %request.method(),
            url = request.url(),
            has_body = request.has_body(),
            "sending request"
        );

        let response = self.transport.send(&request).await.map_err(|e| {
            debug!(error = %e, "transport failed");
            e
        })?;
        debug!(status = response.status, bytes = response.body.len(), "received response");

        let decoded = decode_body(response.status, &response.body)?;
        classify(response.status, &decoded)?;

        Ok(decoded)
    }

    /// `GET` returning the raw decoded body.
    pub async fn get(&self, path: &str, query: &Query) -> Result<Value, ClientError> {
        self.request(Method::Get, path, query, None).await
    }

    /// `POST` returning the raw decoded body.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value, ClientError> {
        self.request(Method::Post, path, &Query::new(), body).await
    }

    /// `PUT` returning the raw decoded body.
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value, ClientError> {
        self.request(Method::Put, path, &Query::new(), body).await
    }

    /// `DELETE` returning the raw decoded body.
    pub async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.request(Method::Delete, path, &Query::new(), None).await
    }

    /// `GET` with the single-resource convention: `data` if present,
    /// otherwise the whole body.
    pub async fn get_resource(&self, path: &str, query: &Query) -> Result<Value, ClientError> {
        Ok(Envelope::from_value(self.get(path, query).await?).into_data())
    }

    pub async fn post_resource(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        Ok(Envelope::from_value(self.post(path, body).await?).into_data())
    }

    pub async fn put_resource(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        Ok(Envelope::from_value(self.put(path, body).await?).into_data())
    }

    pub async fn delete_resource(&self, path: &str) -> Result<Value, ClientError> {
        Ok(Envelope::from_value(self.delete(path).await?).into_data())
    }

    /// `GET` with the collection convention.
    ///
    /// The reported default page size is the query's `per_page` when it has
    /// one, [`DEFAULT_PER_PAGE`] otherwise.
    pub async fn get_page(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<PaginatedResult<Value>, ClientError> {
        let per_page = match query.get("per_page") {
            Some(QueryValue::UInt(n)) => *n,
            Some(QueryValue::Int(n)) if *n > 0 => *n as u64,
            Some(QueryValue::Str(s)) => s.parse().unwrap_or(DEFAULT_PER_PAGE),
            _ => DEFAULT_PER_PAGE,
        };

        let body = self.get(path, query).await?;
        Ok(PaginatedResult::from_body(body, per_page))
    }

    pub fn sites(&self) -> SitesApi<'_, T> {
        SitesApi::new(self)
    }

    pub fn environments(&self) -> EnvironmentsApi<'_, T> {
        EnvironmentsApi::new(self)
    }

    pub fn deployments(&self) -> DeploymentsApi<'_, T> {
        DeploymentsApi::new(self)
    }

    pub fn ssl(&self) -> SslApi<'_, T> {
        SslApi::new(self)
    }

    pub fn database(&self) -> DatabaseApi<'_, T> {
        DatabaseApi::new(self)
    }

    /// Environment-scoped secrets.
    pub fn secrets(&self) -> SecretsApi<'_, T> {
        SecretsApi::new(self)
    }

    /// Account-wide secrets.
    pub fn global_secrets(&self) -> GlobalSecretsApi<'_, T> {
        GlobalSecretsApi::new(self)
    }

    pub fn webhooks(&self) -> WebhooksApi<'_, T> {
        WebhooksApi::new(self)
    }

    pub fn ssh_keys(&self) -> SshKeysApi<'_, T> {
        SshKeysApi::new(self)
    }

    pub fn waf(&self) -> WafApi<'_, T> {
        WafApi::new(self)
    }

    pub fn events(&self) -> EventsApi<'_, T> {
        EventsApi::new(self)
    }

    pub fn account(&self) -> AccountApi<'_, T> {
        AccountApi::new(self)
    }

    pub fn api_keys(&self) -> ApiKeysApi<'_, T> {
        ApiKeysApi::new(self)
    }

    pub fn php_versions(&self) -> PhpVersionsApi<'_, T> {
        PhpVersionsApi::new(self)
    }
}
