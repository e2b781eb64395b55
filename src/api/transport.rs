//
//  vector-cli
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport
//!
//! The pluggable seam between the pipeline and the network. A [`Transport`]
//! sends an [`ApiRequest`] and hands back the status and body text; it never
//! interprets either.
//!
//! [`ReqwestTransport`] is the production implementation. Tests substitute
//! their own implementations to record requests and script responses.
//!
//! ## Concurrency
//!
//! Implementations must be safe to call from several tasks at once. The
//! pipeline relies on this but does not enforce it beyond the `Send + Sync`
//! bound.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::common::TransportError;
use super::request::ApiRequest;

/// Status and body text of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Capability to send an HTTP request and receive status plus body.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use vector_cli::api::common::TransportError;
/// use vector_cli::api::request::ApiRequest;
/// use vector_cli::api::transport::{RawResponse, Transport};
///
/// struct NoContent;
///
/// #[async_trait]
/// impl Transport for NoContent {
///     async fn send(&self, _request: &ApiRequest) -> Result<RawResponse, TransportError> {
///         Ok(RawResponse::new(204, ""))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` once. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received. Non-2xx
    /// responses are *not* errors at this layer.
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request).await
    }
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Creates a transport with no request timeout.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        Self::build(None)
    }

    /// Creates a transport that aborts requests after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Self::build(Some(timeout))
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    fn build(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(format!("vector/{}", crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self.inner.request(request.method().into(), request.url());

        for (name, value) in request.headers() {
            builder = builder.header(*name, value);
        }

        // No body means no payload at all, not an empty one.
        if let Some(body) = request.body() {
            builder = builder.body(body.to_owned());
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;

        Ok(RawResponse { status, body })
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_builder() {
        TransportError::InvalidRequest(error.to_string())
    } else {
        TransportError::Connection(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{Method, Query, RequestBuilder};

    struct Fixed(u16);

    #[async_trait]
    impl Transport for Fixed {
        async fn send(&self, _request: &ApiRequest) -> Result<RawResponse, TransportError> {
            Ok(RawResponse::new(self.0, "{}"))
        }
    }

    #[test]
    fn test_shared_transport_delegates() {
        let transport: Arc<dyn Transport> = Arc::new(Fixed(204));
        let request = RequestBuilder::new("https://api.test", "k").build(
            Method::Get,
            "/x",
            &Query::new(),
            None,
        );

        let response = tokio_test::block_on(transport.send(&request)).unwrap();
        assert_eq!(response, RawResponse::new(204, "{}"));
    }

    #[test]
    fn test_client_builds_with_timeout() {
        assert!(ReqwestTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }
}
