//
//  vector-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the Vector Pro hosting API.
//!
//! ## Architecture
//!
//! A call passes through five stages, each in its own module:
//!
//! - [`request`]: builds method, URL, headers and body from a call description
//! - [`transport`]: sends the request and returns status plus body text
//! - [`decode`]: turns the body text into JSON
//! - [`common`]: classifies failures and unwraps `{data, meta}` envelopes
//! - [`client`]: ties the stages together behind [`VectorClient`]
//!
//! [`vector`] holds one thin wrapper per platform resource on top of that.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vector_cli::api::{ClientConfig, VectorClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = VectorClient::with_default_transport(ClientConfig::new("your-key"))?;
//! let site = client.sites().get("site-123").await?;
//! println!("{:?}", site.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call fails with exactly one [`ClientError`]:
//!
//! - `Transport`: no response was received
//! - `Decode`: the body was not JSON
//! - `Api`: the platform answered with a non-2xx status

pub mod client;

pub mod common;

pub mod decode;

pub mod request;

pub mod transport;

/// Per-resource endpoint wrappers and entity types.
pub mod vector;

pub use client::{ClientConfig, VectorClient, DEFAULT_BASE_URL};

pub use common::{ApiError, ClientError, DecodeError, TransportError};
