//
//  vector-cli
//  context/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Command Context Module
//!
//! Wires together what every command needs: the loaded config and
//! credentials, the output writer and the API base URL.
//!
//! ## Resolution Order
//!
//! The base URL comes from:
//! 1. `--api-url` (or `VECTOR_API_URL`)
//! 2. `api_url` in `config.json`
//! 3. The built-in default
//!
//! The API key comes from `VECTOR_API_KEY`, then `credentials.json`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vector_cli::cli::GlobalOptions;
//! use vector_cli::context::CommandContext;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let ctx = CommandContext::new(&GlobalOptions::default());
//! let client = ctx.client()?;
//! let sites = client.sites().list(1, 15).await?;
//! println!("{} sites", sites.meta.total);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::api::{ClientConfig, VectorClient};
use crate::auth::{require_api_key, resolve_api_key, ResolvedApiKey};
use crate::cli::GlobalOptions;
use crate::config::{Config, CredentialStore};
use crate::interactive::stdout_is_tty;
use crate::output::{OutputFormat, OutputWriter};

/// State shared by all subcommands of one invocation.
#[derive(Debug)]
pub struct CommandContext {
    pub config: Config,
    pub credentials: CredentialStore,
    pub output: OutputWriter,
    api_url: String,
}

impl CommandContext {
    /// Loads config and credentials from the default directory.
    pub fn new(global: &GlobalOptions) -> Self {
        let config = Config::load();
        let credentials = CredentialStore::load_from(config.dir().to_path_buf());
        Self::from_parts(global, config, credentials)
    }

    /// Builds a context from already-loaded files.
    pub fn from_parts(
        global: &GlobalOptions,
        config: Config,
        credentials: CredentialStore,
    ) -> Self {
        let format = OutputFormat::detect(global.json, global.no_json, stdout_is_tty());
        let api_url = global
            .api_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| config.api_url());

        debug!(%api_url, ?format, "resolved command context");

        Self {
            config,
            credentials,
            output: OutputWriter::new(format),
            api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn config_dir(&self) -> PathBuf {
        self.config.dir().to_path_buf()
    }

    /// The active API key, if any.
    pub fn api_key(&self) -> Option<ResolvedApiKey> {
        resolve_api_key(|key| std::env::var(key).ok(), &self.credentials)
    }

    /// An authenticated client for the resolved base URL.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::auth::AuthError`] when no key is configured.
    pub fn client(&self) -> Result<VectorClient> {
        let resolved = require_api_key(|key| std::env::var(key).ok(), &self.credentials)?;
        debug!(source = %resolved.source, "using API key");
        self.client_with_key(&resolved.key)
    }

    /// A client using `api_key` instead of the stored credential.
    pub fn client_with_key(&self, api_key: &str) -> Result<VectorClient> {
        let config = ClientConfig::new(api_key).with_base_url(self.api_url.as_str());
        VectorClient::with_default_transport(config).context("Failed to create HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(api_url: Option<&str>) -> GlobalOptions {
        GlobalOptions {
            json: true,
            no_json: false,
            api_url: api_url.map(str::to_string),
        }
    }

    #[test]
    fn test_flag_overrides_config_url() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::load_from(dir.path());
        config.set_api_url("https://config.example.com").unwrap();
        let credentials = CredentialStore::load_from(dir.path());

        let ctx = CommandContext::from_parts(
            &options(Some("https://flag.example.com/")),
            config,
            credentials,
        );
        assert_eq!(ctx.api_url(), "https://flag.example.com");
        assert!(ctx.output.is_json());
    }

    #[test]
    fn test_config_url_used_without_flag() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::load_from(dir.path());
        config.set_api_url("https://config.example.com").unwrap();
        let credentials = CredentialStore::load_from(dir.path());

        let ctx = CommandContext::from_parts(&options(None), config, credentials);
        assert_eq!(ctx.api_url(), "https://config.example.com");
        assert_eq!(ctx.config_dir(), dir.path());
    }
}
