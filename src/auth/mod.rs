//
//  vector-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! Decides which API key a command runs with.
//!
//! ## Resolution Order
//!
//! 1. `VECTOR_API_KEY`, when set and non-empty
//! 2. The token saved by `vector auth login`
//!
//! If neither is present the command fails with
//! [`AuthError::NotAuthenticated`] before making any request.
//!
//! ## Submodules
//!
//! - [`token`]: Reading and masking tokens

mod token;

pub use token::*;

use std::fmt;

use thiserror::Error;

use crate::config::CredentialStore;

/// Environment variable holding an API key.
pub const API_KEY_ENV: &str = "VECTOR_API_KEY";

/// Authentication failures detected locally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not authenticated. Run \"vector auth login\" first or set VECTOR_API_KEY.")]
    NotAuthenticated,
}

/// Where the active API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    /// The `VECTOR_API_KEY` environment variable.
    Environment,
    /// `credentials.json` in the config directory.
    Stored,
}

impl fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeySource::Environment => write!(f, "environment ({API_KEY_ENV})"),
            ApiKeySource::Stored => f.write_str("credentials file"),
        }
    }
}

/// An API key together with its origin.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedApiKey {
    pub key: String,
    pub source: ApiKeySource,
}

impl fmt::Debug for ResolvedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedApiKey")
            .field("key", &mask_token(&self.key))
            .field("source", &self.source)
            .finish()
    }
}

/// Picks the API key to use.
///
/// # Parameters
///
/// * `env` - Environment lookup, usually `|k| std::env::var(k).ok()`
/// * `store` - Loaded credentials
///
/// # Example
///
/// ```rust
/// use vector_cli::auth::{resolve_api_key, ApiKeySource};
/// use vector_cli::config::CredentialStore;
///
/// let store = CredentialStore::load_from(std::env::temp_dir().join("vector-doc-empty"));
/// let resolved = resolve_api_key(|_| Some("env-key".to_string()), &store).unwrap();
/// assert_eq!(resolved.source, ApiKeySource::Environment);
/// ```
pub fn resolve_api_key<F>(env: F, store: &CredentialStore) -> Option<ResolvedApiKey>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = env(API_KEY_ENV).filter(|k| !k.is_empty()) {
        return Some(ResolvedApiKey {
            key,
            source: ApiKeySource::Environment,
        });
    }

    store.api_token().map(|key| ResolvedApiKey {
        key: key.to_string(),
        source: ApiKeySource::Stored,
    })
}

/// Like [`resolve_api_key`] but missing credentials are an error.
pub fn require_api_key<F>(env: F, store: &CredentialStore) -> Result<ResolvedApiKey, AuthError>
where
    F: Fn(&str) -> Option<String>,
{
    resolve_api_key(env, store).ok_or(AuthError::NotAuthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_environment_wins() {
        let dir = TempDir::new().unwrap();
        let mut store = CredentialStore::load_from(dir.path());
        store.set_api_token("stored-key").unwrap();

        let resolved = resolve_api_key(|_| Some("env-key".to_string()), &store).unwrap();
        assert_eq!(resolved.key, "env-key");
        assert_eq!(resolved.source, ApiKeySource::Environment);
    }

    #[test]
    fn test_empty_environment_falls_back() {
        let dir = TempDir::new().unwrap();
        let mut store = CredentialStore::load_from(dir.path());
        store.set_api_token("stored-key").unwrap();

        let resolved = resolve_api_key(|_| Some(String::new()), &store).unwrap();
        assert_eq!(resolved.key, "stored-key");
        assert_eq!(resolved.source, ApiKeySource::Stored);
    }

    #[test]
    fn test_missing_everywhere() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::load_from(dir.path());

        assert!(resolve_api_key(|_| None, &store).is_none());
        let err = require_api_key(|_| None, &store).unwrap_err();
        assert_eq!(err, AuthError::NotAuthenticated);
        assert!(err.to_string().contains("vector auth login"));
    }

    #[test]
    fn test_debug_masks_key() {
        let resolved = ResolvedApiKey {
            key: "abcd1234efgh5678".to_string(),
            source: ApiKeySource::Stored,
        };
        assert!(!format!("{resolved:?}").contains("1234efgh"));
    }
}
