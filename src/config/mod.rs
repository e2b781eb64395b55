//
//  vector-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings and credentials for the `vector` CLI, stored as two JSON files in
//! one directory.
//!
//! ## Configuration Directory
//!
//! The first match wins:
//!
//! 1. `$VECTOR_CONFIG_DIR`
//! 2. `$XDG_CONFIG_HOME/vector`
//! 3. `~/.config/vector`
//!
//! ## Files
//!
//! ```json
//! // config.json
//! {
//!   "api_url": "https://api.builtfast.com"
//! }
//!
//! // credentials.json (mode 0600)
//! {
//!   "api_token": "..."
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vector_cli::config::{Config, CredentialStore};
//!
//! let mut config = Config::load();
//! println!("API: {}", config.api_url());
//! config.set_api_url("https://staging.builtfast.com")?;
//!
//! let credentials = CredentialStore::load();
//! if credentials.has_api_token() {
//!     println!("logged in");
//! }
//! # Ok::<(), vector_cli::config::ConfigError>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level JSON file I/O

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::api::DEFAULT_BASE_URL;

/// Settings file name.
pub const CONFIG_FILE: &str = "config.json";

/// Credentials file name.
pub const CREDENTIALS_FILE: &str = "credentials.json";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "VECTOR_CONFIG_DIR";

/// Config key holding the API base URL.
pub const API_URL_KEY: &str = "api_url";
const API_TOKEN_KEY: &str = "api_token";

/// Resolves the configuration directory from an environment lookup.
///
/// # Parameters
///
/// * `env` - Returns the value of an environment variable, if set
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use vector_cli::config::resolve_config_dir;
///
/// let dir = resolve_config_dir(|key| match key {
///     "XDG_CONFIG_HOME" => Some("/home/me/.cfg".to_string()),
///     _ => None,
/// });
/// assert_eq!(dir, PathBuf::from("/home/me/.cfg/vector"));
/// ```
///
/// # Notes
///
/// - Empty variables count as unset
/// - A trailing separator on `VECTOR_CONFIG_DIR` is dropped
/// - Without any home directory the system temp dir is used as a last resort
pub fn resolve_config_dir<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(dir) = non_empty(CONFIG_DIR_ENV) {
        let trimmed = dir.trim_end_matches(['/', '\\']);
        return PathBuf::from(if trimmed.is_empty() { "/" } else { trimmed });
    }

    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(crate::APP_NAME);
    }

    let home = non_empty("HOME")
        .map(PathBuf::from)
        .or_else(|| directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
        .unwrap_or_else(std::env::temp_dir);

    home.join(".config").join(crate::APP_NAME)
}

/// Configuration directory for the current process environment.
pub fn config_dir() -> PathBuf {
    resolve_config_dir(|key| std::env::var(key).ok())
}

/// The settings file.
///
/// Values are arbitrary JSON; the CLI only interprets `api_url`. Every
/// mutation is written through to disk immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    dir: PathBuf,
    values: Map<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: config_dir(),
            values: Map::new(),
        }
    }
}

impl Config {
    /// Loads from the default directory.
    pub fn load() -> Self {
        Self::load_from(config_dir())
    }

    /// Loads from `dir`. A missing or malformed file yields an empty config.
    pub fn load_from(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let values = read_json_file(&dir.join(CONFIG_FILE));
        Self { dir, values }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn all(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Result<(), ConfigError> {
        self.values.insert(key.into(), value);
        self.save()
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>, ConfigError> {
        let previous = self.values.remove(key);
        self.save()?;
        Ok(previous)
    }

    /// The API root, [`DEFAULT_BASE_URL`] unless a string is configured.
    pub fn api_url(&self) -> String {
        self.values
            .get(API_URL_KEY)
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    pub fn set_api_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.set(API_URL_KEY, Value::String(url.to_string()))
    }

    fn save(&self) -> Result<(), ConfigError> {
        write_json_file(&self.path(), &self.values, None)
    }
}

/// The credentials file.
///
/// Written with owner-only permissions. Only `api_token` is used by the CLI.
#[derive(Clone, PartialEq)]
pub struct CredentialStore {
    dir: PathBuf,
    values: Map<String, Value>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("dir", &self.dir)
            .field("has_api_token", &self.has_api_token())
            .finish()
    }
}

impl CredentialStore {
    pub fn load() -> Self {
        Self::load_from(config_dir())
    }

    pub fn load_from(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let values = read_json_file(&dir.join(CREDENTIALS_FILE));
        Self { dir, values }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE)
    }

    /// The stored token, if it is a string.
    pub fn api_token(&self) -> Option<&str> {
        self.values.get(API_TOKEN_KEY).and_then(Value::as_str)
    }

    pub fn has_api_token(&self) -> bool {
        self.api_token().is_some()
    }

    pub fn set_api_token(&mut self, token: &str) -> Result<(), ConfigError> {
        self.values
            .insert(API_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.save()
    }

    /// Removes the token. Returns whether one was stored.
    pub fn remove_api_token(&mut self) -> Result<bool, ConfigError> {
        let had_token = self.values.remove(API_TOKEN_KEY).is_some();
        self.save()?;
        Ok(had_token)
    }

    fn save(&self) -> Result<(), ConfigError> {
        write_json_file(&self.path(), &self.values, Some(0o600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_dir_resolution_order() {
        let all = env_of(&[
            ("VECTOR_CONFIG_DIR", "/opt/vector/"),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/me"),
        ]);
        assert_eq!(resolve_config_dir(all), PathBuf::from("/opt/vector"));

        let xdg = env_of(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/me")]);
        assert_eq!(resolve_config_dir(xdg), PathBuf::from("/xdg/vector"));

        let home = env_of(&[("XDG_CONFIG_HOME", ""), ("HOME", "/home/me")]);
        assert_eq!(resolve_config_dir(home), PathBuf::from("/home/me/.config/vector"));
    }

    #[test]
    fn test_config_roundtrip_on_disk() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::load_from(dir.path());
        assert!(config.all().is_empty());
        assert_eq!(config.api_url(), DEFAULT_BASE_URL);

        config.set_api_url("https://staging.example.com").unwrap();
        config.set("theme", json!("dark")).unwrap();

        let reloaded = Config::load_from(dir.path());
        assert_eq!(reloaded.api_url(), "https://staging.example.com");
        assert!(reloaded.has("theme"));

        let mut reloaded = reloaded;
        assert_eq!(reloaded.remove("theme").unwrap(), Some(json!("dark")));
        assert!(!Config::load_from(dir.path()).has("theme"));
    }

    #[test]
    fn test_non_string_api_url_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"api_url": 42}"#).unwrap();
        assert_eq!(Config::load_from(dir.path()).api_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_credentials_lifecycle() {
        let dir = TempDir::new().unwrap();
        let mut store = CredentialStore::load_from(dir.path());
        assert!(!store.has_api_token());

        store.set_api_token("secret-token").unwrap();
        assert_eq!(
            CredentialStore::load_from(dir.path()).api_token(),
            Some("secret-token")
        );

        assert!(store.remove_api_token().unwrap());
        assert!(!store.remove_api_token().unwrap());
        assert!(!CredentialStore::load_from(dir.path()).has_api_token());
    }

    #[test]
    fn test_debug_hides_token() {
        let dir = TempDir::new().unwrap();
        let mut store = CredentialStore::load_from(dir.path());
        store.set_api_token("do-not-print").unwrap();
        assert!(!format!("{store:?}").contains("do-not-print"));
    }
}
