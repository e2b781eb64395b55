//
//  vector-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod account;
mod api_key;
mod auth;
mod completion;
mod config;
mod db;
mod deploy;
mod env;
mod event;
mod php;
mod secret;
mod site;
mod ssh_key;
mod ssl;
mod waf;
mod webhook;

pub use account::AccountCommand;
pub use api_key::ApiKeyCommand;
pub use auth::AuthCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use db::DbCommand;
pub use deploy::DeployCommand;
pub use env::EnvCommand;
pub use event::EventCommand;
pub use php::PhpVersionsCommand;
pub use secret::SecretCommand;
pub use site::SiteCommand;
pub use ssh_key::SshKeyCommand;
pub use ssl::SslCommand;
pub use waf::WafCommand;
pub use webhook::WebhookCommand;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::common::{clamp_page, clamp_per_page, PaginationMeta, DEFAULT_PER_PAGE};
use crate::api::vector::PhpVersion;
use crate::interactive::{prompt_confirm_with_default, stdin_is_tty};
use crate::output::{Column, OutputWriter};
use crate::util::humanize_rows;

/// Vector CLI - Manage Vector Pro hosting from the command line
///
/// # Example
///
/// ```bash
/// # Authenticate
/// vector auth login
///
/// # List sites
/// vector site list
///
/// # Deploy an environment
/// vector deploy create --site 42 --env production
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "vector",
    version,
    about = "Manage Vector Pro hosting from the command line",
    long_about = "vector is a CLI for the Vector Pro hosting platform by BuiltFast.\n\n\
                  It manages sites, environments, deployments, SSL, WAF rules, secrets \
                  and webhooks from your terminal.",
    propagate_version = true,
    after_help = "Use 'vector <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
///
/// Without `--json` or `--no-json`, JSON is printed when stdout is not a
/// terminal.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output tables even when piped
    #[arg(long, global = true, conflicts_with = "json")]
    pub no_json: bool,

    /// API base URL
    #[arg(long, global = true, env = "VECTOR_API_URL", value_name = "URL")]
    pub api_url: Option<String>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with Vector Pro
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Manage sites
    #[command(visible_alias = "sites")]
    Site(SiteCommand),

    /// Manage site environments
    #[command(visible_alias = "environment")]
    Env(EnvCommand),

    /// Manage deployments
    Deploy(DeployCommand),

    /// Manage SSL certificates
    Ssl(SslCommand),

    /// Import and export site databases
    Db(DbCommand),

    /// Manage secrets
    Secret(SecretCommand),

    /// Manage webhooks
    Webhook(WebhookCommand),

    /// Manage SSH keys
    #[command(name = "ssh-key")]
    SshKey(SshKeyCommand),

    /// Manage WAF rules
    Waf(WafCommand),

    /// Browse account events
    #[command(visible_alias = "events")]
    Event(EventCommand),

    /// Show account details
    Account(AccountCommand),

    /// Manage API keys
    #[command(name = "api-key")]
    ApiKey(ApiKeyCommand),

    /// List supported PHP versions
    #[command(name = "php-versions")]
    PhpVersions(PhpVersionsCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Show version information
    Version,
}

/// Input rejected before any request is sent.
///
/// Maps to exit code 3.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Ends the command with `code` after its output has been written.
///
/// `main` exits without printing anything further.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("exit status {0}")]
pub struct Exit(pub i32);

/// `--page` / `--per-page` for list commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct PaginationArgs {
    /// Page number
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: u64,

    /// Items per page (max 100)
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u64,
}

impl PaginationArgs {
    pub fn page(&self) -> u64 {
        clamp_page(self.page)
    }

    pub fn per_page(&self) -> u64 {
        clamp_per_page(self.per_page)
    }
}

impl Default for PaginationArgs {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Checks a `--php-version` value against the supported list.
pub fn parse_php_version(value: Option<&str>) -> Result<Option<String>, ValidationError> {
    value
        .map(|v| {
            v.parse::<PhpVersion>()
                .map(|version| version.as_str().to_string())
                .map_err(ValidationError::new)
        })
        .transpose()
}

/// Fails when an update would send an empty payload.
///
/// `options` lists the flags that would have filled it, e.g. `--name or --domain`.
pub fn require_changes<T: Serialize>(request: &T, options: &str) -> Result<(), ValidationError> {
    let empty = match serde_json::to_value(request) {
        Ok(Value::Object(map)) => map.is_empty(),
        Ok(Value::Null) => true,
        _ => false,
    };
    if empty {
        Err(ValidationError::new(format!("No update options provided. Use {options}.")))
    } else {
        Ok(())
    }
}

/// Asks before a destructive action.
///
/// Returns `true` to proceed. With `force` nothing is asked. Without a
/// terminal on stdin the action is refused, and a declined prompt prints
/// `Deletion cancelled.`.
pub fn confirm_destructive(message: &str, force: bool, output: &OutputWriter) -> Result<bool> {
    if force {
        return Ok(true);
    }
    if !stdin_is_tty() {
        return Err(
            ValidationError::new("Refusing to continue without confirmation. Pass --force.").into(),
        );
    }
    if prompt_confirm_with_default(message, false)? {
        Ok(true)
    } else {
        output.write_warning("Deletion cancelled.");
        Ok(false)
    }
}

/// Serializes typed results for the output writer.
pub(crate) fn to_rows<T: Serialize>(items: &[T]) -> Result<Vec<Value>> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(Into::into))
        .collect()
}

/// Prints a list, humanizing timestamps in table mode.
///
/// An empty table-mode list prints `empty` instead of a header-only table.
pub(crate) fn write_rows(
    output: &OutputWriter,
    mut rows: Vec<Value>,
    columns: &[Column<'_>],
    meta: Option<&PaginationMeta>,
    empty: &str,
) -> Result<()> {
    if output.is_json() {
        return output.write_list(&rows, columns, meta);
    }
    if rows.is_empty() {
        output.write_info(empty);
        return Ok(());
    }
    humanize_rows(&mut rows, TIMESTAMP_KEYS);
    output.write_list(&rows, columns, meta)
}

/// Prints one resource, humanizing timestamps in table mode.
pub(crate) fn write_detail<T: Serialize>(
    output: &OutputWriter,
    resource: &T,
    labels: Option<&[(&str, &str)]>,
) -> Result<()> {
    let mut value = serde_json::to_value(resource)?;
    if !output.is_json() {
        humanize_rows(std::slice::from_mut(&mut value), TIMESTAMP_KEYS);
    }
    output.write_resource(&value, labels)
}

const TIMESTAMP_KEYS: &[&str] = &[
    "created_at",
    "updated_at",
    "deployed_at",
    "started_at",
    "completed_at",
    "occurred_at",
    "expires_at",
];

/// Prints the result of an action that returns no resource.
///
/// JSON mode prints the response body, or `{"success": true, "message": ...}`
/// when the body is empty. The JSON message is the first sentence of
/// `message` without its period.
pub(crate) fn write_action(output: &OutputWriter, response: &Value, message: &str) -> Result<()> {
    if output.is_json() {
        let empty = match response {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if empty {
            let first = message.split(". ").next().unwrap_or(message).trim_end_matches('.');
            output.write_json(&serde_json::json!({ "success": true, "message": first }), None)
        } else {
            output.write_json(response, None)
        }
    } else {
        output.write_success(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::vector::SiteRequest;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_flags_conflict() {
        let result = Cli::try_parse_from(["vector", "--json", "--no-json", "version"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_pagination_is_clamped() {
        let args = PaginationArgs { page: 0, per_page: 500 };
        assert_eq!(args.page(), 1);
        assert_eq!(args.per_page(), 100);

        let args = PaginationArgs { page: 3, per_page: 0 };
        assert_eq!(args.page(), 3);
        assert_eq!(args.per_page(), 1);
    }

    #[test]
    fn test_parse_php_version() {
        assert_eq!(parse_php_version(Some("8.3")).unwrap(), Some("8.3".to_string()));
        assert_eq!(parse_php_version(None).unwrap(), None);

        let err = parse_php_version(Some("7.4")).unwrap_err();
        assert!(err.message().contains("supported: 8.1, 8.2, 8.3, 8.4"));
    }

    #[test]
    fn test_require_changes() {
        let err = require_changes(&SiteRequest::default(), "--name").unwrap_err();
        assert_eq!(err.message(), "No update options provided. Use --name.");

        let request = SiteRequest {
            name: Some("Blog".to_string()),
            ..Default::default()
        };
        assert!(require_changes(&request, "--name").is_ok());
    }

    #[test]
    fn test_exit_is_reported_as_its_code() {
        let err = anyhow::Error::new(Exit(2));
        assert_eq!(crate::exit_code_for(&err), 2);
    }

    #[test]
    fn test_global_options_parse() {
        let cli = Cli::try_parse_from([
            "vector",
            "site",
            "list",
            "--json",
            "--api-url",
            "http://localhost:8080",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.api_url.as_deref(), Some("http://localhost:8080"));
    }
}
