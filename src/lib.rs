//
//  vector-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Vector CLI Library
//!
//! Client library and command-line interface for the Vector Pro hosting
//! platform by BuiltFast.
//!
//! ## Overview
//!
//! The library half is a typed HTTP client: requests are built, sent,
//! decoded, classified and unwrapped by one pipeline, and every platform
//! resource gets a thin wrapper on top. The `vector` binary layers commands,
//! credential storage and human/JSON output over that client.
//!
//! ## Module Structure
//!
//! - [`api`]: The HTTP pipeline and resource wrappers
//! - [`auth`]: API key resolution
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Config and credential files
//! - [`context`]: Per-invocation wiring of config, client and output
//! - [`output`]: Table, detail and JSON rendering
//! - [`interactive`]: Terminal prompts
//! - [`util`]: Formatting helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vector_cli::api::{ClientConfig, VectorClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = VectorClient::with_default_transport(ClientConfig::new("my-key"))?;
//! for env in client.environments().list("site-1", 1, 15).await? {
//!     println!("{} {:?}", env.id, env.name);
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// The Vector Pro API client.
///
/// Request building, transport, decoding, error classification and envelope
/// handling, plus one wrapper per resource.
pub mod api;

/// API key resolution.
///
/// The `VECTOR_API_KEY` environment variable wins over the stored
/// credential.
pub mod auth;

/// Configuration file management.
///
/// Two JSON files live in the config directory:
/// - `config.json`: settings such as `api_url`
/// - `credentials.json`: the stored API key, owner-readable only
pub mod config;

/// Everything one command invocation needs.
pub mod context;

/// Output formatting for human and machine readers.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Utility functions and helpers.
pub mod util;

/// Re-export of the main CLI struct.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use vector_cli::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

pub use config::Config;

/// Name of the CLI binary.
pub const APP_NAME: &str = "vector";

/// Crate version from Cargo.toml.
///
/// # Example
///
/// ```rust
/// use vector_cli::VERSION;
///
/// println!("vector version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Scripts can branch on these instead of parsing stderr.
///
/// | Code | Meaning |
/// |------|---------|
/// | 0 | Success |
/// | 1 | General error |
/// | 2 | Authentication or authorization failure |
/// | 3 | Validation failure |
/// | 4 | Resource not found |
/// | 5 | Network failure or server error |
///
/// # Example
///
/// ```rust
/// use vector_cli::exit_codes;
///
/// assert_eq!(exit_codes::for_status(404), exit_codes::NOT_FOUND);
/// assert_eq!(exit_codes::for_status(503), exit_codes::NETWORK_ERROR);
/// ```
pub mod exit_codes {
    /// The command completed without errors.
    pub const SUCCESS: i32 = 0;

    /// An unspecified error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// No API key, or the platform rejected it (401/403).
    ///
    /// Run `vector auth login` or set `VECTOR_API_KEY`.
    pub const AUTH_ERROR: i32 = 2;

    /// Invalid input, either caught locally or rejected with 422.
    pub const VALIDATION_ERROR: i32 = 3;

    /// The requested resource does not exist (404).
    pub const NOT_FOUND: i32 = 4;

    /// The platform could not be reached or answered with 5xx.
    pub const NETWORK_ERROR: i32 = 5;

    /// Maps an HTTP error status to an exit code.
    pub fn for_status(status: u16) -> i32 {
        match status {
            401 | 403 => AUTH_ERROR,
            404 => NOT_FOUND,
            422 => VALIDATION_ERROR,
            s if s >= 500 => NETWORK_ERROR,
            _ => ERROR,
        }
    }
}

/// Picks the exit code for a failed command.
///
/// Looks through the error chain for a [`api::ClientError`], a missing
/// credential or a local validation failure; anything else is
/// [`exit_codes::ERROR`].
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(client_error) = cause.downcast_ref::<api::ClientError>() {
            return client_error.exit_code();
        }
        if let Some(api_error) = cause.downcast_ref::<api::ApiError>() {
            return exit_codes::for_status(api_error.status_code());
        }
        if cause.downcast_ref::<auth::AuthError>().is_some() {
            return exit_codes::AUTH_ERROR;
        }
        if let Some(cli::Exit(code)) = cause.downcast_ref::<cli::Exit>() {
            return *code;
        }
        if cause.downcast_ref::<cli::ValidationError>().is_some() {
            return exit_codes::VALIDATION_ERROR;
        }
    }
    exit_codes::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(exit_codes::for_status(401), exit_codes::AUTH_ERROR);
        assert_eq!(exit_codes::for_status(403), exit_codes::AUTH_ERROR);
        assert_eq!(exit_codes::for_status(404), exit_codes::NOT_FOUND);
        assert_eq!(exit_codes::for_status(422), exit_codes::VALIDATION_ERROR);
        assert_eq!(exit_codes::for_status(500), exit_codes::NETWORK_ERROR);
        assert_eq!(exit_codes::for_status(418), exit_codes::ERROR);
    }

    #[test]
    fn test_exit_code_through_context() {
        let api = api::ApiError::from_response(404, &serde_json::json!({"message": "gone"}));
        let err = anyhow::Error::new(api::ClientError::from(api)).context("fetching site");
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&plain), exit_codes::ERROR);
    }

    #[test]
    fn test_exit_code_for_local_failures() {
        let missing = anyhow::Error::new(auth::AuthError::NotAuthenticated);
        assert_eq!(exit_code_for(&missing), exit_codes::AUTH_ERROR);

        let invalid = anyhow::Error::new(cli::ValidationError::new("--name is required"));
        assert_eq!(exit_code_for(&invalid), exit_codes::VALIDATION_ERROR);
    }
}
