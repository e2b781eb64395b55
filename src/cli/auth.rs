//
//  vector-cli
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands for the Vector CLI.
//!
//! The API key is stored in `credentials.json` in the config directory.
//! `VECTOR_API_KEY` takes precedence over the stored key when set.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::json;
use tracing::debug;

use crate::api::request::Query;
use crate::auth::{mask_token, read_token_from_stdin, validate_token, API_KEY_ENV};
use crate::context::CommandContext;
use crate::interactive::{prompt_password, stdin_is_tty};

use super::{Exit, GlobalOptions, ValidationError};

/// Authenticate with Vector Pro.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Store an API token
    Login(LoginArgs),

    /// Remove the stored API token
    Logout,

    /// Show authentication status
    Status(StatusArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// API token, or `-` to read it from stdin
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the masked token
    #[arg(long)]
    pub show_token: bool,

    /// Check the token against the API
    #[arg(long)]
    pub verify: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut ctx = CommandContext::new(global);
        match &self.command {
            AuthSubcommand::Login(args) => login(&mut ctx, args),
            AuthSubcommand::Logout => logout(&mut ctx),
            AuthSubcommand::Status(args) => status(&ctx, args).await,
        }
    }
}

fn login(ctx: &mut CommandContext, args: &LoginArgs) -> Result<()> {
    let token = resolve_token(args.token.as_deref())?.ok_or_else(|| {
        ValidationError::new("No token provided. Use --token=<token> or pipe token via stdin.")
    })?;

    if !validate_token(&token) {
        return Err(ValidationError::new("Invalid token format").into());
    }

    ctx.credentials
        .set_api_token(&token)
        .context("Failed to store API token")?;
    debug!(path = %ctx.credentials.path().display(), "stored API token");

    if ctx.output.is_json() {
        ctx.output
            .write_json(&json!({"success": true, "message": "Successfully authenticated"}), None)
    } else {
        ctx.output
            .write_success("Successfully authenticated. Token stored securely.");
        Ok(())
    }
}

/// `--token T` wins; `--token -` or piped stdin reads a line; a terminal
/// gets a masked prompt.
fn resolve_token(flag: Option<&str>) -> Result<Option<String>> {
    match flag {
        Some("-") => read_token_from_stdin(),
        Some(token) => Ok(Some(token.trim().to_string()).filter(|t| !t.is_empty())),
        None if !stdin_is_tty() => read_token_from_stdin(),
        None => {
            let token = prompt_password("Enter your API token")?;
            Ok(Some(token.trim().to_string()).filter(|t| !t.is_empty()))
        }
    }
}

fn logout(ctx: &mut CommandContext) -> Result<()> {
    if !ctx.credentials.has_api_token() {
        return if ctx.output.is_json() {
            ctx.output
                .write_json(&json!({"success": true, "message": "Already logged out"}), None)
        } else {
            ctx.output
                .write_warning("No stored credentials found. Already logged out.");
            Ok(())
        };
    }

    ctx.credentials
        .remove_api_token()
        .context("Failed to remove stored credentials")?;

    if ctx.output.is_json() {
        ctx.output
            .write_json(&json!({"success": true, "message": "Successfully logged out"}), None)?;
    } else {
        ctx.output
            .write_success("Successfully logged out. Credentials removed.");
    }

    if std::env::var(API_KEY_ENV).is_ok_and(|v| !v.is_empty()) && !ctx.output.is_json() {
        ctx.output
            .write_warning(&format!("{API_KEY_ENV} is still set and will be used."));
    }
    Ok(())
}

async fn status(ctx: &CommandContext, args: &StatusArgs) -> Result<()> {
    let Some(resolved) = ctx.api_key() else {
        if ctx.output.is_json() {
            ctx.output
                .write_json(&json!({"authenticated": false, "source": null}), None)?;
        } else {
            println!("Not authenticated.");
            println!();
            println!("To authenticate, either:");
            println!("  - Run: vector auth login");
            println!("  - Set: {API_KEY_ENV} environment variable");
        }
        return Err(Exit(crate::exit_codes::AUTH_ERROR).into());
    };

    if args.verify {
        let client = ctx.client_with_key(&resolved.key)?;
        client
            .get("/api/v1/vector/sites", &Query::pagination(1, 1))
            .await
            .context("Token verification failed")?;
    }

    if ctx.output.is_json() {
        let mut data = json!({
            "authenticated": true,
            "source": resolved.source.to_string(),
            "api_url": ctx.api_url(),
        });
        if args.show_token {
            data["token"] = json!(mask_token(&resolved.key));
        }
        if args.verify {
            data["verified"] = json!(true);
        }
        return ctx.output.write_json(&data, None);
    }

    ctx.output
        .write_success(&format!("Authenticated via {}", resolved.source));
    println!("  API: {}", ctx.api_url());
    if args.show_token {
        println!("  Token: {}", mask_token(&resolved.key));
    }
    if args.verify {
        println!("  Token verified");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_token_from_flag() {
        let token = resolve_token(Some("  abc123  ")).unwrap();
        assert_eq!(token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_resolve_blank_flag_is_none() {
        assert_eq!(resolve_token(Some("   ")).unwrap(), None);
    }
}
