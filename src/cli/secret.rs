//
//  vector-cli
//  cli/secret.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Secret management commands
//!
//! Secrets live either on one environment (`--site` and `--env`) or on the
//! account, shared by every site.
//!
//! ## Examples
//!
//! ```bash
//! # List environment secrets
//! vector secret list --site 42 --env production
//!
//! # Show one global secret
//! vector secret show sec_123
//!
//! # Create a global secret, reading the value from stdin
//! echo "s3cr3t" | vector secret create STRIPE_KEY
//!
//! # Delete a secret
//! vector secret delete sec_123 --site 42 --env production --force
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::auth::read_token_from_stdin;
use crate::context::CommandContext;
use crate::interactive::{prompt_password, stdin_is_tty};
use crate::output::Column;

use super::{
    confirm_destructive, to_rows, write_action, write_detail, write_rows, GlobalOptions,
    PaginationArgs, ValidationError,
};

const LIST_COLUMNS: &[Column<'static>] = &[
    ("ID", "id"),
    ("Name", "name"),
    ("Created", "created_at"),
    ("Updated", "updated_at"),
];

const DETAIL_LABELS: &[(&str, &str)] = &[("id", "ID"), ("name", "Name"), ("updated_at", "Updated")];

const SHOW_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("name", "Name"),
    ("created_at", "Created"),
    ("updated_at", "Updated"),
];

/// Manage secrets
#[derive(Args, Debug)]
pub struct SecretCommand {
    #[command(subcommand)]
    pub command: SecretSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SecretSubcommand {
    /// List secrets
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a secret's details
    #[command(visible_alias = "get")]
    Show(ShowArgs),

    /// Create a secret
    Create(CreateArgs),

    /// Change a secret's value
    Update(UpdateArgs),

    /// Delete a secret
    Delete(DeleteArgs),
}

/// `--site` and `--env` together select environment scope.
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Site ID (environment scope)
    #[arg(long, requires = "env")]
    pub site: Option<String>,

    /// Environment ID (environment scope)
    #[arg(long, requires = "site")]
    pub env: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Scope<'a> {
    Global,
    Environment { site: &'a str, env: &'a str },
}

impl ScopeArgs {
    fn scope(&self) -> Result<Scope<'_>, ValidationError> {
        match (self.site.as_deref(), self.env.as_deref()) {
            (Some(site), Some(env)) => Ok(Scope::Environment { site, env }),
            (None, None) => Ok(Scope::Global),
            _ => Err(ValidationError::new(
                "--site and --env must be given together for environment secrets.",
            )),
        }
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Secret ID
    pub id: String,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Secret name
    pub name: String,

    /// Secret value (prompted for, or read from stdin, when omitted)
    #[arg(long)]
    pub value: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Secret ID
    pub id: String,

    /// New value (prompted for, or read from stdin, when omitted)
    #[arg(long)]
    pub value: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Secret ID
    pub id: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl SecretCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        match &self.command {
            SecretSubcommand::List(args) => self.list(&ctx, args).await,
            SecretSubcommand::Show(args) => self.show(&ctx, args).await,
            SecretSubcommand::Create(args) => self.create(&ctx, args).await,
            SecretSubcommand::Update(args) => self.update(&ctx, args).await,
            SecretSubcommand::Delete(args) => self.delete(&ctx, args).await,
        }
    }

    async fn list(&self, ctx: &CommandContext, args: &ListArgs) -> Result<()> {
        let scope = args.scope.scope()?;
        let client = ctx.client()?;

        match scope {
            Scope::Environment { site, env } => {
                let secrets = client.secrets().list(site, env).await?;
                write_rows(&ctx.output, to_rows(&secrets)?, LIST_COLUMNS, None, "No secrets found.")
            }
            Scope::Global => {
                let page = client
                    .global_secrets()
                    .list(args.pagination.page(), args.pagination.per_page())
                    .await?;
                write_rows(
                    &ctx.output,
                    to_rows(&page.items)?,
                    LIST_COLUMNS,
                    Some(&page.meta),
                    "No secrets found.",
                )
            }
        }
    }

    async fn show(&self, ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
        let scope = args.scope.scope()?;
        let client = ctx.client()?;

        let secret = match scope {
            Scope::Environment { site, env } => client.secrets().get(site, env, &args.id).await?,
            Scope::Global => client.global_secrets().get(&args.id).await?,
        };
        write_detail(&ctx.output, &secret, Some(SHOW_LABELS))
    }

    async fn create(&self, ctx: &CommandContext, args: &CreateArgs) -> Result<()> {
        let scope = args.scope.scope()?;
        let value = resolve_value(args.value.as_deref())?;
        let client = ctx.client()?;

        let secret = match scope {
            Scope::Environment { site, env } => {
                client.secrets().create(site, env, &args.name, &value).await?
            }
            Scope::Global => client.global_secrets().create(&args.name, &value).await?,
        };

        if !ctx.output.is_json() {
            ctx.output
                .write_success(&format!("Secret created successfully (ID: {})", secret.id));
            println!();
        }
        write_detail(&ctx.output, &secret, Some(DETAIL_LABELS))
    }

    async fn update(&self, ctx: &CommandContext, args: &UpdateArgs) -> Result<()> {
        let scope = args.scope.scope()?;
        let value = resolve_value(args.value.as_deref())?;
        let client = ctx.client()?;

        let secret = match scope {
            Scope::Environment { site, env } => {
                client.secrets().update(site, env, &args.id, &value).await?
            }
            Scope::Global => client.global_secrets().update(&args.id, &value).await?,
        };

        if !ctx.output.is_json() {
            ctx.output.write_success("Secret updated successfully.");
            println!();
        }
        write_detail(&ctx.output, &secret, Some(DETAIL_LABELS))
    }

    async fn delete(&self, ctx: &CommandContext, args: &DeleteArgs) -> Result<()> {
        let scope = args.scope.scope()?;
        let prompt = format!("Are you sure you want to delete secret {}?", args.id);
        if !confirm_destructive(&prompt, args.force, &ctx.output)? {
            return Ok(());
        }

        let client = ctx.client()?;
        let response = match scope {
            Scope::Environment { site, env } => client.secrets().delete(site, env, &args.id).await?,
            Scope::Global => client.global_secrets().delete(&args.id).await?,
        };
        write_action(&ctx.output, &response, "Secret deleted successfully.")
    }
}

/// `--value`, else a masked prompt on a terminal, else all of stdin, trimmed.
fn resolve_value(flag: Option<&str>) -> Result<String> {
    let value = match flag {
        Some(value) => Some(value.to_string()),
        None if stdin_is_tty() => Some(prompt_password("Secret value")?),
        None => read_token_from_stdin()?,
    };

    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            ValidationError::new("No secret value provided. Use --value or pipe it via stdin.")
                .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_selection() {
        let global = ScopeArgs::default();
        assert_eq!(global.scope().unwrap(), Scope::Global);

        let env = ScopeArgs {
            site: Some("42".to_string()),
            env: Some("production".to_string()),
        };
        assert_eq!(
            env.scope().unwrap(),
            Scope::Environment {
                site: "42",
                env: "production"
            }
        );
    }

    #[test]
    fn test_partial_scope_is_rejected() {
        let half = ScopeArgs {
            site: Some("42".to_string()),
            env: None,
        };
        assert!(half.scope().is_err());
    }

    #[test]
    fn test_value_flag_used_verbatim() {
        assert_eq!(resolve_value(Some(" keep spaces ")).unwrap(), " keep spaces ");
        assert!(resolve_value(Some("")).is_err());
    }
}
