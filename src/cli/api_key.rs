//
//  vector-cli
//  cli/api_key.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API key management commands.
//!
//! A new key's token is shown once, in the response to `api-key create`.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::vector::ApiKeyRequest;
use crate::context::CommandContext;
use crate::output::Column;

use super::{
    confirm_destructive, to_rows, write_action, write_detail, write_rows, GlobalOptions,
    PaginationArgs,
};

const LIST_COLUMNS: &[Column<'static>] =
    &[("ID", "id"), ("Name", "name"), ("Created", "created_at")];

/// Manage API keys
#[derive(Args, Debug)]
pub struct ApiKeyCommand {
    #[command(subcommand)]
    pub command: ApiKeySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ApiKeySubcommand {
    /// List API keys
    #[command(visible_alias = "ls")]
    List(PaginationArgs),

    /// Create an API key
    Create(CreateArgs),

    /// Revoke an API key
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Key name
    #[arg(long)]
    pub name: String,

    /// Scopes (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub scopes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Key ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl ApiKeyCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        match &self.command {
            ApiKeySubcommand::List(args) => {
                let page = ctx.client()?.api_keys().list(args.page(), args.per_page()).await?;
                write_rows(
                    &ctx.output,
                    to_rows(&page.items)?,
                    LIST_COLUMNS,
                    Some(&page.meta),
                    "No API keys found.",
                )
            }
            ApiKeySubcommand::Create(args) => {
                let request = ApiKeyRequest {
                    name: args.name.clone(),
                    scopes: args.scopes.clone(),
                };
                let key = ctx.client()?.api_keys().create(&request).await?;
                if !ctx.output.is_json() {
                    ctx.output
                        .write_success(&format!("API key created (ID: {})", key.id));
                    if key.token.is_some() {
                        ctx.output
                            .write_warning("Copy the token now. It will not be shown again.");
                    }
                    println!();
                }
                write_detail(
                    &ctx.output,
                    &key,
                    Some(&[
                        ("id", "ID"),
                        ("name", "Name"),
                        ("token", "Token"),
                        ("created_at", "Created"),
                    ]),
                )
            }
            ApiKeySubcommand::Delete(args) => {
                let prompt = format!("Are you sure you want to revoke API key {}?", args.id);
                if !confirm_destructive(&prompt, args.force, &ctx.output)? {
                    return Ok(());
                }
                let response = ctx.client()?.api_keys().delete(&args.id).await?;
                write_action(&ctx.output, &response, "API key deleted successfully.")
            }
        }
    }
}
