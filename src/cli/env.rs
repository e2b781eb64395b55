//
//  vector-cli
//  cli/env.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Environment commands.
//!
//! Every subcommand needs `--site`; environments are addressed by ID
//! within that site.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::vector::EnvironmentRequest;
use crate::context::CommandContext;
use crate::output::Column;

use super::site::print_password;
use super::{
    confirm_destructive, parse_php_version, require_changes, to_rows, write_action, write_detail,
    write_rows, GlobalOptions, PaginationArgs,
};

const LIST_COLUMNS: &[Column<'static>] = &[
    ("ID", "id"),
    ("Name", "name"),
    ("Type", "type"),
    ("Domain", "domain"),
    ("Status", "status"),
];

const DETAIL_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("name", "Name"),
    ("type", "Type"),
    ("domain", "Domain"),
    ("status", "Status"),
    ("php_version", "PHP Version"),
    ("git_branch", "Git Branch"),
    ("database_name", "Database"),
    ("created_at", "Created"),
    ("updated_at", "Updated"),
];

const SUMMARY_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("name", "Name"),
    ("type", "Type"),
    ("domain", "Domain"),
    ("status", "Status"),
];

/// Manage site environments
#[derive(Args, Debug)]
pub struct EnvCommand {
    #[command(subcommand)]
    pub command: EnvSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EnvSubcommand {
    /// List environments of a site
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show environment details
    #[command(visible_alias = "view")]
    Show(EnvIdArgs),

    /// Create an environment
    Create(CreateArgs),

    /// Update an environment
    Update(UpdateArgs),

    /// Delete an environment
    Delete(DeleteArgs),

    /// Suspend an environment
    Suspend(EnvIdArgs),

    /// Unsuspend an environment
    Unsuspend(EnvIdArgs),

    /// Reset the environment database password
    #[command(name = "reset-db-password")]
    ResetDbPassword(EnvIdArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Site ID
    #[arg(long)]
    pub site: String,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

#[derive(Args, Debug)]
pub struct EnvIdArgs {
    /// Environment ID
    pub id: String,

    /// Site ID
    #[arg(long)]
    pub site: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Site ID
    #[arg(long)]
    pub site: String,

    /// Environment name
    #[arg(long)]
    pub name: String,

    /// Environment type (staging, production)
    #[arg(long = "type", default_value = "staging")]
    pub env_type: String,

    /// Environment domain
    #[arg(long)]
    pub domain: Option<String>,

    /// Git branch
    #[arg(long)]
    pub git_branch: Option<String>,

    /// PHP version (8.1, 8.2, 8.3 or 8.4)
    #[arg(long)]
    pub php_version: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Environment ID
    pub id: String,

    /// Site ID
    #[arg(long)]
    pub site: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub domain: Option<String>,

    #[arg(long)]
    pub git_branch: Option<String>,

    #[arg(long)]
    pub php_version: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Environment ID
    pub id: String,

    /// Site ID
    #[arg(long)]
    pub site: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl EnvCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        match &self.command {
            EnvSubcommand::List(args) => self.list(&ctx, args).await,
            EnvSubcommand::Show(args) => {
                let env = ctx.client()?.environments().get(&args.site, &args.id).await?;
                write_detail(&ctx.output, &env, Some(DETAIL_LABELS))
            }
            EnvSubcommand::Create(args) => self.create(&ctx, args).await,
            EnvSubcommand::Update(args) => self.update(&ctx, args).await,
            EnvSubcommand::Delete(args) => self.delete(&ctx, args).await,
            EnvSubcommand::Suspend(args) => {
                let response = ctx.client()?.environments().suspend(&args.site, &args.id).await?;
                write_action(&ctx.output, &response, "Environment suspended successfully.")
            }
            EnvSubcommand::Unsuspend(args) => {
                let response = ctx
                    .client()?
                    .environments()
                    .unsuspend(&args.site, &args.id)
                    .await?;
                write_action(&ctx.output, &response, "Environment unsuspended successfully.")
            }
            EnvSubcommand::ResetDbPassword(args) => {
                let response = ctx
                    .client()?
                    .environments()
                    .reset_database_password(&args.site, &args.id)
                    .await?;
                print_password(&ctx, &response, &["password", "database_password"])
            }
        }
    }

    async fn list(&self, ctx: &CommandContext, args: &ListArgs) -> Result<()> {
        let page = ctx
            .client()?
            .environments()
            .list(&args.site, args.pagination.page(), args.pagination.per_page())
            .await?;

        write_rows(
            &ctx.output,
            to_rows(&page.items)?,
            LIST_COLUMNS,
            Some(&page.meta),
            "No environments found.",
        )
    }

    async fn create(&self, ctx: &CommandContext, args: &CreateArgs) -> Result<()> {
        let request = EnvironmentRequest {
            name: Some(args.name.clone()),
            environment_type: Some(args.env_type.clone()),
            domain: args.domain.clone(),
            git_branch: args.git_branch.clone(),
            php_version: parse_php_version(args.php_version.as_deref())?,
            ..Default::default()
        };

        let env = ctx.client()?.environments().create(&args.site, &request).await?;

        if !ctx.output.is_json() {
            ctx.output
                .write_success(&format!("Environment created successfully (ID: {})", env.id));
            println!();
        }
        write_detail(&ctx.output, &env, Some(SUMMARY_LABELS))
    }

    async fn update(&self, ctx: &CommandContext, args: &UpdateArgs) -> Result<()> {
        let request = EnvironmentRequest {
            name: args.name.clone(),
            domain: args.domain.clone(),
            git_branch: args.git_branch.clone(),
            php_version: parse_php_version(args.php_version.as_deref())?,
            ..Default::default()
        };
        require_changes(&request, "--name, --domain, --git-branch, or --php-version")?;

        let env = ctx
            .client()?
            .environments()
            .update(&args.site, &args.id, &request)
            .await?;

        if !ctx.output.is_json() {
            ctx.output.write_success("Environment updated successfully.");
            println!();
        }
        write_detail(&ctx.output, &env, Some(SUMMARY_LABELS))
    }

    async fn delete(&self, ctx: &CommandContext, args: &DeleteArgs) -> Result<()> {
        let prompt = format!(
            "Are you sure you want to delete environment {}? This action cannot be undone.",
            args.id
        );
        if !confirm_destructive(&prompt, args.force, &ctx.output)? {
            return Ok(());
        }

        let response = ctx.client()?.environments().delete(&args.site, &args.id).await?;
        write_action(&ctx.output, &response, "Environment deleted successfully.")
    }
}
