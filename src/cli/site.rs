//
//  vector-cli
//  cli/site.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site management commands
//!
//! ## Examples
//!
//! ```bash
//! # List sites
//! vector site list --per-page 50
//!
//! # Create a site
//! vector site create --name Blog --domain blog.example.com --php-version 8.3
//!
//! # Tail the error log
//! vector site logs 42 --type error --lines 200
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::vector::{LogOptions, SiteRequest};
use crate::context::CommandContext;
use crate::output::Column;

use super::{
    confirm_destructive, parse_php_version, require_changes, to_rows, write_action, write_detail,
    write_rows, GlobalOptions, PaginationArgs,
};

const LIST_COLUMNS: &[Column<'static>] = &[
    ("ID", "id"),
    ("Domain", "dev_domain"),
    ("Status", "status"),
    ("PHP", "dev_php_version"),
];

const DETAIL_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("dev_domain", "Domain"),
    ("status", "Status"),
    ("dev_php_version", "PHP Version"),
    ("partner_customer_id", "Customer ID"),
    ("vector_cluster_id", "Cluster ID"),
    ("tags", "Tags"),
    ("created_at", "Created"),
    ("updated_at", "Updated"),
];

const SUMMARY_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("dev_domain", "Domain"),
    ("status", "Status"),
    ("dev_php_version", "PHP Version"),
];

/// Manage sites
#[derive(Args, Debug)]
pub struct SiteCommand {
    #[command(subcommand)]
    pub command: SiteSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SiteSubcommand {
    /// List sites
    #[command(visible_alias = "ls")]
    List(PaginationArgs),

    /// Show site details
    #[command(visible_alias = "view")]
    Show(SiteIdArgs),

    /// Create a site
    Create(CreateArgs),

    /// Update a site
    Update(UpdateArgs),

    /// Delete a site
    Delete(DeleteArgs),

    /// Clone a site
    Clone(CloneArgs),

    /// Suspend a site
    Suspend(SiteIdArgs),

    /// Unsuspend a site
    Unsuspend(SiteIdArgs),

    /// Reset the SFTP password
    #[command(name = "reset-sftp-password")]
    ResetSftpPassword(SiteIdArgs),

    /// Reset the database password
    #[command(name = "reset-db-password")]
    ResetDbPassword(SiteIdArgs),

    /// Purge the site cache
    #[command(name = "purge-cache")]
    PurgeCache(PurgeCacheArgs),

    /// Show site logs
    Logs(LogsArgs),
}

#[derive(Args, Debug)]
pub struct SiteIdArgs {
    /// Site ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Site name
    #[arg(long)]
    pub name: String,

    /// Primary domain
    #[arg(long)]
    pub domain: String,

    /// PHP version (8.1, 8.2, 8.3 or 8.4)
    #[arg(long)]
    pub php_version: Option<String>,

    /// Git repository URL
    #[arg(long)]
    pub git_repository: Option<String>,

    /// Git branch to deploy
    #[arg(long, default_value = "main")]
    pub git_branch: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Site ID
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub domain: Option<String>,

    #[arg(long)]
    pub php_version: Option<String>,

    #[arg(long)]
    pub git_repository: Option<String>,

    #[arg(long)]
    pub git_branch: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Site ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Site ID to clone
    pub id: String,

    /// Customer reference for the copy
    #[arg(long)]
    pub customer_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct PurgeCacheArgs {
    /// Site ID
    pub id: String,

    /// Purge only these paths (repeatable)
    #[arg(long = "path")]
    pub paths: Vec<String>,
}

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Site ID
    pub id: String,

    /// Log type
    #[arg(long = "type", default_value = "error")]
    pub log_type: String,

    /// Number of lines
    #[arg(long, default_value_t = 100)]
    pub lines: u64,
}

impl SiteCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        match &self.command {
            SiteSubcommand::List(args) => self.list(&ctx, args).await,
            SiteSubcommand::Show(args) => self.show(&ctx, args).await,
            SiteSubcommand::Create(args) => self.create(&ctx, args).await,
            SiteSubcommand::Update(args) => self.update(&ctx, args).await,
            SiteSubcommand::Delete(args) => self.delete(&ctx, args).await,
            SiteSubcommand::Clone(args) => self.clone_site(&ctx, args).await,
            SiteSubcommand::Suspend(args) => {
                let response = ctx.client()?.sites().suspend(&args.id).await?;
                write_action(&ctx.output, &response, "Site suspended successfully.")
            }
            SiteSubcommand::Unsuspend(args) => {
                let response = ctx.client()?.sites().unsuspend(&args.id).await?;
                write_action(&ctx.output, &response, "Site unsuspended successfully.")
            }
            SiteSubcommand::ResetSftpPassword(args) => {
                let response = ctx.client()?.sites().reset_sftp_password(&args.id).await?;
                print_password(&ctx, &response, &["password", "sftp_password"])
            }
            SiteSubcommand::ResetDbPassword(args) => {
                let response = ctx.client()?.sites().reset_database_password(&args.id).await?;
                print_password(&ctx, &response, &["password", "database_password"])
            }
            SiteSubcommand::PurgeCache(args) => {
                let response = ctx.client()?.sites().purge_cache(&args.id, &args.paths).await?;
                write_action(&ctx.output, &response, "Cache purge requested.")
            }
            SiteSubcommand::Logs(args) => self.logs(&ctx, args).await,
        }
    }

    async fn list(&self, ctx: &CommandContext, args: &PaginationArgs) -> Result<()> {
        let client = ctx.client()?;
        let page = client
            .sites()
            .list(args.page(), args.per_page())
            .await
            .context("Failed to list sites")?;

        write_rows(
            &ctx.output,
            to_rows(&page.items)?,
            LIST_COLUMNS,
            Some(&page.meta),
            "No sites found.",
        )
    }

    async fn show(&self, ctx: &CommandContext, args: &SiteIdArgs) -> Result<()> {
        let site = ctx.client()?.sites().get(&args.id).await?;
        write_detail(&ctx.output, &site, Some(DETAIL_LABELS))
    }

    async fn create(&self, ctx: &CommandContext, args: &CreateArgs) -> Result<()> {
        let request = SiteRequest {
            name: Some(args.name.clone()),
            domain: Some(args.domain.clone()),
            php_version: parse_php_version(args.php_version.as_deref())?,
            git_repository: args.git_repository.clone(),
            git_branch: Some(args.git_branch.clone()),
            ..Default::default()
        };

        let site = ctx.client()?.sites().create(&request).await?;

        if !ctx.output.is_json() {
            ctx.output
                .write_success(&format!("Site created successfully (ID: {})", site.id));
            println!();
        }
        write_detail(&ctx.output, &site, Some(SUMMARY_LABELS))
    }

    async fn update(&self, ctx: &CommandContext, args: &UpdateArgs) -> Result<()> {
        let request = SiteRequest {
            name: args.name.clone(),
            domain: args.domain.clone(),
            php_version: parse_php_version(args.php_version.as_deref())?,
            git_repository: args.git_repository.clone(),
            git_branch: args.git_branch.clone(),
            ..Default::default()
        };
        require_changes(
            &request,
            "--name, --domain, --php-version, --git-repository, or --git-branch",
        )?;

        let site = ctx.client()?.sites().update(&args.id, &request).await?;

        if !ctx.output.is_json() {
            ctx.output.write_success("Site updated successfully.");
            println!();
        }
        write_detail(&ctx.output, &site, Some(SUMMARY_LABELS))
    }

    async fn delete(&self, ctx: &CommandContext, args: &DeleteArgs) -> Result<()> {
        let prompt = format!(
            "Are you sure you want to delete site {}? This action cannot be undone.",
            args.id
        );
        if !confirm_destructive(&prompt, args.force, &ctx.output)? {
            return Ok(());
        }

        let response = ctx.client()?.sites().delete(&args.id).await?;
        write_action(&ctx.output, &response, "Site deleted successfully.")
    }

    async fn clone_site(&self, ctx: &CommandContext, args: &CloneArgs) -> Result<()> {
        let site = ctx
            .client()?
            .sites()
            .clone_site(&args.id, args.customer_id.as_deref())
            .await?;

        if !ctx.output.is_json() {
            ctx.output
                .write_success(&format!("Site cloned successfully (ID: {})", site.id));
            println!();
        }
        write_detail(&ctx.output, &site, Some(SUMMARY_LABELS))
    }

    async fn logs(&self, ctx: &CommandContext, args: &LogsArgs) -> Result<()> {
        let options = LogOptions {
            log_type: Some(args.log_type.clone()),
            lines: Some(args.lines),
        };
        let response = ctx.client()?.sites().logs(&args.id, &options).await?;

        if ctx.output.is_json() {
            return ctx.output.write_json(&response, None);
        }

        match log_text(&response) {
            Some(text) => println!("{text}"),
            None => ctx.output.write_warning("No logs found."),
        }
        Ok(())
    }
}

/// Log output is either `logs` or `content`, a string or a list of lines.
fn log_text(response: &Value) -> Option<String> {
    let logs = response.get("logs").or_else(|| response.get("content"))?;
    let text = match logs {
        Value::String(s) => s.clone(),
        Value::Array(lines) => lines
            .iter()
            .map(|line| line.as_str().map(str::to_string).unwrap_or_else(|| line.to_string()))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => return None,
    };
    (!text.trim().is_empty()).then_some(text)
}

/// Shows a reset password from the first key present.
pub(super) fn print_password(ctx: &CommandContext, response: &Value, keys: &[&str]) -> Result<()> {
    if ctx.output.is_json() {
        return ctx.output.write_json(response, None);
    }

    let password = keys.iter().find_map(|key| response.get(*key).and_then(Value::as_str));
    match password {
        Some(password) => {
            ctx.output.write_success("Password reset successfully.");
            println!("New password: {password}");
        }
        None => ctx
            .output
            .write_success("Password reset successfully. Check your email for the new password."),
    }
    Ok(())
}
