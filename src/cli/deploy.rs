//
//  vector-cli
//  cli/deploy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deployment commands
//!
//! ## Examples
//!
//! ```bash
//! # Recent deployments of an environment
//! vector deploy list --site 42 --env production
//!
//! # Deploy and roll back
//! vector deploy create --site 42 --env production
//! vector deploy rollback 981 --site 42 --env production
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::CommandContext;
use crate::output::Column;

use super::{to_rows, write_detail, write_rows, GlobalOptions, PaginationArgs};

const LIST_COLUMNS: &[Column<'static>] = &[
    ("ID", "id"),
    ("Status", "status"),
    ("Commit", "commit_sha"),
    ("Deployed At", "deployed_at"),
    ("Duration", "duration"),
];

const DETAIL_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("status", "Status"),
    ("commit_sha", "Commit SHA"),
    ("commit_message", "Commit Message"),
    ("branch", "Branch"),
    ("triggered_by", "Triggered By"),
    ("started_at", "Started At"),
    ("deployed_at", "Deployed At"),
    ("duration", "Duration"),
    ("created_at", "Created"),
];

const SUMMARY_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("status", "Status"),
    ("commit_sha", "Commit SHA"),
    ("branch", "Branch"),
];

/// Manage deployments
#[derive(Args, Debug)]
pub struct DeployCommand {
    #[command(subcommand)]
    pub command: DeploySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DeploySubcommand {
    /// List deployments of an environment
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show deployment details
    #[command(visible_alias = "view")]
    Show(DeploymentIdArgs),

    /// Start a deployment
    Create(TargetArgs),

    /// Roll back to a previous deployment
    Rollback(DeploymentIdArgs),
}

/// `--site` and `--env` selecting an environment.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Site ID
    #[arg(long)]
    pub site: String,

    /// Environment ID
    #[arg(long)]
    pub env: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

#[derive(Args, Debug)]
pub struct DeploymentIdArgs {
    /// Deployment ID
    pub id: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

impl DeployCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        let client = ctx.client()?;
        let deployments = client.deployments();

        match &self.command {
            DeploySubcommand::List(args) => {
                let page = deployments
                    .list(
                        &args.target.site,
                        &args.target.env,
                        args.pagination.page(),
                        args.pagination.per_page(),
                    )
                    .await?;
                write_rows(
                    &ctx.output,
                    to_rows(&page.items)?,
                    LIST_COLUMNS,
                    Some(&page.meta),
                    "No deployments found.",
                )
            }
            DeploySubcommand::Show(args) => {
                let deployment = deployments
                    .get(&args.target.site, &args.target.env, &args.id)
                    .await?;
                write_detail(&ctx.output, &deployment, Some(DETAIL_LABELS))
            }
            DeploySubcommand::Create(args) => {
                let deployment = deployments.create(&args.site, &args.env).await?;
                if !ctx.output.is_json() {
                    ctx.output
                        .write_success(&format!("Deployment initiated (ID: {})", deployment.id));
                    println!();
                }
                write_detail(&ctx.output, &deployment, Some(SUMMARY_LABELS))
            }
            DeploySubcommand::Rollback(args) => {
                let deployment = deployments
                    .rollback(&args.target.site, &args.target.env, &args.id)
                    .await?;
                if !ctx.output.is_json() {
                    ctx.output.write_success(&format!(
                        "Rollback initiated (ID: {})",
                        deployment.id
                    ));
                    println!();
                }
                write_detail(&ctx.output, &deployment, Some(SUMMARY_LABELS))
            }
        }
    }
}
