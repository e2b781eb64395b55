//
//  vector-cli
//  cli/ssl.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! SSL certificate commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::CommandContext;

use super::deploy::TargetArgs;
use super::{write_action, write_detail, GlobalOptions};

const STATUS_LABELS: &[(&str, &str)] = &[
    ("status", "Status"),
    ("issuer", "Issuer"),
    ("domains", "Domains"),
    ("issued_at", "Issued"),
    ("expires_at", "Expires"),
];

/// Manage SSL certificates
#[derive(Args, Debug)]
pub struct SslCommand {
    #[command(subcommand)]
    pub command: SslSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SslSubcommand {
    /// Show certificate status
    Status(TargetArgs),

    /// Ask the platform to retry certificate provisioning
    Nudge(TargetArgs),
}

impl SslCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        let client = ctx.client()?;

        match &self.command {
            SslSubcommand::Status(args) => {
                let status = client.ssl().status(&args.site, &args.env).await?;
                write_detail(&ctx.output, &status, Some(STATUS_LABELS))
            }
            SslSubcommand::Nudge(args) => {
                let response = client.ssl().nudge(&args.site, &args.env).await?;
                write_action(
                    &ctx.output,
                    &response,
                    "SSL renewal nudged successfully. Certificate will be renewed soon.",
                )
            }
        }
    }
}
