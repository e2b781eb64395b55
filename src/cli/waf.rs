//
//  vector-cli
//  cli/waf.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Web application firewall commands
//!
//! ## Examples
//!
//! ```bash
//! # Allow hotlinking from a partner domain
//! vector waf referrers add partner.example.com --site 42
//!
//! # Block an address
//! vector waf blocked-ips add 203.0.113.7 --site 42
//!
//! # Limit login attempts
//! vector waf rate-limits set --site 42 --path /wp-login.php --requests-per-second 2
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::vector::{RateLimitRequest, WafRuleKind};
use crate::context::CommandContext;
use crate::output::Column;

use super::{
    confirm_destructive, require_changes, to_rows, write_action, write_detail, write_rows,
    GlobalOptions,
};

const RATE_LIMIT_COLUMNS: &[Column<'static>] = &[
    ("ID", "id"),
    ("Path", "path"),
    ("Req/s", "requests_per_second"),
    ("Block (s)", "block_duration"),
];

const RATE_LIMIT_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("path", "Path"),
    ("requests_per_second", "Requests/second"),
    ("block_duration", "Block Duration"),
];

/// Manage WAF rules
#[derive(Args, Debug)]
pub struct WafCommand {
    #[command(subcommand)]
    pub command: WafSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WafSubcommand {
    /// Referrers allowed to embed site assets
    Referrers(RuleCommand),

    /// Referrers denied access
    #[command(name = "blocked-referrers")]
    BlockedReferrers(RuleCommand),

    /// IP addresses denied access
    #[command(name = "blocked-ips")]
    BlockedIps(RuleCommand),

    /// Per-path request rate limits
    #[command(name = "rate-limits")]
    RateLimits(RateLimitCommand),
}

#[derive(Args, Debug)]
pub struct RuleCommand {
    #[command(subcommand)]
    pub command: RuleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RuleSubcommand {
    /// List rules
    #[command(visible_alias = "ls")]
    List(SiteArgs),

    /// Add a hostname or IP
    Add(AddRuleArgs),

    /// Remove a rule by ID
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
pub struct SiteArgs {
    /// Site ID
    #[arg(long)]
    pub site: String,
}

#[derive(Args, Debug)]
pub struct AddRuleArgs {
    /// Hostname, or IP address for blocked-ips
    pub value: String,

    /// Site ID
    #[arg(long)]
    pub site: String,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Rule ID
    pub id: String,

    /// Site ID
    #[arg(long)]
    pub site: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RateLimitCommand {
    #[command(subcommand)]
    pub command: RateLimitSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RateLimitSubcommand {
    /// List rate limits
    #[command(visible_alias = "ls")]
    List(SiteArgs),

    /// Show one rate limit
    Show(RemoveArgs),

    /// Create a rate limit, update one with --id, or replace all with --settings
    Set(SetArgs),

    /// Delete a rate limit
    Delete(RemoveArgs),
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Site ID
    #[arg(long)]
    pub site: String,

    /// Update this rule instead of creating one
    #[arg(long)]
    pub id: Option<String>,

    /// Path the limit applies to
    #[arg(long)]
    pub path: Option<String>,

    /// Requests allowed per second
    #[arg(long)]
    pub requests_per_second: Option<u64>,

    /// Seconds a client stays blocked
    #[arg(long)]
    pub block_duration: Option<u64>,

    /// Full rate-limit settings as JSON, replacing the current set
    #[arg(long, conflicts_with_all = ["id", "path", "requests_per_second", "block_duration"])]
    pub settings: Option<String>,
}

impl WafCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        match &self.command {
            WafSubcommand::Referrers(cmd) => cmd.run(&ctx, WafRuleKind::AllowedReferrers).await,
            WafSubcommand::BlockedReferrers(cmd) => {
                cmd.run(&ctx, WafRuleKind::BlockedReferrers).await
            }
            WafSubcommand::BlockedIps(cmd) => cmd.run(&ctx, WafRuleKind::BlockedIps).await,
            WafSubcommand::RateLimits(cmd) => cmd.run(&ctx).await,
        }
    }
}

impl RuleCommand {
    async fn run(&self, ctx: &CommandContext, kind: WafRuleKind) -> Result<()> {
        let client = ctx.client()?;
        let waf = client.waf();
        let header = kind_label(kind);

        match &self.command {
            RuleSubcommand::List(args) => {
                let rules = waf.list(&args.site, kind).await?;
                let columns: [Column<'_>; 3] = [
                    ("ID", "id"),
                    (header, kind.value_key()),
                    ("Created", "created_at"),
                ];
                write_rows(&ctx.output, to_rows(&rules)?, &columns, None, "No rules found.")
            }
            RuleSubcommand::Add(args) => {
                let rule = waf.add(&args.site, kind, &args.value).await?;
                if !ctx.output.is_json() {
                    ctx.output
                        .write_success(&format!("Added {} to {kind}.", args.value));
                    println!();
                }
                let labels = [("id", "ID"), (kind.value_key(), header), ("created_at", "Created")];
                write_detail(&ctx.output, &rule, Some(&labels))
            }
            RuleSubcommand::Remove(args) => {
                let prompt = format!("Remove rule {} from {kind}?", args.id);
                if !confirm_destructive(&prompt, args.force, &ctx.output)? {
                    return Ok(());
                }
                let response = waf.remove(&args.site, kind, &args.id).await?;
                write_action(&ctx.output, &response, "Rule removed successfully.")
            }
        }
    }
}

impl RateLimitCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<()> {
        match &self.command {
            RateLimitSubcommand::List(args) => {
                let limits = ctx.client()?.waf().rate_limits(&args.site).await?;
                write_rows(
                    &ctx.output,
                    to_rows(&limits)?,
                    RATE_LIMIT_COLUMNS,
                    None,
                    "No rate limits configured.",
                )
            }
            RateLimitSubcommand::Show(args) => {
                let limit = ctx.client()?.waf().rate_limit(&args.site, &args.id).await?;
                write_detail(&ctx.output, &limit, Some(RATE_LIMIT_LABELS))
            }
            RateLimitSubcommand::Set(args) => self.set(ctx, args).await,
            RateLimitSubcommand::Delete(args) => {
                let prompt = format!("Delete rate limit {}?", args.id);
                if !confirm_destructive(&prompt, args.force, &ctx.output)? {
                    return Ok(());
                }
                let response = ctx
                    .client()?
                    .waf()
                    .delete_rate_limit(&args.site, &args.id)
                    .await?;
                write_action(&ctx.output, &response, "Rate limit deleted successfully.")
            }
        }
    }

    async fn set(&self, ctx: &CommandContext, args: &SetArgs) -> Result<()> {
        if let Some(settings) = &args.settings {
            let settings: Value = serde_json::from_str(settings)
                .map_err(|e| {
                    super::ValidationError::new(format!("--settings is not valid JSON: {e}"))
                })?;
            let response = ctx
                .client()?
                .waf()
                .set_rate_limits(&args.site, &settings)
                .await
                .context("Failed to replace rate limits")?;
            return write_action(&ctx.output, &response, "Rate limits updated successfully.");
        }

        let request = RateLimitRequest {
            path: args.path.clone(),
            requests_per_second: args.requests_per_second,
            block_duration: args.block_duration,
        };
        require_changes(&request, "--path, --requests-per-second, or --block-duration")?;

        let client = ctx.client()?;
        let limit = match &args.id {
            Some(id) => client.waf().update_rate_limit(&args.site, id, &request).await?,
            None => client.waf().create_rate_limit(&args.site, &request).await?,
        };

        if !ctx.output.is_json() {
            ctx.output.write_success("Rate limit saved.");
            println!();
        }
        write_detail(&ctx.output, &limit, Some(RATE_LIMIT_LABELS))
    }
}

fn kind_label(kind: WafRuleKind) -> &'static str {
    match kind {
        WafRuleKind::BlockedIps => "IP",
        _ => "Hostname",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_kind_label_follows_value_key() {
        assert_eq!(kind_label(WafRuleKind::BlockedIps), "IP");
        assert_eq!(kind_label(WafRuleKind::AllowedReferrers), "Hostname");
        assert_eq!(WafRuleKind::BlockedIps.value_key(), "ip");
    }

    #[test]
    fn test_settings_conflicts_with_fields() {
        let result = Cli::try_parse_from([
            "vector",
            "waf",
            "rate-limits",
            "set",
            "--site",
            "42",
            "--settings",
            "{}",
            "--path",
            "/",
        ]);
        assert!(result.is_err());
    }
}
