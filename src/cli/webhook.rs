//
//  vector-cli
//  cli/webhook.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook management commands.
//!
//! The signing secret is only returned by `create` and `rotate-secret`;
//! store it when it is shown.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::vector::WebhookRequest;
use crate::context::CommandContext;
use crate::output::Column;

use super::{
    confirm_destructive, require_changes, to_rows, write_action, write_detail, write_rows,
    GlobalOptions, PaginationArgs,
};

const LIST_COLUMNS: &[Column<'static>] = &[
    ("ID", "id"),
    ("URL", "url"),
    ("Events", "events"),
    ("Enabled", "enabled"),
];

const DETAIL_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("url", "URL"),
    ("type", "Type"),
    ("events", "Events"),
    ("enabled", "Enabled"),
    ("secret", "Secret"),
    ("created_at", "Created"),
];

const LOG_COLUMNS: &[Column<'static>] = &[
    ("ID", "id"),
    ("Event", "event"),
    ("Response", "response_status"),
    ("Sent At", "created_at"),
];

/// Manage webhooks
#[derive(Args, Debug)]
pub struct WebhookCommand {
    #[command(subcommand)]
    pub command: WebhookSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WebhookSubcommand {
    /// List webhooks
    #[command(visible_alias = "ls")]
    List(PaginationArgs),

    /// Show webhook details
    #[command(visible_alias = "view")]
    Show(WebhookIdArgs),

    /// Create a webhook
    Create(CreateArgs),

    /// Update a webhook
    Update(UpdateArgs),

    /// Delete a webhook
    Delete(DeleteArgs),

    /// Generate a new signing secret
    #[command(name = "rotate-secret")]
    RotateSecret(WebhookIdArgs),

    /// Show recent deliveries
    Logs(LogsArgs),
}

#[derive(Args, Debug)]
pub struct WebhookIdArgs {
    /// Webhook ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Receiver URL
    #[arg(long)]
    pub url: String,

    /// Events to subscribe to (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub events: Vec<String>,

    /// Delivery format, e.g. http or slack
    #[arg(long = "type")]
    pub webhook_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Webhook ID
    pub id: String,

    #[arg(long)]
    pub url: Option<String>,

    /// Events to subscribe to (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub events: Option<Vec<String>>,

    #[arg(long = "type")]
    pub webhook_type: Option<String>,

    /// Resume deliveries
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Pause deliveries
    #[arg(long)]
    pub disable: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Webhook ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Webhook ID
    pub id: String,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

impl UpdateArgs {
    fn enabled(&self) -> Option<bool> {
        match (self.enable, self.disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl WebhookCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        match &self.command {
            WebhookSubcommand::List(args) => {
                let page = ctx.client()?.webhooks().list(args.page(), args.per_page()).await?;
                write_rows(
                    &ctx.output,
                    to_rows(&page.items)?,
                    LIST_COLUMNS,
                    Some(&page.meta),
                    "No webhooks found.",
                )
            }
            WebhookSubcommand::Show(args) => {
                let webhook = ctx.client()?.webhooks().get(&args.id).await?;
                write_detail(&ctx.output, &webhook, Some(DETAIL_LABELS))
            }
            WebhookSubcommand::Create(args) => {
                let request = WebhookRequest {
                    url: Some(args.url.clone()),
                    events: Some(args.events.clone()),
                    webhook_type: args.webhook_type.clone(),
                    enabled: None,
                };
                let webhook = ctx.client()?.webhooks().create(&request).await?;
                if !ctx.output.is_json() {
                    ctx.output
                        .write_success(&format!(
                            "Webhook created successfully (ID: {})",
                            webhook.id
                        ));
                    println!();
                }
                write_detail(&ctx.output, &webhook, Some(DETAIL_LABELS))
            }
            WebhookSubcommand::Update(args) => {
                let request = WebhookRequest {
                    url: args.url.clone(),
                    events: args.events.clone(),
                    webhook_type: args.webhook_type.clone(),
                    enabled: args.enabled(),
                };
                require_changes(&request, "--url, --events, --type, --enable, or --disable")?;

                let webhook = ctx.client()?.webhooks().update(&args.id, &request).await?;
                if !ctx.output.is_json() {
                    ctx.output.write_success("Webhook updated successfully.");
                    println!();
                }
                write_detail(&ctx.output, &webhook, Some(DETAIL_LABELS))
            }
            WebhookSubcommand::Delete(args) => {
                let prompt = format!("Are you sure you want to delete webhook {}?", args.id);
                if !confirm_destructive(&prompt, args.force, &ctx.output)? {
                    return Ok(());
                }
                let response = ctx.client()?.webhooks().delete(&args.id).await?;
                write_action(&ctx.output, &response, "Webhook deleted successfully.")
            }
            WebhookSubcommand::RotateSecret(args) => {
                let webhook = ctx.client()?.webhooks().rotate_secret(&args.id).await?;
                if !ctx.output.is_json() {
                    ctx.output
                        .write_success("Secret rotated. Update your receiver with the new secret.");
                    println!();
                }
                write_detail(&ctx.output, &webhook, Some(DETAIL_LABELS))
            }
            WebhookSubcommand::Logs(args) => {
                let page = ctx
                    .client()?
                    .webhooks()
                    .logs(&args.id, args.pagination.page(), args.pagination.per_page())
                    .await?;
                write_rows(
                    &ctx.output,
                    to_rows(&page.items)?,
                    LOG_COLUMNS,
                    Some(&page.meta),
                    "No deliveries found.",
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse_update(args: &[&str]) -> UpdateArgs {
        let argv = [&["vector", "webhook", "update", "wh_1"][..], args].concat();
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Webhook(WebhookCommand {
                command: WebhookSubcommand::Update(update),
            }) => update,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_enabled_flags() {
        assert_eq!(parse_update(&["--enable"]).enabled(), Some(true));
        assert_eq!(parse_update(&["--disable"]).enabled(), Some(false));
        assert_eq!(parse_update(&[]).enabled(), None);
    }

    #[test]
    fn test_events_split_on_commas() {
        let update = parse_update(&["--events", "site.created,deployment.finished"]);
        assert_eq!(
            update.events,
            Some(vec!["site.created".to_string(), "deployment.finished".to_string()])
        );
    }
}
