//
//  vector-cli
//  cli/event.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account event log.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::vector::EventFilter;
use crate::context::CommandContext;
use crate::output::Column;

use super::{to_rows, write_rows, GlobalOptions, PaginationArgs};

const LIST_COLUMNS: &[Column<'static>] = &[
    ("ID", "id"),
    ("Event", "event"),
    ("Model", "model_type"),
    ("Model ID", "model_id"),
    ("Actor", "actor.token_name"),
    ("IP", "actor.ip"),
    ("Occurred", "occurred_at"),
];

/// Browse account events
#[derive(Args, Debug)]
pub struct EventCommand {
    #[command(subcommand)]
    pub command: EventSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EventSubcommand {
    /// List events, newest first
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only events for this site
    #[arg(long)]
    pub site: Option<String>,

    /// Only events of this type, e.g. site.created
    #[arg(long = "type")]
    pub event_type: Option<String>,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

impl EventCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        match &self.command {
            EventSubcommand::List(args) => {
                let filter = EventFilter {
                    site_id: args.site.clone(),
                    event_type: args.event_type.clone(),
                };
                let page = ctx
                    .client()?
                    .events()
                    .list(args.pagination.page(), args.pagination.per_page(), &filter)
                    .await?;
                write_rows(
                    &ctx.output,
                    to_rows(&page.items)?,
                    LIST_COLUMNS,
                    Some(&page.meta),
                    "No events found.",
                )
            }
        }
    }
}
