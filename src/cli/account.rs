//
//  vector-cli
//  cli/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `vector account`

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::CommandContext;

use super::{write_detail, GlobalOptions};

/// Show account details
#[derive(Args, Debug)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountSubcommand {
    /// Show the account summary
    Show,
}

impl AccountCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        match &self.command {
            AccountSubcommand::Show => {
                let summary = ctx.client()?.account().summary().await?;
                write_detail(&ctx.output, &summary, None)
            }
        }
    }
}
