//
//  vector-cli
//  cli/php.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `vector php-versions`

use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use crate::context::CommandContext;

use super::GlobalOptions;

/// List supported PHP versions
#[derive(Args, Debug)]
pub struct PhpVersionsCommand {}

impl PhpVersionsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        let versions = ctx.client()?.php_versions().list().await?;

        if ctx.output.is_json() {
            let data = Value::Array(versions.into_iter().map(Value::String).collect());
            return ctx.output.write_json(&data, None);
        }

        let rows: Vec<Value> = versions.iter().map(|v| json!({ "version": v })).collect();
        ctx.output.write_list(&rows, &[("Version", "version")], None)
    }
}
