//
//  vector-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes `config.json` in the config directory. Values that parse
//! as JSON (`true`, `30`) are stored as such; anything else is a string.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::{json, Value};

use crate::config::API_URL_KEY;
use crate::context::CommandContext;
use crate::output::format_value;

use super::{GlobalOptions, ValidationError};

/// Manage configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a configuration value
    Get(KeyArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Remove a configuration value
    Unset(KeyArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Print the config directory
    Path,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// New value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut ctx = CommandContext::new(global);
        match &self.command {
            ConfigSubcommand::Get(args) => get(&ctx, args),
            ConfigSubcommand::Set(args) => set(&mut ctx, args),
            ConfigSubcommand::Unset(args) => unset(&mut ctx, args),
            ConfigSubcommand::List => list(&ctx),
            ConfigSubcommand::Path => path(&ctx),
        }
    }
}

fn get(ctx: &CommandContext, args: &KeyArgs) -> Result<()> {
    let value = ctx.config.get(&args.key).cloned().unwrap_or(Value::Null);

    if ctx.output.is_json() {
        return ctx
            .output
            .write_json(&json!({ "key": args.key, "value": value }), None);
    }
    if !value.is_null() {
        println!("{}", format_value(&value));
    }
    Ok(())
}

fn set(ctx: &mut CommandContext, args: &SetArgs) -> Result<()> {
    let value = parse_value(&args.key, &args.value)?;
    ctx.config
        .set(args.key.as_str(), value.clone())
        .context("Failed to write config")?;

    if ctx.output.is_json() {
        ctx.output.write_json(
            &json!({ "success": true, "key": args.key, "value": value }),
            None,
        )
    } else {
        let color = ctx.output.color_enabled();
        let key = if color {
            style(&args.key).cyan().to_string()
        } else {
            args.key.clone()
        };
        ctx.output
            .write_success(&format!("Set {key} = {}", format_value(&value)));
        Ok(())
    }
}

fn unset(ctx: &mut CommandContext, args: &KeyArgs) -> Result<()> {
    let previous = ctx
        .config
        .remove(&args.key)
        .context("Failed to write config")?;

    if ctx.output.is_json() {
        return ctx.output.write_json(
            &json!({ "success": true, "key": args.key, "removed": previous.is_some() }),
            None,
        );
    }
    match previous {
        Some(_) => ctx.output.write_success(&format!("Unset {}", args.key)),
        None => ctx
            .output
            .write_warning(&format!("{} was not set", args.key)),
    }
    Ok(())
}

fn list(ctx: &CommandContext) -> Result<()> {
    let values = ctx.config.all();

    if ctx.output.is_json() {
        return ctx.output.write_json(&Value::Object(values.clone()), None);
    }
    if values.is_empty() {
        ctx.output.write_info("No configuration values set.");
        return Ok(());
    }

    let rows: Vec<Value> = values
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": format_value(value) }))
        .collect();
    ctx.output
        .write_list(&rows, &[("Key", "key"), ("Value", "value")], None)
}

fn path(ctx: &CommandContext) -> Result<()> {
    let dir = ctx.config_dir();
    if ctx.output.is_json() {
        ctx.output.write_json(
            &json!({
                "config_dir": dir.display().to_string(),
                "config_file": ctx.config.path().display().to_string(),
                "credentials_file": ctx.credentials.path().display().to_string(),
            }),
            None,
        )
    } else {
        println!("{}", dir.display());
        Ok(())
    }
}

fn parse_value(key: &str, raw: &str) -> Result<Value, ValidationError> {
    if key == API_URL_KEY {
        let parsed = url::Url::parse(raw)
            .map_err(|e| ValidationError::new(format!("Invalid api_url '{raw}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::new("api_url must use http or https"));
        }
        return Ok(Value::String(raw.trim_end_matches('/').to_string()));
    }

    Ok(serde_json::from_str::<Value>(raw)
        .ok()
        .filter(|v| !v.is_object() && !v.is_array())
        .unwrap_or_else(|| Value::String(raw.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_scalars() {
        assert_eq!(parse_value("timeout", "30").unwrap(), json!(30));
        assert_eq!(parse_value("color", "false").unwrap(), json!(false));
        assert_eq!(parse_value("name", "hello world").unwrap(), json!("hello world"));
        assert_eq!(parse_value("raw", "[1,2]").unwrap(), json!("[1,2]"));
    }

    #[test]
    fn test_parse_api_url() {
        assert_eq!(
            parse_value("api_url", "https://api.example.com/").unwrap(),
            json!("https://api.example.com")
        );
        assert!(parse_value("api_url", "not a url").is_err());
        assert!(parse_value("api_url", "ftp://example.com").is_err());
    }
}
