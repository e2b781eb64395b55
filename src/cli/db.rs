//
//  vector-cli
//  cli/db.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Database import and export commands
//!
//! Imports either pull a dump from a URL, or open an upload session whose
//! `upload_url` receives the file before `db import-run` starts it.
//!
//! ## Examples
//!
//! ```bash
//! # Import from a URL, rewriting the old domain
//! vector db import --site 42 --url https://files.example.com/dump.sql.gz \
//!     --search-replace old.example.com=new.example.com
//!
//! # Export and poll
//! vector db export --site 42
//! vector db export-status --site 42 exp_123
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::vector::{DatabaseImportRequest, SearchReplace};
use crate::context::CommandContext;

use super::{write_detail, GlobalOptions};

const IMPORT_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("status", "Status"),
    ("filename", "File"),
    ("upload_url", "Upload URL"),
    ("error", "Error"),
    ("created_at", "Created"),
];

const EXPORT_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("status", "Status"),
    ("download_url", "Download URL"),
    ("created_at", "Created"),
];

/// Import and export site databases
#[derive(Args, Debug)]
pub struct DbCommand {
    #[command(subcommand)]
    pub command: DbSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DbSubcommand {
    /// Import a database dump from a URL
    Import(ImportArgs),

    /// Open an upload session for a local dump
    #[command(name = "import-session")]
    ImportSession(ImportSessionArgs),

    /// Start an uploaded import
    #[command(name = "import-run")]
    ImportRun(JobArgs),

    /// Show import progress
    #[command(name = "import-status")]
    ImportStatus(JobArgs),

    /// Start a database export
    Export(ExportArgs),

    /// Show export progress
    #[command(name = "export-status")]
    ExportStatus(JobArgs),
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Site ID
    #[arg(long)]
    pub site: String,

    /// URL of the dump
    #[arg(long)]
    pub url: String,

    /// SEARCH=REPLACE pairs applied during import (repeatable)
    #[arg(long = "search-replace", value_name = "SEARCH=REPLACE")]
    pub search_replace: Vec<SearchReplace>,
}

#[derive(Args, Debug)]
pub struct ImportSessionArgs {
    /// Site ID
    #[arg(long)]
    pub site: String,

    /// Name of the file to be uploaded
    #[arg(long)]
    pub filename: String,

    /// SEARCH=REPLACE pairs applied during import (repeatable)
    #[arg(long = "search-replace", value_name = "SEARCH=REPLACE")]
    pub search_replace: Vec<SearchReplace>,
}

#[derive(Args, Debug)]
pub struct JobArgs {
    /// Import or export ID
    pub id: String,

    /// Site ID
    #[arg(long)]
    pub site: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Site ID
    #[arg(long)]
    pub site: String,

    /// Dump format
    #[arg(long)]
    pub format: Option<String>,
}

impl DbCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let ctx = CommandContext::new(global);
        let client = ctx.client()?;
        let database = client.database();

        match &self.command {
            DbSubcommand::Import(args) => {
                let request = DatabaseImportRequest {
                    url: Some(args.url.clone()),
                    filename: None,
                    search_replace: args.search_replace.clone(),
                };
                let import = database.import_from_url(&args.site, &request).await?;
                if !ctx.output.is_json() {
                    ctx.output
                        .write_success(&format!("Import started (ID: {})", import.id));
                    println!();
                }
                write_detail(&ctx.output, &import, Some(IMPORT_LABELS))
            }
            DbSubcommand::ImportSession(args) => {
                let request = DatabaseImportRequest {
                    url: None,
                    filename: Some(args.filename.clone()),
                    search_replace: args.search_replace.clone(),
                };
                let import = database.create_import_session(&args.site, &request).await?;
                if !ctx.output.is_json() {
                    ctx.output.write_success(&format!(
                        "Import session created (ID: {}). Upload the file, then run \
                         `vector db import-run --site {} {}`.",
                        import.id, args.site, import.id
                    ));
                    println!();
                }
                write_detail(&ctx.output, &import, Some(IMPORT_LABELS))
            }
            DbSubcommand::ImportRun(args) => {
                let import = database.run_import(&args.site, &args.id).await?;
                if !ctx.output.is_json() {
                    ctx.output.write_success("Import running.");
                    println!();
                }
                write_detail(&ctx.output, &import, Some(IMPORT_LABELS))
            }
            DbSubcommand::ImportStatus(args) => {
                let import = database.import_status(&args.site, &args.id).await?;
                write_detail(&ctx.output, &import, Some(IMPORT_LABELS))
            }
            DbSubcommand::Export(args) => {
                let export = database
                    .create_export(&args.site, args.format.as_deref())
                    .await?;
                if !ctx.output.is_json() {
                    ctx.output
                        .write_success(&format!("Export started (ID: {})", export.id));
                    println!();
                }
                write_detail(&ctx.output, &export, Some(EXPORT_LABELS))
            }
            DbSubcommand::ExportStatus(args) => {
                let export = database.export_status(&args.site, &args.id).await?;
                write_detail(&ctx.output, &export, Some(EXPORT_LABELS))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_search_replace_pairs_parse() {
        let cli = Cli::try_parse_from([
            "vector",
            "db",
            "import",
            "--site",
            "42",
            "--url",
            "https://files.example.com/dump.sql",
            "--search-replace",
            "old.test=new.test",
        ])
        .unwrap();

        let crate::cli::Commands::Db(DbCommand {
            command: DbSubcommand::Import(args),
        }) = cli.command
        else {
            panic!("expected db import");
        };
        assert_eq!(args.search_replace[0].search, "old.test");
        assert_eq!(args.search_replace[0].replace, "new.test");
    }

    #[test]
    fn test_malformed_search_replace_rejected() {
        let result = Cli::try_parse_from([
            "vector", "db", "import", "--site", "42", "--url", "u", "--search-replace", "nope",
        ]);
        assert!(result.is_err());
    }
}
