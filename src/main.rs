//
//  vector-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vector_cli::cli::{Cli, Commands, Exit, GlobalOptions};
use vector_cli::interactive::stdout_is_tty;
use vector_cli::output::{OutputFormat, OutputWriter};
use vector_cli::{exit_code_for, exit_codes};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and --version are printed to stdout and succeed.
            let code = if e.use_stderr() {
                exit_codes::VALIDATION_ERROR
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let global = cli.global.clone();
    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            let code = exit_code_for(&e);
            if e.downcast_ref::<Exit>().is_none() {
                tracing::debug!(error = ?e, "command failed");
                writer_for(&global).write_failure(&e);
            }
            std::process::exit(code);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("VECTOR_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn writer_for(global: &GlobalOptions) -> OutputWriter {
    OutputWriter::new(OutputFormat::detect(global.json, global.no_json, stdout_is_tty()))
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Site(cmd) => cmd.run(&cli.global).await,
        Commands::Env(cmd) => cmd.run(&cli.global).await,
        Commands::Deploy(cmd) => cmd.run(&cli.global).await,
        Commands::Ssl(cmd) => cmd.run(&cli.global).await,
        Commands::Db(cmd) => cmd.run(&cli.global).await,
        Commands::Secret(cmd) => cmd.run(&cli.global).await,
        Commands::Webhook(cmd) => cmd.run(&cli.global).await,
        Commands::SshKey(cmd) => cmd.run(&cli.global).await,
        Commands::Waf(cmd) => cmd.run(&cli.global).await,
        Commands::Event(cmd) => cmd.run(&cli.global).await,
        Commands::Account(cmd) => cmd.run(&cli.global).await,
        Commands::ApiKey(cmd) => cmd.run(&cli.global).await,
        Commands::PhpVersions(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            let writer = writer_for(&cli.global);
            if writer.is_json() {
                writer.write_json(&json!({ "version": vector_cli::VERSION }), None)
            } else {
                println!("{} version {}", vector_cli::APP_NAME, vector_cli::VERSION);
                Ok(())
            }
        }
    }
}
