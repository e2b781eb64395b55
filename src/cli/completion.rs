//
//  vector-cli
//  cli/completion.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shell completion commands
//!
//! ```bash
//! vector completion zsh > "${fpath[1]}/_vector"
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use super::{Cli, GlobalOptions};

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionCommand {
    #[command(subcommand)]
    pub command: CompletionSubcommand,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum CompletionSubcommand {
    /// Generate bash completions
    Bash,

    /// Generate zsh completions
    Zsh,

    /// Generate fish completions
    Fish,

    /// Generate PowerShell completions
    Powershell,
}

impl CompletionSubcommand {
    fn shell(self) -> Shell {
        match self {
            CompletionSubcommand::Bash => Shell::Bash,
            CompletionSubcommand::Zsh => Shell::Zsh,
            CompletionSubcommand::Fish => Shell::Fish,
            CompletionSubcommand::Powershell => Shell::PowerShell,
        }
    }
}

impl CompletionCommand {
    pub async fn run(&self, _global: &GlobalOptions) -> Result<()> {
        let mut cmd = Cli::command();
        generate(self.command.shell(), &mut cmd, crate::APP_NAME, &mut std::io::stdout());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_mentions_binary() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut cmd, crate::APP_NAME, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("vector"));
    }
}
