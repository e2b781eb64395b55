//
//  vector-cli
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Interactive Prompt Utilities
//!
//! Thin wrappers over `dialoguer` prompts.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vector_cli::interactive::{prompt_confirm_with_default, prompt_password};
//!
//! let token = prompt_password("API token")?;
//! if prompt_confirm_with_default("Delete site 42?", false)? {
//!     // ...
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Notes
//!
//! - Every prompt fails with an error when no terminal is attached
//! - Ctrl+C aborts the process

use std::io::IsTerminal;

use anyhow::Result;
use dialoguer::{Confirm, Password};

/// Masked input for tokens and secret values.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

/// Yes/no question; `default` applies when Enter is pressed.
pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Whether stdin is attached to a terminal.
pub fn stdin_is_tty() -> bool {
    std::io::stdin().is_terminal()
}

/// Whether stdout is attached to a terminal.
pub fn stdout_is_tty() -> bool {
    console::Term::stdout().is_term()
}
