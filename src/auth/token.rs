//
//  vector-cli
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Token input and display helpers.
//!
//! `vector auth login` accepts a token three ways: the `--token` flag, piped
//! stdin, or a masked prompt. This module covers the non-interactive parts.
//!
//! # Example
//!
//! ```bash
//! echo "$VECTOR_TOKEN" | vector auth login --token -
//! ```

use std::io::{self, Read};

use anyhow::Result;

/// Reads all of stdin.
///
/// # Returns
///
/// The trimmed input, or `None` if it is blank.
pub fn read_token_from_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    read_token(stdin.lock())
}

/// Reads `reader` to the end, trimmed. Blank input yields `None`.
pub fn read_token<R: Read>(mut reader: R) -> Result<Option<String>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let token = input.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}

/// Basic sanity check for API tokens.
///
/// Rejects empty strings and anything with embedded whitespace, which
/// usually means a copy-paste accident.
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Shows the first and last four characters of a token.
///
/// Tokens of eight characters or fewer are fully masked.
///
/// # Example
///
/// ```rust
/// use vector_cli::auth::mask_token;
///
/// assert_eq!(mask_token("abcd1234efgh5678"), "abcd********5678");
/// assert_eq!(mask_token("short"), "*****");
/// ```
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_token_skips_leading_blank_line() {
        let token = read_token("\n  tok123\n".as_bytes()).unwrap();
        assert_eq!(token.as_deref(), Some("tok123"));
    }

    #[test]
    fn test_read_token_trims() {
        let token = read_token("  tok-123  \n".as_bytes()).unwrap();
        assert_eq!(token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_read_token_empty() {
        assert_eq!(read_token("\n".as_bytes()).unwrap(), None);
        assert_eq!(read_token("".as_bytes()).unwrap(), None);
    }

    #[test]
    fn test_validate_token() {
        assert!(validate_token("abc123"));
        assert!(!validate_token(""));
        assert!(!validate_token("abc 123"));
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("123456789"), "1234*6789");
        assert_eq!(mask_token("12345678"), "********");
        assert_eq!(mask_token(""), "");
    }
}
