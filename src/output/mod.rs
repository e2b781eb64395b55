//
//  vector-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting Module
//!
//! Renders command results for people or for scripts.
//!
//! ## Output Formats
//!
//! - **Table**: Tables for lists and `Label  value` lines for single
//!   resources, with a pagination footer under paged lists
//! - **JSON**: Pretty-printed `{"data": ..., "meta": ...}` envelopes
//!
//! ## Format Selection
//!
//! 1. `--json` forces JSON
//! 2. `--no-json` forces tables
//! 3. Otherwise JSON when stdout is not a terminal
//!
//! ## Errors
//!
//! In JSON mode failures are printed to stdout as
//! `{"data": {"error": ..., "status_code": ...}}` so scripts can parse them.
//! In table mode they go to stderr, followed by any per-field validation
//! messages.

mod format;
mod json;
mod table;

pub use format::*;
pub use json::*;
pub use table::*;

use console::style;
use serde_json::{json, Value};

use crate::api::common::{ApiError, ClientError, PaginationMeta, ValidationErrors};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// Chooses a format from the flags and whether stdout is a terminal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector_cli::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::detect(true, false, true), OutputFormat::Json);
    /// assert_eq!(OutputFormat::detect(false, true, false), OutputFormat::Table);
    /// assert_eq!(OutputFormat::detect(false, false, false), OutputFormat::Json);
    /// assert_eq!(OutputFormat::detect(false, false, true), OutputFormat::Table);
    /// ```
    pub fn detect(json: bool, no_json: bool, stdout_is_tty: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if no_json || stdout_is_tty {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    }
}

/// Writes results in the selected [`OutputFormat`].
///
/// # Example
///
/// ```rust,no_run
/// use serde_json::json;
/// use vector_cli::output::{OutputFormat, OutputWriter};
///
/// let writer = OutputWriter::new(OutputFormat::Table);
/// writer.write_resource(&json!({"id": 1, "status": "active"}), None)?;
/// writer.write_success("Site created successfully (ID: 1)");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Prints `{"data": data}` (plus `meta`) as pretty JSON.
    pub fn write_json(&self, data: &Value, meta: Option<&Value>) -> anyhow::Result<()> {
        println!("{}", to_pretty_json(&envelope(data.clone(), meta.cloned()))?);
        Ok(())
    }

    /// Prints a list as a table, or as JSON with `meta`.
    ///
    /// # Parameters
    ///
    /// * `rows` - Items as JSON
    /// * `columns` - `(header, dotted key)` pairs
    /// * `meta` - Pagination, shown as a footer in table mode
    pub fn write_list(
        &self,
        rows: &[Value],
        columns: &[Column<'_>],
        meta: Option<&PaginationMeta>,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let meta = meta.map(serde_json::to_value).transpose()?;
                self.write_json(&Value::Array(rows.to_vec()), meta.as_ref())
            }
            OutputFormat::Table => {
                println!("{}", render_table(rows, columns, self.color));
                if let Some(meta) = meta {
                    println!();
                    let info = pagination_info(meta);
                    if self.color {
                        println!("{}", style(info).yellow());
                    } else {
                        println!("{info}");
                    }
                }
                Ok(())
            }
        }
    }

    /// Prints one resource as a detail view, or as JSON.
    ///
    /// `labels` are `(dotted key, label)` pairs; `None` shows every field.
    pub fn write_resource(
        &self,
        data: &Value,
        labels: Option<&[(&str, &str)]>,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(data, None),
            OutputFormat::Table => {
                println!("{}", render_detail(data, labels, self.color));
                Ok(())
            }
        }
    }

    /// Prints a failure in the selected format.
    ///
    /// `status_code` is 0 when no HTTP status is involved.
    pub fn write_formatted_error(&self, message: &str, status_code: u16) {
        match self.format {
            OutputFormat::Json => {
                let body = envelope(json!({ "error": message, "status_code": status_code }), None);
                match to_pretty_json(&body) {
                    Ok(text) => println!("{text}"),
                    Err(_) => self.write_error(message),
                }
            }
            OutputFormat::Table => self.write_error(message),
        }
    }

    /// Reports a failed command.
    ///
    /// API failures show the platform's message and, in table mode, each
    /// field error on its own line.
    pub fn write_failure(&self, error: &anyhow::Error) {
        match find_api_error(error) {
            Some(api_error) => {
                self.write_formatted_error(api_error.message(), api_error.status_code());
                if !self.is_json() {
                    self.write_validation_errors(api_error.validation_errors());
                }
            }
            None => self.write_formatted_error(&format!("{error:#}"), failure_status(error)),
        }
    }

    /// `  field: message` lines on stderr.
    pub fn write_validation_errors(&self, errors: &ValidationErrors) {
        for (field, messages) in errors.iter() {
            for message in messages {
                if self.color {
                    eprintln!("  {}: {}", style(field).bold(), message);
                } else {
                    eprintln!("  {field}: {message}");
                }
            }
        }
    }

    pub fn write_error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

fn find_api_error(error: &anyhow::Error) -> Option<&ApiError> {
    error.chain().find_map(|cause| {
        cause
            .downcast_ref::<ClientError>()
            .and_then(ClientError::as_api_error)
            .or_else(|| cause.downcast_ref::<ApiError>())
    })
}

/// HTTP status behind a non-API failure, such as an undecodable body, or 0.
fn failure_status(error: &anyhow::Error) -> u16 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ClientError>())
        .and_then(ClientError::status_code)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::DecodeError;
    use serde_json::json;

    #[test]
    fn test_find_api_error_through_context() {
        let api = ApiError::from_response(
            422,
            &json!({"message": "Invalid", "errors": {"name": "taken"}}),
        );
        let err = anyhow::Error::new(ClientError::from(api)).context("creating site");

        let found = find_api_error(&err).unwrap();
        assert_eq!(found.status_code(), 422);
        assert_eq!(found.errors_for("name"), ["taken".to_string()]);
    }

    #[test]
    fn test_find_api_error_absent_for_other_errors() {
        let err = anyhow::anyhow!("disk full");
        assert!(find_api_error(&err).is_none());
    }

    #[test]
    fn test_failure_status_of_undecodable_body() {
        let source = serde_json::from_str::<Value>("<html>").unwrap_err();
        let decode = ClientError::from(DecodeError::new(502, "<html>", source));
        let err = anyhow::Error::new(decode).context("listing sites");

        assert!(find_api_error(&err).is_none());
        assert_eq!(failure_status(&err), 502);
        assert_eq!(failure_status(&anyhow::anyhow!("disk full")), 0);
    }

    #[test]
    fn test_writer_defaults() {
        let writer = OutputWriter::new(OutputFormat::Json).with_color(false);
        assert!(writer.is_json());
        assert!(!writer.color_enabled());
        assert_eq!(OutputWriter::default().format(), OutputFormat::Table);
    }
}
