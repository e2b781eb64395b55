//
//  vector-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tables are built with `comfy_table`, using UTF-8 box drawing and dynamic
//! column widths.
//!
//! ## Usage
//!
//! Lists are usually rendered from decoded JSON through a column map:
//!
//! ```rust
//! use serde_json::json;
//! use vector_cli::output::render_table;
//!
//! let rows = vec![json!({"id": 1, "dev_domain": "a.vector.dev"})];
//! let table = render_table(&rows, &[("ID", "id"), ("Domain", "dev_domain")], false);
//! assert!(table.to_string().contains("a.vector.dev"));
//! ```
//!
//! [`TableBuilder`] is available for ad-hoc tables.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

use super::format::{format_value, lookup};

/// One table column: header text and the dotted key it reads.
pub type Column<'a> = (&'a str, &'a str);

/// Empty table with the standard preset.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder for tables.
///
/// # Example
///
/// ```rust
/// use vector_cli::output::TableBuilder;
///
/// let table = TableBuilder::new()
///     .color(false)
///     .headers(["Key", "Value"])
///     .row(["api_url", "https://api.builtfast.com"])
///     .build();
/// assert!(table.to_string().contains("api_url"));
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row, cyan when color is on.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Projects each row through `columns` into a table.
///
/// Cells are formatted with [`format_value`]; a column keyed `status` is
/// additionally colored by [`format_status`].
pub fn render_table(rows: &[Value], columns: &[Column<'_>], color: bool) -> Table {
    let mut builder = TableBuilder::new()
        .color(color)
        .headers(columns.iter().map(|(header, _)| *header));

    for row in rows {
        let cells = columns.iter().map(|(_, key)| {
            let text = format_value(lookup(row, key).unwrap_or(&Value::Null));
            if *key == "status" {
                format_status(&text, color)
            } else {
                text
            }
        });
        builder = builder.row(cells);
    }

    builder.build()
}

/// Colors a status string by its meaning.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_lowercase().as_str() {
        "active" | "running" | "deployed" | "enabled" | "valid" => {
            style(status).green().to_string()
        }
        "completed" | "success" | "successful" | "issued" => style(status).blue().to_string(),
        "failed" | "error" | "suspended" | "expired" => style(status).red().to_string(),
        "pending" | "queued" | "provisioning" | "deploying" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_table_projects_columns() {
        let rows = vec![
            json!({"id": 1, "status": "active", "meta": {"region": "us"}}),
            json!({"id": 2}),
        ];
        let columns = [("ID", "id"), ("Status", "status"), ("Region", "meta.region")];
        let out = render_table(&rows, &columns, false).to_string();

        assert!(out.contains("Region"));
        assert!(out.contains("active"));
        assert!(out.contains("us"));
        // missing values render as a dash
        assert!(out.lines().any(|line| line.contains('2') && line.contains('-')));
    }

    #[test]
    fn test_format_status_without_color() {
        assert_eq!(format_status("failed", false), "failed");
    }

    #[test]
    fn test_builder_without_color() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["A", "B"])
            .row(["1", "2"])
            .build();
        let out = table.to_string();
        assert!(out.contains('A'));
        assert!(out.contains('2'));
    }
}
