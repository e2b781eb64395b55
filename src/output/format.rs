//
//  vector-cli
//  output/format.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Value formatting shared by tables and detail views.
//!
//! # Rules
//!
//! | Value | Rendered as |
//! |-------|-------------|
//! | `null` | `-` |
//! | `true` / `false` | `Yes` / `No` |
//! | `[]`, `{}` | `-` |
//! | `[a, b]` | `a, b` (each element formatted recursively) |
//! | `{...}` | compact JSON |
//! | `"text"` | `text` |
//! | `12` | `12` |

use console::style;
use serde_json::Value;

use crate::api::common::PaginationMeta;

/// Formats one JSON value for human display.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vector_cli::output::format_value;
///
/// assert_eq!(format_value(&json!(null)), "-");
/// assert_eq!(format_value(&json!(true)), "Yes");
/// assert_eq!(format_value(&json!(["a", 1])), "a, 1");
/// assert_eq!(format_value(&json!({"k": "v"})), r#"{"k":"v"}"#);
/// ```
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) if items.is_empty() => "-".to_string(),
        Value::Array(items) => items.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(map) if map.is_empty() => "-".to_string(),
        Value::Object(_) => value.to_string(),
    }
}

/// Looks up a dotted key such as `"actor.ip"` in nested objects.
///
/// Numeric segments index into arrays. A missing path yields `None`.
pub fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    if let Some(direct) = value.get(key) {
        return Some(direct);
    }

    key.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// `dev_php_version` becomes `Dev php version`.
pub fn key_to_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders a detail view of `data` as `Label  value` lines.
///
/// # Parameters
///
/// * `data` - The resource, normally an object
/// * `labels` - `(key, label)` pairs in display order; when `None` every
///   top-level key is shown with a derived label
/// * `color` - Whether to style labels
///
/// Labels are padded to the longest one, counted in characters.
pub fn render_detail(data: &Value, labels: Option<&[(&str, &str)]>, color: bool) -> String {
    let rows: Vec<(String, String)> = match labels {
        Some(labels) => labels
            .iter()
            .map(|(key, label)| {
                let value = lookup(data, key).unwrap_or(&Value::Null);
                (label.to_string(), format_value(value))
            })
            .collect(),
        None => match data {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key_to_label(key), format_value(value)))
                .collect(),
            other => vec![("Value".to_string(), format_value(other))],
        },
    };

    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(label, value)| {
            let padding = " ".repeat(width - label.chars().count());
            if color {
                format!("{}{}  {}", style(label).green(), padding, value)
            } else {
                format!("{label}{padding}  {value}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Page 2 of 5 (73 total)`.
pub fn pagination_info(meta: &PaginationMeta) -> String {
    format!(
        "Page {} of {} ({} total)",
        meta.current_page, meta.last_page, meta.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_value_rules() {
        assert_eq!(format_value(&json!(false)), "No");
        assert_eq!(format_value(&json!([])), "-");
        assert_eq!(format_value(&json!({})), "-");
        assert_eq!(format_value(&json!(8.3)), "8.3");
        assert_eq!(format_value(&json!([null, true, "x"])), "-, Yes, x");
        assert_eq!(
            format_value(&json!({"url": "https://a.test/b"})),
            r#"{"url":"https://a.test/b"}"#
        );
    }

    #[test]
    fn test_lookup_dotted() {
        let data = json!({"actor": {"ip": "1.2.3.4"}, "tags": ["a", "b"], "a.b": 1});
        assert_eq!(lookup(&data, "actor.ip"), Some(&json!("1.2.3.4")));
        assert_eq!(lookup(&data, "tags.1"), Some(&json!("b")));
        assert_eq!(lookup(&data, "a.b"), Some(&json!(1)));
        assert_eq!(lookup(&data, "actor.missing"), None);
    }

    #[test]
    fn test_key_to_label() {
        assert_eq!(key_to_label("dev_php_version"), "Dev php version");
        assert_eq!(key_to_label("id"), "Id");
        assert_eq!(key_to_label(""), "");
    }

    #[test]
    fn test_render_detail_with_labels() {
        let data = json!({"id": 7, "status": "active", "tags": []});
        let labels = [("id", "ID"), ("status", "Status"), ("tags", "Tags")];
        let out = render_detail(&data, Some(&labels), false);
        assert_eq!(out, "ID      7\nStatus  active\nTags    -");
    }

    #[test]
    fn test_render_detail_derived_labels() {
        let data = json!({"name": "prod", "is_production": true});
        let out = render_detail(&data, None, false);
        assert_eq!(out, "Name           prod\nIs production  Yes");
    }

    #[test]
    fn test_pagination_info() {
        let meta = PaginationMeta { current_page: 2, per_page: 15, total: 40, last_page: 3 };
        assert_eq!(pagination_info(&meta), "Page 2 of 3 (40 total)");
    }
}
