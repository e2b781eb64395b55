//
//  vector-cli
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Formatting helpers for timestamps and durations.
//!
//! ## Example
//!
//! ```rust
//! use vector_cli::util::{format_duration, format_timestamp};
//!
//! assert_eq!(format_timestamp("2026-01-12T09:30:00Z"), "2026-01-12 09:30");
//! assert_eq!(format_duration(95), "1m 35s");
//! ```

use chrono::DateTime;
use serde_json::Value;

/// Formats an RFC 3339 timestamp as `YYYY-MM-DD HH:MM` in its own offset.
///
/// Anything that does not parse is returned unchanged.
pub fn format_timestamp(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

/// Seconds as `1m 05s`, `42s` or `2h 03m`.
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds}s")
    } else if seconds < 3_600 {
        format!("{}m {:02}s", seconds / 60, seconds % 60)
    } else {
        format!("{}h {:02}m", seconds / 3_600, (seconds % 3_600) / 60)
    }
}

/// Rewrites timestamp fields of each row for table display.
///
/// Only string values of the named keys are touched; a numeric `duration`
/// column becomes [`format_duration`] text.
pub fn humanize_rows(rows: &mut [Value], timestamp_keys: &[&str]) {
    for row in rows.iter_mut() {
        let Value::Object(map) = row else { continue };
        for key in timestamp_keys {
            if let Some(Value::String(ts)) = map.get(*key) {
                let formatted = format_timestamp(ts);
                map.insert((*key).to_string(), Value::String(formatted));
            }
        }
        if let Some(seconds) = map.get("duration").and_then(Value::as_u64) {
            map.insert("duration".to_string(), Value::String(format_duration(seconds)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2026-03-01T23:05:59+02:00"), "2026-03-01 23:05");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(65), "1m 05s");
        assert_eq!(format_duration(7_380), "2h 03m");
    }

    #[test]
    fn test_humanize_rows() {
        let mut rows = vec![json!({
            "deployed_at": "2026-01-12T09:30:00Z",
            "duration": 95,
            "id": 1
        })];
        humanize_rows(&mut rows, &["deployed_at", "missing"]);
        assert_eq!(rows[0]["deployed_at"], json!("2026-01-12 09:30"));
        assert_eq!(rows[0]["duration"], json!("1m 35s"));
        assert_eq!(rows[0]["id"], json!(1));
    }
}
