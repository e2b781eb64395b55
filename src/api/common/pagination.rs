//
//  vector-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for platform list endpoints
//!
//! List endpoints answer with:
//!
//! ```json
//! {
//!   "data": [{"id": "1"}, {"id": "2"}],
//!   "meta": {"current_page": 1, "per_page": 15, "total": 2, "last_page": 1}
//! }
//! ```
//!
//! [`PaginatedResult`] combines `data` and `meta`. Missing `meta` fields fall
//! back to page 1, the requested page size, the observed item count and a
//! single page respectively.
//!
//! Items stay as raw JSON until the caller maps them; this layer does not
//! know about entity shapes.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use vector_cli::api::common::PaginatedResult;
//!
//! let page = PaginatedResult::from_body(json!({"data": [{"id": "a"}]}), 15);
//!
//! assert_eq!(page.len(), 1);
//! assert_eq!(page.meta.current_page, 1);
//! assert_eq!(page.meta.per_page, 15);
//! assert_eq!(page.meta.total, 1);
//! assert!(!page.has_more_pages());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Envelope;

/// Page size used when the caller does not request one.
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u64 = 100;

/// Position of a page within a larger collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// 1-based index of this page.
    pub current_page: u64,

    /// Requested page size.
    pub per_page: u64,

    /// Items across all pages.
    pub total: u64,

    /// 1-based index of the final page.
    pub last_page: u64,
}

impl PaginationMeta {
    /// Reads metadata, filling gaps with the documented defaults.
    ///
    /// Numeric strings (`"2"`) are accepted since some endpoints emit them.
    pub fn from_value(meta: Option<&Value>, default_per_page: u64, item_count: usize) -> Self {
        let field = |key: &str| meta.and_then(|m| m.get(key)).and_then(read_u64);

        Self {
            current_page: field("current_page").unwrap_or(1),
            per_page: field("per_page").unwrap_or(default_per_page),
            total: field("total").unwrap_or(item_count as u64),
            last_page: field("last_page").unwrap_or(1),
        }
    }
}

/// One page of items plus its [`PaginationMeta`].
///
/// # Type Parameters
///
/// - `T` - Item type; [`Value`] straight from the decoder, or an entity after
///   [`try_map`](Self::try_map)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl PaginatedResult<Value> {
    /// Builds a page from a decoded body.
    ///
    /// # Parameters
    ///
    /// * `body` - Decoded response body
    /// * `default_per_page` - Page size to report when `meta.per_page` is absent
    ///
    /// # Notes
    ///
    /// - A wrapped body whose `data` is not an array yields no items.
    /// - A bare top-level array is taken as the items, with default meta.
    /// - Any other bare body yields no items.
    pub fn from_body(body: Value, default_per_page: u64) -> Self {
        let (items, meta) = match Envelope::from_value(body) {
            Envelope::Wrapped { data, meta } => {
                let items = match data {
                    Value::Array(items) => items,
                    _ => Vec::new(),
                };
                (items, meta)
            }
            Envelope::Bare(Value::Array(items)) => (items, None),
            Envelope::Bare(_) => (Vec::new(), None),
        };

        let meta = PaginationMeta::from_value(meta.as_ref(), default_per_page, items.len());
        Self { items, meta }
    }
}

impl<T> PaginatedResult<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// `true` while the current page is before the last one.
    pub fn has_more_pages(&self) -> bool {
        self.meta.current_page < self.meta.last_page
    }

    /// Number of the following page, if any.
    pub fn next_page(&self) -> Option<u64> {
        self.has_more_pages().then(|| self.meta.current_page + 1)
    }

    /// Transforms every item, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> PaginatedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    /// Fallible [`map`](Self::map); stops at the first error.
    pub fn try_map<U, E, F>(self, f: F) -> Result<PaginatedResult<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(PaginatedResult {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            meta: self.meta,
        })
    }
}

impl<T> IntoIterator for PaginatedResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Clamps a requested page number to at least 1.
pub fn clamp_page(page: u64) -> u64 {
    page.max(1)
}

/// Clamps a requested page size to `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: u64) -> u64 {
    per_page.clamp(1, MAX_PER_PAGE)
}

fn read_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_meta_is_used() {
        let body = json!({
            "data": [{"id": 1}, {"id": 2}],
            "meta": {"current_page": 2, "per_page": 2, "total": 9, "last_page": 5}
        });
        let page = PaginatedResult::from_body(body, 15);

        assert_eq!(page.len(), 2);
        assert_eq!(
            page.meta,
            PaginationMeta { current_page: 2, per_page: 2, total: 9, last_page: 5 }
        );
        assert!(page.has_more_pages());
        assert_eq!(page.next_page(), Some(3));
    }

    #[test]
    fn test_partial_meta_defaults() {
        let body = json!({"data": [{}, {}, {}], "meta": {"current_page": "3"}});
        let page = PaginatedResult::from_body(body, 25);

        assert_eq!(page.meta.current_page, 3);
        assert_eq!(page.meta.per_page, 25);
        assert_eq!(page.meta.total, 3);
        assert_eq!(page.meta.last_page, 1);
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn test_bare_array_is_items() {
        let page = PaginatedResult::from_body(json!([1, 2, 3, 4]), 15);
        assert_eq!(page.len(), 4);
        assert_eq!(page.meta.total, 4);
    }

    #[test]
    fn test_non_array_data_yields_nothing() {
        let page = PaginatedResult::from_body(json!({"data": {"id": 1}}), 15);
        assert!(page.is_empty());
        assert_eq!(page.meta.total, 0);
    }

    #[test]
    fn test_empty_body() {
        let page = PaginatedResult::from_body(json!({}), 15);
        assert!(page.is_empty());
        assert_eq!(page.meta.current_page, 1);
    }

    #[test]
    fn test_try_map_keeps_meta() {
        let body = json!({"data": [1, 2], "meta": {"total": 40, "last_page": 20}});
        let page = PaginatedResult::from_body(body, 2);
        let mapped: PaginatedResult<u64> = page
            .try_map(|v| v.as_u64().ok_or("not a number"))
            .unwrap();

        assert_eq!(mapped.items, vec![1, 2]);
        assert_eq!(mapped.meta.total, 40);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_per_page(0), 1);
        assert_eq!(clamp_per_page(500), MAX_PER_PAGE);
        assert_eq!(clamp_per_page(30), 30);
    }
}
