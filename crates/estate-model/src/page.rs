//! Paginated list results.

use serde::{Deserialize, Serialize};

use crate::property::Property;

/// One page of a property list query.
///
/// Produced fresh per fetch. A new page replaces the previous one; items are
/// never accumulated across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult {
    /// Items on this page, in server order.
    #[serde(default)]
    pub items: Vec<Property>,
    /// Total matching items across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// Current page (1-based).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size used by the server.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Whether a following page exists.
    #[serde(default)]
    pub has_next_page: bool,
    /// Whether a preceding page exists.
    #[serde(default)]
    pub has_previous_page: bool,
}

/// Page reported when the response carried no pagination data.
fn default_page() -> u32 {
    1
}

/// Page size reported when the response carried no pagination data.
fn default_page_size() -> u32 {
    10
}

impl Default for PaginatedResult {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page: default_page(),
            page_size: default_page_size(),
            total_pages: 0,
            has_next_page: false,
            has_previous_page: false,
        }
    }
}

impl PaginatedResult {
    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a pagination control should be shown at all.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// 1-based index of the first item on this page, or 0 when empty.
    pub fn range_start(&self) -> u64 {
        if self.total_count == 0 {
            return 0;
        }
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size) + 1
    }

    /// 1-based index of the last item on this page, capped at the total.
    pub fn range_end(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.page_size)).min(self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_empty_response() {
        let page: PaginatedResult = serde_json::from_str("{}").unwrap();
        assert_eq!(page, PaginatedResult::default());
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert!(!page.is_paginated());
    }

    #[test]
    fn test_ranges() {
        let page = PaginatedResult {
            total_count: 40,
            page: 4,
            page_size: 12,
            total_pages: 4,
            ..Default::default()
        };
        assert_eq!(page.range_start(), 37);
        assert_eq!(page.range_end(), 40);

        let empty = PaginatedResult::default();
        assert_eq!(empty.range_start(), 0);
        assert_eq!(empty.range_end(), 0);
    }
}
