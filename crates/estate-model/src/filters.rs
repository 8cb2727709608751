//! List query parameters.

use serde::{Deserialize, Serialize};

/// Fixed number of properties requested per page.
pub const PROPERTY_PAGE_SIZE: u32 = 12;

/// First page number. Pages are 1-based.
pub const DEFAULT_PAGE: u32 = 1;

/// Parameters of a property list query.
///
/// Absent fields are dropped on serialization, so the data source never
/// receives `null` or an empty query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilters {
    /// Free-text query matched against name and address.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub query: Option<String>,
    /// Lower price bound (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Upper price bound (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

impl Default for PropertyFilters {
    fn default() -> Self {
        Self {
            query: None,
            min_price: None,
            max_price: None,
            page: DEFAULT_PAGE,
            page_size: PROPERTY_PAGE_SIZE,
        }
    }
}

impl PropertyFilters {
    /// Whether any search criterion (query or price bound) is active.
    pub fn has_criteria(&self) -> bool {
        !is_blank(&self.query) || self.min_price.is_some() || self.max_price.is_some()
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}
