//! In-memory property source.

use std::collections::HashMap;

use async_trait::async_trait;

use estate_model::{PaginatedResult, Property, PropertyFilters};

use crate::error::{ClientError, Result};
use crate::source::PropertySource;

/// Property source backed by a fixed list.
///
/// Filters the same way the service does: case-insensitive substring match on
/// name or address, inclusive price bounds, then 1-based paging.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    properties: Vec<Property>,
    images: HashMap<String, Vec<u8>>,
}

impl InMemorySource {
    /// Create a source over the given properties.
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            images: HashMap::new(),
        }
    }

    /// Register image bytes served for `url`.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.images.insert(url.into(), bytes);
        self
    }

    /// All properties in this source.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn matches(property: &Property, filters: &PropertyFilters) -> bool {
        let text_ok = match filters.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                property.name.to_lowercase().contains(&q)
                    || property.address.to_lowercase().contains(&q)
            }
            _ => true,
        };
        let min_ok = filters.min_price.is_none_or(|min| property.price >= min);
        let max_ok = filters.max_price.is_none_or(|max| property.price <= max);
        text_ok && min_ok && max_ok
    }
}

#[async_trait]
impl PropertySource for InMemorySource {
    async fn list_properties(&self, filters: &PropertyFilters) -> Result<PaginatedResult> {
        let matching: Vec<&Property> = self
            .properties
            .iter()
            .filter(|p| Self::matches(p, filters))
            .collect();

        let page = filters.page.max(1);
        let page_size = filters.page_size.max(1);
        let total_count = matching.len() as u64;
        let total_pages = u32::try_from(total_count.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX);

        let start = (page as usize - 1).saturating_mul(page_size as usize);
        let items = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(PaginatedResult {
            items,
            total_count,
            page,
            page_size,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        })
    }

    async fn property(&self, id: &str) -> Result<Property> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound { id: id.to_string() })
    }

    async fn image(&self, url: &str) -> Result<Vec<u8>> {
        self.images.get(url).cloned().ok_or_else(|| ClientError::Http {
            status: 404,
            message: format!("no image at {url}"),
        })
    }
}
