//! Data source abstractions.
//!
//! The GUI holds its data source behind these traits so it can be pointed at
//! the live GraphQL service or at an in-memory catalog.

use async_trait::async_trait;

use estate_model::{PaginatedResult, Property, PropertyFilters};

use crate::error::Result;

/// Provider of property list pages and single properties.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch one page of properties matching `filters`.
    async fn list_properties(&self, filters: &PropertyFilters) -> Result<PaginatedResult>;

    /// Fetch a single property with its images, traces, and owner.
    async fn property(&self, id: &str) -> Result<Property>;

    /// Download an image by URL.
    async fn image(&self, url: &str) -> Result<Vec<u8>>;
}
