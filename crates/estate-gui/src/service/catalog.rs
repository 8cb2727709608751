//! Catalog requests against the injected data source.
//!
//! Designed to be used with `Task::perform`:
//!
//! ```ignore
//! Task::perform(fetch_page(source, filters), move |result| {
//!     Message::Listing(ListingMessage::PageLoaded { request, result })
//! })
//! ```

use std::sync::Arc;

use estate_client::PropertySource;
use estate_model::{PaginatedResult, Property, PropertyFilters};

use crate::error::GuiError;

/// Fetch one page of properties.
pub async fn fetch_page(
    source: Arc<dyn PropertySource>,
    filters: PropertyFilters,
) -> Result<PaginatedResult, GuiError> {
    source
        .list_properties(&filters)
        .await
        .map_err(GuiError::from)
}

/// Fetch a single property with its photos, owner, and history.
pub async fn fetch_property(
    source: Arc<dyn PropertySource>,
    id: String,
) -> Result<Property, GuiError> {
    source.property(&id).await.map_err(GuiError::from)
}
