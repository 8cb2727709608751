//! Listing session: search state, fetch bookkeeping, and the current page.
//!
//! Ties the [`SearchController`] to the data source contract. Each fetch is
//! tagged with a [`RequestId`]; only the latest one may update the page.

use tracing::{debug, warn};

use estate_model::{PaginatedResult, Property, PropertyFilters, SortOption};

use crate::controller::{PriceBounds, SearchController};
use crate::listing::ListingContent;
use crate::request::{RequestId, RequestTracker};

/// A list fetch to perform.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    /// Tag to hand back with the response.
    pub id: RequestId,
    /// Parameters to send.
    pub filters: PropertyFilters,
}

/// State behind the listing view.
#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    controller: SearchController,
    tracker: RequestTracker,
    loading: bool,
    failure: Option<String>,
    result: PaginatedResult,
}

impl CatalogSession {
    /// Create a session with the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            controller: SearchController::new(page_size),
            ..Default::default()
        }
    }

    /// Search state.
    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Last page received.
    pub fn result(&self) -> &PaginatedResult {
        &self.result
    }

    /// Start a fetch for the current filters. Earlier fetches become stale.
    pub fn begin_fetch(&mut self) -> ListRequest {
        let id = self.tracker.issue();
        self.loading = true;
        self.failure = None;
        let filters = self.controller.filters().clone();
        debug!(request = %id, page = filters.page, "Issuing property list request");
        ListRequest { id, filters }
    }

    /// Apply a fetch result. Returns `false` when the response was stale and
    /// got discarded.
    pub fn finish_fetch(&mut self, id: RequestId, result: Result<PaginatedResult, String>) -> bool {
        if !self.tracker.complete(id) {
            debug!(request = %id, "Discarding stale property list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.result = page;
                self.failure = None;
            }
            Err(message) => {
                warn!(request = %id, error = %message, "Property list request failed");
                self.result = PaginatedResult::default();
                self.failure = Some(message);
            }
        }
        true
    }

    /// Whether the last fetch failed and nothing newer is in flight.
    pub fn needs_retry(&self) -> bool {
        self.failure.is_some() && !self.loading
    }

    /// Commit a search query. Returns whether a fetch is needed.
    ///
    /// After a failure any commit refetches, even with unchanged filters.
    pub fn set_search_query(&mut self, text: &str) -> bool {
        self.controller.set_search_query(text) || self.needs_retry()
    }

    /// Commit price bounds. Returns whether a fetch is needed.
    pub fn set_price_range(&mut self, bounds: PriceBounds) -> bool {
        self.controller.set_price_range(bounds) || self.needs_retry()
    }

    /// Go to a page. Returns whether a fetch is needed.
    pub fn set_page(&mut self, page: u32) -> bool {
        self.controller.set_page(page) || self.needs_retry()
    }

    /// Change the sort key. The current page is re-ordered in place.
    pub fn set_sort_option(&mut self, sort: SortOption) {
        self.controller.set_sort_option(sort);
    }

    /// Items of the current page in display order.
    pub fn visible_items(&self) -> Vec<&Property> {
        self.controller.sort().sorted(&self.result.items)
    }

    /// What the listing area should show.
    pub fn content(&self) -> ListingContent<'_> {
        ListingContent::new(self.loading, self.failure.is_some(), self.visible_items())
    }

    /// Stop waiting for the in-flight fetch.
    pub fn teardown(&mut self) {
        self.tracker.cancel();
        self.loading = false;
    }
}
