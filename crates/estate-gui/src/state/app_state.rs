//! Root application state.

use std::sync::Arc;

use iced::task;
use iced::widget::image::Handle;

use estate_client::PropertySource;
use estate_core::{CatalogSession, ImageStore, PriceFilter, RequestTracker, SearchBar};

use super::ViewState;
use crate::config::AppConfig;

/// Embedded image shown when a photo is missing or fails to load.
const FALLBACK_IMAGE: &[u8] = include_bytes!("../../assets/fallback.png");

/// All application state.
///
/// Constructed once in `App::new` from injected configuration and data
/// source; there is no global state.
pub struct AppState {
    /// Effective configuration.
    pub config: AppConfig,

    /// Where catalog data comes from.
    pub source: Arc<dyn PropertySource>,

    /// View on screen.
    pub view: ViewState,

    // =========================================================================
    // Listing
    // =========================================================================
    /// Search state, fetch bookkeeping, and the current page.
    pub catalog: CatalogSession,

    /// Search text input.
    pub search: SearchBar,

    /// Pending debounce timer of the search input. Dropping the handle
    /// aborts the timer.
    pub search_timer: Option<task::Handle>,

    /// Price range control.
    pub price_filter: PriceFilter,

    /// Card photos keyed by URL.
    pub card_images: ImageStore<String, Handle>,

    // =========================================================================
    // Detail
    // =========================================================================
    /// Tags for property detail requests.
    pub detail_requests: RequestTracker,

    /// Image shown in place of missing photos.
    pub fallback_image: Handle,
}

impl AppState {
    /// Create the state for a configuration and data source.
    pub fn new(config: AppConfig, source: Arc<dyn PropertySource>) -> Self {
        Self {
            catalog: CatalogSession::new(config.page_size),
            search: SearchBar::new(config.debounce()),
            search_timer: None,
            price_filter: PriceFilter::default(),
            card_images: ImageStore::new(),
            detail_requests: RequestTracker::new(),
            fallback_image: Handle::from_bytes(FALLBACK_IMAGE),
            view: ViewState::default(),
            config,
            source,
        }
    }

    /// Abort the pending search timer, if any.
    pub fn cancel_search_timer(&mut self) {
        if let Some(timer) = self.search_timer.take() {
            timer.abort();
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("view", &self.view)
            .field("catalog", &self.catalog)
            .field("search", &self.search)
            .field("price_filter", &self.price_filter)
            .field("card_images", &self.card_images.len())
            .finish_non_exhaustive()
    }
}
