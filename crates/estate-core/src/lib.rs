//! Behavior of the Estate Studio property catalog, independent of any UI toolkit.
//!
//! - [`controller`]: search state and request parameter derivation
//! - [`search_bar`] and [`price_filter`]: search input and price range widget state
//! - [`catalog`]: listing session with the staleness guard
//! - [`listing`] and [`detail`]: view models of the two screens
//! - [`route`]: the path table
//! - [`format`]: price and date formatting
//!
//! # Example
//!
//! ```
//! use estate_core::controller::SearchController;
//!
//! let mut controller = SearchController::default();
//! controller.set_search_query("150000000");
//!
//! let filters = controller.filters();
//! assert_eq!(filters.min_price, Some(150_000_000.0));
//! assert_eq!(filters.max_price, Some(225_000_000.0));
//! assert_eq!(filters.query, None);
//! ```

pub mod catalog;
pub mod controller;
pub mod debounce;
pub mod detail;
pub mod format;
pub mod images;
pub mod listing;
pub mod price_filter;
pub mod request;
pub mod route;
pub mod search_bar;

pub use catalog::{CatalogSession, ListRequest};
pub use controller::{PriceBounds, SearchController, derive_filters};
pub use debounce::{DEFAULT_DEBOUNCE, DebounceTicket, Debouncer};
pub use detail::{DetailState, DetailStatus, ImageKey, ImageRequest};
pub use format::{
    PriceInputError, format_date, format_price, format_price_input, format_price_usd,
    parse_price_input,
};
pub use images::{ImageSlot, ImageStore};
pub use listing::{CardText, ListingContent, PageItem, count_label, grid_columns, page_items};
pub use price_filter::{MAX_PRICE, MIN_PRICE, PRICE_STEP, PriceFilter};
pub use request::{RequestId, RequestTracker};
pub use route::{Route, RouteError};
pub use search_bar::SearchBar;
