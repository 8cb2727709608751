//! Listing view messages.

use iced::widget::image::Handle;

use estate_core::{DebounceTicket, RequestId};
use estate_model::{PaginatedResult, SortOption};

use crate::error::GuiError;

/// Messages for the property listing.
#[derive(Debug, Clone)]
pub enum ListingMessage {
    /// Search input events
    Search(SearchMessage),

    /// Price filter events
    PriceFilter(PriceFilterMessage),

    /// A sort option was picked
    SortSelected(SortOption),

    /// A page was picked in the pagination control
    PageSelected(u32),

    /// Retry pressed after a failed load
    Retry,

    /// A list request completed
    PageLoaded {
        request: RequestId,
        result: Result<PaginatedResult, GuiError>,
    },

    /// A card photo finished loading
    CardImageLoaded {
        url: String,
        result: Result<Handle, GuiError>,
    },
}

/// Messages for the free-text search input.
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// Text edited
    Changed(String),
    /// Enter pressed
    Submitted,
    /// Clear button pressed
    Cleared,
    /// Debounce timer elapsed
    DebounceElapsed(DebounceTicket),
}

/// Messages for the price range filter.
#[derive(Debug, Clone)]
pub enum PriceFilterMessage {
    /// Filter button pressed
    Toggled,
    /// Panel dismissed
    Closed,
    /// Low handle moved
    LowDragged(f64),
    /// High handle moved
    HighDragged(f64),
    /// A handle was released
    Released,
    /// Minimum spinner text edited
    MinTextChanged(String),
    /// Maximum spinner text edited
    MaxTextChanged(String),
    /// Minimum spinner arrow pressed (+1 / -1)
    MinStepped(i32),
    /// Maximum spinner arrow pressed (+1 / -1)
    MaxStepped(i32),
    /// Clear filters pressed
    Cleared,
}
