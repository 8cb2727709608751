//! View state - current view and associated UI state.
//!
//! Each view variant holds its own UI state. Navigating replaces the whole
//! value, which drops the previous view's transient state along with it.

use iced::widget::image::Handle;

use estate_core::{DetailState, Route};

/// Current view and its associated UI state.
///
/// The listing keeps its state in [`AppState`](super::AppState) so that
/// returning from a property shows the same search, page, and sort.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// Property listing.
    #[default]
    Listing,

    /// Property detail with its load state and photos.
    Detail(DetailState<Handle>),
}

impl ViewState {
    /// Route addressing this view.
    pub fn route(&self) -> Route {
        match self {
            Self::Listing => Route::Listing,
            Self::Detail(detail) => Route::detail(detail.id()),
        }
    }

    /// Detail state, when a property is shown.
    pub fn detail_mut(&mut self) -> Option<&mut DetailState<Handle>> {
        match self {
            Self::Detail(detail) => Some(detail),
            Self::Listing => None,
        }
    }
}
