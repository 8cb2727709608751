//! Reusable UI components for Estate Studio.
//!
//! - **Form**: `search_box`, `price_filter_panel`, `sort_select`
//! - **Display**: `property_card`, `photo`, `pagination`
//! - **Feedback**: `EmptyState`, `LoadingState`, `ErrorState`
//! - **Icons**: use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components are plain functions or small builders returning `Element<M>`.

mod empty_state;
mod pagination;
mod photo;
mod price_filter;
mod property_card;
mod search_box;
mod sort_select;

pub use empty_state::{EmptyState, ErrorState, LoadingState};
pub use pagination::pagination;
pub use photo::photo;
pub use price_filter::{price_filter_button, price_filter_panel};
pub use property_card::property_card;
pub use search_box::search_box;
pub use sort_select::sort_select;
