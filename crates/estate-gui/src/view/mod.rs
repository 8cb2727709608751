//! View module for Estate Studio.
//!
//! Views are pure functions that render UI based on application state.
//!
//! - `listing.rs` - Search, filters, and the property grid
//! - `detail.rs` - One property with photos, owner, and history

pub mod detail;
pub mod listing;

pub use detail::view_detail;
pub use listing::view_listing;
