//! Application state.
//!
//! - [`AppState`]: everything the application holds
//! - [`ViewState`]: the view on screen and its UI state

mod app_state;
mod view_state;

pub use app_state::AppState;
pub use view_state::ViewState;
