//! Message handler architecture.
//!
//! Message handling logic lives outside the `App` struct, grouped by
//! feature. Each handler implements [`MessageHandler`] for one message type
//! and `App::update()` dispatches to it:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Listing(msg) => ListingHandler.handle(&mut self.state, msg),
//!         Message::Detail(msg) => DetailHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod detail;
mod listing;
mod navigation;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use detail::DetailHandler;
pub use listing::{ListingHandler, refresh_listing};
pub use navigation::NavigationHandler;

/// Trait for handling messages in the Iced architecture.
///
/// Each handler is responsible for a specific message type and can access
/// the full application state.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
