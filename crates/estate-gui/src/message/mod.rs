//! Message module for Estate Studio.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod detail;
pub mod listing;

use iced::keyboard;

use estate_core::Route;

pub use detail::DetailMessage;
pub use listing::{ListingMessage, PriceFilterMessage, SearchMessage};

/// Root message enum for the application.
///
/// All user interactions and system events are represented as variants
/// of this enum. The `update` function processes these messages to
/// modify application state.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Show the view addressed by a route
    Navigate(Route),

    /// Open a web address in the system browser
    OpenInBrowser(String),

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Listing view messages (search, filters, sort, pages)
    Listing(ListingMessage),

    /// Detail view messages
    Detail(DetailMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation (used for ignored events)
    Noop,
}
