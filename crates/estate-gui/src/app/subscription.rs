//! Application subscriptions.
//!
//! | Subscription | Condition | Purpose |
//! |--------------|-----------|---------|
//! | Keyboard | Always | Escape to close the filter panel or go back |
//!
//! The search debounce timer is a `Task`, not a subscription, so that it can
//! be aborted when the text changes again.

use iced::Subscription;
use iced::keyboard;

use crate::message::Message;

/// Create all application subscriptions.
pub fn create_subscription() -> Subscription<Message> {
    Subscription::batch([keyboard_subscription()])
}

/// Keyboard event subscription.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}
