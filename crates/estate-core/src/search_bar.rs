//! Free-text search input with debounced commits.

use std::time::Duration;

use crate::debounce::{DebounceTicket, Debouncer};

/// State of the search text input.
///
/// Keystrokes update the visible text immediately and restart the debounce
/// timer. The committed query is emitted either when the timer elapses or
/// when the user presses Enter, never both for the same edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchBar {
    text: String,
    debouncer: Debouncer,
}

impl SearchBar {
    /// Create a search bar with the given debounce delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            text: String::new(),
            debouncer: Debouncer::new(delay),
        }
    }

    /// Current text, as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Debounce delay.
    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// Whether a commit is waiting for the timer.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Record a keystroke. The caller starts a timer for the returned ticket.
    pub fn input(&mut self, text: impl Into<String>) -> DebounceTicket {
        self.text = text.into();
        self.debouncer.schedule()
    }

    /// The timer for `ticket` elapsed. Returns the text to commit, if the
    /// ticket is still current.
    pub fn timer_elapsed(&mut self, ticket: DebounceTicket) -> Option<String> {
        self.debouncer.fire(ticket).then(|| self.text.clone())
    }

    /// Enter was pressed: cancel the pending timer and commit now.
    pub fn submit(&mut self) -> String {
        self.debouncer.cancel();
        self.text.clone()
    }

    /// Clear the text. Behaves like typing an empty string.
    pub fn clear(&mut self) -> DebounceTicket {
        self.input(String::new())
    }

    /// Drop any pending timer, e.g. when the view is torn down.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}
