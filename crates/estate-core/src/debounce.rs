//! Debounce bookkeeping.
//!
//! The timer itself runs elsewhere (an async sleep in the GUI). This module
//! decides whether a timer that elapsed is still the one that counts: every
//! restart or cancel invalidates earlier tickets, so at most one pending
//! callback can ever fire.

use std::time::Duration;

/// Default delay before a typed query is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// Single-slot debounce state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<DebounceTicket>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    /// Create a debouncer with the given delay.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Configured delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a new timer, replacing any pending one.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation += 1;
        let ticket = DebounceTicket(self.generation);
        self.pending = Some(ticket);
        ticket
    }

    /// Cancel the pending timer. Returns the ticket that was cancelled.
    pub fn cancel(&mut self) -> Option<DebounceTicket> {
        self.pending.take()
    }

    /// Report that the timer for `ticket` elapsed.
    ///
    /// Returns `true` exactly once for the latest scheduled ticket, and only if
    /// it was not cancelled or replaced in the meantime.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Whether a timer is pending.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_fires_once() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule();
        assert!(debouncer.fire(ticket));
        assert!(!debouncer.fire(ticket));
    }

    #[test]
    fn test_restart_invalidates_previous_ticket() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        assert!(!debouncer.fire(first));
        assert!(debouncer.fire(second));
    }

    #[test]
    fn test_cancel_suppresses_fire() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let ticket = debouncer.schedule();
        assert_eq!(debouncer.cancel(), Some(ticket));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(ticket));
    }
}
