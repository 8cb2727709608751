//! Staleness guard for in-flight fetches.

use std::fmt;

/// Monotonic identifier attached to each issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw sequence number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request ids and recognizes responses to the latest one.
///
/// Only the most recently issued request is current. A response carrying any
/// other id arrived late and must be discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    issued: u64,
    in_flight: Option<RequestId>,
}

impl RequestTracker {
    /// Create a tracker with nothing issued.
    pub const fn new() -> Self {
        Self {
            issued: 0,
            in_flight: None,
        }
    }

    /// Issue the next id. Any earlier request becomes stale.
    pub fn issue(&mut self) -> RequestId {
        self.issued += 1;
        let id = RequestId(self.issued);
        self.in_flight = Some(id);
        id
    }

    /// Whether `id` is the request currently awaited.
    pub fn is_current(&self, id: RequestId) -> bool {
        self.in_flight == Some(id)
    }

    /// Accept a response for `id`. Returns `false` for stale responses.
    pub fn complete(&mut self, id: RequestId) -> bool {
        if self.is_current(id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Stop waiting for any response.
    pub fn cancel(&mut self) {
        self.in_flight = None;
    }

    /// Whether a response is awaited.
    pub const fn is_waiting(&self) -> bool {
        self.in_flight.is_some()
    }
}
