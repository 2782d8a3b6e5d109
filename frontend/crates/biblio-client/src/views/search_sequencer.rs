use std::sync::atomic::{AtomicU64, Ordering};

/// Stamps each search with a generation so that only the newest one
/// may write results.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search; invalidates every earlier ticket
    pub fn issue(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
