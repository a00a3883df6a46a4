//! Problem List Filtering
//!
//! Filter inputs and the ticketing that keeps overlapping list requests
//! from overwriting each other: only the newest request may apply its
//! response.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Value of the category/status selects meaning "no filter"
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    pub status: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
            status: ALL.to_string(),
        }
    }
}

/// Hands out increasing tickets; a ticket is current until a newer one is issued
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_response_is_discarded() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();

        // second response arrives first, then the first one
        assert!(seq.is_current(second));
        assert!(!seq.is_current(first));
    }

    #[test]
    fn test_clones_share_tickets() {
        let seq = RequestSequencer::new();
        let handle = seq.clone();
        let ticket = seq.issue();
        assert!(handle.is_current(ticket));
        handle.issue();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn test_default_filters_match_everything() {
        let f = FilterState::default();
        assert_eq!((f.search.as_str(), f.category.as_str(), f.status.as_str()), ("", ALL, ALL));
    }
}
