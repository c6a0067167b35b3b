//! Monotonic request sequencing for racing list queries.
//!
//! Rapid repeated queries (search-as-you-type) issue overlapping requests
//! with no cancellation; without a guard, a slow stale response can
//! overwrite a fresher one. Each request takes a sequence number at issue
//! time, and a response is applied only when no newer request has been
//! issued since.

use std::sync::atomic::{AtomicU64, Ordering};

/// A latest-wins guard over a stream of overlapping requests.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSequence {
    /// Create a fresh guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the sequence number for a request about to be issued.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Decide whether a completed request's response may be applied.
    ///
    /// Returns `false` when a newer request has been issued since, or when
    /// a newer response has already been applied.
    pub fn accept(&self, seq: u64) -> bool {
        if seq < self.issued.load(Ordering::SeqCst) {
            return false;
        }
        let mut current = self.applied.load(Ordering::SeqCst);
        loop {
            if seq <= current {
                return false;
            }
            match self.applied.compare_exchange(
                current,
                seq,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request_is_accepted() {
        let guard = RequestSequence::new();
        let seq = guard.begin();
        assert!(guard.accept(seq));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let guard = RequestSequence::new();
        let first = guard.begin();
        let second = guard.begin();
        // the slow first response arrives after the second was issued
        assert!(!guard.accept(first));
        assert!(guard.accept(second));
    }

    #[test]
    fn test_out_of_order_completion_latest_wins() {
        let guard = RequestSequence::new();
        let first = guard.begin();
        let second = guard.begin();
        // second completes first and is applied
        assert!(guard.accept(second));
        // first then completes; it is older than what was applied
        assert!(!guard.accept(first));
    }

    #[test]
    fn test_response_applied_only_once() {
        let guard = RequestSequence::new();
        let seq = guard.begin();
        assert!(guard.accept(seq));
        assert!(!guard.accept(seq));
    }
}
