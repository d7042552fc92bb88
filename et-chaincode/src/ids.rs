//! Payment detail id allocation
//!
//! Every `RecordPayment` call writes a fresh `PaymentDetail`. Its id must not
//! collide with any earlier detail, including one allocated in the same
//! nanosecond.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::clock::Clock;

/// Allocator of payment detail ids
pub trait DetailIdSource: Send + Sync {
    /// Return an id never returned before by this source.
    fn next_id(&self) -> i64;
}

/// Clock-derived ids: nanoseconds since the epoch, forced strictly increasing.
pub struct ClockIds {
    clock: Arc<dyn Clock>,
    last: AtomicI64,
}

impl ClockIds {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicI64::new(i64::MIN),
        }
    }
}

impl DetailIdSource for ClockIds {
    fn next_id(&self) -> i64 {
        let now = self.clock.unix_nanos();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now.max(previous.saturating_add(1))
    }
}

impl std::fmt::Debug for ClockIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockIds")
            .field("last", &self.last.load(Ordering::SeqCst))
            .finish()
    }
}

/// Sequential ids starting from a configured value
#[derive(Debug)]
pub struct SequenceIds {
    next: AtomicI64,
}

impl SequenceIds {
    pub fn starting_at(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl DetailIdSource for SequenceIds {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::Duration;

    #[test]
    fn test_clock_ids_strictly_increase_on_frozen_clock() {
        let clock = Arc::new(ManualClock::at_seconds(1_700_000_000));
        let ids = ClockIds::new(clock.clone());

        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert_eq!(first, 1_700_000_000_000_000_000);
        assert_eq!(second, first + 1);
        assert_eq!(third, first + 2);

        clock.advance(Duration::seconds(1));
        assert_eq!(ids.next_id(), 1_700_000_001_000_000_000);
    }

    #[test]
    fn test_clock_ids_never_go_backwards() {
        let clock = Arc::new(ManualClock::at_seconds(100));
        let ids = ClockIds::new(clock.clone());
        let first = ids.next_id();

        clock.advance(Duration::seconds(-50));
        assert!(ids.next_id() > first);
    }

    #[test]
    fn test_sequence_ids() {
        let ids = SequenceIds::starting_at(7);
        assert_eq!(ids.next_id(), 7);
        assert_eq!(ids.next_id(), 8);
        assert_eq!(ids.next_id(), 9);
    }
}
