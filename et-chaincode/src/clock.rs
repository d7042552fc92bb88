//! Time sources for record timestamps

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Whole seconds since the Unix epoch, used for `createdOn`/`updatedOn`
    fn unix_seconds(&self) -> i64 {
        self.now().timestamp()
    }

    /// Nanoseconds since the Unix epoch
    fn unix_nanos(&self) -> i64 {
        self.now().timestamp_nanos_opt().unwrap_or(i64::MAX)
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    nanos: AtomicI64,
}

impl ManualClock {
    /// Start at `seconds` past the Unix epoch
    pub fn at_seconds(seconds: i64) -> Self {
        Self {
            nanos: AtomicI64::new(seconds.saturating_mul(1_000_000_000)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let step = by.num_nanoseconds().unwrap_or(i64::MAX);
        self.nanos.fetch_add(step, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::at_seconds(1_700_000_000);
        assert_eq!(clock.unix_seconds(), 1_700_000_000);

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.unix_seconds(), 1_700_000_005);

        clock.advance(Duration::milliseconds(1));
        assert_eq!(clock.unix_nanos(), 1_700_000_005_001_000_000);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2023-11-14
        assert!(SystemClock.unix_seconds() > 1_700_000_000);
    }
}
