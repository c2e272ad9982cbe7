//! Time sources
//!
//! Simulated latency (document verification, assistant typing) is expressed as
//! deadlines against a [`Clock`]. The UI and the CLI use [`SystemClock`];
//! tests use [`ManualClock`], which only moves when told to.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A deterministic clock for tests and scripted demos.
///
/// Clones share the same underlying time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    /// Create a clock frozen at the Unix epoch
    pub fn at_epoch() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }

    /// Set the time, ignoring requests to go backwards
    pub fn advance_to(&self, deadline: DateTime<Utc>) {
        self.millis
            .fetch_max(deadline.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Longest simulated delay, one day
pub const MAX_DELAY_MS: u64 = 24 * 60 * 60 * 1000;

/// Convert a millisecond setting into a chrono duration, capped at [`MAX_DELAY_MS`]
pub fn millis(ms: u64) -> Duration {
    Duration::milliseconds(ms.min(MAX_DELAY_MS) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_only_moves_forward() {
        let clock = ManualClock::at_epoch();
        clock.advance(Duration::seconds(3));
        assert_eq!(clock.now().timestamp_millis(), 3000);

        clock.advance_to(DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(1));
        assert_eq!(clock.now().timestamp_millis(), 3000);

        clock.advance_to(DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(5));
        assert_eq!(clock.now().timestamp_millis(), 5000);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::at_epoch();
        let other = clock.clone();
        clock.advance(millis(1500));
        assert_eq!(other.now().timestamp_millis(), 1500);
    }

    #[test]
    fn test_millis_caps_long_delays() {
        assert_eq!(millis(u64::MAX), Duration::days(1));
        assert_eq!(millis(1500), Duration::milliseconds(1500));

        let now = DateTime::<Utc>::MAX_UTC - Duration::days(2);
        assert!(now.checked_add_signed(millis(u64::MAX)).is_some());
    }
}
