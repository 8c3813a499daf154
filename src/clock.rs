//! Clock abstraction so TTL and expiry logic stays deterministic in tests.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current time as milliseconds since the Unix epoch.
    ///
    /// The signed request timestamp is derived from this, so the payload
    /// and its signature always agree on the instant.
    fn now_millis(&self) -> i64 {
        self.now_utc().timestamp_millis()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Adjustable clock for deterministic testing.
///
/// Shareable behind an `Arc`; `advance` moves time forward for every
/// holder, which is what TTL-expiry tests need.
#[cfg(any(test, feature = "test-seams"))]
#[derive(Debug)]
pub struct MockClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

#[cfg(any(test, feature = "test-seams"))]
impl MockClock {
    /// Clock frozen at the given instant.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: std::sync::Mutex::new(now),
        }
    }

    /// Clock frozen at an RFC 3339 instant.
    pub fn from_rfc3339(s: &str) -> Self {
        Self::new(
            DateTime::parse_from_rfc3339(s)
                .expect("valid RFC 3339")
                .with_timezone(&Utc),
        )
    }

    /// Move the clock forward.
    pub fn advance(&self, delta: chrono::Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now = *now + delta;
    }
}

#[cfg(any(test, feature = "test-seams"))]
impl Clock for MockClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn system_clock_returns_current_time() {
        let now = SystemClock.now_utc();
        assert!(now.year() >= 2025);
    }

    #[test]
    fn mock_clock_is_frozen() {
        let clock = MockClock::from_rfc3339("2026-03-01T08:30:00Z");
        assert_eq!(clock.now_utc(), clock.now_utc());
        assert_eq!(clock.now_utc().to_rfc3339(), "2026-03-01T08:30:00+00:00");
    }

    #[test]
    fn mock_clock_advances_shared_view() {
        let clock = std::sync::Arc::new(MockClock::from_rfc3339("2026-03-01T08:30:00Z"));
        let held = clock.clone();
        clock.advance(chrono::Duration::minutes(90));
        assert_eq!(held.now_utc().to_rfc3339(), "2026-03-01T10:00:00+00:00");
    }

    #[test]
    fn millis_matches_utc_time() {
        let clock = MockClock::from_rfc3339("2026-03-01T08:30:00Z");
        assert_eq!(clock.now_millis(), clock.now_utc().timestamp_millis());
    }
}
