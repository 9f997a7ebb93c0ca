//! Timestamp type used throughout TreeKin.
//!
//! Timestamps are Unix epoch milliseconds (UTC). The value is signed so that
//! planting dates before 1970 and instants in the future can both be
//! represented and compared without wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A Unix timestamp in milliseconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Signed milliseconds from this timestamp until `now`.
    ///
    /// Negative when `self` lies after `now`.
    pub fn millis_until(&self, now: Timestamp) -> i64 {
        now.0.saturating_sub(self.0)
    }

    /// Milliseconds elapsed since this timestamp, clamped at zero.
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        self.millis_until(now).max(0) as u64
    }

    /// Shift by a signed number of whole days.
    pub fn plus_days(self, days: i64) -> Self {
        Self(self.0.saturating_add(days.saturating_mul(MILLIS_PER_DAY)))
    }

    /// Shift by a signed number of milliseconds.
    pub fn plus_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match chrono::DateTime::from_timestamp_millis(self.0) {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_clamped_for_future_timestamps() {
        let now = Timestamp::from_millis(1_000);
        let later = Timestamp::from_millis(5_000);
        assert_eq!(later.millis_until(now), -4_000);
        assert_eq!(later.elapsed_since(now), 0);
        assert_eq!(now.elapsed_since(later), 4_000);
    }

    #[test]
    fn plus_days_moves_by_whole_days() {
        let t = Timestamp::EPOCH.plus_days(7);
        assert_eq!(t.as_millis(), 7 * MILLIS_PER_DAY);
        assert_eq!(t.plus_days(-7), Timestamp::EPOCH);
    }

    #[test]
    fn arithmetic_saturates_at_bounds() {
        let t = Timestamp::from_millis(i64::MAX).plus_millis(10);
        assert_eq!(t.as_millis(), i64::MAX);
        let (min, max) = (Timestamp::from_millis(i64::MIN), Timestamp::from_millis(i64::MAX));
        assert_eq!(min.millis_until(max), i64::MAX);
    }

    #[test]
    fn display_renders_rfc3339() {
        let t = Timestamp::from_secs(86_400);
        assert_eq!(t.to_string(), "1970-01-02T00:00:00.000Z");
    }
}
