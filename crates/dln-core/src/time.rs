//! Wall-clock time model.
//!
//! # Design
//!
//! Time is a single `Timestamp` wrapping unix seconds.  The routing and
//! scheduling core only ever needs two derived quantities:
//!
//! - the **hour of day** (0–23), which buckets traffic history samples and
//!   selects the historical average used by congestion prediction;
//! - **whole hours until a deadline** (signed), which feeds the scheduler's
//!   urgency term.
//!
//! Hour-of-day is computed with plain UTC arithmetic — no timezone database.
//! Networks spanning timezones would bucket by the dispatcher's clock, which
//! is the same convention the traffic samples are recorded under.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SECS_PER_HOUR: i64 = 3_600;
pub const SECS_PER_DAY: i64 = 86_400;

/// A point in time, in unix seconds.
///
/// Cheap to copy; all arithmetic is exact integer math.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Timestamp(secs)
    }

    /// Hour of day in `0..24`, UTC arithmetic.
    ///
    /// `rem_euclid` keeps pre-epoch timestamps in range.
    #[inline]
    pub fn hour_of_day(self) -> u8 {
        ((self.0.rem_euclid(SECS_PER_DAY)) / SECS_PER_HOUR) as u8
    }

    /// The timestamp `hours` hours after `self` (negative moves backwards).
    #[inline]
    pub fn plus_hours(self, hours: i64) -> Timestamp {
        Timestamp(self.0 + hours * SECS_PER_HOUR)
    }

    #[inline]
    pub fn plus_secs(self, secs: i64) -> Timestamp {
        Timestamp(self.0 + secs)
    }

    /// Whole hours from `self` to `later`, truncated toward zero.
    ///
    /// Negative when `later` is in the past — a deadline 30 minutes ago
    /// yields 0, one two hours ago yields -2.
    #[inline]
    pub fn hours_until(self, later: Timestamp) -> i64 {
        (later.0 - self.0) / SECS_PER_HOUR
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
