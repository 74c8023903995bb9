//! Timestamp mapping for `{bert, time, MegaSecs, Secs, MilliSecs}`.
//!
//! The wire keeps millisecond precision only. Anything finer is truncated on
//! encode, so a round trip is exact to within one millisecond.

use chrono::{DateTime, TimeZone, Utc};

const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SEC: i128 = 1_000_000_000;
const MILLIS_PER_SEC: i128 = 1_000;
const SECS_PER_MEGA: i128 = 1_000_000;

/// A point in time split the way Erlang's `os:timestamp/0` splits it.
///
/// For instants before the Unix epoch every component carries the sign of
/// the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComponents {
    pub megaseconds: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl TimeComponents {
    /// Split an instant, discarding sub-millisecond precision.
    pub fn from_datetime(instant: &DateTime<Utc>) -> Self {
        let nanos = i128::from(instant.timestamp()) * NANOS_PER_SEC
            + i128::from(instant.timestamp_subsec_nanos());
        // Division truncates toward zero on both sides of the epoch.
        let millis = nanos / NANOS_PER_MILLI;
        let secs = millis / MILLIS_PER_SEC;

        // chrono's representable range keeps every component far inside i64.
        Self {
            megaseconds: (secs / SECS_PER_MEGA) as i64,
            seconds: (secs % SECS_PER_MEGA) as i64,
            milliseconds: (millis % MILLIS_PER_SEC) as i64,
        }
    }

    /// Rebuild the instant, or `None` if it is outside chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let secs = i128::from(self.megaseconds) * SECS_PER_MEGA + i128::from(self.seconds);
        let millis = secs * MILLIS_PER_SEC + i128::from(self.milliseconds);
        Utc.timestamp_millis_opt(i64::try_from(millis).ok()?).single()
    }
}
