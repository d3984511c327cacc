//! Event timestamps.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Wall-clock timestamp in microseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Current wall-clock time.
    pub fn now() -> Self {
        // A clock set before 1970 collapses to zero rather than failing.
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        Self::from_duration(since_epoch)
    }

    /// Create a timestamp from microseconds.
    pub fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    /// Create a timestamp from milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.saturating_mul(1000))
    }

    /// Create a timestamp from a duration since the epoch.
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration.as_micros() as u64)
    }

    /// Get the timestamp as microseconds.
    pub fn as_micros(&self) -> u64 {
        self.0
    }

    /// Get the timestamp as milliseconds.
    pub fn as_millis(&self) -> u64 {
        self.0 / 1000
    }

    /// Create a zero timestamp.
    pub fn zero() -> Self {
        Self(0)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Sub for Timestamp {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}
