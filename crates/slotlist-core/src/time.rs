//! Wall-clock capture timestamps for buffer nodes.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Microsecond-resolution time since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp {
    micros: u64,
}

impl Timestamp {
    /// The Unix epoch itself.
    pub const EPOCH: Self = Self { micros: 0 };

    /// Current wall-clock time.
    ///
    /// A clock set before the epoch reads as [`Timestamp::EPOCH`].
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(Self::from_duration)
            .unwrap_or(Self::EPOCH)
    }

    /// Build from a microsecond count.
    pub const fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    /// Build from a duration since the epoch, saturating at `u64::MAX` µs.
    pub fn from_duration(d: Duration) -> Self {
        Self {
            micros: u64::try_from(d.as_micros()).unwrap_or(u64::MAX),
        }
    }

    /// Microseconds since the epoch.
    pub const fn as_micros(&self) -> u64 {
        self.micros
    }

    /// Whole seconds since the epoch.
    pub const fn secs(&self) -> u64 {
        self.micros / 1_000_000
    }

    /// Sub-second part in microseconds.
    pub const fn subsec_micros(&self) -> u32 {
        (self.micros % 1_000_000) as u32
    }

    /// Duration since the epoch.
    pub const fn as_duration(&self) -> Duration {
        Duration::from_micros(self.micros)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.secs(), self.subsec_micros())
    }
}
