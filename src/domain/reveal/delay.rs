use std::time::Duration;

use serde::{Deserialize, Deserializer};

use super::RevealError;

/// Time between two reveal steps.
///
/// Constructed from signed milliseconds so that a negative value coming from
/// configuration or a caller is rejected instead of silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealDelay(Duration);

impl RevealDelay {
    /// Steps are scheduled as soon as possible, one per scheduler turn.
    pub const ZERO: Self = Self(Duration::ZERO);

    pub fn from_millis(ms: i64) -> Result<Self, RevealError> {
        u64::try_from(ms)
            .map(|ms| Self(Duration::from_millis(ms)))
            .map_err(|_| RevealError::NegativeDelay(ms))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for RevealDelay {
    fn default() -> Self {
        Self(Duration::from_millis(50))
    }
}

impl From<Duration> for RevealDelay {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl TryFrom<i64> for RevealDelay {
    type Error = RevealError;

    fn try_from(ms: i64) -> Result<Self, Self::Error> {
        Self::from_millis(ms)
    }
}

impl<'de> Deserialize<'de> for RevealDelay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = i64::deserialize(deserializer)?;
        Self::from_millis(ms).map_err(serde::de::Error::custom)
    }
}
