//! Wall-clock abstraction
//!
//! `since` is the only helper that depends on the current time. It reads it
//! through [`Clock`] so callers can freeze time instead of patching globals.

use chrono::{DateTime, TimeZone, Utc};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the real system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Build a fixed clock from a UTC calendar date and time
    ///
    /// # Returns
    /// * `Option<FixedClock>` - `None` if the fields do not form a valid instant
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock::from_ymd_hms(2017, 11, 15, 23, 0, 0).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp(), 1_510_786_800);
    }

    #[test]
    fn fixed_clock_rejects_invalid_dates() {
        assert!(FixedClock::from_ymd_hms(2017, 2, 30, 0, 0, 0).is_none());
    }
}
