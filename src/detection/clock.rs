//! Wall-clock source for time-of-day rules
//!
//! Scoring reads the local hour at evaluation time. The clock sits behind a
//! trait so tests and the CLI can pin it.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Error, Result};

/// Source of the current local wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Hour of day, 0..=23
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// The host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: NaiveDateTime,
}

impl FixedClock {
    pub const fn new(time: NaiveDateTime) -> Self {
        FixedClock { time }
    }

    /// A fixed clock at `hour:00` on 2025-01-01
    pub fn at_hour(hour: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .map(Self::new)
            .ok_or(Error::InvalidHour(hour))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_hour() {
        let clock = FixedClock::at_hour(4).unwrap();
        assert_eq!(clock.hour(), 4);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_fixed_clock_rejects_bad_hour() {
        assert!(matches!(FixedClock::at_hour(24), Err(Error::InvalidHour(24))));
    }

    #[test]
    fn test_system_clock_hour_in_range() {
        assert!(SystemClock.hour() < 24);
    }
}
