//! Splitting seconds into calendar units.

use std::fmt;

use crate::format::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TimeUnit};

/// Seconds per day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// A duration broken into days, hours (0..24), minutes (0..60) and seconds (0..60).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeInfo {
    /// Whole days.
    pub days: u64,
    /// Hours past the last whole day.
    pub hours: u64,
    /// Minutes past the last whole hour.
    pub minutes: u64,
    /// Seconds past the last whole minute.
    pub seconds: u64,
}

impl TimeInfo {
    /// The part counted in `unit`.
    pub fn get(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
        }
    }
}

impl fmt::Display for TimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Splits `seconds` into days, hours, minutes and seconds.
pub fn split_time(seconds: u64) -> TimeInfo {
    TimeInfo {
        days: seconds / SECONDS_PER_DAY,
        hours: seconds / SECONDS_PER_HOUR % 24,
        minutes: seconds / SECONDS_PER_MINUTE % 60,
        seconds: seconds % 60,
    }
}

/// A value displayed next to its unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitValue {
    /// Rendered digits.
    pub value: String,
    /// Unit of the digits.
    pub unit: TimeUnit,
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.code())
    }
}

/// Hint text parts for a duration: the non-zero hours, minutes and seconds.
///
/// Whole days are dropped; an input of zero yields no parts.
pub fn formatted_hint_time(seconds: u64) -> Vec<UnitValue> {
    let time = split_time(seconds);
    [TimeUnit::Hours, TimeUnit::Minutes, TimeUnit::Seconds]
        .into_iter()
        .filter(|unit| time.get(*unit) > 0)
        .map(|unit| UnitValue {
            value: time.get(unit).to_string(),
            unit,
        })
        .collect()
}
