//! Injected source of "today".

use std::fmt;

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
///
/// Grid builds and navigation read it once per call, so tests can pin the
/// date with [`FixedClock`].
pub trait Clock: fmt::Debug + Send + Sync {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Reads today's date from the host clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
