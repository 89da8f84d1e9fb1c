//! Error types for the sheets-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the sheets-calendar crate.
///
/// Every variant is a configuration problem detected while a
/// [`CalendarConfig`](crate::CalendarConfig) or a selection is being set up.
/// Grid computation itself never fails once construction succeeded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the boundary start lies after its end.
    #[error("invalid boundary: start {start} is after end {end}")]
    InvertedBoundary {
        /// The configured start of the boundary.
        start: NaiveDate,
        /// The configured end of the boundary.
        end: NaiveDate,
    },

    /// Returned when a selected or default date lies outside the boundary.
    #[error("date {date} is outside the boundary {start}..={end}")]
    OutOfBoundary {
        /// The offending date.
        date: NaiveDate,
        /// Inclusive boundary start.
        start: NaiveDate,
        /// Inclusive boundary end.
        end: NaiveDate,
    },

    /// Returned when a period selection ends before it starts.
    #[error("invalid period: end {end} is before start {start}")]
    InvertedPeriod {
        /// The period start.
        start: NaiveDate,
        /// The period end.
        end: NaiveDate,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },
}
