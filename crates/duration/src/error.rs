//! Error types for the sheets-duration crate.

/// Error type for all fallible operations in the sheets-duration crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// Returned when a format name is not one of the known layouts.
    #[error("unknown duration format: {name:?}")]
    UnknownFormat {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when a keypad label does not name a key.
    #[error("unknown input key: {key:?}")]
    UnknownKey {
        /// The label that failed to parse.
        key: String,
    },

    /// Returned when a pushed digit is larger than 9.
    #[error("digit must be 0..=9, got {digit}")]
    InvalidDigit {
        /// The invalid digit.
        digit: u8,
    },

    /// Returned when the minimum time exceeds the maximum time.
    #[error("min time {min}s is greater than max time {max}s")]
    InvertedTimeRange {
        /// Configured minimum in seconds.
        min: u64,
        /// Configured maximum in seconds.
        max: u64,
    },
}
