//! Configuration for a duration dialog.

use crate::error::DurationError;
use crate::format::DurationFormat;
use crate::input::DurationInput;

/// Configuration for a duration dialog.
///
/// # Example
///
/// ```
/// use sheets_duration::{DurationConfig, DurationFormat};
///
/// let config = DurationConfig::new(DurationFormat::MmSs)
///     .with_current_time(90)
///     .with_max_time(3599);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.initial_input().to_seconds(), 90);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationConfig {
    format: DurationFormat,
    current_time: Option<u64>,
    min_time: u64,
    max_time: u64,
    display_clear_button: bool,
}

impl DurationConfig {
    /// Creates a configuration for `format`.
    ///
    /// Defaults: no current time, `min_time = 0`, `max_time = u64::MAX`,
    /// no clear button.
    pub fn new(format: DurationFormat) -> Self {
        Self {
            format,
            current_time: None,
            min_time: 0,
            max_time: u64::MAX,
            display_clear_button: false,
        }
    }

    /// Sets the duration the input starts from, in seconds.
    pub fn with_current_time(mut self, seconds: u64) -> Self {
        self.current_time = Some(seconds);
        self
    }

    /// Sets the smallest accepted duration, in seconds.
    pub fn with_min_time(mut self, seconds: u64) -> Self {
        self.min_time = seconds;
        self
    }

    /// Sets the largest accepted duration, in seconds.
    pub fn with_max_time(mut self, seconds: u64) -> Self {
        self.max_time = seconds;
        self
    }

    /// Replaces the `00` key with a clear key.
    pub fn with_clear_button(mut self, display: bool) -> Self {
        self.display_clear_button = display;
        self
    }

    /// Returns the layout.
    pub fn format(&self) -> DurationFormat {
        self.format
    }

    /// Returns the starting duration, if any.
    pub fn current_time(&self) -> Option<u64> {
        self.current_time
    }

    /// Returns the smallest accepted duration.
    pub fn min_time(&self) -> u64 {
        self.min_time
    }

    /// Returns the largest accepted duration.
    pub fn max_time(&self) -> u64 {
        self.max_time
    }

    /// Returns whether the clear key is shown.
    pub fn display_clear_button(&self) -> bool {
        self.display_clear_button
    }

    /// Whether `seconds` lies in `min_time..=max_time`.
    pub fn is_valid(&self, seconds: u64) -> bool {
        (self.min_time..=self.max_time).contains(&seconds)
    }

    /// The buffer the dialog opens with.
    pub fn initial_input(&self) -> DurationInput {
        DurationInput::from_seconds(self.format, self.current_time.unwrap_or(0))
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `min_time` is greater than `max_time`.
    pub fn validate(&self) -> Result<(), DurationError> {
        if self.min_time > self.max_time {
            return Err(DurationError::InvertedTimeRange {
                min: self.min_time,
                max: self.max_time,
            });
        }
        Ok(())
    }
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self::new(DurationFormat::default())
    }
}
