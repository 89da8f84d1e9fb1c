//! Keypad digit buffer.
//!
//! The display of a duration dialog is a fixed number of digits, one per
//! position of the [`DurationFormat`]. Typing shifts digits in from the
//! right and drops the leftmost one; backspace shifts them back and fills
//! the left with `0`. Every operation returns a new buffer.

use std::fmt;

use tracing::trace;

use crate::error::DurationError;
use crate::format::{DurationFormat, TimeUnit};
use crate::keys::InputKey;
use crate::time::{UnitValue, split_time};

/// Fixed-width digit buffer of a duration dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationInput {
    format: DurationFormat,
    digits: Vec<u8>,
}

impl DurationInput {
    /// All-zero buffer for `format`.
    pub fn new(format: DurationFormat) -> Self {
        Self {
            format,
            digits: vec![0; format.width()],
        }
    }

    /// Buffer pre-filled from a duration in seconds.
    ///
    /// Each segment shows its part of [`split_time`]: hours wrap at 24, whole
    /// days are dropped. A value with more digits than its segment keeps its
    /// leading digits, so `M_SS` shows only the first digit of the minutes.
    pub fn from_seconds(format: DurationFormat, seconds: u64) -> Self {
        let time = split_time(seconds);
        let mut digits = Vec::with_capacity(format.width());
        for segment in format.segments() {
            let text = format!("{:0width$}", time.get(segment.unit), width = segment.width);
            digits.extend(text.bytes().take(segment.width).map(|b| b - b'0'));
        }
        trace!(%format, seconds, "duration input filled");
        Self { format, digits }
    }

    /// The layout.
    pub fn format(&self) -> DurationFormat {
        self.format
    }

    /// Digits from most to least significant.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Whether every digit is zero.
    pub fn is_empty(&self) -> bool {
        self.digits.iter().all(|d| *d == 0)
    }

    /// Shifts `digit` in from the right.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::InvalidDigit`] if `digit` is larger than 9.
    pub fn push_digit(&self, digit: u8) -> Result<Self, DurationError> {
        if digit > 9 {
            return Err(DurationError::InvalidDigit { digit });
        }
        let mut digits = Vec::with_capacity(self.digits.len());
        digits.extend_from_slice(self.digits.get(1..).unwrap_or_default());
        digits.push(digit);
        Ok(self.with_digits(digits))
    }

    /// Shifts two zeros in from the right.
    #[must_use]
    pub fn push_double_zero(&self) -> Self {
        let width = self.digits.len();
        let kept = self.digits.get(2.min(width)..).unwrap_or_default();
        let mut digits = Vec::with_capacity(width);
        digits.extend_from_slice(kept);
        digits.resize(width, 0);
        self.with_digits(digits)
    }

    /// Drops the rightmost digit and shifts a zero in from the left.
    #[must_use]
    pub fn backspace(&self) -> Self {
        let width = self.digits.len();
        let mut digits = Vec::with_capacity(width);
        if width > 0 {
            digits.push(0);
            digits.extend_from_slice(&self.digits[..width - 1]);
        }
        self.with_digits(digits)
    }

    /// All-zero buffer of the same layout.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::new(self.format)
    }

    /// Applies one keypad press.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::InvalidDigit`] for a digit key above 9.
    pub fn apply(&self, key: InputKey) -> Result<Self, DurationError> {
        let next = match key {
            InputKey::Digit(digit) => self.push_digit(digit)?,
            InputKey::DoubleZero => self.push_double_zero(),
            InputKey::Clear => self.clear(),
            InputKey::Backspace => self.backspace(),
        };
        trace!(%key, before = %self, after = %next, "key applied");
        Ok(next)
    }

    /// Total duration in seconds.
    ///
    /// Segments are read at face value, so `MM` of `90` is 5400 seconds.
    pub fn to_seconds(&self) -> u64 {
        self.segments()
            .map(|(unit, digits)| {
                let value = digits.iter().fold(0u64, |acc, d| acc * 10 + u64::from(*d));
                value * unit.seconds()
            })
            .sum()
    }

    /// Displayed digits per segment, e.g. `("01", Hours)`.
    pub fn value_pairs(&self) -> Vec<UnitValue> {
        self.segments()
            .map(|(unit, digits)| UnitValue {
                value: digits.iter().map(|d| char::from(b'0' + d)).collect(),
                unit,
            })
            .collect()
    }

    fn segments(&self) -> impl Iterator<Item = (TimeUnit, &[u8])> + '_ {
        let mut start = 0;
        self.format.segments().iter().map(move |segment| {
            let end = (start + segment.width).min(self.digits.len());
            let digits = &self.digits[start.min(end)..end];
            start = end;
            (segment.unit, digits)
        })
    }

    fn with_digits(&self, digits: Vec<u8>) -> Self {
        Self {
            format: self.format,
            digits,
        }
    }
}

impl fmt::Display for DurationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.value_pairs().iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(input: &DurationInput) -> String {
        input.digits().iter().map(|d| char::from(b'0' + d)).collect()
    }

    #[test]
    fn new_is_zero() {
        let input = DurationInput::new(DurationFormat::HhMmSs);
        assert_eq!(digits(&input), "000000");
        assert!(input.is_empty());
        assert_eq!(input.to_seconds(), 0);
    }

    #[test]
    fn from_seconds_pads_segments() {
        let input = DurationInput::from_seconds(DurationFormat::HhMmSs, 3_725);
        assert_eq!(digits(&input), "010205");
        assert_eq!(input.to_seconds(), 3_725);
    }

    #[test]
    fn from_seconds_m_ss_keeps_first_minute_digit() {
        let input = DurationInput::from_seconds(DurationFormat::MSs, 12 * 60 + 7);
        assert_eq!(digits(&input), "107");
        let input = DurationInput::from_seconds(DurationFormat::MSs, 5 * 60 + 30);
        assert_eq!(digits(&input), "530");
    }

    #[test]
    fn from_seconds_wraps_hours_at_day() {
        let input = DurationInput::from_seconds(DurationFormat::HhMm, 25 * 3600);
        assert_eq!(digits(&input), "0100");
    }

    #[test]
    fn push_shifts_left() {
        let input = DurationInput::new(DurationFormat::MmSs)
            .push_digit(1)
            .unwrap()
            .push_digit(2)
            .unwrap();
        assert_eq!(digits(&input), "0012");
        assert_eq!(input.to_seconds(), 12);

        let input = input.push_digit(3).unwrap().push_digit(4).unwrap();
        assert_eq!(digits(&input), "1234");
        assert_eq!(input.to_seconds(), 12 * 60 + 34);

        let input = input.push_digit(5).unwrap();
        assert_eq!(digits(&input), "2345");
    }

    #[test]
    fn push_rejects_non_digit() {
        let input = DurationInput::new(DurationFormat::Ss);
        assert_eq!(
            input.push_digit(10),
            Err(DurationError::InvalidDigit { digit: 10 })
        );
    }

    #[test]
    fn double_zero() {
        let input = DurationInput::new(DurationFormat::HhMmSs)
            .push_digit(1)
            .unwrap()
            .push_double_zero();
        assert_eq!(digits(&input), "000100");
        assert_eq!(input.to_seconds(), 60);
    }

    #[test]
    fn double_zero_on_two_digits() {
        let input = DurationInput::from_seconds(DurationFormat::Ss, 42).push_double_zero();
        assert_eq!(digits(&input), "00");
    }

    #[test]
    fn backspace_shifts_right() {
        let input = DurationInput::from_seconds(DurationFormat::HhMmSs, 3_725).backspace();
        assert_eq!(digits(&input), "001020");
        let input = input.backspace().backspace().backspace().backspace().backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn clear_keeps_format() {
        let input = DurationInput::from_seconds(DurationFormat::MSs, 100).clear();
        assert_eq!(input.format(), DurationFormat::MSs);
        assert!(input.is_empty());
    }

    #[test]
    fn face_value_seconds() {
        let input = DurationInput::new(DurationFormat::Mm)
            .push_digit(9)
            .unwrap()
            .push_digit(0)
            .unwrap();
        assert_eq!(input.to_seconds(), 5_400);
    }

    #[test]
    fn value_pairs_and_display() {
        let input = DurationInput::from_seconds(DurationFormat::HhMmSs, 3_725);
        let pairs = input.value_pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].value, "01");
        assert_eq!(pairs[2].value, "05");
        assert_eq!(input.to_string(), "01h 02m 05s");
    }
}
