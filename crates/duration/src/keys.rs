//! Keypad layout.

use std::fmt;
use std::str::FromStr;

use crate::config::DurationConfig;
use crate::error::DurationError;

/// Label of the clear key.
pub const ACTION_CLEAR: &str = "C";

/// Label of the backspace key.
pub const ACTION_BACKSPACE: &str = "<";

/// A keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// A single digit 0..=9.
    Digit(u8),
    /// Appends two zeros.
    DoubleZero,
    /// Resets the input.
    Clear,
    /// Deletes the last digit.
    Backspace,
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::DoubleZero => f.write_str("00"),
            Self::Clear => f.write_str(ACTION_CLEAR),
            Self::Backspace => f.write_str(ACTION_BACKSPACE),
        }
    }
}

impl FromStr for InputKey {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key {
            "00" => Ok(Self::DoubleZero),
            ACTION_BACKSPACE => Ok(Self::Backspace),
            _ if key.eq_ignore_ascii_case(ACTION_CLEAR) => Ok(Self::Clear),
            _ => match key.as_bytes() {
                [b @ b'0'..=b'9'] => Ok(Self::Digit(b - b'0')),
                _ => Err(DurationError::UnknownKey {
                    key: s.to_string(),
                }),
            },
        }
    }
}

/// Keys in keypad order: 1..=9, then `00` or clear, 0 and backspace.
pub fn input_keys(config: &DurationConfig) -> Vec<InputKey> {
    let mut keys: Vec<InputKey> = (1..=9).map(InputKey::Digit).collect();
    keys.push(if config.display_clear_button() {
        InputKey::Clear
    } else {
        InputKey::DoubleZero
    });
    keys.push(InputKey::Digit(0));
    keys.push(InputKey::Backspace);
    keys
}
