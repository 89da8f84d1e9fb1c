//! Duration layouts and their digit segments.

use std::fmt;
use std::str::FromStr;

use crate::error::DurationError;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// A unit a digit segment counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Hours.
    Hours,
    /// Minutes.
    Minutes,
    /// Seconds.
    Seconds,
}

impl TimeUnit {
    /// Seconds in one of this unit.
    pub fn seconds(self) -> u64 {
        match self {
            Self::Hours => SECONDS_PER_HOUR,
            Self::Minutes => SECONDS_PER_MINUTE,
            Self::Seconds => 1,
        }
    }

    /// Single-letter code shown next to a value.
    pub fn code(self) -> &'static str {
        match self {
            Self::Hours => "h",
            Self::Minutes => "m",
            Self::Seconds => "s",
        }
    }
}

/// One run of digits in a [`DurationFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// What the digits count.
    pub unit: TimeUnit,
    /// Number of digits.
    pub width: usize,
}

const HH: Segment = Segment {
    unit: TimeUnit::Hours,
    width: 2,
};
const MM: Segment = Segment {
    unit: TimeUnit::Minutes,
    width: 2,
};
const M: Segment = Segment {
    unit: TimeUnit::Minutes,
    width: 1,
};
const SS: Segment = Segment {
    unit: TimeUnit::Seconds,
    width: 2,
};

/// Layout of the keypad display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DurationFormat {
    /// `HH:MM:SS`
    #[default]
    HhMmSs,
    /// `HH:MM`
    HhMm,
    /// `MM:SS`
    MmSs,
    /// `M:SS`
    MSs,
    /// `HH`
    Hh,
    /// `MM`
    Mm,
    /// `SS`
    Ss,
}

impl DurationFormat {
    /// Every layout.
    pub const ALL: [Self; 7] = [
        Self::HhMmSs,
        Self::HhMm,
        Self::MmSs,
        Self::MSs,
        Self::Hh,
        Self::Mm,
        Self::Ss,
    ];

    /// Name such as `HH_MM_SS`.
    pub fn name(self) -> &'static str {
        match self {
            Self::HhMmSs => "HH_MM_SS",
            Self::HhMm => "HH_MM",
            Self::MmSs => "MM_SS",
            Self::MSs => "M_SS",
            Self::Hh => "HH",
            Self::Mm => "MM",
            Self::Ss => "SS",
        }
    }

    /// Digit segments from most to least significant.
    pub fn segments(self) -> &'static [Segment] {
        match self {
            Self::HhMmSs => &[HH, MM, SS],
            Self::HhMm => &[HH, MM],
            Self::MmSs => &[MM, SS],
            Self::MSs => &[M, SS],
            Self::Hh => &[HH],
            Self::Mm => &[MM],
            Self::Ss => &[SS],
        }
    }

    /// Total number of digits.
    pub fn width(self) -> usize {
        self.segments().iter().map(|s| s.width).sum()
    }
}

impl fmt::Display for DurationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DurationFormat {
    type Err = DurationError;

    /// Parses a name such as `HH_MM_SS` or `m_ss`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DurationError::UnknownFormat {
                name: s.to_string(),
            })
    }
}
