//! Selection modes and the values extracted from them.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::config::DateBoundary;
use crate::error::CalendarError;

/// Index of the range start in [`SelectionValues::range`].
pub const RANGE_START: usize = 0;

/// Index of the range end in [`SelectionValues::range`].
pub const RANGE_END: usize = 1;

/// What the user has picked so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarSelection {
    /// A single date.
    Date {
        /// The picked date, if any.
        selected: Option<NaiveDate>,
    },
    /// Any number of individual dates.
    Dates {
        /// The picked dates in calendar order.
        selected: BTreeSet<NaiveDate>,
    },
    /// A date range. `end` stays empty until the second tap.
    Period {
        /// Range start.
        start: Option<NaiveDate>,
        /// Inclusive range end.
        end: Option<NaiveDate>,
    },
}

impl Default for CalendarSelection {
    fn default() -> Self {
        Self::Date { selected: None }
    }
}

impl CalendarSelection {
    /// Empty single-date selection.
    pub fn date(selected: Option<NaiveDate>) -> Self {
        Self::Date { selected }
    }

    /// Multi-date selection from any collection of dates.
    pub fn dates(selected: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self::Dates {
            selected: selected.into_iter().collect(),
        }
    }

    /// Period selection.
    pub fn period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self::Period { start, end }
    }

    /// The date a camera should open on: the single date, the first of many,
    /// or the range start.
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date { selected } => *selected,
            Self::Dates { selected } => selected.first().copied(),
            Self::Period { start, .. } => *start,
        }
    }

    /// Pre-extracts the values the selection evaluator compares against.
    pub fn values(&self) -> SelectionValues {
        SelectionValues {
            date: match self {
                Self::Date { selected } => *selected,
                _ => None,
            },
            dates: match self {
                Self::Dates { selected } => selected.clone(),
                _ => BTreeSet::new(),
            },
            range: match self {
                Self::Period { start, end } => vec![*start, *end],
                _ => Vec::new(),
            },
        }
    }

    /// Checks every selected date against `boundary`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfBoundary`] for the first date outside
    /// the boundary, or [`CalendarError::InvertedPeriod`] if a period ends
    /// before it starts.
    pub fn validate(&self, boundary: &DateBoundary) -> Result<(), CalendarError> {
        match self {
            Self::Date { selected } => selected.iter().try_for_each(|d| boundary.check(*d)),
            Self::Dates { selected } => selected.iter().try_for_each(|d| boundary.check(*d)),
            Self::Period { start, end } => {
                if let (Some(start), Some(end)) = (start, end)
                    && end < start
                {
                    return Err(CalendarError::InvertedPeriod {
                        start: *start,
                        end: *end,
                    });
                }
                start
                    .iter()
                    .chain(end.iter())
                    .try_for_each(|d| boundary.check(*d))
            }
        }
    }

    /// The selection after the user taps `date`.
    ///
    /// - `Date` replaces the selected date.
    /// - `Dates` toggles membership of `date`.
    /// - `Period` starts a new range when there is no start yet, when the
    ///   range is already complete, or when `date` precedes the start;
    ///   otherwise `date` closes the range.
    pub fn on_date_selected(&self, date: NaiveDate) -> Self {
        match self {
            Self::Date { .. } => Self::Date {
                selected: Some(date),
            },
            Self::Dates { selected } => {
                let mut selected = selected.clone();
                if !selected.remove(&date) {
                    selected.insert(date);
                }
                Self::Dates { selected }
            }
            Self::Period { start, end } => match (start, end) {
                (Some(start), None) if date >= *start => Self::Period {
                    start: Some(*start),
                    end: Some(date),
                },
                _ => Self::Period {
                    start: Some(date),
                    end: None,
                },
            },
        }
    }
}

/// Selection values pulled out of a [`CalendarSelection`] once per page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionValues {
    /// The single selected date of a `Date` selection.
    pub date: Option<NaiveDate>,
    /// The selected dates of a `Dates` selection.
    pub dates: BTreeSet<NaiveDate>,
    /// `[start, end]` of a `Period` selection, empty otherwise.
    pub range: Vec<Option<NaiveDate>>,
}

impl SelectionValues {
    /// Range start, absent when the range has no such slot.
    pub fn start_value(&self) -> Option<NaiveDate> {
        self.range.get(RANGE_START).copied().flatten()
    }

    /// Range end, absent when the range has no such slot.
    pub fn end_value(&self) -> Option<NaiveDate> {
        self.range.get(RANGE_END).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_date_per_variant() {
        assert_eq!(CalendarSelection::date(None).anchor_date(), None);
        let dates = CalendarSelection::dates([date(2024, 5, 20), date(2024, 5, 2)]);
        assert_eq!(dates.anchor_date(), Some(date(2024, 5, 2)));
        let period = CalendarSelection::period(Some(date(2024, 5, 10)), None);
        assert_eq!(period.anchor_date(), Some(date(2024, 5, 10)));
    }

    #[test]
    fn values_of_non_period_have_empty_range() {
        let values = CalendarSelection::date(Some(date(2024, 1, 1))).values();
        assert_eq!(values.date, Some(date(2024, 1, 1)));
        assert!(values.range.is_empty());
        assert_eq!(values.start_value(), None);
        assert_eq!(values.end_value(), None);
    }

    #[test]
    fn values_of_open_period() {
        let values = CalendarSelection::period(Some(date(2024, 5, 10)), None).values();
        assert_eq!(values.start_value(), Some(date(2024, 5, 10)));
        assert_eq!(values.end_value(), None);
    }

    #[test]
    fn validate_rejects_out_of_boundary() {
        let boundary = DateBoundary::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert!(CalendarSelection::date(None).validate(&boundary).is_ok());
        let err = CalendarSelection::dates([date(2024, 3, 1), date(2025, 1, 1)])
            .validate(&boundary)
            .unwrap_err();
        assert!(matches!(err, CalendarError::OutOfBoundary { .. }));
    }

    #[test]
    fn validate_rejects_inverted_period() {
        let boundary = DateBoundary::default();
        let err = CalendarSelection::period(Some(date(2024, 5, 15)), Some(date(2024, 5, 10)))
            .validate(&boundary)
            .unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvertedPeriod {
                start: date(2024, 5, 15),
                end: date(2024, 5, 10),
            }
        );
    }

    #[test]
    fn tapping_dates_toggles() {
        let selection = CalendarSelection::dates([date(2024, 5, 1)]);
        let added = selection.on_date_selected(date(2024, 5, 2));
        assert_eq!(added, CalendarSelection::dates([date(2024, 5, 1), date(2024, 5, 2)]));
        let removed = added.on_date_selected(date(2024, 5, 1));
        assert_eq!(removed, CalendarSelection::dates([date(2024, 5, 2)]));
    }

    #[test]
    fn tapping_period_builds_range() {
        let empty = CalendarSelection::period(None, None);
        let started = empty.on_date_selected(date(2024, 5, 10));
        assert_eq!(started, CalendarSelection::period(Some(date(2024, 5, 10)), None));

        let closed = started.on_date_selected(date(2024, 5, 15));
        assert_eq!(
            closed,
            CalendarSelection::period(Some(date(2024, 5, 10)), Some(date(2024, 5, 15)))
        );

        let restarted = closed.on_date_selected(date(2024, 5, 12));
        assert_eq!(restarted, CalendarSelection::period(Some(date(2024, 5, 12)), None));
    }

    #[test]
    fn tapping_before_start_moves_start() {
        let started = CalendarSelection::period(Some(date(2024, 5, 10)), None);
        let moved = started.on_date_selected(date(2024, 5, 3));
        assert_eq!(moved, CalendarSelection::period(Some(date(2024, 5, 3)), None));
    }

    #[test]
    fn tapping_start_again_closes_single_day_range() {
        let started = CalendarSelection::period(Some(date(2024, 5, 10)), None);
        let closed = started.on_date_selected(date(2024, 5, 10));
        assert_eq!(
            closed,
            CalendarSelection::period(Some(date(2024, 5, 10)), Some(date(2024, 5, 10)))
        );
    }
}
