//! Month and year picker availability.

use chrono::{Datelike, Month, NaiveDate};
use tracing::trace;

use crate::config::CalendarConfig;
use crate::date::{DateExt, month_length};
use crate::error::CalendarError;

/// All months in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Month for a 1-based month number, as delivered by a month picker.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `number` is not in 1..=12.
pub fn month_from_number(number: u32) -> Result<Month, CalendarError> {
    number
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index as usize).copied())
        .ok_or(CalendarError::InvalidMonth { month: number })
}

/// The month `date` falls in.
pub(crate) fn month_of(date: NaiveDate) -> Month {
    MONTHS[date.month0() as usize]
}

/// State of the month picker sub-view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthData {
    /// Month of the camera date.
    pub selected: Month,
    /// Month of today.
    pub this_month: Month,
    /// Months with no day inside the boundary, in calendar order.
    pub disabled: Vec<Month>,
}

impl CalendarMonthData {
    /// Whether `month` can be picked.
    pub fn is_disabled(&self, month: Month) -> bool {
        self.disabled.contains(&month)
    }
}

/// State of the year picker sub-view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarYearData {
    /// Year of the camera date.
    pub selected: i32,
    /// Year of today.
    pub this_year: i32,
    /// Years overlapping the boundary, latest first.
    pub years: Vec<i32>,
}

/// Computes which months of the camera year can be picked.
///
/// For each month, the boundary's start and end day-of-month are clamped to
/// the month's length and placed in the camera year; the month stays
/// enabled if either of those dates lies inside the boundary.
pub fn calc_month_data(
    config: &CalendarConfig,
    camera_date: NaiveDate,
    today: NaiveDate,
) -> CalendarMonthData {
    let boundary = config.boundary();
    let leap_year = camera_date.is_leap_year();

    let disabled: Vec<Month> = MONTHS
        .iter()
        .copied()
        .filter(|month| {
            let max_days = month_length(*month, leap_year);
            let start_day = boundary.start().day().min(max_days);
            let end_day = boundary.end().day().min(max_days);
            let in_boundary = |day: u32| {
                NaiveDate::from_ymd_opt(camera_date.year(), month.number_from_month(), day)
                    .is_some_and(|date| boundary.contains(date))
            };
            !(in_boundary(start_day) || in_boundary(end_day))
        })
        .collect();

    trace!(year = camera_date.year(), disabled = disabled.len(), "month data computed");

    CalendarMonthData {
        selected: month_of(camera_date),
        this_month: month_of(today),
        disabled,
    }
}

/// Lists the years the year picker offers.
pub fn calc_year_data(
    config: &CalendarConfig,
    camera_date: NaiveDate,
    today: NaiveDate,
) -> CalendarYearData {
    let boundary = config.boundary();
    CalendarYearData {
        selected: camera_date.year(),
        this_year: today.year(),
        years: (boundary.start().year()..=boundary.end().year()).rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(start: NaiveDate, end: NaiveDate) -> CalendarConfig {
        CalendarConfig::builder()
            .with_boundary(start, end)
            .build()
            .unwrap()
    }

    #[test]
    fn wide_boundary_disables_nothing() {
        let cfg = CalendarConfig::default();
        let data = calc_month_data(&cfg, date(2024, 6, 1), date(2024, 1, 15));
        assert!(data.disabled.is_empty());
        assert_eq!(data.selected, Month::June);
        assert_eq!(data.this_month, Month::January);
    }

    #[test]
    fn end_day_clamped_to_short_month() {
        // Boundary end day 31 clamps to Feb 29 in 2024.
        let cfg = config(date(2024, 2, 29), date(2024, 3, 31));
        let data = calc_month_data(&cfg, date(2024, 2, 1), date(2024, 2, 1));
        assert!(!data.is_disabled(Month::February));
        assert!(!data.is_disabled(Month::March));
        assert!(data.is_disabled(Month::January));
    }

    #[test]
    fn year_list_descends() {
        let cfg = config(date(2020, 5, 1), date(2023, 2, 1));
        let data = calc_year_data(&cfg, date(2021, 1, 1), date(2022, 7, 1));
        assert_eq!(data.years, vec![2023, 2022, 2021, 2020]);
        assert_eq!(data.selected, 2021);
        assert_eq!(data.this_year, 2022);
    }

    #[test]
    fn month_numbers() {
        assert_eq!(month_from_number(1), Ok(Month::January));
        assert_eq!(month_from_number(12), Ok(Month::December));
        assert_eq!(
            month_from_number(0),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            month_from_number(13),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
    }
}
