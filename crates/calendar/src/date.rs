//! Gregorian date arithmetic over [`NaiveDate`].

use chrono::{Datelike, Days, Month, Months, NaiveDate, Weekday};

use crate::config::{CalendarConfig, CalendarStyle};

/// Number of days in a week, and the width of every grid row.
pub const DAYS_IN_WEEK: u32 = 7;

/// Day-of-month of the first day in any month.
pub const FIRST_DAY_IN_MONTH: u32 = 1;

/// Returns `true` if `year` is a Gregorian leap year.
///
/// ```
/// use sheets_calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month`, with February depending on `leap_year`.
pub fn month_length(month: Month, leap_year: bool) -> u32 {
    match month {
        Month::February if leap_year => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Number of days from `first_day_of_week` forward to `day` (0..=6).
///
/// This is the column a weekday occupies in a grid whose first column is
/// `first_day_of_week`.
pub fn weekday_offset(day: Weekday, first_day_of_week: Weekday) -> u32 {
    (day.num_days_from_monday() + DAYS_IN_WEEK - first_day_of_week.num_days_from_monday())
        % DAYS_IN_WEEK
}

/// Calendar navigation helpers on [`NaiveDate`].
///
/// All methods are total on valid dates inside chrono's representable range.
pub trait DateExt: Sized {
    /// Whether the date's year is a leap year.
    fn is_leap_year(&self) -> bool;
    /// Number of days in the date's month.
    fn length_of_month(&self) -> u32;
    /// Adds `days` days.
    fn plus_days(&self, days: u32) -> Self;
    /// Subtracts `days` days.
    fn minus_days(&self, days: u32) -> Self;
    /// Adds `weeks` weeks.
    fn plus_weeks(&self, weeks: u32) -> Self;
    /// Subtracts `weeks` weeks.
    fn minus_weeks(&self, weeks: u32) -> Self;
    /// Adds `months` months, clamping the day to the target month's length.
    fn plus_months(&self, months: u32) -> Self;
    /// Subtracts `months` months, clamping the day to the target month's length.
    fn minus_months(&self, months: u32) -> Self;
    /// Same month with the day replaced, clamped to `1..=length_of_month`.
    fn with_day_clamped(&self, day: u32) -> Self;
    /// First day of the month.
    fn start_of_month(&self) -> Self;
    /// Last day of the month.
    fn end_of_month(&self) -> Self;
    /// Monday of the ISO week containing the date.
    fn start_of_week(&self) -> Self;
    /// Sunday of the ISO week containing the date.
    fn end_of_week(&self) -> Self;
    /// Walks back to the nearest `first_day_of_week`, stopping early at day 1.
    fn start_of_week_or_month(&self, first_day_of_week: Weekday) -> Self;
    /// Start of the previous week page, see [`DateExt::next_week`].
    ///
    /// - Day 1 that is not a Monday: the Monday on or before it, which lies in
    ///   the previous month.
    /// - Day 7 or later, or day 1 that is a Monday: one week back.
    /// - Otherwise (days 2..=6): day 1 of the same month.
    fn previous_week(&self) -> Self;
    /// Start of the next week page.
    ///
    /// - Day 1: the following Monday.
    /// - At least 7 days left in the month: one week forward.
    /// - Otherwise: day 1 of the next month.
    fn next_week(&self) -> Self;
}

impl DateExt for NaiveDate {
    fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    fn length_of_month(&self) -> u32 {
        let month = Month::try_from(self.month() as u8).unwrap_or(Month::January);
        month_length(month, self.is_leap_year())
    }

    fn plus_days(&self, days: u32) -> Self {
        *self + Days::new(u64::from(days))
    }

    fn minus_days(&self, days: u32) -> Self {
        *self - Days::new(u64::from(days))
    }

    fn plus_weeks(&self, weeks: u32) -> Self {
        self.plus_days(weeks * DAYS_IN_WEEK)
    }

    fn minus_weeks(&self, weeks: u32) -> Self {
        self.minus_days(weeks * DAYS_IN_WEEK)
    }

    fn plus_months(&self, months: u32) -> Self {
        *self + Months::new(months)
    }

    fn minus_months(&self, months: u32) -> Self {
        *self - Months::new(months)
    }

    fn with_day_clamped(&self, day: u32) -> Self {
        let day = day.clamp(FIRST_DAY_IN_MONTH, self.length_of_month());
        self.start_of_month().plus_days(day - FIRST_DAY_IN_MONTH)
    }

    fn start_of_month(&self) -> Self {
        self.minus_days(self.day0())
    }

    fn end_of_month(&self) -> Self {
        self.plus_days(self.length_of_month() - self.day())
    }

    fn start_of_week(&self) -> Self {
        self.minus_days(self.weekday().num_days_from_monday())
    }

    fn end_of_week(&self) -> Self {
        self.plus_days(DAYS_IN_WEEK - self.weekday().number_from_monday())
    }

    fn start_of_week_or_month(&self, first_day_of_week: Weekday) -> Self {
        let back = weekday_offset(self.weekday(), first_day_of_week).min(self.day0());
        self.minus_days(back)
    }

    fn previous_week(&self) -> Self {
        let day = self.day();
        let weekday = self.weekday();
        if day == FIRST_DAY_IN_MONTH && weekday != Weekday::Mon {
            self.start_of_week()
        } else if day >= DAYS_IN_WEEK || (day == FIRST_DAY_IN_MONTH && weekday == Weekday::Mon) {
            self.minus_weeks(1)
        } else {
            self.start_of_month()
        }
    }

    fn next_week(&self) -> Self {
        if self.day() == FIRST_DAY_IN_MONTH {
            self.plus_days(DAYS_IN_WEEK - self.weekday().number_from_monday() + 1)
        } else if self.length_of_month() - self.day() >= DAYS_IN_WEEK {
            self.plus_weeks(1)
        } else {
            self.start_of_month().plus_months(1)
        }
    }
}

/// Camera date of the page before `date`.
///
/// Month style jumps to the first day of the previous month, week style to
/// [`DateExt::previous_week`].
pub fn jump_prev(date: NaiveDate, config: &CalendarConfig) -> NaiveDate {
    match config.style() {
        CalendarStyle::Month => date.start_of_month().minus_months(1),
        CalendarStyle::Week => date.previous_week(),
    }
}

/// Camera date of the page after `date`.
///
/// Month style jumps to the first day of the next month, week style to
/// [`DateExt::next_week`].
pub fn jump_next(date: NaiveDate, config: &CalendarConfig) -> NaiveDate {
    match config.style() {
        CalendarStyle::Month => date.start_of_month().plus_months(1),
        CalendarStyle::Week => date.next_week(),
    }
}
