//! Month and week grid layout.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::clock::Clock;
use crate::config::{CalendarConfig, CalendarStyle};
use crate::date::{DAYS_IN_WEEK, DateExt, weekday_offset};

/// One slot of a calendar grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Empty leading slot before the first day of the month.
    StartOffset,
    /// A calendar day.
    Day(NaiveDate),
    /// Empty trailing slot after the last day of the page.
    EndOffset,
    /// ISO week-number label heading a row.
    CalendarWeek(String),
}

impl CalendarCell {
    /// The date of a [`CalendarCell::Day`].
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(date) => Some(*date),
            _ => None,
        }
    }

    /// Whether the cell is a week-number label.
    pub fn is_label(&self) -> bool {
        matches!(self, Self::CalendarWeek(_))
    }
}

/// The computed layout of one calendar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarData {
    /// Number of leading empty slots before the page's first day column (0..=6).
    pub offset_start: usize,
    /// The camera date the page was built for.
    pub camera_date: NaiveDate,
    /// Camera date snapped to the start of its displayed week (week style) or
    /// its month start (month style).
    pub week_camera_date: NaiveDate,
    /// "Today" as read from the clock for this build.
    pub today: NaiveDate,
    /// Rows of cells. Each row holds 7 non-label cells.
    pub days: Vec<Vec<CalendarCell>>,
}

impl CalendarData {
    /// All dates on the page in display order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().flatten().filter_map(CalendarCell::date)
    }

    /// Whether `date` is in the same month as the camera date.
    pub fn in_camera_month(&self, date: NaiveDate) -> bool {
        (date.year(), date.month()) == (self.camera_date.year(), self.camera_date.month())
    }
}

/// Builds the grid for the page containing `camera_date`.
///
/// Month style lays out the whole month of `camera_date`; week style lays out
/// the locale week containing it. Within the first 7 days of a month the
/// camera is snapped back to the locale's week start, so a week page is
/// always a single row. Leading [`CalendarCell::StartOffset`] slots are only added
/// when the snapped camera still lies in the month's first 7 days, and the
/// last row is padded with [`CalendarCell::EndOffset`] to 7 slots.
#[tracing::instrument(level = "debug", skip(config, clock))]
pub fn calc_calendar_data(
    config: &CalendarConfig,
    camera_date: NaiveDate,
    clock: &dyn Clock,
) -> CalendarData {
    let first_day_of_week = config.locale().first_day_of_week();
    let today = clock.today();

    let week_camera_date = match config.style() {
        CalendarStyle::Month => camera_date.start_of_month(),
        CalendarStyle::Week => {
            let camera_diff = weekday_offset(camera_date.weekday(), first_day_of_week);
            if camera_date.day() <= DAYS_IN_WEEK && camera_diff > 0 {
                camera_date.minus_days(camera_diff)
            } else {
                camera_date
            }
        }
    };
    let offset_start = weekday_offset(week_camera_date.weekday(), first_day_of_week);

    let (page_start, page_len) = match config.style() {
        CalendarStyle::Month => (week_camera_date, camera_date.length_of_month()),
        CalendarStyle::Week => (week_camera_date.minus_days(offset_start), DAYS_IN_WEEK),
    };

    let mut cells: Vec<CalendarCell> = Vec::with_capacity((page_len + DAYS_IN_WEEK * 2) as usize);
    if week_camera_date.day() <= DAYS_IN_WEEK {
        cells.extend(std::iter::repeat_n(
            CalendarCell::StartOffset,
            offset_start as usize,
        ));
    }
    cells.extend((0..page_len).map(|i| CalendarCell::Day(page_start.plus_days(i))));

    let width = DAYS_IN_WEEK as usize;
    let days: Vec<Vec<CalendarCell>> = cells
        .chunks(width)
        .map(|chunk| {
            let mut row = chunk.to_vec();
            row.resize(width, CalendarCell::EndOffset);
            if config.display_calendar_weeks() {
                let label = row
                    .iter()
                    .find_map(CalendarCell::date)
                    .map(|date| date.iso_week().week().to_string())
                    .unwrap_or_default();
                row.insert(0, CalendarCell::CalendarWeek(label));
            }
            row
        })
        .collect();

    trace!(
        offset_start,
        %week_camera_date,
        rows = days.len(),
        "calendar grid built"
    );

    CalendarData {
        offset_start: offset_start as usize,
        camera_date,
        week_camera_date,
        today,
        days,
    }
}
