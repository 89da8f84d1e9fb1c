//! Camera date selection and paging.
//!
//! Everything here is a pure function of its inputs: the caller holds the
//! current camera date and feeds it back in on every gesture.

use chrono::{Datelike, Month, NaiveDate};
use tracing::debug;

use crate::clock::Clock;
use crate::config::{CalendarConfig, CalendarStyle};
use crate::date::{DateExt, jump_next};
use crate::selection::CalendarSelection;

/// Camera date a calendar opens on.
///
/// The anchor is taken from the selection (single date, first of many,
/// range start). Without one, today is used if it lies inside the boundary,
/// else the boundary start. The result is snapped back to the locale's week
/// start, stopping at the first of the month.
pub fn initial_camera_date(
    selection: &CalendarSelection,
    config: &CalendarConfig,
    clock: &dyn Clock,
) -> NaiveDate {
    let anchor = selection.anchor_date().unwrap_or_else(|| {
        let today = clock.today();
        if config.boundary().contains(today) {
            today
        } else {
            config.boundary().start()
        }
    });
    let camera = anchor.start_of_week_or_month(config.locale().first_day_of_week());
    debug!(%anchor, %camera, "initial camera date");
    camera
}

/// Snapped custom camera date, or `None` if absent or outside the boundary.
pub fn initial_custom_camera_date(
    camera_date: Option<NaiveDate>,
    config: &CalendarConfig,
) -> Option<NaiveDate> {
    camera_date
        .filter(|date| config.boundary().contains(*date))
        .map(|date| date.start_of_week_or_month(config.locale().first_day_of_week()))
}

/// Whether the page before the one at `camera_date` still reaches into the
/// boundary.
pub fn can_jump_prev(camera_date: NaiveDate, config: &CalendarConfig) -> bool {
    let page_start = match config.style() {
        CalendarStyle::Month => camera_date.start_of_month(),
        CalendarStyle::Week => {
            camera_date.start_of_week_or_month(config.locale().first_day_of_week())
        }
    };
    page_start > config.boundary().start()
}

/// Whether the page after the one at `camera_date` still reaches into the
/// boundary.
pub fn can_jump_next(camera_date: NaiveDate, config: &CalendarConfig) -> bool {
    jump_next(camera_date, config) <= config.boundary().end()
}

/// Camera date after picking `month` in the month picker.
///
/// Lands on the first of that month in the camera year, clamped into the
/// boundary and snapped like [`initial_camera_date`].
pub fn camera_for_month(
    camera_date: NaiveDate,
    month: Month,
    config: &CalendarConfig,
) -> NaiveDate {
    let target = NaiveDate::from_ymd_opt(camera_date.year(), month.number_from_month(), 1)
        .unwrap_or(camera_date);
    snap_into_boundary(target, config)
}

/// Camera date after picking `year` in the year picker.
///
/// Keeps the camera month, lands on its first day and is clamped into the
/// boundary.
pub fn camera_for_year(camera_date: NaiveDate, year: i32, config: &CalendarConfig) -> NaiveDate {
    let target = NaiveDate::from_ymd_opt(year, camera_date.month(), 1)
        .unwrap_or_else(|| config.boundary().start());
    snap_into_boundary(target, config)
}

fn snap_into_boundary(date: NaiveDate, config: &CalendarConfig) -> NaiveDate {
    config
        .boundary()
        .clamp(date)
        .start_of_week_or_month(config.locale().first_day_of_week())
}
