//! One-call page building on top of the individual calculators.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::CalendarConfig;
use crate::date::{jump_next, jump_prev};
use crate::date_data::{CalendarDateData, calc_calendar_date_data};
use crate::error::CalendarError;
use crate::grid::{CalendarData, calc_calendar_data};
use crate::locale::ordered_day_of_week_labels;
use crate::month::{CalendarMonthData, CalendarYearData, calc_month_data, calc_year_data};
use crate::navigation::{
    can_jump_next, can_jump_prev, initial_camera_date, initial_custom_camera_date,
};
use crate::selection::CalendarSelection;

/// Everything the view layer needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPage {
    /// Grid layout.
    pub data: CalendarData,
    /// Selection state of every day in the camera month, in grid order.
    pub dates: Vec<CalendarDateData>,
    /// Month picker state, when month selection is enabled.
    pub months: Option<CalendarMonthData>,
    /// Year picker state, when year selection is enabled.
    pub years: Option<CalendarYearData>,
    /// Header text, e.g. `May 2024`.
    pub title: String,
    /// Whether the previous arrow is active.
    pub can_jump_prev: bool,
    /// Whether the next arrow is active.
    pub can_jump_next: bool,
}

impl CalendarPage {
    /// State of `date`, if it is a day of the camera month.
    pub fn date_data(&self, date: NaiveDate) -> Option<&CalendarDateData> {
        self.dates.iter().find(|d| d.date == date)
    }
}

/// A validated configuration bound to a clock.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sheets_calendar::{Calendar, CalendarConfig, CalendarSelection, FixedClock};
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
/// let calendar = Calendar::with_clock(CalendarConfig::default(), FixedClock(today));
/// let selection = CalendarSelection::date(Some(today));
///
/// let camera = calendar.initial_camera_date(&selection, None).unwrap();
/// let page = calendar.page(camera, &selection).unwrap();
/// assert!(page.date_data(today).unwrap().selected);
/// ```
#[derive(Debug, Clone)]
pub struct Calendar<C: Clock = SystemClock> {
    config: CalendarConfig,
    clock: C,
}

impl Calendar<SystemClock> {
    /// Creates a calendar reading today from the host clock.
    pub fn new(config: CalendarConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Calendar<C> {
    /// Creates a calendar with an injected clock.
    pub fn with_clock(config: CalendarConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// The configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Today according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Camera date to open on.
    ///
    /// Uses `custom` when it lies inside the boundary, otherwise derives the
    /// camera from the selection.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if the selection does not fit the boundary.
    pub fn initial_camera_date(
        &self,
        selection: &CalendarSelection,
        custom: Option<NaiveDate>,
    ) -> Result<NaiveDate, CalendarError> {
        selection.validate(self.config.boundary())?;
        Ok(initial_custom_camera_date(custom, &self.config)
            .unwrap_or_else(|| initial_camera_date(selection, &self.config, &self.clock)))
    }

    /// Weekday labels in display order.
    pub fn day_labels(&self) -> Vec<(Weekday, String)> {
        ordered_day_of_week_labels(self.config.locale())
    }

    /// Camera date of the previous page, or `None` past the boundary.
    pub fn prev(&self, camera_date: NaiveDate) -> Option<NaiveDate> {
        can_jump_prev(camera_date, &self.config).then(|| jump_prev(camera_date, &self.config))
    }

    /// Camera date of the next page, or `None` past the boundary.
    pub fn next(&self, camera_date: NaiveDate) -> Option<NaiveDate> {
        can_jump_next(camera_date, &self.config).then(|| jump_next(camera_date, &self.config))
    }

    /// Builds the page at `camera_date` and annotates its days with `selection`.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if the selection does not fit the boundary.
    pub fn page(
        &self,
        camera_date: NaiveDate,
        selection: &CalendarSelection,
    ) -> Result<CalendarPage, CalendarError> {
        selection.validate(self.config.boundary())?;
        let data = calc_calendar_data(&self.config, camera_date, &self.clock);
        let values = selection.values();
        let dates: Vec<CalendarDateData> = data
            .dates()
            .filter_map(|date| {
                calc_calendar_date_data(date, &data, selection, &self.config, &values)
            })
            .collect();

        let months = self
            .config
            .month_selection()
            .then(|| calc_month_data(&self.config, camera_date, data.today));
        let years = self
            .config
            .year_selection()
            .then(|| calc_year_data(&self.config, camera_date, data.today));
        let title = format!(
            "{} {}",
            self.config.locale().month_short(camera_date),
            camera_date.year()
        );

        debug!(
            %camera_date,
            n_days = dates.len(),
            selected = dates.iter().filter(|d| d.selected).count(),
            "calendar page built"
        );

        Ok(CalendarPage {
            can_jump_prev: can_jump_prev(camera_date, &self.config),
            can_jump_next: can_jump_next(camera_date, &self.config),
            data,
            dates,
            months,
            years,
            title,
        })
    }
}
