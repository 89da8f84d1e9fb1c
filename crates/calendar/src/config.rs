//! Calendar configuration and its validating builder.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::locale::{DefaultLocale, FormatLocale};

/// Layout of a calendar page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CalendarStyle {
    /// Full month grid.
    #[default]
    Month,
    /// A single 7-day row, paginated by week.
    Week,
}

/// Inclusive date range outside which dates are passively disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateBoundary {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateBoundary {
    /// Creates a boundary covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedBoundary`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvertedBoundary { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Inclusive end.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies inside the boundary.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Clamps `date` into the boundary.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }

    /// Returns `Ok(())` if `date` lies inside the boundary.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfBoundary`] otherwise.
    pub fn check(&self, date: NaiveDate) -> Result<(), CalendarError> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(CalendarError::OutOfBoundary {
                date,
                start: self.start,
                end: self.end,
            })
        }
    }
}

impl Default for DateBoundary {
    /// `1900-01-01..=2100-12-31`.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

/// Immutable configuration of one calendar dialog.
///
/// Construct with [`CalendarConfig::builder`]; validation happens in
/// [`CalendarConfigBuilder::build`] so grid computation never sees an
/// invalid configuration.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sheets_calendar::{CalendarConfig, CalendarStyle};
///
/// let config = CalendarConfig::builder()
///     .with_style(CalendarStyle::Week)
///     .with_boundary(
///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
///     )
///     .with_calendar_weeks(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.style(), CalendarStyle::Week);
/// ```
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    style: CalendarStyle,
    locale: Arc<dyn FormatLocale>,
    boundary: DateBoundary,
    disabled_dates: BTreeSet<NaiveDate>,
    display_calendar_weeks: bool,
    month_selection: bool,
    year_selection: bool,
}

impl CalendarConfig {
    /// Starts a builder with default settings.
    pub fn builder() -> CalendarConfigBuilder {
        CalendarConfigBuilder::default()
    }

    /// Page layout.
    pub fn style(&self) -> CalendarStyle {
        self.style
    }

    /// Locale policy.
    pub fn locale(&self) -> &dyn FormatLocale {
        self.locale.as_ref()
    }

    /// Selectable range.
    pub fn boundary(&self) -> &DateBoundary {
        &self.boundary
    }

    /// Explicitly disabled dates.
    pub fn disabled_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.disabled_dates
    }

    /// Whether each row carries an ISO week-number label.
    pub fn display_calendar_weeks(&self) -> bool {
        self.display_calendar_weeks
    }

    /// Whether the month picker sub-view is offered.
    pub fn month_selection(&self) -> bool {
        self.month_selection
    }

    /// Whether the year picker sub-view is offered.
    pub fn year_selection(&self) -> bool {
        self.year_selection
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            style: CalendarStyle::default(),
            locale: Arc::new(DefaultLocale::default()),
            boundary: DateBoundary::default(),
            disabled_dates: BTreeSet::new(),
            display_calendar_weeks: false,
            month_selection: false,
            year_selection: false,
        }
    }
}

/// Builder for [`CalendarConfig`].
#[derive(Debug, Clone)]
pub struct CalendarConfigBuilder {
    style: CalendarStyle,
    locale: Arc<dyn FormatLocale>,
    boundary: (NaiveDate, NaiveDate),
    disabled_dates: BTreeSet<NaiveDate>,
    display_calendar_weeks: bool,
    month_selection: bool,
    year_selection: bool,
}

impl Default for CalendarConfigBuilder {
    fn default() -> Self {
        let config = CalendarConfig::default();
        Self {
            style: config.style,
            locale: config.locale,
            boundary: (config.boundary.start, config.boundary.end),
            disabled_dates: config.disabled_dates,
            display_calendar_weeks: config.display_calendar_weeks,
            month_selection: config.month_selection,
            year_selection: config.year_selection,
        }
    }
}

impl CalendarConfigBuilder {
    /// Sets the page layout.
    pub fn with_style(mut self, style: CalendarStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the locale policy.
    pub fn with_locale(mut self, locale: impl FormatLocale + 'static) -> Self {
        self.locale = Arc::new(locale);
        self
    }

    /// Sets an already shared locale policy.
    pub fn with_shared_locale(mut self, locale: Arc<dyn FormatLocale>) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the inclusive boundary. Checked in [`build`](Self::build).
    pub fn with_boundary(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.boundary = (start, end);
        self
    }

    /// Sets the explicitly disabled dates.
    pub fn with_disabled_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.disabled_dates = dates.into_iter().collect();
        self
    }

    /// Enables or disables the week-number column.
    pub fn with_calendar_weeks(mut self, display: bool) -> Self {
        self.display_calendar_weeks = display;
        self
    }

    /// Enables or disables the month picker sub-view.
    pub fn with_month_selection(mut self, enabled: bool) -> Self {
        self.month_selection = enabled;
        self
    }

    /// Enables or disables the year picker sub-view.
    pub fn with_year_selection(mut self, enabled: bool) -> Self {
        self.year_selection = enabled;
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedBoundary`] if the boundary start lies
    /// after its end.
    pub fn build(self) -> Result<CalendarConfig, CalendarError> {
        let (start, end) = self.boundary;
        let boundary = DateBoundary::new(start, end)?;
        Ok(CalendarConfig {
            style: self.style,
            locale: self.locale,
            boundary,
            disabled_dates: self.disabled_dates,
            display_calendar_weeks: self.display_calendar_weeks,
            month_selection: self.month_selection,
            year_selection: self.year_selection,
        })
    }
}
