//! Per-day selection state.

use chrono::NaiveDate;

use crate::config::CalendarConfig;
use crate::grid::CalendarData;
use crate::selection::{CalendarSelection, SelectionValues};

/// Derived state of a single day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDateData {
    /// The day.
    pub date: NaiveDate,
    /// Explicitly disabled through the configured disabled dates.
    pub disabled: bool,
    /// Outside the boundary.
    pub disabled_passively: bool,
    /// Selected in any way, including as part of a range.
    pub selected: bool,
    /// Strictly between range start and range end.
    pub selected_between: bool,
    /// Start of a range that already has an end.
    pub selected_start: bool,
    /// End of a range.
    pub selected_end: bool,
}

/// Evaluates the selection state of `date` on the page `data`.
///
/// Returns `None` for dates outside the camera month; those cells render as
/// adjacent-month padding without selection semantics.
///
/// For a period, `selected_start` needs both ends, while `selected` counts
/// a bare start match. A lone start is therefore selected but not yet
/// marked as a range start.
pub fn calc_calendar_date_data(
    date: NaiveDate,
    data: &CalendarData,
    selection: &CalendarSelection,
    config: &CalendarConfig,
    values: &SelectionValues,
) -> Option<CalendarDateData> {
    if !data.in_camera_month(date) {
        return None;
    }

    let mut selected_start = false;
    let mut selected_end = false;
    let mut selected_between = false;

    let selected = match selection {
        CalendarSelection::Date { .. } => values.date == Some(date),
        CalendarSelection::Dates { .. } => values.dates.contains(&date),
        CalendarSelection::Period { .. } => {
            let start = values.start_value();
            let end = values.end_value();
            let is_start = start == Some(date);
            selected_start = is_start && end.is_some();
            selected_end = end == Some(date);
            selected_between = start.is_some_and(|s| date > s) && end.is_some_and(|e| date < e);
            is_start || selected_end || selected_between
        }
    };

    Some(CalendarDateData {
        date,
        disabled: config.disabled_dates().contains(&date),
        disabled_passively: !config.boundary().contains(date),
        selected,
        selected_between,
        selected_start,
        selected_end,
    })
}
