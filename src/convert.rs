//! Pure conversion functions: TOML config structs -> crate API config types.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use sheets_calendar::{
    CalendarConfig, CalendarSelection, CalendarStyle, FormatLocale, SystemLocale,
};
use sheets_duration::{DurationConfig, DurationFormat, InputKey};

use crate::config::{CalendarToml, DurationToml, SelectionToml};

/// Parses a `YYYY-MM-DD` date, naming `field` in the error.
pub fn parse_date(s: &str, field: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!("invalid date for {field}: {s:?} (expected YYYY-MM-DD)"),
    }
}

/// Parses a calendar style name into the corresponding enum variant.
pub fn parse_style(s: &str) -> Result<CalendarStyle> {
    match s.to_lowercase().as_str() {
        "month" => Ok(CalendarStyle::Month),
        "week" => Ok(CalendarStyle::Week),
        other => bail!("unknown calendar style: {other:?}"),
    }
}

/// Resolves a locale tag, or the host locale when no tag is given.
pub fn build_locale(tag: Option<&str>) -> Arc<dyn FormatLocale> {
    match tag {
        Some(tag) => Arc::new(SystemLocale::from_tag(tag)),
        None => Arc::new(SystemLocale::detect()),
    }
}

/// Builds a [`CalendarConfig`] from the TOML calendar configuration.
pub fn build_calendar_config(calendar: &CalendarToml) -> Result<CalendarConfig> {
    let style = parse_style(&calendar.style)?;
    let start = parse_date(&calendar.boundary_start, "boundary_start")?;
    let end = parse_date(&calendar.boundary_end, "boundary_end")?;
    let disabled = calendar
        .disabled_dates
        .iter()
        .map(|s| parse_date(s, "disabled_dates"))
        .collect::<Result<Vec<_>>>()?;

    CalendarConfig::builder()
        .with_style(style)
        .with_shared_locale(build_locale(calendar.locale.as_deref()))
        .with_boundary(start, end)
        .with_disabled_dates(disabled)
        .with_calendar_weeks(calendar.display_calendar_weeks)
        .with_month_selection(calendar.month_selection)
        .with_year_selection(calendar.year_selection)
        .build()
        .context("invalid [calendar] configuration")
}

/// Builds a [`CalendarSelection`] from the TOML selection.
///
/// `date` takes at most one date, `period` at most two (start, end).
pub fn build_selection(selection: &SelectionToml) -> Result<CalendarSelection> {
    let dates = selection
        .dates
        .iter()
        .map(|s| parse_date(s, "selection.dates"))
        .collect::<Result<Vec<_>>>()?;

    match selection.mode.to_lowercase().as_str() {
        "date" => match dates.as_slice() {
            [] => Ok(CalendarSelection::date(None)),
            [date] => Ok(CalendarSelection::date(Some(*date))),
            _ => bail!("selection mode \"date\" takes one date, got {}", dates.len()),
        },
        "dates" => Ok(CalendarSelection::dates(dates)),
        "period" => match dates.as_slice() {
            [] => Ok(CalendarSelection::period(None, None)),
            [start] => Ok(CalendarSelection::period(Some(*start), None)),
            [start, end] => Ok(CalendarSelection::period(Some(*start), Some(*end))),
            _ => bail!("selection mode \"period\" takes two dates, got {}", dates.len()),
        },
        other => bail!("unknown selection mode: {other:?}"),
    }
}

/// Parses a duration layout name.
pub fn parse_format(s: &str) -> Result<DurationFormat> {
    Ok(s.parse::<DurationFormat>()?)
}

/// Builds a [`DurationConfig`] from the TOML duration configuration.
pub fn build_duration_config(duration: &DurationToml) -> Result<DurationConfig> {
    let mut cfg = DurationConfig::new(parse_format(&duration.format)?)
        .with_min_time(duration.min_time)
        .with_clear_button(duration.display_clear_button);
    if let Some(seconds) = duration.current_time {
        cfg = cfg.with_current_time(seconds);
    }
    if let Some(seconds) = duration.max_time {
        cfg = cfg.with_max_time(seconds);
    }
    cfg.validate().context("invalid [duration] configuration")?;
    Ok(cfg)
}

/// Parses keypad labels.
pub fn parse_keys(keys: &[String]) -> Result<Vec<InputKey>> {
    keys.iter()
        .map(|key| key.parse::<InputKey>().map_err(anyhow::Error::from))
        .collect()
}
