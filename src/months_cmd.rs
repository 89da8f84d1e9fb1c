//! Months command: print the month and year picker state.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info_span};

use sheets_calendar::{
    Calendar, CalendarMonthData, CalendarYearData, FormatLocale, MONTHS, calc_month_data,
    calc_year_data, camera_for_month, camera_for_year, month_from_number,
};

use crate::cli::MonthsArgs;
use crate::config;
use crate::convert;

/// Run the months command.
pub fn run(args: MonthsArgs) -> Result<()> {
    let _cmd = info_span!("months").entered();
    let config = config::load(args.config.as_deref())?;
    let calendar_cfg = convert::build_calendar_config(&config.calendar)?;
    let selection = convert::build_selection(&config.calendar.selection)?;
    let calendar = Calendar::new(calendar_cfg);

    let mut camera = calendar
        .initial_camera_date(&selection, args.date)
        .context("selection rejected")?;
    if let Some(year) = args.year {
        camera = camera_for_year(camera, year, calendar.config());
        debug!(year, %camera, "year picked");
    }
    if let Some(number) = args.month {
        let month = month_from_number(number)?;
        camera = camera_for_month(camera, month, calendar.config());
        debug!(?month, %camera, "month picked");
    }

    let today = calendar.today();
    let months = calc_month_data(calendar.config(), camera, today);
    let years = calc_year_data(calendar.config(), camera, today);

    println!("camera: {camera}");
    println!("{}", render_months(&months, camera.year(), calendar.config().locale()));
    println!("{}", render_years(&years));
    Ok(())
}

/// One line of month labels: `[May]` selected, `(x)` disabled, `!` this month.
pub fn render_months(data: &CalendarMonthData, year: i32, locale: &dyn FormatLocale) -> String {
    MONTHS
        .iter()
        .map(|month| {
            let label = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
                .map(|date| locale.month_short(date))
                .unwrap_or_default();
            let label = if data.is_disabled(*month) {
                format!("({label})")
            } else if *month == data.selected {
                format!("[{label}]")
            } else {
                label
            };
            if *month == data.this_month {
                format!("{label}!")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summary of the year list.
pub fn render_years(data: &CalendarYearData) -> String {
    match (data.years.first(), data.years.last()) {
        (Some(latest), Some(earliest)) => format!(
            "years: {latest}..={earliest} ({} entries), selected {}, this year {}",
            data.years.len(),
            data.selected,
            data.this_year
        ),
        _ => "years: none".to_string(),
    }
}
