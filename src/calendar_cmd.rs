//! Calendar command: print consecutive calendar pages.

use anyhow::{Context, Result};
use chrono::{Datelike, Weekday};
use tracing::{info, info_span};

use sheets_calendar::{Calendar, CalendarCell, CalendarPage};

use crate::cli::{CalendarArgs, StyleArg};
use crate::config;
use crate::convert;

/// Cell legend printed under the pages.
const LEGEND: &str = "* selected  [ start  ] end  ~ between  x disabled  - outside boundary  \
                      . other month  ! today";

/// Run the calendar command.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let mut config = config::load(args.config.as_deref())?;
    if let Some(style) = args.style {
        config.calendar.style = match style {
            StyleArg::Month => "month",
            StyleArg::Week => "week",
        }
        .to_string();
    }
    if args.weeks {
        config.calendar.display_calendar_weeks = true;
    }
    if let Some(locale) = args.locale {
        config.calendar.locale = Some(locale);
    }

    let calendar_cfg = convert::build_calendar_config(&config.calendar)?;
    let selection = convert::build_selection(&config.calendar.selection)?;
    if let Some(date) = args.date {
        calendar_cfg
            .boundary()
            .check(date)
            .context("camera date rejected")?;
    }
    let calendar = Calendar::new(calendar_cfg);

    let mut camera = calendar
        .initial_camera_date(&selection, args.date)
        .context("selection rejected")?;
    info!(%camera, pages = args.pages, "printing calendar pages");

    let labels = calendar.day_labels();
    for index in 0..args.pages {
        let page = calendar
            .page(camera, &selection)
            .context("selection rejected")?;
        print!("{}", render_page(&page, &labels));
        println!();

        if index + 1 == args.pages {
            break;
        }
        match calendar.next(camera) {
            Some(next) => camera = next,
            None => {
                info!(%camera, "reached the end of the boundary");
                break;
            }
        }
    }
    println!("{LEGEND}");
    Ok(())
}

/// Renders one page as a text grid.
pub fn render_page(page: &CalendarPage, labels: &[(Weekday, String)]) -> String {
    let has_weeks = page
        .data
        .days
        .first()
        .and_then(|row| row.first())
        .is_some_and(CalendarCell::is_label);

    let prev = if page.can_jump_prev { "<" } else { " " };
    let next = if page.can_jump_next { ">" } else { " " };
    let mut out = format!("{prev} {} {next}\n", page.title);

    if has_weeks {
        out.push_str("  ");
    }
    for (_, label) in labels {
        out.push_str(&format!("{label:>3} "));
    }
    out.push('\n');

    for row in &page.data.days {
        for cell in row {
            out.push_str(&render_cell(page, cell));
        }
        out.push('\n');
    }
    out
}

fn render_cell(page: &CalendarPage, cell: &CalendarCell) -> String {
    match cell {
        CalendarCell::StartOffset | CalendarCell::EndOffset => "    ".to_string(),
        CalendarCell::CalendarWeek(week) => format!("{week:>2}"),
        CalendarCell::Day(date) => {
            let marker = match page.date_data(*date) {
                None => '.',
                Some(d) if d.disabled => 'x',
                Some(d) if d.disabled_passively => '-',
                Some(d) if d.selected_start => '[',
                Some(d) if d.selected_end => ']',
                Some(d) if d.selected_between => '~',
                Some(d) if d.selected => '*',
                Some(_) if *date == page.data.today => '!',
                Some(_) => ' ',
            };
            format!("{:>3}{marker}", date.day())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sheets_calendar::{CalendarConfig, CalendarSelection, FixedClock};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_month_with_markers() {
        let config = CalendarConfig::builder()
            .with_disabled_dates([date(2024, 5, 20)])
            .build()
            .unwrap();
        let calendar = Calendar::with_clock(config, FixedClock(date(2024, 5, 2)));
        let selection =
            CalendarSelection::period(Some(date(2024, 5, 10)), Some(date(2024, 5, 12)));
        let page = calendar.page(date(2024, 5, 1), &selection).unwrap();
        let text = render_page(&page, &calendar.day_labels());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "< May 2024 >");
        assert_eq!(lines[1], "  M   T   W   T   F   S   S ");
        // May 2024 starts on a Wednesday.
        assert!(lines[2].starts_with("          1   2!"));
        assert!(text.contains(" 10[ 11~ 12]"));
        assert!(text.contains(" 20x"));
        assert_eq!(lines.len(), 2 + page.data.days.len());
    }

    #[test]
    fn renders_week_numbers() {
        let config = CalendarConfig::builder()
            .with_calendar_weeks(true)
            .build()
            .unwrap();
        let calendar = Calendar::with_clock(config, FixedClock(date(2024, 12, 25)));
        let page = calendar
            .page(date(2024, 12, 1), &CalendarSelection::default())
            .unwrap();
        let text = render_page(&page, &calendar.day_labels());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].starts_with("48"));
        assert!(lines.last().unwrap().starts_with(" 1"));
    }
}
