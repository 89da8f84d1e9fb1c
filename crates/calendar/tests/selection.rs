use chrono::NaiveDate;
use sheets_calendar::{
    CalendarConfig, CalendarDateData, CalendarSelection, FixedClock, calc_calendar_data,
    calc_calendar_date_data,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn evaluate(
    target: NaiveDate,
    selection: &CalendarSelection,
    config: &CalendarConfig,
) -> CalendarDateData {
    let data = calc_calendar_data(config, target, &FixedClock(target));
    calc_calendar_date_data(target, &data, selection, config, &selection.values())
        .expect("target lies in the camera month")
}

#[test]
fn period_between() {
    let config = CalendarConfig::default();
    let selection = CalendarSelection::period(Some(date(2024, 5, 10)), Some(date(2024, 5, 15)));
    let data = evaluate(date(2024, 5, 12), &selection, &config);
    assert!(data.selected_between);
    assert!(data.selected);
    assert!(!data.selected_start);
    assert!(!data.selected_end);
}

#[test]
fn period_edges() {
    let config = CalendarConfig::default();
    let selection = CalendarSelection::period(Some(date(2024, 5, 10)), Some(date(2024, 5, 15)));

    let start = evaluate(date(2024, 5, 10), &selection, &config);
    assert!(start.selected && start.selected_start);
    assert!(!start.selected_between && !start.selected_end);

    let end = evaluate(date(2024, 5, 15), &selection, &config);
    assert!(end.selected && end.selected_end);
    assert!(!end.selected_between && !end.selected_start);

    let outside = evaluate(date(2024, 5, 16), &selection, &config);
    assert!(!outside.selected);
}

#[test]
fn period_single_day_is_start_and_end() {
    let config = CalendarConfig::default();
    let selection = CalendarSelection::period(Some(date(2024, 5, 10)), Some(date(2024, 5, 10)));
    let data = evaluate(date(2024, 5, 10), &selection, &config);
    assert!(data.selected && data.selected_start && data.selected_end);
    assert!(!data.selected_between);
}

#[test]
fn period_lone_start_is_selected_but_not_marked_start() {
    let config = CalendarConfig::default();
    let selection = CalendarSelection::period(Some(date(2024, 5, 10)), None);
    let data = evaluate(date(2024, 5, 10), &selection, &config);
    assert!(data.selected);
    assert!(!data.selected_start);
    assert!(!data.selected_end);
    assert!(!data.selected_between);

    let later = evaluate(date(2024, 5, 11), &selection, &config);
    assert!(!later.selected);
}

#[test]
fn period_spanning_months_marks_between_days() {
    let config = CalendarConfig::default();
    let selection = CalendarSelection::period(Some(date(2024, 4, 28)), Some(date(2024, 6, 2)));
    for day in 1..=31 {
        let data = evaluate(date(2024, 5, day), &selection, &config);
        assert!(data.selected_between, "May {day}");
    }
}

#[test]
fn multi_date_membership() {
    let config = CalendarConfig::default();
    let selection = CalendarSelection::dates([date(2024, 5, 1), date(2024, 5, 9)]);
    assert!(evaluate(date(2024, 5, 9), &selection, &config).selected);
    assert!(!evaluate(date(2024, 5, 8), &selection, &config).selected);
}

#[test]
fn outside_boundary_is_passively_disabled() {
    let config = CalendarConfig::builder()
        .with_boundary(date(2024, 5, 10), date(2024, 12, 31))
        .build()
        .unwrap();
    let data = evaluate(date(2024, 5, 3), &CalendarSelection::date(None), &config);
    assert!(data.disabled_passively);
    assert!(!data.disabled);
}

#[test]
fn disabled_dates_are_explicit() {
    let config = CalendarConfig::builder()
        .with_disabled_dates([date(2024, 5, 20)])
        .build()
        .unwrap();
    let data = evaluate(date(2024, 5, 20), &CalendarSelection::date(None), &config);
    assert!(data.disabled);
    assert!(!data.disabled_passively);
}

#[test]
fn padding_days_of_week_grid_carry_no_state() {
    let config = CalendarConfig::builder()
        .with_style(sheets_calendar::CalendarStyle::Week)
        .build()
        .unwrap();
    let camera = date(2024, 2, 3);
    let data = calc_calendar_data(&config, camera, &FixedClock(camera));
    let selection = CalendarSelection::date(Some(date(2024, 1, 30)));
    let values = selection.values();
    let states: Vec<_> = data
        .dates()
        .map(|d| calc_calendar_date_data(d, &data, &selection, &config, &values))
        .collect();
    // Jan 29..31 are shown but belong to the previous month.
    assert!(states[..3].iter().all(Option::is_none));
    assert!(states[3..].iter().all(Option::is_some));
}
