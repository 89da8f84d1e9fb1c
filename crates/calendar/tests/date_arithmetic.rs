use chrono::{Datelike, Month, NaiveDate};
use sheets_calendar::{
    CalendarConfig, CalendarStyle, DateExt, MONTHS, is_leap_year, jump_next, jump_prev,
    month_length,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn week_config() -> CalendarConfig {
    CalendarConfig::builder()
        .with_style(CalendarStyle::Week)
        .build()
        .unwrap()
}

#[test]
fn leap_year_examples() {
    assert!(is_leap_year(2016));
    assert!(is_leap_year(2020));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
}

#[test]
fn february_length() {
    assert_eq!(month_length(Month::February, true), 29);
    assert_eq!(month_length(Month::February, false), 28);
}

#[test]
fn month_length_matches_chrono_for_every_month() {
    for year in [1900, 2000, 2023, 2024] {
        for month in MONTHS {
            let first = date(year, month.number_from_month(), 1);
            let next_first = first.plus_months(1);
            let expected = (next_first - first).num_days() as u32;
            assert_eq!(
                month_length(month, is_leap_year(year)),
                expected,
                "length mismatch for {month:?} {year}"
            );
        }
    }
}

#[test]
fn month_jump_round_trip() {
    let config = CalendarConfig::default();
    for month in 1..=12 {
        for day in [1, 15, 28] {
            let camera = date(2024, month, day);
            let there = jump_next(camera, &config);
            assert_eq!(there.day(), 1);
            let back = jump_prev(there, &config);
            assert_eq!(back, camera.start_of_month(), "round trip from {camera}");
        }
    }
}

#[test]
fn month_jump_crosses_years() {
    let config = CalendarConfig::default();
    assert_eq!(jump_next(date(2024, 12, 31), &config), date(2025, 1, 1));
    assert_eq!(jump_prev(date(2024, 1, 31), &config), date(2023, 12, 1));
}

// --- next_week at month ends ---

#[test]
fn next_week_from_first_goes_to_monday() {
    // 2024-02-01 is a Thursday.
    assert_eq!(date(2024, 2, 1).next_week(), date(2024, 2, 5));
    // 2024-04-01 is a Monday: a full week forward.
    assert_eq!(date(2024, 4, 1).next_week(), date(2024, 4, 8));
    // 2024-09-01 is a Sunday: the very next day.
    assert_eq!(date(2024, 9, 1).next_week(), date(2024, 9, 2));
}

#[test]
fn next_week_29_day_february() {
    assert_eq!(date(2024, 2, 22).next_week(), date(2024, 2, 29));
    assert_eq!(date(2024, 2, 23).next_week(), date(2024, 3, 1));
}

#[test]
fn next_week_28_day_february() {
    assert_eq!(date(2023, 2, 21).next_week(), date(2023, 2, 28));
    assert_eq!(date(2023, 2, 22).next_week(), date(2023, 3, 1));
}

#[test]
fn next_week_30_day_month() {
    assert_eq!(date(2024, 4, 23).next_week(), date(2024, 4, 30));
    assert_eq!(date(2024, 4, 24).next_week(), date(2024, 5, 1));
}

#[test]
fn next_week_31_day_month() {
    assert_eq!(date(2024, 1, 24).next_week(), date(2024, 1, 31));
    assert_eq!(date(2024, 1, 25).next_week(), date(2024, 2, 1));
    assert_eq!(date(2024, 12, 30).next_week(), date(2025, 1, 1));
}

// --- previous_week at month starts ---

#[test]
fn previous_week_from_first_not_monday() {
    // 2024-02-01 is a Thursday; the Monday before is in January.
    assert_eq!(date(2024, 2, 1).previous_week(), date(2024, 1, 29));
    // 2024-03-01 is a Friday, February 2024 has 29 days.
    assert_eq!(date(2024, 3, 1).previous_week(), date(2024, 2, 26));
}

#[test]
fn previous_week_from_first_monday() {
    assert_eq!(date(2024, 4, 1).previous_week(), date(2024, 3, 25));
}

#[test]
fn previous_week_early_days_go_to_first() {
    for day in 2..=6 {
        assert_eq!(
            date(2024, 2, day).previous_week(),
            date(2024, 2, 1),
            "day {day}"
        );
    }
}

#[test]
fn previous_week_from_day_seven_crosses_month() {
    // October 2024 starts on a Tuesday, so its first Monday is the 7th.
    // Day 7 already steps a full week back into September.
    assert_eq!(date(2024, 10, 1).next_week(), date(2024, 10, 7));
    assert_eq!(date(2024, 10, 7).previous_week(), date(2024, 9, 30));
}

#[test]
fn week_paging_round_trip_through_february() {
    let config = week_config();
    let mut forward = vec![date(2024, 1, 29)];
    for _ in 0..6 {
        let last = *forward.last().unwrap();
        forward.push(jump_next(last, &config));
    }
    assert_eq!(
        forward,
        vec![
            date(2024, 1, 29),
            date(2024, 2, 1),
            date(2024, 2, 5),
            date(2024, 2, 12),
            date(2024, 2, 19),
            date(2024, 2, 26),
            date(2024, 3, 1),
        ]
    );

    let mut backward = vec![date(2024, 3, 1)];
    for _ in 0..6 {
        let last = *backward.last().unwrap();
        backward.push(jump_prev(last, &config));
    }
    backward.reverse();
    assert_eq!(forward, backward);
}
