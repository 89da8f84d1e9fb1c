//! Locale policy: first day of week, weekday labels and month names.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::date::weekday_offset;

/// All weekdays in ISO order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const ENGLISH_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ENGLISH_DAYS_NARROW: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

const CHINESE_DAYS: [&str; 7] = [
    "\u{4e00}", "\u{4e8c}", "\u{4e09}", "\u{56db}", "\u{4e94}", "\u{516d}", "\u{65e5}",
];

const JAPANESE_DAYS: [&str; 7] = [
    "\u{6708}", "\u{706b}", "\u{6c34}", "\u{6728}", "\u{91d1}", "\u{571f}", "\u{65e5}",
];

/// Regions whose calendars start the week on Sunday.
const SUNDAY_FIRST_REGIONS: [&str; 12] = [
    "US", "CA", "MX", "BR", "JP", "IL", "IN", "PH", "KR", "TW", "HK", "SA",
];

/// Environment variables consulted for the host locale, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Locale capability injected into the calendar engine.
///
/// Implementations supply the first day of the week and the short labels
/// the view layer prints. The engine never fails on missing labels; see
/// [`ordered_day_of_week_labels`].
pub trait FormatLocale: fmt::Debug + Send + Sync {
    /// Weekday shown in the first grid column.
    fn first_day_of_week(&self) -> Weekday;

    /// Short display label for each weekday.
    fn day_of_week_labels(&self) -> HashMap<Weekday, String>;

    /// Abbreviated month name for the month of `date`.
    fn month_short(&self, date: NaiveDate) -> String;
}

fn labels_from_table(table: &[&str; 7]) -> HashMap<Weekday, String> {
    WEEKDAYS
        .iter()
        .zip(table.iter())
        .map(|(day, label)| (*day, (*label).to_string()))
        .collect()
}

fn english_month_short(date: NaiveDate) -> String {
    ENGLISH_MONTHS_SHORT[date.month0() as usize].to_string()
}

/// Simplified Chinese weekday labels, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChineseLocale;

impl FormatLocale for ChineseLocale {
    fn first_day_of_week(&self) -> Weekday {
        Weekday::Mon
    }

    fn day_of_week_labels(&self) -> HashMap<Weekday, String> {
        labels_from_table(&CHINESE_DAYS)
    }

    fn month_short(&self, date: NaiveDate) -> String {
        format!("{}\u{6708}", date.month())
    }
}

/// Japanese weekday labels, Sunday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JapaneseLocale;

impl FormatLocale for JapaneseLocale {
    fn first_day_of_week(&self) -> Weekday {
        Weekday::Sun
    }

    fn day_of_week_labels(&self) -> HashMap<Weekday, String> {
        labels_from_table(&JAPANESE_DAYS)
    }

    fn month_short(&self, date: NaiveDate) -> String {
        format!("{}\u{6708}", date.month())
    }
}

/// Fixed English fallback used where no locale services exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultLocale {
    first_day_of_week: Weekday,
}

impl DefaultLocale {
    /// Creates an English locale whose weeks start on `first_day_of_week`.
    pub fn new(first_day_of_week: Weekday) -> Self {
        Self { first_day_of_week }
    }
}

impl Default for DefaultLocale {
    fn default() -> Self {
        Self::new(Weekday::Mon)
    }
}

impl FormatLocale for DefaultLocale {
    fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    fn day_of_week_labels(&self) -> HashMap<Weekday, String> {
        labels_from_table(&ENGLISH_DAYS_NARROW)
    }

    fn month_short(&self, date: NaiveDate) -> String {
        english_month_short(date)
    }
}

/// Locale resolved from a BCP 47 / POSIX language tag.
///
/// Accepts forms like `en-US`, `en_US.UTF-8`, `zh_CN` or `ja`. The language
/// picks the label tables (`zh` and `ja` use the CJK tables, everything else
/// the English fallback) and the region picks the first day of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemLocale {
    language: String,
    region: Option<String>,
}

impl SystemLocale {
    /// Parses a language tag. Encoding and modifier suffixes are ignored.
    pub fn from_tag(tag: &str) -> Self {
        let base = tag.split(['.', '@']).next().unwrap_or_default();
        let mut parts = base.split(['-', '_']).filter(|p| !p.is_empty());
        let language = parts.next().unwrap_or("en").to_ascii_lowercase();
        let region = parts
            .find(|p| p.len() == 2 || p.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_ascii_uppercase);
        Self { language, region }
    }

    /// Reads the host locale from `LC_ALL`, `LC_TIME` or `LANG`.
    ///
    /// Falls back to `en` when none is set or the value is `C`/`POSIX`.
    pub fn detect() -> Self {
        let tag = LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .unwrap_or_else(|| "en".to_string());
        let locale = Self::from_tag(&tag);
        debug!(tag = %tag, language = %locale.language, "detected host locale");
        locale
    }

    /// Lowercase language subtag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn region_first_day(&self) -> Option<Weekday> {
        self.region.as_deref().map(|region| {
            if SUNDAY_FIRST_REGIONS.contains(&region) {
                Weekday::Sun
            } else {
                Weekday::Mon
            }
        })
    }
}

impl FormatLocale for SystemLocale {
    fn first_day_of_week(&self) -> Weekday {
        match self.region_first_day() {
            Some(day) => day,
            None => match self.language.as_str() {
                "zh" => ChineseLocale.first_day_of_week(),
                "ja" => JapaneseLocale.first_day_of_week(),
                _ => Weekday::Mon,
            },
        }
    }

    fn day_of_week_labels(&self) -> HashMap<Weekday, String> {
        match self.language.as_str() {
            "zh" => ChineseLocale.day_of_week_labels(),
            "ja" => JapaneseLocale.day_of_week_labels(),
            _ => DefaultLocale::default().day_of_week_labels(),
        }
    }

    fn month_short(&self, date: NaiveDate) -> String {
        match self.language.as_str() {
            "zh" => ChineseLocale.month_short(date),
            "ja" => JapaneseLocale.month_short(date),
            _ => english_month_short(date),
        }
    }
}

/// Weekdays ordered so the locale's first day of the week comes first.
pub fn ordered_days_of_week(locale: &dyn FormatLocale) -> Vec<Weekday> {
    let first = locale.first_day_of_week();
    let mut days = WEEKDAYS.to_vec();
    days.sort_by_key(|day| weekday_offset(*day, first));
    days
}

/// Weekday labels in display order.
///
/// A weekday the locale has no label for maps to an empty string.
pub fn ordered_day_of_week_labels(locale: &dyn FormatLocale) -> Vec<(Weekday, String)> {
    let mut labels = locale.day_of_week_labels();
    ordered_days_of_week(locale)
        .into_iter()
        .map(|day| (day, labels.remove(&day).unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct SparseLocale;

    impl FormatLocale for SparseLocale {
        fn first_day_of_week(&self) -> Weekday {
            Weekday::Wed
        }

        fn day_of_week_labels(&self) -> HashMap<Weekday, String> {
            HashMap::from([(Weekday::Wed, "Mi".to_string())])
        }

        fn month_short(&self, _date: NaiveDate) -> String {
            String::new()
        }
    }

    #[test]
    fn cjk_labels_are_single_characters() {
        for labels in [
            ChineseLocale.day_of_week_labels(),
            JapaneseLocale.day_of_week_labels(),
        ] {
            assert_eq!(labels.len(), 7);
            assert!(labels.values().all(|l| l.chars().count() == 1));
        }
        assert_eq!(ChineseLocale.day_of_week_labels()[&Weekday::Sun], "\u{65e5}");
        assert_eq!(JapaneseLocale.day_of_week_labels()[&Weekday::Mon], "\u{6708}");
    }

    #[test]
    fn default_locale_is_english_monday_first() {
        let locale = DefaultLocale::default();
        assert_eq!(locale.first_day_of_week(), Weekday::Mon);
        let date = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
        assert_eq!(locale.month_short(date), "Sep");
        assert_eq!(locale.day_of_week_labels()[&Weekday::Thu], "T");
    }

    #[test]
    fn ordered_days_start_with_first_day() {
        let days = ordered_days_of_week(&DefaultLocale::new(Weekday::Sun));
        assert_eq!(days[0], Weekday::Sun);
        assert_eq!(days[1], Weekday::Mon);
        assert_eq!(days[6], Weekday::Sat);
    }

    #[test]
    fn missing_labels_become_empty() {
        let labels = ordered_day_of_week_labels(&SparseLocale);
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], (Weekday::Wed, "Mi".to_string()));
        assert!(labels[1..].iter().all(|(_, l)| l.is_empty()));
    }

    #[test]
    fn system_locale_parses_posix_and_bcp47_tags() {
        let us = SystemLocale::from_tag("en_US.UTF-8");
        assert_eq!(us.language(), "en");
        assert_eq!(us.region(), Some("US"));
        assert_eq!(us.first_day_of_week(), Weekday::Sun);

        let de = SystemLocale::from_tag("de-DE");
        assert_eq!(de.first_day_of_week(), Weekday::Mon);

        let zh = SystemLocale::from_tag("zh-Hans-CN");
        assert_eq!(zh.region(), Some("CN"));
        assert_eq!(zh.day_of_week_labels(), ChineseLocale.day_of_week_labels());

        let ja = SystemLocale::from_tag("ja");
        assert_eq!(ja.region(), None);
        assert_eq!(ja.first_day_of_week(), Weekday::Sun);
    }
}
