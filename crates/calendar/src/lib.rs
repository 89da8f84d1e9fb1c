//! # sheets-calendar
//!
//! Headless calendar engine for date picker dialogs: date arithmetic,
//! locale-aware grid layout, selection evaluation and navigation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarSelection"] -->|"initial_camera_date()"| B["camera date"]
//!     B -->|"jump_prev() / jump_next()"| B
//!     B -->|"calc_calendar_data()"| C["CalendarData"]
//!     C -->|"calc_calendar_date_data()"| D["CalendarDateData"]
//!     B -->|"calc_month_data()"| E["CalendarMonthData"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sheets_calendar::{Calendar, CalendarConfig, CalendarSelection};
//!
//! let calendar = Calendar::new(CalendarConfig::builder().with_calendar_weeks(true).build()?);
//! let selection = CalendarSelection::period(Some(start), Some(end));
//!
//! let camera = calendar.initial_camera_date(&selection, None)?;
//! let page = calendar.page(camera, &selection).unwrap();
//! let next = calendar.next(camera);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Leap years, month lengths, week and month stepping |
//! | `locale` | First day of week and label tables |
//! | `clock` | Injected "today" |
//! | `config` | Validated calendar configuration |
//! | `selection` | Selection modes and extracted values |
//! | `grid` | Month/week grid layout |
//! | `month` | Month and year picker availability |
//! | `date_data` | Per-day selection state |
//! | `navigation` | Initial camera date and paging limits |
//! | `calendar` | Facade running the whole page pipeline |
//! | `error` | Error types |

mod calendar;
mod clock;
mod config;
mod date;
mod date_data;
mod error;
mod grid;
mod locale;
mod month;
mod navigation;
mod selection;

pub use calendar::{Calendar, CalendarPage};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CalendarConfig, CalendarConfigBuilder, CalendarStyle, DateBoundary};
pub use date::{
    DAYS_IN_WEEK, DateExt, FIRST_DAY_IN_MONTH, is_leap_year, jump_next, jump_prev, month_length,
    weekday_offset,
};
pub use date_data::{CalendarDateData, calc_calendar_date_data};
pub use error::CalendarError;
pub use grid::{CalendarCell, CalendarData, calc_calendar_data};
pub use locale::{
    ChineseLocale, DefaultLocale, FormatLocale, JapaneseLocale, SystemLocale, WEEKDAYS,
    ordered_day_of_week_labels, ordered_days_of_week,
};
pub use month::{
    CalendarMonthData, CalendarYearData, MONTHS, calc_month_data, calc_year_data,
    month_from_number,
};
pub use navigation::{
    camera_for_month, camera_for_year, can_jump_next, can_jump_prev, initial_camera_date,
    initial_custom_camera_date,
};
pub use selection::{CalendarSelection, RANGE_END, RANGE_START, SelectionValues};
