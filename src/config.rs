use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level harness configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SheetsConfig {
    /// Calendar dialog settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Duration dialog settings.
    #[serde(default)]
    pub duration: DurationToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_style")]
    pub style: String,
    /// Locale tag; the host locale when absent.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default = "default_boundary_start")]
    pub boundary_start: String,
    #[serde(default = "default_boundary_end")]
    pub boundary_end: String,
    #[serde(default)]
    pub disabled_dates: Vec<String>,
    #[serde(default)]
    pub display_calendar_weeks: bool,
    #[serde(default = "default_true")]
    pub month_selection: bool,
    #[serde(default = "default_true")]
    pub year_selection: bool,
    #[serde(default)]
    pub selection: SelectionToml,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            style: default_style(),
            locale: None,
            boundary_start: default_boundary_start(),
            boundary_end: default_boundary_end(),
            disabled_dates: Vec::new(),
            display_calendar_weeks: false,
            month_selection: true,
            year_selection: true,
            selection: SelectionToml::default(),
        }
    }
}

fn default_style() -> String {
    "month".to_string()
}
fn default_boundary_start() -> String {
    "1900-01-01".to_string()
}
fn default_boundary_end() -> String {
    "2100-12-31".to_string()
}
fn default_true() -> bool {
    true
}

/// Selection shown on the printed pages.
///
/// `dates` holds the single date, every picked date, or the range start and
/// end, depending on `mode`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionToml {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub dates: Vec<String>,
}

impl Default for SelectionToml {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            dates: Vec::new(),
        }
    }
}

fn default_mode() -> String {
    "date".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DurationToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub current_time: Option<u64>,
    #[serde(default)]
    pub min_time: u64,
    #[serde(default)]
    pub max_time: Option<u64>,
    #[serde(default)]
    pub display_clear_button: bool,
}

impl Default for DurationToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            current_time: None,
            min_time: 0,
            max_time: None,
            display_clear_button: false,
        }
    }
}

fn default_format() -> String {
    "HH_MM_SS".to_string()
}

/// Reads the configuration at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<SheetsConfig> {
    let Some(path) = path else {
        return Ok(SheetsConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
