use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Sheets picker engine harness.
#[derive(Parser)]
#[command(
    name = "sheets",
    version,
    about = "Print calendar pages and duration input states computed by the picker engine"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print calendar pages starting at a camera date.
    Calendar(CalendarArgs),
    /// Print the month and year picker state.
    Months(MonthsArgs),
    /// Replay keypad input on a duration dialog.
    Duration(DurationArgs),
}

/// Page layout accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Full month grid.
    Month,
    /// Single week row.
    Week,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Camera date (YYYY-MM-DD); derived from the selection when omitted.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Override the page layout from config.
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Show ISO week numbers.
    #[arg(short, long)]
    pub weeks: bool,

    /// Override the locale tag (e.g. `en-US`, `zh_CN`, `ja`).
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Number of consecutive pages to print.
    #[arg(short, long, default_value_t = 1)]
    pub pages: usize,
}

/// Arguments for the `months` subcommand.
#[derive(clap::Args)]
pub struct MonthsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Camera date (YYYY-MM-DD); derived from the selection when omitted.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Jump to this month (1-12) as if picked in the month picker.
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Jump to this year as if picked in the year picker.
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the `duration` subcommand.
#[derive(clap::Args)]
pub struct DurationArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the layout (e.g. `HH_MM_SS`, `M_SS`).
    #[arg(short, long)]
    pub format: Option<String>,

    /// Override the starting duration in seconds.
    #[arg(short, long)]
    pub seconds: Option<u64>,

    /// Keys to press, comma separated (`0`-`9`, `00`, `C`, `<`).
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,
}
