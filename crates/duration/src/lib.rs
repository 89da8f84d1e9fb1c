//! Keypad duration entry.
//!
//! A duration dialog shows a fixed number of digits laid out by a
//! [`DurationFormat`] (`HH_MM_SS`, `M_SS`, ...). Keys shift digits in from the
//! right; the buffer converts back to seconds at face value.
//!
//! # Quick start
//!
//! ```
//! use sheets_duration::{DurationConfig, DurationFormat, InputKey};
//!
//! let config = DurationConfig::new(DurationFormat::MmSs);
//! let mut input = config.initial_input();
//! for key in ["1", "3", "0"] {
//!     input = input.apply(key.parse::<InputKey>().unwrap()).unwrap();
//! }
//!
//! assert_eq!(input.to_string(), "01m 30s");
//! assert_eq!(input.to_seconds(), 90);
//! assert!(config.is_valid(input.to_seconds()));
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `format` | Layouts, segments and units |
//! | `time` | Splitting seconds, hint text |
//! | `input` | Immutable digit buffer |
//! | `keys` | Keypad keys and layout |
//! | `config` | Dialog configuration |

mod config;
mod error;
mod format;
mod input;
mod keys;
mod time;

pub use config::DurationConfig;
pub use error::DurationError;
pub use format::{DurationFormat, Segment, TimeUnit};
pub use input::DurationInput;
pub use keys::{ACTION_BACKSPACE, ACTION_CLEAR, InputKey, input_keys};
pub use time::{TimeInfo, UnitValue, formatted_hint_time, split_time};
