//! Duration command: replay keypad input on a duration dialog.

use anyhow::Result;
use tracing::{info, info_span};

use sheets_duration::{DurationConfig, DurationInput, formatted_hint_time, input_keys};

use crate::cli::DurationArgs;
use crate::config;
use crate::convert;

/// Run the duration command.
pub fn run(args: DurationArgs) -> Result<()> {
    let _cmd = info_span!("duration").entered();
    let mut config = config::load(args.config.as_deref())?;
    if let Some(format) = args.format {
        config.duration.format = format;
    }
    if let Some(seconds) = args.seconds {
        config.duration.current_time = Some(seconds);
    }
    let duration_cfg = convert::build_duration_config(&config.duration)?;
    let keys = convert::parse_keys(&args.keys)?;
    info!(format = %duration_cfg.format(), n_keys = keys.len(), "replaying keypad input");

    let keypad: Vec<String> = input_keys(&duration_cfg)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("keypad: {}", keypad.join(" "));

    let mut input = duration_cfg.initial_input();
    println!("{}", render_state("start", &input, &duration_cfg));
    for key in keys {
        input = input.apply(key)?;
        println!("{}", render_state(&key.to_string(), &input, &duration_cfg));
    }

    let hint: Vec<String> = formatted_hint_time(input.to_seconds())
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("hint: {}", hint.join(" "));
    Ok(())
}

/// One line per input state: key, display, seconds and validity.
pub fn render_state(key: &str, input: &DurationInput, config: &DurationConfig) -> String {
    let seconds = input.to_seconds();
    let valid = if config.is_valid(seconds) { "valid" } else { "invalid" };
    format!("{key:>5}  {input}  = {seconds}s ({valid})")
}
