//! Loading animation command handlers.
//!
//! `loading` runs the timed animation. `step` drives the step animation
//! itself, one frame per simulated unit of work.

use std::io::Write;
use std::time::Duration;

use super::stdout_console;
use crate::config::Config;
use crate::error::Result;
use crate::loading::{FrameCursor, Sleeper, ThreadSleeper};
use crate::output::Console;

/// Run a timed animation for `duration_secs` seconds.
///
/// `updates_per_second` and `dots` fall back to the `[loading]` config section.
pub fn loading_command(
    config: &Config,
    message: &str,
    duration_secs: u32,
    updates_per_second: Option<u32>,
    dots: Option<usize>,
) -> Result<()> {
    let mut options = config.loading.options(duration_secs);
    if let Some(updates) = updates_per_second {
        options = options.updates_per_second(updates);
    }
    if let Some(dots) = dots {
        options = options.dots(dots);
    }

    let mut console = stdout_console(config);
    console.loading(message, options, &mut ThreadSleeper)
}

/// Options for the step command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOptions {
    /// Number of frames to render.
    pub count: u32,
    /// Pause between frames, standing in for a unit of work.
    pub interval: Duration,
    pub dots: Option<usize>,
}

/// Render `options.count` step frames.
pub fn step_command(config: &Config, message: &str, options: StepOptions) -> Result<()> {
    let mut console = stdout_console(config);
    let dots = options.dots.unwrap_or(config.loading.dots);
    run_steps(&mut console, message, options, dots, &mut ThreadSleeper)
}

fn run_steps<W: Write>(
    console: &mut Console<W>,
    message: &str,
    options: StepOptions,
    dots: usize,
    sleeper: &mut impl Sleeper,
) -> Result<()> {
    let mut cursor = FrameCursor::new();
    for _ in 0..options.count {
        console.loading_step(&mut cursor, message, dots)?;
        sleeper.sleep(options.interval);
    }
    console.new_line()?;
    console.flush()
}
