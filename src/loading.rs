//! Loading-dots animation.
//!
//! A frame is a message followed by a dot suffix that is always `dots`
//! characters wide, so a shorter frame fully overwrites a longer one:
//!
//! ```text
//! Working.
//! Working..
//! Working...
//! Working.
//! ```
//!
//! [`Console::loading`] runs a timed, blocking animation.
//! [`Console::loading_step`] renders one frame per call and leaves the pacing
//! to the caller, who owns the [`FrameCursor`].

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::error::{EzConsoleError, Result};
use crate::output::Console;

pub const DEFAULT_DOTS: usize = 3;
pub const DEFAULT_UPDATES_PER_SECOND: u32 = 2;

/// Render frame `index` of the animation for `message`.
///
/// The suffix holds `(index % dots) + 1` periods padded with spaces to `dots`
/// characters.
///
/// # Errors
///
/// Returns [`EzConsoleError::InvalidArgument`] if `dots` is 0.
pub fn render_frame(message: &str, dots: usize, index: u64) -> Result<String> {
    check_dots(dots)?;
    let filled = (index % dots as u64) as usize + 1;
    Ok(format!(
        "{}{}{}",
        message,
        ".".repeat(filled),
        " ".repeat(dots - filled)
    ))
}

fn check_dots(dots: usize) -> Result<()> {
    if dots == 0 {
        return Err(EzConsoleError::InvalidArgument(
            "dots must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Position of a step-driven animation.
///
/// Starts at frame 0 and advances by one per [`Console::loading_step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameCursor {
    frame: u64,
}

impl FrameCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next frame to render.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }
}

/// Blocking pause between animation frames.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Settings for a timed animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingOptions {
    pub duration_secs: u32,
    pub updates_per_second: u32,
    pub dots: usize,
}

impl LoadingOptions {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
            dots: DEFAULT_DOTS,
        }
    }

    pub fn updates_per_second(mut self, updates: u32) -> Self {
        self.updates_per_second = updates;
        self
    }

    pub fn dots(mut self, dots: usize) -> Self {
        self.dots = dots;
        self
    }

    /// Total number of frames rendered.
    pub fn frames(&self) -> u64 {
        u64::from(self.duration_secs) * u64::from(self.updates_per_second)
    }

    /// Pause after each frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.updates_per_second.max(1)))
    }

    fn validate(&self) -> Result<()> {
        check_dots(self.dots)?;
        if self.updates_per_second == 0 {
            return Err(EzConsoleError::InvalidArgument(
                "updates per second must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl<W: Write> Console<W> {
    /// Animate `message` for `options.duration_secs` seconds, then end the line.
    ///
    /// Blocks the calling thread for the whole duration. There is no way to
    /// stop the animation early.
    pub fn loading(
        &mut self,
        message: &str,
        options: LoadingOptions,
        sleeper: &mut impl Sleeper,
    ) -> Result<()> {
        options.validate()?;
        let color = self.palette().loading;
        let interval = options.frame_interval();
        tracing::debug!(
            frames = options.frames(),
            interval_ms = interval.as_millis() as u64,
            "loading animation started"
        );

        for index in 0..options.frames() {
            self.write_colored(&render_frame(message, options.dots, index)?, Some(color), None)?;
            self.flush()?;
            sleeper.sleep(interval);
            self.reset_column()?;
        }
        self.new_line()?;
        self.flush()
    }

    /// Render the frame at `cursor`, return to column 0, and advance the cursor.
    pub fn loading_step(
        &mut self,
        cursor: &mut FrameCursor,
        message: &str,
        dots: usize,
    ) -> Result<()> {
        let frame = render_frame(message, dots, cursor.frame())?;
        let color = self.palette().loading;
        self.write_colored(&frame, Some(color), None)?;
        self.reset_column()?;
        self.flush()?;
        cursor.advance();
        tracing::trace!(frame = cursor.frame(), "loading step");
        Ok(())
    }
}
