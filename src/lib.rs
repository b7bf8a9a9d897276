//! Colored console output, typed prompts and loading dots.
//!
//! ```no_run
//! use ezconsole::{Color, Console, FrameCursor, LoadingOptions, PromptRequest, Prompter, StyleMode};
//! use ezconsole::loading::ThreadSleeper;
//!
//! # fn main() -> ezconsole::Result<()> {
//! let mut console = Console::stdout(StyleMode::Auto);
//! console.write_line_colored("Ready", Some(Color::Green), None)?;
//! console.loading("Warming up", LoadingOptions::new(2), &mut ThreadSleeper)?;
//!
//! let mut prompter = Prompter::new(std::io::stdin().lock(), console);
//! let age: u32 = prompter.read(&PromptRequest::new("Age").default_hint(30))?;
//!
//! let mut cursor = FrameCursor::new();
//! for _ in 0..age {
//!     prompter.console_mut().loading_step(&mut cursor, "Counting", 3)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod loading;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod signal;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Config;
pub use error::{EzConsoleError, Result};
pub use loading::{render_frame, FrameCursor, LoadingOptions};
pub use output::{Color, ColorPair, Console, Palette, StyleMode};
pub use prompt::{PromptRequest, PromptValue, Prompter};
pub use signal::SignalHandler;
