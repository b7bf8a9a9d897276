//! CLI command handlers for ezconsole.
//!
//! Each command has its own module. Handlers build their console or prompter
//! from the effective [`Config`](crate::config::Config) and hand the actual work
//! to a generic helper that tests drive with in-memory readers and writers.
//!
//! # Commands
//!
//! - [`write`] - Write colored text
//! - [`prompt`] - Ask for a typed value and echo it
//! - [`loading`] - Timed and step-driven loading animations
//! - [`config`] - Show or initialize the config file

mod config;
mod loading;
mod prompt;
mod write;

pub use config::{config_display_command, config_init_command};
pub use loading::{loading_command, step_command, StepOptions};
pub use prompt::{prompt_command, PromptKind};
pub use write::{write_command, WriteOptions};

use crate::config::Config;
use crate::output::Console;
use std::io::{Stderr, Stdout};

/// Stdout console styled and colored per `config`.
pub(crate) fn stdout_console(config: &Config) -> Console<Stdout> {
    Console::stdout(config.color_mode).with_palette(config.palette)
}

/// Stderr console for interactive text that must stay out of captured stdout.
pub(crate) fn stderr_console(config: &Config) -> Console<Stderr> {
    Console::stderr(config.color_mode).with_palette(config.palette)
}
