//! Prompt command handler.
//!
//! Asks for one typed value and prints it on its own line of stdout. Prompts
//! and validation errors go to stderr, so scripts can capture just the answer
//! with `$(ezconsole prompt ...)`.

use crossterm::queue;
use crossterm::style::ResetColor;
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::error::Result;
use crate::output::console::LINE_ENDING;
use crate::output::print_warning;
use crate::prompt::{PromptRequest, Prompter};
use crate::signal::{SignalHandler, INTERRUPTED_EXIT_CODE};

/// Type of value to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PromptKind {
    #[default]
    Text,
    Integer,
    Decimal,
    Boolean,
    Char,
}

/// Prompt on stdin/stderr per `config` and print the accepted value to stdout.
pub fn prompt_command(config: &Config, kind: PromptKind, request: &PromptRequest) -> Result<()> {
    let mut prompter = Prompter::new(io::stdin().lock(), super::stderr_console(config))
        .with_max_attempts(config.prompt.attempt_limit());

    let styled = prompter.console().is_styled();
    match SignalHandler::with_action(move || exit_interrupted(styled)) {
        Ok(handler) => prompter = prompter.with_cancellation(handler),
        Err(e) => {
            tracing::warn!(error = %e, "prompt cannot be cancelled with Ctrl+C");
            print_warning(prompter.console_mut(), &e.to_string())?;
        }
    }

    let value = read_value(&mut prompter, kind, request)?;
    let mut out = super::stdout_console(config);
    out.write_line(&value)?;
    out.flush()
}

/// Ends the process from the Ctrl+C handler while stdin is blocked.
fn exit_interrupted(styled: bool) {
    let _ = write_interrupted(&mut io::stderr(), styled);
    std::process::exit(INTERRUPTED_EXIT_CODE);
}

/// Reset colors left over from the prompt and end the half-written line.
fn write_interrupted<W: Write>(out: &mut W, styled: bool) -> io::Result<()> {
    if styled {
        queue!(out, ResetColor)?;
    }
    out.write_all(LINE_ENDING.as_bytes())?;
    out.flush()
}

/// Read one value of `kind` and render it back as text.
fn read_value<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    kind: PromptKind,
    request: &PromptRequest,
) -> Result<String> {
    let value = match kind {
        PromptKind::Text => prompter.read::<String>(request)?,
        PromptKind::Integer => prompter.read::<i64>(request)?.to_string(),
        PromptKind::Decimal => prompter.read::<f64>(request)?.to_string(),
        PromptKind::Boolean => prompter.read::<bool>(request)?.to_string(),
        PromptKind::Char => prompter.read::<char>(request)?.to_string(),
    };
    Ok(value)
}
