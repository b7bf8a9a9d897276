//! Write command handler.
//!
//! Writes text with an optional foreground/background color pair.

use std::io::Write;

use super::stdout_console;
use crate::config::Config;
use crate::error::Result;
use crate::output::{Color, Console};

/// Options for the write command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    /// Skip the trailing line terminator.
    pub no_newline: bool,
}

/// Write `text` to stdout.
pub fn write_command(config: &Config, text: &str, options: &WriteOptions) -> Result<()> {
    let mut console = stdout_console(config);
    write_to(&mut console, text, options)
}

fn write_to<W: Write>(console: &mut Console<W>, text: &str, options: &WriteOptions) -> Result<()> {
    if options.no_newline {
        console.write_colored(text, options.foreground, options.background)?;
    } else {
        console.write_line_colored(text, options.foreground, options.background)?;
    }
    console.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::console::LINE_ENDING;

    fn run(text: &str, options: WriteOptions) -> String {
        let mut console = Console::new(Vec::new(), false);
        write_to(&mut console, text, &options).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_write_appends_newline_by_default() {
        assert_eq!(run("hi", WriteOptions::default()), format!("hi{LINE_ENDING}"));
    }

    #[test]
    fn test_write_no_newline() {
        let options = WriteOptions {
            foreground: Some(Color::Green),
            no_newline: true,
            ..Default::default()
        };
        assert_eq!(run("hi", options), "hi");
    }
}
