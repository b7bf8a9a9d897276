//! Basic message output functions.
//!
//! Provides simple error, warning and success message display.

use std::io::Write;

use super::{Color, Console};
use crate::error::Result;

fn print_labeled<W: Write>(
    console: &mut Console<W>,
    label: &str,
    color: Color,
    msg: &str,
) -> Result<()> {
    console.write_colored(label, Some(color), None)?;
    console.write_line(&format!(" {}", msg))
}

/// Print an error message.
pub fn print_error<W: Write>(console: &mut Console<W>, msg: &str) -> Result<()> {
    print_labeled(console, "Error:", Color::Red, msg)
}

/// Print a warning message.
pub fn print_warning<W: Write>(console: &mut Console<W>, msg: &str) -> Result<()> {
    print_labeled(console, "Warning:", Color::Yellow, msg)
}

pub fn print_success<W: Write>(console: &mut Console<W>, msg: &str) -> Result<()> {
    print_labeled(console, "Done:", Color::Green, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::console::LINE_ENDING;

    fn capture(f: impl FnOnce(&mut Console<Vec<u8>>) -> Result<()>) -> String {
        let mut console = Console::new(Vec::new(), false);
        f(&mut console).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_print_error_format() {
        let out = capture(|c| print_error(c, "disk full"));
        assert_eq!(out, format!("Error: disk full{LINE_ENDING}"));
    }

    #[test]
    fn test_print_warning_and_success_labels() {
        assert!(capture(|c| print_warning(c, "w")).starts_with("Warning: w"));
        assert!(capture(|c| print_success(c, "s")).starts_with("Done: s"));
    }
}
