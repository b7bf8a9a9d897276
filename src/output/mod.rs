//! Colored terminal output for ezconsole.
//!
//! - [`console`] - The [`Console`] writer that tracks the ambient color pair
//! - [`messages`] - Error, warning and success messages used by the CLI
//!
//! Colors are the sixteen standard console colors plus [`Color::Default`],
//! which stands for whatever the terminal itself uses.

pub mod console;
pub mod messages;

use crate::error::{EzConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

pub use console::Console;
pub use messages::{print_error, print_success, print_warning};

/// A console color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// The terminal's own default color.
    #[default]
    Default,
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Every color, in console palette order with `Default` first.
    pub const ALL: [Color; 17] = [
        Color::Default,
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Kebab-case name, as used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::DarkBlue => "dark-blue",
            Color::DarkGreen => "dark-green",
            Color::DarkCyan => "dark-cyan",
            Color::DarkRed => "dark-red",
            Color::DarkMagenta => "dark-magenta",
            Color::DarkYellow => "dark-yellow",
            Color::Gray => "gray",
            Color::DarkGray => "dark-gray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    pub(crate) fn to_crossterm(self) -> crossterm::style::Color {
        use crossterm::style::Color as Ct;
        match self {
            Color::Default => Ct::Reset,
            Color::Black => Ct::Black,
            Color::DarkBlue => Ct::DarkBlue,
            Color::DarkGreen => Ct::DarkGreen,
            Color::DarkCyan => Ct::DarkCyan,
            Color::DarkRed => Ct::DarkRed,
            Color::DarkMagenta => Ct::DarkMagenta,
            Color::DarkYellow => Ct::DarkYellow,
            Color::Gray => Ct::Grey,
            Color::DarkGray => Ct::DarkGrey,
            Color::Blue => Ct::Blue,
            Color::Green => Ct::Green,
            Color::Cyan => Ct::Cyan,
            Color::Red => Ct::Red,
            Color::Magenta => Ct::Magenta,
            Color::Yellow => Ct::Yellow,
            Color::White => Ct::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a color name case-insensitively.
///
/// `dark-blue`, `dark_blue`, `DarkBlue` and `darkblue` all name the same color,
/// and `grey` is accepted for `gray`.
impl FromStr for Color {
    type Err = EzConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
            .replace("grey", "gray");

        Color::ALL
            .into_iter()
            .find(|color| color.name().replace('-', "") == normalized)
            .ok_or_else(|| EzConsoleError::UnknownColor(s.to_string()))
    }
}

/// A foreground/background color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
}

impl ColorPair {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Fill in omitted colors from `self`.
    pub fn with(self, foreground: Option<Color>, background: Option<Color>) -> Self {
        Self {
            foreground: foreground.unwrap_or(self.foreground),
            background: background.unwrap_or(self.background),
        }
    }
}

/// Foreground colors for the roles the prompt reader and loading animator write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Color of the prompt text.
    #[serde(default = "default_prompt_color")]
    pub prompt: Color,

    /// Color of the parenthesized default value shown after the prompt.
    #[serde(default = "default_hint_color")]
    pub hint: Color,

    /// Color of validation errors.
    #[serde(default = "default_error_color")]
    pub error: Color,

    /// Color of loading animation frames.
    #[serde(default = "default_loading_color")]
    pub loading: Color,
}

fn default_prompt_color() -> Color {
    Color::Yellow
}

fn default_hint_color() -> Color {
    Color::Cyan
}

fn default_error_color() -> Color {
    Color::Red
}

fn default_loading_color() -> Color {
    Color::Gray
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            prompt: default_prompt_color(),
            hint: default_hint_color(),
            error: default_error_color(),
            loading: default_loading_color(),
        }
    }
}

/// Whether ANSI escape sequences are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    /// Style only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl StyleMode {
    /// Resolve the mode for stdout.
    pub fn enabled(self) -> bool {
        self.enabled_for(&std::io::stdout())
    }

    /// Resolve the mode for `stream` against the current process environment.
    pub fn enabled_for(self, stream: &impl IsTerminal) -> bool {
        match self {
            StyleMode::Always => true,
            StyleMode::Never => false,
            StyleMode::Auto => std::env::var_os("NO_COLOR").is_none() && stream.is_terminal(),
        }
    }
}

impl fmt::Display for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleMode::Auto => "auto",
            StyleMode::Always => "always",
            StyleMode::Never => "never",
        };
        write!(f, "{}", name)
    }
}
