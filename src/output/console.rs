//! The colored console writer.
//!
//! [`Console`] owns an output sink and the ambient [`ColorPair`]. Every
//! temporary color change goes through [`Console::with_colors`], which puts the
//! previous pair back on all exit paths, including failures of the sink.

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{SetBackgroundColor, SetForegroundColor};
use std::io::{self, Stderr, Stdout, Write};

use super::{Color, ColorPair, Palette, StyleMode};
use crate::error::Result;

/// Platform line terminator.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line terminator.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A writer that tracks the ambient color pair of the terminal it writes to.
///
/// When styling is disabled the pair is still tracked, but no escape
/// sequences reach the sink. This keeps output to files and pipes clean.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    colors: ColorPair,
    palette: Palette,
    styled: bool,
}

impl Console<Stdout> {
    /// Console on stdout, styled according to `mode`.
    pub fn stdout(mode: StyleMode) -> Self {
        Self::new(io::stdout(), mode.enabled())
    }
}

impl Console<Stderr> {
    /// Console on stderr, styled according to `mode` resolved against stderr.
    pub fn stderr(mode: StyleMode) -> Self {
        let stderr = io::stderr();
        let styled = mode.enabled_for(&stderr);
        Self::new(stderr, styled)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self {
            out,
            colors: ColorPair::default(),
            palette: Palette::default(),
            styled,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The ambient color pair.
    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Change the ambient color pair until the next change.
    pub fn set_colors(&mut self, colors: ColorPair) -> Result<()> {
        self.apply(colors)
    }

    /// Return to the terminal's default colors.
    pub fn reset_colors(&mut self) -> Result<()> {
        self.apply(ColorPair::default())
    }

    /// Write `text` in the ambient colors.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.write_colored(text, None, None)
    }

    /// Write `text` with a temporary color pair.
    ///
    /// Omitted colors keep their ambient value. No newline is appended.
    pub fn write_colored(
        &mut self,
        text: &str,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> Result<()> {
        let colors = self.colors.with(foreground, background);
        self.with_colors(colors, |console| {
            console.out.write_all(text.as_bytes())?;
            Ok(())
        })
    }

    /// Write `text` followed by the line terminator in the ambient colors.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.write_line_colored(text, None, None)
    }

    /// Write `text` followed by the line terminator with a temporary color pair.
    pub fn write_line_colored(
        &mut self,
        text: &str,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> Result<()> {
        self.write_colored(&format!("{}{}", text, LINE_ENDING), foreground, background)
    }

    /// Write just the line terminator.
    pub fn new_line(&mut self) -> Result<()> {
        self.write(LINE_ENDING)
    }

    /// Run `f` with `colors` as the ambient pair, then restore the previous pair.
    ///
    /// The previous pair is restored even when `f` or the color change itself
    /// fails. The first error wins.
    pub fn with_colors<T>(
        &mut self,
        colors: ColorPair,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let previous = self.colors;
        let result = self.apply(colors).and_then(|()| f(self));
        let restored = self.apply(previous);
        let value = result?;
        restored?;
        Ok(value)
    }

    /// Move the cursor back to column 0 so the next write overwrites the line.
    pub fn reset_column(&mut self) -> Result<()> {
        if self.styled {
            queue!(self.out, MoveToColumn(0))?;
        } else {
            self.out.write_all(b"\r")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Switch the ambient pair, emitting escapes only for components that change.
    ///
    /// Tracked state is updated before anything is written.
    fn apply(&mut self, colors: ColorPair) -> Result<()> {
        let current = self.colors;
        self.colors = colors;

        if !self.styled {
            return Ok(());
        }
        if current.foreground != colors.foreground {
            queue!(
                self.out,
                SetForegroundColor(colors.foreground.to_crossterm())
            )?;
        }
        if current.background != colors.background {
            queue!(
                self.out,
                SetBackgroundColor(colors.background.to_crossterm())
            )?;
        }
        Ok(())
    }
}
