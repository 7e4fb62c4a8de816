//! Terminal rendering using crossterm
//!
//! Paints highlighted segments onto any writer with ANSI styling.

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use unicode_width::UnicodeWidthChar;

use synspan::syntax::{Color, Segment, Style};
use synspan::Result;

/// Map a palette color onto crossterm's
fn term_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    }
}

/// Styled text writer
pub struct Terminal<W: Write> {
    out: W,
    /// Whether to emit escape sequences at all
    styled: bool,
    /// Clip lines to this many display columns
    max_cols: Option<usize>,
    /// Display column of the cursor on the current line
    col: usize,
}

impl<W: Write> Terminal<W> {
    /// Wrap a writer
    pub fn new(out: W, styled: bool, max_cols: Option<usize>) -> Self {
        Self {
            out,
            styled,
            max_cols,
            col: 0,
        }
    }

    /// Apply a style to subsequent output
    pub fn apply_style(&mut self, style: &Style) -> Result<()> {
        if !self.styled || style.is_default() {
            return Ok(());
        }
        if style.fg != Color::Default {
            queue!(self.out, SetForegroundColor(term_color(style.fg)))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }

    /// Reset all attributes
    pub fn reset_attributes(&mut self) -> Result<()> {
        if self.styled {
            queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }

    /// Write text, clipping each line to the column limit
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        let Some(max_cols) = self.max_cols else {
            queue!(self.out, Print(s))?;
            return Ok(());
        };

        let mut visible = String::with_capacity(s.len());
        for ch in s.chars() {
            if ch == '\n' {
                visible.push(ch);
                self.col = 0;
                continue;
            }
            let width = UnicodeWidthChar::width(ch).unwrap_or(1);
            if self.col + width <= max_cols {
                visible.push(ch);
            }
            self.col += width;
        }
        queue!(self.out, Print(visible))?;
        Ok(())
    }

    /// Paint highlighted segments
    pub fn paint(&mut self, segments: &[Segment<'_>]) -> Result<()> {
        for segment in segments {
            let style = segment.category.map(|c| c.default_style()).unwrap_or_default();
            if style.is_default() {
                self.write_str(segment.text)?;
            } else {
                self.apply_style(&style)?;
                self.write_str(segment.text)?;
                self.reset_attributes()?;
            }
        }
        self.flush()
    }

    /// Flush output buffer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Give back the underlying writer
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
