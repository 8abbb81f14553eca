//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered stdout writer and provides methods for entering/leaving
//! alternate screen with mouse capture, applying cell updates from the compositor,
//! and controlling the cursor.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};

use crate::color::Color;

use super::compositor::CellUpdate;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// The driver does NOT enter the alternate screen on creation; call
/// `enter_alt_screen` explicitly and `leave_alt_screen` before exiting.
pub struct Driver {
    writer: BufWriter<Stdout>,
}

impl Driver {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(io::stdout()),
        })
    }

    /// Enter alternate screen, enable raw mode and mouse capture.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen, EnableMouseCapture)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    /// Leave alternate screen, disable raw mode and mouse capture.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.writer, DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> io::Result<()> {
        execute!(self.writer, SetTitle(title))
    }

    /// Queue a batch of cell updates. Call `flush()` afterward.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(
                self.writer,
                cursor::MoveTo(update.x, update.y),
                SetForegroundColor(to_terminal_color(update.cell.fg)),
                SetBackgroundColor(to_terminal_color(update.cell.bg)),
                Print(update.cell.ch),
            )?;
        }
        queue!(self.writer, ResetColor)?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// The terminal size (columns, rows).
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show)
    }
}

/// Convert a toolkit color to a truecolor terminal color. Alpha is ignored;
/// the compositor has already blended it.
pub fn to_terminal_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_color_drops_alpha() {
        assert_eq!(
            to_terminal_color(Color::rgba(1, 2, 3, 4)),
            style::Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn driver_new_succeeds() {
        assert!(Driver::new().is_ok());
    }

    #[test]
    fn driver_terminal_size_does_not_panic() {
        // May fail without a terminal; it must not panic.
        let _ = Driver::terminal_size();
    }
}
