//! Multi-line text buffer with a sticky-column cursor and vertical scroll.
//!
//! The buffer is owned by the application and shared with the [`Input`]
//! widget that edits it, so both see the same lines without copying.
//!
//! [`Input`]: crate::widgets::Input

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::Point;
use crate::render::GlyphMetrics;

use super::scroll::ScrollState;

/// A buffer shared between the application and an input widget.
pub type SharedBuffer = Rc<RefCell<TextBuffer>>;

/// Spaces inserted by [`TextBuffer::tab`].
pub const TAB_WIDTH: usize = 4;

/// Ordered lines of text plus a cursor and scroll offset.
///
/// The line sequence is never empty. Columns count `char`s, not bytes. The
/// cursor stores a *desired* column; the effective column is that value
/// clamped to the current line, so vertical moves keep the horizontal position
/// across shorter lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor_line: usize,
    desired_column: usize,
    scroll: ScrollState,
    /// Line height and vertical padding of the last scroll, kept so the
    /// bound can follow the line count.
    line_height: f32,
    vertical_padding: f32,
}

impl TextBuffer {
    /// A buffer holding a single empty line.
    pub fn new() -> Self {
        Self::from_lines(Vec::new())
    }

    /// A buffer over `lines`; an empty sequence becomes one empty line.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() { vec![String::new()] } else { lines };
        Self {
            lines,
            cursor_line: 0,
            desired_column: 0,
            scroll: ScrollState::default(),
            line_height: 0.0,
            vertical_padding: 0.0,
        }
    }

    /// Split `text` on line breaks (`\n` or `\r\n`).
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines().map(str::to_owned).collect())
    }

    /// Wrap in the shared handle used by input widgets.
    pub fn into_shared(self) -> SharedBuffer {
        Rc::new(RefCell::new(self))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line under the cursor.
    pub fn current_line(&self) -> &str {
        &self.lines[self.cursor_line]
    }

    /// All lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace every line, resetting cursor and scroll.
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        *self = Self {
            line_height: self.line_height,
            vertical_padding: self.vertical_padding,
            ..Self::from_lines(lines)
        };
        self.refresh_scroll_bound();
    }

    // -- cursor ------------------------------------------------------------

    pub fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    pub fn desired_column(&self) -> usize {
        self.desired_column
    }

    /// Effective column: the desired column clamped to the current line.
    pub fn cursor_column(&self) -> usize {
        self.desired_column.min(char_len(self.current_line()))
    }

    /// Place the cursor, clamping both coordinates.
    pub fn set_cursor(&mut self, line: usize, column: usize) -> bool {
        let line = line.min(self.lines.len() - 1);
        let column = column.min(char_len(&self.lines[line]));
        let changed = line != self.cursor_line || column != self.cursor_column();
        self.cursor_line = line;
        self.desired_column = column;
        changed
    }

    /// Move the cursor to the glyph cell under `point`.
    ///
    /// `point` is relative to the top-left of the content area as drawn at
    /// zero scroll. Assumes a monospace font.
    pub fn cursor_from_point(&mut self, point: Point, metrics: GlyphMetrics) -> bool {
        if metrics.line_height <= 0.0 || metrics.glyph_width <= 0.0 {
            return false;
        }
        let line = ((point.y + self.scroll.offset()) / metrics.line_height).floor();
        let column = (point.x / metrics.glyph_width).floor();
        self.set_cursor(line.max(0.0) as usize, column.max(0.0) as usize)
    }

    // -- scroll ------------------------------------------------------------

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Largest allowed scroll offset: content height plus padding.
    pub fn scroll_bound(&self) -> f32 {
        self.scroll.max()
    }

    /// Scroll by `delta` pixels, bounded by the content height plus padding.
    pub fn scroll_by(&mut self, delta: f32, line_height: f32, vertical_padding: f32) -> bool {
        self.line_height = line_height;
        self.vertical_padding = vertical_padding;
        self.refresh_scroll_bound();
        self.scroll.scroll_by(delta)
    }

    /// Re-clamp the offset after the line count changed.
    fn refresh_scroll_bound(&mut self) {
        self.scroll
            .set_max(self.lines.len() as f32 * self.line_height + self.vertical_padding);
    }

    // -- editing -----------------------------------------------------------

    /// Insert `c` at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        let column = self.cursor_column();
        let line = &mut self.lines[self.cursor_line];
        let at = byte_index(line, column);
        line.insert(at, c);
        self.desired_column = column + 1;
        true
    }

    /// Insert [`TAB_WIDTH`] spaces.
    pub fn tab(&mut self) -> bool {
        for _ in 0..TAB_WIDTH {
            self.insert_char(' ');
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        let column = self.cursor_column();
        if column == 0 {
            return false;
        }
        self.desired_column = column - 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        let column = self.cursor_column();
        if column >= char_len(self.current_line()) {
            return false;
        }
        self.desired_column = column + 1;
        true
    }

    /// Previous line, keeping the desired column.
    pub fn move_up(&mut self) -> bool {
        if self.cursor_line == 0 {
            return false;
        }
        self.cursor_line -= 1;
        true
    }

    /// Next line, keeping the desired column.
    pub fn move_down(&mut self) -> bool {
        if self.cursor_line + 1 >= self.lines.len() {
            return false;
        }
        self.cursor_line += 1;
        true
    }

    /// Delete before the cursor, joining with the previous line at column 0.
    pub fn backspace(&mut self) -> bool {
        let column = self.cursor_column();
        if column > 0 {
            let line = &mut self.lines[self.cursor_line];
            let at = byte_index(line, column - 1);
            line.remove(at);
            self.desired_column = column - 1;
            return true;
        }
        if self.cursor_line == 0 {
            return false;
        }
        let tail = self.lines.remove(self.cursor_line);
        self.cursor_line -= 1;
        let previous = &mut self.lines[self.cursor_line];
        self.desired_column = char_len(previous);
        previous.push_str(&tail);
        self.refresh_scroll_bound();
        true
    }

    /// Split the current line at the cursor; the cursor starts the new line.
    pub fn enter(&mut self) -> bool {
        let column = self.cursor_column();
        let line = &mut self.lines[self.cursor_line];
        let at = byte_index(line, column);
        let suffix = line.split_off(at);
        self.lines.insert(self.cursor_line + 1, suffix);
        self.cursor_line += 1;
        self.desired_column = 0;
        self.refresh_scroll_bound();
        true
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `column`-th char, or the end of the string.
fn byte_index(s: &str, column: usize) -> usize {
    s.char_indices().nth(column).map_or(s.len(), |(i, _)| i)
}

// ===========================================================================
// Tests
// ===========================================================================
