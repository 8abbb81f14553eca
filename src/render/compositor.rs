//! Cell-grid canvas for terminal output.
//!
//! The `Compositor` maps the toolkit's pixel geometry onto a grid of terminal
//! cells using fixed cell metrics. Widgets draw into it through [`Canvas`]; the
//! `diff` method compares two frames and produces only the `CellUpdate`s needed
//! to transition between them.

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};

use super::canvas::{Canvas, MonospaceMetrics, TextMeasurer};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with foreground and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    /// A blank cell on the given background.
    pub fn blank(bg: Color) -> Self {
        Self { ch: ' ', fg: Color::BLACK, bg }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Color::BLACK)
    }
}

/// A single cell that changed between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

// ---------------------------------------------------------------------------
// Compositor
// ---------------------------------------------------------------------------

/// A screen buffer addressed in pixels and stored as cells.
///
/// A cell is covered by a rectangle when the cell's centre lies inside it, so a
/// rectangle narrower than half a cell may cover nothing.
#[derive(Debug, Clone)]
pub struct Compositor {
    /// `screen[y][x]` is the cell at column x, row y.
    screen: Vec<Vec<Cell>>,
    pub width: u16,
    pub height: u16,
    metrics: MonospaceMetrics,
    clips: Vec<Rect>,
}

impl Compositor {
    /// Create a blank screen of `width` x `height` cells.
    pub fn new(width: u16, height: u16, metrics: MonospaceMetrics) -> Self {
        Self {
            screen: Self::blank_screen(width, height),
            width,
            height,
            metrics,
            clips: Vec::new(),
        }
    }

    /// Resize the screen buffer. All cells are reset to blank.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.screen = Self::blank_screen(width, height);
    }

    /// The full screen in pixels.
    pub fn pixel_size(&self) -> Size {
        Size::new(
            self.width as f32 * self.metrics.glyph_width,
            self.height as f32 * self.metrics.line_height,
        )
    }

    pub fn metrics(&self) -> MonospaceMetrics {
        self.metrics
    }

    /// Reset every cell to a blank on `bg` and drop any leftover clips.
    pub fn clear(&mut self, bg: Color) {
        for row in &mut self.screen {
            for cell in row.iter_mut() {
                *cell = Cell::blank(bg);
            }
        }
        self.clips.clear();
    }

    /// The cell at (x, y), or `None` out of bounds.
    pub fn get_cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.screen.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// One row of characters, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        self.screen
            .get(y as usize)
            .map(|row| row.iter().map(|c| c.ch).collect::<String>())
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    /// Compare this frame against a previous frame and return only the changed cells.
    pub fn diff(&self, previous: &Compositor) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                let cell = self.screen[y][x];
                let unchanged = previous
                    .screen
                    .get(y)
                    .and_then(|row| row.get(x))
                    .is_some_and(|prev| *prev == cell);
                if !unchanged {
                    updates.push(CellUpdate { x: x as u16, y: y as u16, cell });
                }
            }
        }
        updates
    }

    /// The active clip intersected with the screen.
    fn clip(&self) -> Rect {
        let screen = Rect::from_size(self.pixel_size());
        self.clips.last().map_or(screen, |c| c.intersection(screen))
    }

    /// The cell containing a pixel point, if on screen.
    fn cell_at(&self, point: Point) -> Option<(usize, usize)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.metrics.glyph_width) as usize;
        let row = (point.y / self.metrics.line_height) as usize;
        (col < self.width as usize && row < self.height as usize).then_some((col, row))
    }

    fn cell_centre(&self, col: usize, row: usize) -> Point {
        Point::new(
            (col as f32 + 0.5) * self.metrics.glyph_width,
            (row as f32 + 0.5) * self.metrics.line_height,
        )
    }

    /// Inclusive cell span `(col0, row0, col1, row1)` whose centres lie in `rect`.
    fn covered(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let gw = self.metrics.glyph_width;
        let lh = self.metrics.line_height;
        let col0 = ((rect.x / gw) - 0.5).ceil().max(0.0) as usize;
        let row0 = ((rect.y / lh) - 0.5).ceil().max(0.0) as usize;
        let col_end = ((rect.right() / gw) - 0.5).ceil().min(self.width as f32);
        let row_end = ((rect.bottom() / lh) - 0.5).ceil().min(self.height as f32);
        if col_end <= col0 as f32 || row_end <= row0 as f32 {
            return None;
        }
        Some((col0, row0, col_end as usize - 1, row_end as usize - 1))
    }

    fn blank_screen(width: u16, height: u16) -> Vec<Vec<Cell>> {
        (0..height as usize)
            .map(|_| vec![Cell::default(); width as usize])
            .collect()
    }
}

impl TextMeasurer for Compositor {
    fn measure_text(&self, text: &str) -> Size {
        self.metrics.measure_text(text)
    }
}

impl Canvas for Compositor {
    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        let Some((c0, r0, c1, r1)) = self.covered(rect.intersection(self.clip())) else {
            return;
        };
        for row in &mut self.screen[r0..=r1] {
            for cell in &mut row[c0..=c1] {
                cell.bg = color.over(cell.bg);
                if color.a == u8::MAX {
                    cell.ch = ' ';
                } else {
                    cell.fg = color.over(cell.fg);
                }
            }
        }
    }

    fn draw_rectangle_outline(&mut self, rect: Rect, _thickness: f32, color: Color) {
        let clip = self.clip();
        let Some((c0, r0, c1, r1)) = self.covered(rect) else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                let edge_h = row == r0 || row == r1;
                let edge_v = col == c0 || col == c1;
                if !(edge_h || edge_v) || !clip.contains(self.cell_centre(col, row)) {
                    continue;
                }
                let ch = match (edge_h, edge_v, row == r0, col == c0) {
                    (true, true, true, true) => '┌',
                    (true, true, true, false) => '┐',
                    (true, true, false, true) => '└',
                    (true, true, false, false) => '┘',
                    (true, false, _, _) => '─',
                    _ => '│',
                };
                let cell = &mut self.screen[row][col];
                cell.ch = ch;
                cell.fg = color.over(cell.bg);
            }
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        let clip = self.clip();
        // Snap to the nearest cell origin.
        let origin = Point::new(
            position.x + self.metrics.glyph_width * 0.5,
            position.y + self.metrics.line_height * 0.5,
        );
        let Some((col0, row)) = self.cell_at(origin) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let col = col0 + i;
            if col >= self.width as usize {
                break;
            }
            if !clip.contains(self.cell_centre(col, row)) {
                continue;
            }
            let cell = &mut self.screen[row][col];
            cell.ch = ch;
            cell.fg = color.over(cell.bg);
        }
    }

    fn begin_clip(&mut self, rect: Rect) {
        let clip = self.clips.last().map_or(rect, |outer| outer.intersection(rect));
        self.clips.push(clip);
    }

    fn end_clip(&mut self) {
        if self.clips.pop().is_none() {
            log::warn!("end_clip without matching begin_clip");
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
