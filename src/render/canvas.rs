//! Backend capabilities consumed by the widget tree.
//!
//! Layout only needs [`TextMeasurer`]; drawing needs a full [`Canvas`]. Both are
//! object-safe so the tree can be driven by any backend behind `&mut dyn Canvas`.

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};

/// Measures text at the backend's active font and scale.
pub trait TextMeasurer {
    /// The bounding size of `text` rendered on a single line.
    fn measure_text(&self, text: &str) -> Size;
}

/// Primitive drawing operations, all subject to the innermost active clip.
pub trait Canvas: TextMeasurer {
    /// Fill `rect` with `color`.
    fn draw_rectangle(&mut self, rect: Rect, color: Color);

    /// Stroke the inside edge of `rect` with the given thickness.
    fn draw_rectangle_outline(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Draw `text` with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Color);

    /// Push a clip rectangle. Nested clips intersect.
    fn begin_clip(&mut self, rect: Rect);

    /// Pop the innermost clip rectangle.
    fn end_clip(&mut self);
}

/// Fixed-width glyph metrics used for cursor placement.
///
/// Cursor-from-point mapping and tab expansion assume a monospace font; the
/// metrics are sampled from a single reference glyph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub glyph_width: f32,
    pub line_height: f32,
}

impl GlyphMetrics {
    /// Sample metrics from the reference glyph `"A"`.
    pub fn sample<M: TextMeasurer + ?Sized>(measurer: &M) -> Self {
        let size = measurer.measure_text("A");
        Self {
            glyph_width: size.width,
            line_height: size.height,
        }
    }
}

/// A monospace measurer with fixed glyph cells.
///
/// Used by the terminal backend and by headless tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMetrics {
    pub glyph_width: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub const fn new(glyph_width: f32, line_height: f32) -> Self {
        Self { glyph_width, line_height }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMeasurer for MonospaceMetrics {
    fn measure_text(&self, text: &str) -> Size {
        Size::new(text.chars().count() as f32 * self.glyph_width, self.line_height)
    }
}
