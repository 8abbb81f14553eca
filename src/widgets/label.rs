//! Label widget: static or computed text on an optional background.

use std::any::Any;
use std::fmt;

use crate::color::Color;
use crate::geometry::{Margin, Point, Rect, Size};
use crate::render::{Canvas, TextMeasurer};
use crate::widget::{DrawContext, SlotMeasure, Widget};

// ---------------------------------------------------------------------------
// LabelText
// ---------------------------------------------------------------------------

/// Where a label's text comes from.
pub enum LabelText {
    Static(String),
    /// Re-evaluated on every measure and draw.
    Dynamic(Box<dyn Fn() -> String>),
}

impl LabelText {
    pub fn resolve(&self) -> String {
        match self {
            LabelText::Static(text) => text.clone(),
            LabelText::Dynamic(f) => f(),
        }
    }
}

impl fmt::Debug for LabelText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelText::Static(text) => f.debug_tuple("Static").field(text).finish(),
            LabelText::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// A single line of text inside padding.
///
/// # Examples
///
/// ```ignore
/// let title = Label::new("Untitled").with_background(Color::RAY_WHITE);
/// let clock = Label::dynamic(|| format!("{}", frames()));
/// ```
#[derive(Debug)]
pub struct Label {
    text: LabelText,
    color: Color,
    background: Option<Color>,
    padding: Margin,
    centred: bool,
}

impl Label {
    pub const DEFAULT_PADDING: Margin = Margin::all(5.0);

    pub fn new(text: impl Into<String>) -> Self {
        Self::with_source(LabelText::Static(text.into()))
    }

    /// A label whose text is computed each time it is needed.
    pub fn dynamic(f: impl Fn() -> String + 'static) -> Self {
        Self::with_source(LabelText::Dynamic(Box::new(f)))
    }

    fn with_source(text: LabelText) -> Self {
        Self {
            text,
            color: Color::BLACK,
            background: Some(Color::WHITE),
            padding: Self::DEFAULT_PADDING,
            centred: false,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Draw the text straight onto whatever lies below.
    pub fn transparent(mut self) -> Self {
        self.background = None;
        self
    }

    pub fn with_padding(mut self, padding: Margin) -> Self {
        self.padding = padding;
        self
    }

    /// Centre the text in the bounds instead of placing it at the padding.
    pub fn centred(mut self) -> Self {
        self.centred = true;
        self
    }

    /// The current text.
    pub fn text(&self) -> String {
        self.text.resolve()
    }

    /// Replace the text with a static string.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = LabelText::Static(text.into());
    }

    pub fn padding(&self) -> Margin {
        self.padding
    }

    /// Draw only the text, clipped to `bounds`, in `color`.
    pub fn draw_text(&self, canvas: &mut dyn Canvas, bounds: Rect, color: Color) {
        let text = self.text();
        let position = if self.centred {
            let size = canvas.measure_text(&text);
            Point::new(
                bounds.x + ((bounds.width - size.width) / 2.0).max(0.0),
                bounds.y + ((bounds.height - size.height) / 2.0).max(0.0),
            )
        } else {
            Point::new(bounds.x + self.padding.left, bounds.y + self.padding.top)
        };
        canvas.begin_clip(bounds);
        canvas.draw_text(&text, position, color);
        canvas.end_clip();
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &'static str {
        "Label"
    }

    fn min_size(&self, measurer: &dyn TextMeasurer, _: &[SlotMeasure]) -> Size {
        measurer.measure_text(&self.text()).expand(self.padding)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let bounds = ctx.bounds();
        if let Some(background) = self.background {
            ctx.canvas.draw_rectangle(bounds, background);
        }
        self.draw_text(&mut *ctx.canvas, bounds, self.color);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::dom::NodeState;
    use crate::geometry::Rect;
    use crate::render::{DrawCommand, MonospaceMetrics, RecordingCanvas};

    fn draw(label: &Label, bounds: Rect) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new(MonospaceMetrics::new(8.0, 16.0));
        let state = NodeState { bounds, ..NodeState::default() };
        label.draw(&mut DrawContext { canvas: &mut canvas, state: &state, focused: false });
        canvas
    }

    #[test]
    fn min_size_is_text_plus_padding() {
        let label = Label::new("hello").with_padding(Margin::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            label.min_size(&MonospaceMetrics::new(8.0, 16.0), &[]),
            Size::new(43.0, 23.0)
        );
    }

    #[test]
    fn dynamic_text_is_recomputed() {
        let counter = Rc::new(Cell::new(0));
        let source = Rc::clone(&counter);
        let label = Label::dynamic(move || format!("n={}", source.get()));
        assert_eq!(label.text(), "n=0");
        counter.set(7);
        assert_eq!(label.text(), "n=7");
    }

    #[test]
    fn draws_background_then_clipped_text() {
        let label = Label::new("hi").with_background(Color::RAY_WHITE);
        let bounds = Rect::new(10.0, 20.0, 100.0, 30.0);
        let canvas = draw(&label, bounds);
        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Rectangle { rect: bounds, color: Color::RAY_WHITE, clip: None },
                DrawCommand::Text {
                    text: "hi".into(),
                    position: Point::new(15.0, 25.0),
                    color: Color::BLACK,
                    clip: Some(bounds),
                },
            ]
        );
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn centred_text_ignores_padding() {
        let label = Label::new("ab").centred().transparent();
        let canvas = draw(&label, Rect::new(0.0, 0.0, 40.0, 20.0));
        assert_eq!(canvas.text_position("ab"), Some(Point::new(12.0, 2.0)));
    }

    #[test]
    fn transparent_label_skips_background() {
        let canvas = draw(&Label::new("x").transparent(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(canvas.texts(), vec!["x"]);
        assert_eq!(canvas.commands().len(), 1);
    }
}
