//! Button widget: a clickable, centred label.
//!
//! The interaction controller sets the node's hover/active flags and calls
//! [`Button::click`] on a completed press-release.

use std::any::Any;
use std::fmt;

use crate::color::Color;
use crate::geometry::{Margin, Size};
use crate::render::TextMeasurer;
use crate::widget::{DrawContext, SlotMeasure, Widget};

use super::label::Label;

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A clickable button with a centred label.
///
/// # Examples
///
/// ```ignore
/// let open = Button::new("Open").on_click(move || actions.borrow_mut().push(Action::Open));
/// ```
pub struct Button {
    label: Label,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub const DEFAULT_PADDING: Margin = Margin::new(10.0, 10.0, 5.0, 5.0);

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: Label::new(text)
                .with_padding(Self::DEFAULT_PADDING)
                .transparent()
                .centred(),
            on_click: None,
        }
    }

    /// Set the click callback (builder pattern).
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn with_padding(mut self, padding: Margin) -> Self {
        self.label = self.label.with_padding(padding);
        self
    }

    pub fn text(&self) -> String {
        self.label.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    /// Run the click callback, if any.
    pub fn click(&mut self) {
        if let Some(f) = self.on_click.as_mut() {
            f();
        }
    }

    /// Fill color for the current interaction state.
    pub fn fill_color(hovered: bool, active: bool) -> Color {
        if active {
            Color::BLACK
        } else if hovered {
            Color::GRAY
        } else {
            Color::LIGHT_GRAY
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Widget for Button {
    fn widget_type(&self) -> &'static str {
        "Button"
    }

    fn min_size(&self, measurer: &dyn TextMeasurer, slots: &[SlotMeasure]) -> Size {
        self.label.min_size(measurer, slots)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let bounds = ctx.bounds();
        let fill = Self::fill_color(ctx.state.hovered, ctx.state.active);

        ctx.canvas.draw_rectangle(bounds, fill);
        ctx.canvas.draw_rectangle_outline(bounds, 1.0, Color::BLACK.fade(0.25));
        self.label.draw_text(&mut *ctx.canvas, bounds, fill.yiq_contrast());
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
