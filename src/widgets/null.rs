//! Null widget: an invisible spacer.

use std::any::Any;

use crate::geometry::Size;
use crate::render::TextMeasurer;
use crate::widget::{DrawContext, SlotMeasure, Widget};

/// Takes no minimum space and draws nothing.
///
/// Give its slot an expand ratio to push siblings apart or to centre them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullWidget;

impl Widget for NullWidget {
    fn widget_type(&self) -> &'static str {
        "NullWidget"
    }

    fn min_size(&self, _: &dyn TextMeasurer, _: &[SlotMeasure]) -> Size {
        Size::ZERO
    }

    fn draw(&self, _: &mut DrawContext<'_>) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
