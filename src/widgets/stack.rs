//! Vertical and horizontal boxes.
//!
//! Boxes own no children themselves; the arena keeps their slots. They draw
//! nothing and hand layout to [`crate::layout::stack`].

use std::any::Any;

use crate::geometry::{Rect, Size};
use crate::layout::stack::{self, Axis};
use crate::render::TextMeasurer;
use crate::widget::{DrawContext, SlotMeasure, Widget};

macro_rules! stack_box {
    ($(#[$meta:meta])* $name:ident, $axis:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            pub fn new() -> Self {
                Self
            }

            pub fn axis(&self) -> Axis {
                $axis
            }
        }

        impl Widget for $name {
            fn widget_type(&self) -> &'static str {
                stringify!($name)
            }

            fn is_leaf(&self) -> bool {
                false
            }

            fn min_size(&self, _: &dyn TextMeasurer, slots: &[SlotMeasure]) -> Size {
                stack::measure($axis, slots)
            }

            fn arrange(&self, bounds: Rect, slots: &[SlotMeasure]) -> Vec<Rect> {
                stack::arrange($axis, bounds, slots)
            }

            fn draw(&self, _: &mut DrawContext<'_>) {}

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }
        }
    };
}

stack_box!(
    /// Stacks slots top to bottom.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let root = tree.insert(VerticalBox::new());
    /// tree.add_child(root, Label::new("title"), 0.0)?;
    /// tree.add_child(root, Input::new(buffer), 1.0)?;
    /// ```
    VerticalBox,
    Axis::Vertical
);

stack_box!(
    /// Stacks slots left to right.
    HorizontalBox,
    Axis::Horizontal
);
