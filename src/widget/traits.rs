//! Widget trait: measure, arrange, draw.
//!
//! The `Widget` trait is the core abstraction for all UI elements. The layout
//! engine walks the arena and hands each widget what it needs: measured child
//! sizes to containers, a canvas and the node's state to `draw`. A widget never
//! reaches into the tree itself.

use std::any::Any;

use crate::dom::NodeState;
use crate::geometry::{Rect, Size};
use crate::render::{Canvas, TextMeasurer};

// ---------------------------------------------------------------------------
// SlotMeasure
// ---------------------------------------------------------------------------

/// What a container knows about one of its slots during layout.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SlotMeasure {
    /// The child's minimum size; zero when collapsed.
    pub min_size: Size,
    pub expand_ratio: f32,
    pub collapsed: bool,
}

// ---------------------------------------------------------------------------
// DrawContext
// ---------------------------------------------------------------------------

/// Everything a widget may use while drawing itself.
pub struct DrawContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub state: &'a NodeState,
    /// Whether this widget holds keyboard focus.
    pub focused: bool,
}

impl DrawContext<'_> {
    /// The bounds assigned by the last layout pass.
    pub fn bounds(&self) -> Rect {
        self.state.bounds
    }
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Object-safe: the arena stores `Box<dyn Widget>` and concrete types are
/// recovered through [`as_any`](Widget::as_any).
pub trait Widget: Any {
    /// The type name, used in errors and logs (e.g. "Button").
    fn widget_type(&self) -> &'static str;

    /// Whether this widget has no traversable children.
    ///
    /// Containers return `false` and get a slot list in the arena.
    fn is_leaf(&self) -> bool {
        true
    }

    /// Size needed to render the content without clipping.
    ///
    /// Only called for visible widgets; `slots` is empty for leaves.
    fn min_size(&self, measurer: &dyn TextMeasurer, slots: &[SlotMeasure]) -> Size;

    /// Split `bounds` among the slots, one rectangle per slot in order.
    ///
    /// Leaves have no slots and keep the default.
    fn arrange(&self, bounds: Rect, slots: &[SlotMeasure]) -> Vec<Rect> {
        let _ = (bounds, slots);
        Vec::new()
    }

    /// Render using only the widget's own data and `ctx.state`.
    ///
    /// Containers draw before their children.
    fn draw(&self, ctx: &mut DrawContext<'_>);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
