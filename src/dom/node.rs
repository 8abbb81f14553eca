//! Node types: WidgetId, NodeState, Slot.

use slotmap::new_key_type;

use crate::geometry::{Margin, Rect};

new_key_type! {
    /// Handle to a widget in a [`WidgetTree`](super::WidgetTree). Copy, lightweight (u64).
    ///
    /// A handle whose widget was removed stays a valid value but resolves to nothing.
    pub struct WidgetId;
}

/// Whether a widget takes part in layout, drawing and hit testing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    /// Zero size, no share of layout space, never drawn or hit.
    Collapsed,
}

/// Per-node state common to every widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeState {
    pub visibility: Visibility,
    /// Assigned by the last layout pass.
    pub bounds: Rect,
    pub hovered: bool,
    pub active: bool,
}

impl NodeState {
    pub fn is_collapsed(&self) -> bool {
        self.visibility == Visibility::Collapsed
    }
}

/// A container's per-child wrapper.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slot {
    pub child: WidgetId,
    /// Multiplier on the container's leftover main-axis space. Zero means
    /// "use the child's minimum size".
    pub expand_ratio: f32,
    /// Carried for callers; layout does not apply it.
    pub padding: Margin,
}

impl Slot {
    pub fn new(child: WidgetId) -> Self {
        Self {
            child,
            expand_ratio: 0.0,
            padding: Margin::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_state_defaults_visible() {
        let state = NodeState::default();
        assert_eq!(state.visibility, Visibility::Visible);
        assert!(!state.is_collapsed());
        assert!(!state.hovered && !state.active);
        assert_eq!(state.bounds, Rect::EMPTY);
    }

    #[test]
    fn widget_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<WidgetId>();
    }
}
