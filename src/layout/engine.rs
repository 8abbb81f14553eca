//! Two-pass layout over a [`WidgetTree`].
//!
//! [`LayoutEngine`] first measures minimum sizes bottom-up, caching them per
//! widget, then assigns bounds top-down from a proposed root rectangle.

use slotmap::SecondaryMap;

use crate::dom::{WidgetId, WidgetTree};
use crate::geometry::{Rect, Size};
use crate::render::TextMeasurer;
use crate::widget::SlotMeasure;

/// Runs the measure and arrange passes and keeps the last measured sizes.
#[derive(Default)]
pub struct LayoutEngine {
    min_sizes: SecondaryMap<WidgetId, Size>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out the subtree at `root` inside `rect`.
    ///
    /// The root takes `rect` verbatim, as does every leaf below it; callers
    /// should supply at least the root's minimum size.
    pub fn compute(
        &mut self,
        tree: &mut WidgetTree,
        root: WidgetId,
        rect: Rect,
        measurer: &dyn TextMeasurer,
    ) {
        self.min_sizes.clear();
        let min = self.measure(tree, root, measurer);
        log::trace!("layout {root:?} in {rect:?}, min {min:?}");
        self.arrange(tree, root, rect);
    }

    /// Minimum size of `id` from the last `compute`, zero if unknown.
    pub fn min_size(&self, id: WidgetId) -> Size {
        self.min_sizes.get(id).copied().unwrap_or_default()
    }

    /// Measure `id` and its subtree without assigning bounds.
    pub fn measure(
        &mut self,
        tree: &WidgetTree,
        id: WidgetId,
        measurer: &dyn TextMeasurer,
    ) -> Size {
        let Some(node) = tree.get(id) else {
            return Size::ZERO;
        };
        let size = if node.state.is_collapsed() {
            Size::ZERO
        } else {
            let slots: Vec<SlotMeasure> = tree
                .slots(id)
                .iter()
                .map(|slot| SlotMeasure {
                    min_size: self.measure(tree, slot.child, measurer),
                    expand_ratio: slot.expand_ratio,
                    collapsed: tree.state(slot.child).map_or(true, |s| s.is_collapsed()),
                })
                .collect();
            node.widget.min_size(measurer, &slots)
        };
        self.min_sizes.insert(id, size);
        size
    }

    fn arrange(&self, tree: &mut WidgetTree, id: WidgetId, rect: Rect) {
        let slots: Vec<(WidgetId, SlotMeasure)> = tree
            .slots(id)
            .iter()
            .map(|slot| {
                let measure = SlotMeasure {
                    min_size: self.min_size(slot.child),
                    expand_ratio: slot.expand_ratio,
                    collapsed: tree.state(slot.child).map_or(true, |s| s.is_collapsed()),
                };
                (slot.child, measure)
            })
            .collect();

        let Some(node) = tree.get_mut(id) else {
            return;
        };
        node.state.bounds = rect;
        if slots.is_empty() {
            return;
        }
        let measures: Vec<SlotMeasure> = slots.iter().map(|(_, m)| *m).collect();
        let rects = node.widget.arrange(rect, &measures);
        for ((child, _), child_rect) in slots.into_iter().zip(rects) {
            self.arrange(tree, child, child_rect);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
