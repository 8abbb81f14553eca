//! Per-frame interaction controller: hover, button capture, input focus.
//!
//! [`InteractionState`] is owned by the caller and advanced once per frame by
//! [`InteractionState::tick`] against the active root. Handles it holds may go
//! stale when a subtree is removed; stale handles are dropped on the next tick.

use crate::dom::{WidgetId, WidgetTree};
use crate::geometry::Point;
use crate::layout::HitTester;
use crate::render::{GlyphMetrics, TextMeasurer};
use crate::widgets::{Button, Input};

use super::input::FrameInput;

// ---------------------------------------------------------------------------
// InteractionState
// ---------------------------------------------------------------------------

/// Hover, capture and focus, at most one of each.
#[derive(Debug, Default)]
pub struct InteractionState {
    pointer: Option<Point>,
    hovered: Option<WidgetId>,
    captured: Option<WidgetId>,
    focused: Option<WidgetId>,
    hit: HitTester,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn hovered(&self) -> Option<WidgetId> {
        self.hovered
    }

    /// The button that received the last press, until the next release.
    pub fn captured(&self) -> Option<WidgetId> {
        self.captured
    }

    /// The input receiving keyboard events.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Give keyboard focus to `id`, or clear it.
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        if self.focused != id {
            log::debug!("focus {:?} -> {:?}", self.focused, id);
            self.focused = id;
        }
    }

    /// Advance one frame. Returns whether anything visible changed.
    ///
    /// Nothing is processed until a pointer position has been reported. The
    /// keyboard queues of `input` are always drained; keys typed while nothing
    /// is focused are discarded.
    pub fn tick(
        &mut self,
        tree: &mut WidgetTree,
        root: WidgetId,
        input: &mut FrameInput,
        measurer: &dyn TextMeasurer,
    ) -> bool {
        self.drop_stale(tree);

        let chars: Vec<char> = input.chars.drain(..).collect();
        let keys: Vec<_> = input.keys.drain(..).collect();

        if let Some(point) = input.pointer {
            self.pointer = Some(point);
        }
        let Some(pointer) = self.pointer else {
            return false;
        };
        let metrics = GlyphMetrics::sample(measurer);
        let mut redraw = self.pointer_pass(tree, root, input, pointer, metrics);

        if let Some(field) = self.focused.and_then(|id| tree.widget_mut::<Input>(id)) {
            for c in chars {
                redraw |= field.handle_char(c);
            }
            for key in keys {
                redraw |= field.handle_key(key);
            }
        }

        redraw
    }

    /// Hover, button capture, focus changes and wheel for one frame.
    fn pointer_pass(
        &mut self,
        tree: &mut WidgetTree,
        root: WidgetId,
        input: &FrameInput,
        pointer: Point,
        metrics: GlyphMetrics,
    ) -> bool {
        let mut redraw = false;
        let hit = self.hit.leaf_at(tree, root, pointer);

        if self.hovered != hit {
            if let Some(state) = self.hovered.and_then(|prev| tree.state_mut(prev)) {
                state.hovered = false;
                state.active = false;
            }
            self.hovered = hit;
            redraw = true;
        }

        if let Some(id) = hit {
            if let Some(node) = tree.get_mut(id) {
                node.state.hovered = true;
                let bounds = node.state.bounds;

                if let Some(button) = node.widget.as_any_mut().downcast_mut::<Button>() {
                    if input.pressed {
                        log::debug!("capture {:?} ({:?})", id, button.text());
                        self.captured = Some(id);
                        node.state.active = true;
                        redraw = true;
                    }
                    if input.released && self.captured == Some(id) && node.state.active {
                        node.state.active = false;
                        button.click();
                        redraw = true;
                    }
                } else if let Some(field) = node.widget.as_any_mut().downcast_mut::<Input>() {
                    if input.pressed {
                        if self.focused == Some(id) {
                            redraw |= field.place_cursor(pointer, bounds, metrics);
                        } else {
                            log::debug!("focus {:?} -> {:?}", self.focused, id);
                            self.focused = Some(id);
                            redraw = true;
                        }
                    }
                    if input.wheel != 0.0 {
                        redraw |= field.scroll(input.wheel, metrics);
                    }
                }
            }
        }

        if input.released && self.captured.take().is_some() {
            redraw = true;
        }

        if input.pressed && self.focused.is_some() && self.focused != hit {
            log::debug!("focus {:?} -> None", self.focused);
            self.focused = None;
            redraw = true;
        }
        redraw
    }

    fn drop_stale(&mut self, tree: &WidgetTree) {
        for (name, slot) in [
            ("hovered", &mut self.hovered),
            ("captured", &mut self.captured),
            ("focused", &mut self.focused),
        ] {
            if slot.is_some_and(|id| !tree.contains(id)) {
                log::warn!("dropping stale {} handle {:?}", name, slot);
                *slot = None;
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
