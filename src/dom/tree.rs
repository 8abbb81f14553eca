//! Tree operations: insert, add slots, remove, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use crate::error::UiError;
use crate::widget::Widget;

use super::node::{NodeState, Slot, Visibility, WidgetId};

const EMPTY_SLOTS: &[Slot] = &[];

/// A widget and the state every node carries.
pub struct WidgetNode {
    pub state: NodeState,
    pub widget: Box<dyn Widget>,
}

/// Arena owning every widget of one or more trees.
///
/// Widgets live in a single `SlotMap`. Containers' slot lists and parent links
/// are stored in secondary maps so removal is O(subtree size) and lookup is
/// O(1). Several roots may share one arena (e.g. a window and an overlay).
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, WidgetNode>,
    slots: SecondaryMap<WidgetId, Vec<Slot>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            slots: SecondaryMap::new(),
            parent: SecondaryMap::new(),
        }
    }

    /// Insert a detached widget. It becomes a root until added to a container.
    pub fn insert<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.insert_boxed(Box::new(widget))
    }

    pub fn insert_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let is_container = !widget.is_leaf();
        let id = self.nodes.insert(WidgetNode {
            state: NodeState::default(),
            widget,
        });
        if is_container {
            self.slots.insert(id, Vec::new());
        }
        id
    }

    /// Append `child` to the end of `container`'s slot list.
    ///
    /// The returned slot can be adjusted in place:
    /// `tree.add_slot(row, label)?.expand_ratio = 1.0;`.
    /// A child already held by another container is moved.
    pub fn add_slot(&mut self, container: WidgetId, child: WidgetId) -> Result<&mut Slot, UiError> {
        let node = self.nodes.get(container).ok_or(UiError::UnknownWidget(container))?;
        if !self.nodes.contains_key(child) {
            return Err(UiError::UnknownWidget(child));
        }
        if !self.slots.contains_key(container) {
            return Err(UiError::NotAContainer {
                id: container,
                widget_type: node.widget.widget_type(),
            });
        }
        if child == container || self.ancestors(container).contains(&child) {
            return Err(UiError::WouldCycle { parent: container, child });
        }

        self.detach(child);
        self.parent.insert(child, container);
        let slots = self
            .slots
            .get_mut(container)
            .ok_or(UiError::UnknownWidget(container))?;
        slots.push(Slot::new(child));
        let last = slots.len() - 1;
        Ok(&mut slots[last])
    }

    /// Insert `widget` and append it to `container` with the given expand ratio.
    pub fn add_child<W: Widget>(
        &mut self,
        container: WidgetId,
        widget: W,
        expand_ratio: f32,
    ) -> Result<WidgetId, UiError> {
        let id = self.insert(widget);
        match self.add_slot(container, id) {
            Ok(slot) => {
                slot.expand_ratio = expand_ratio.max(0.0);
                Ok(id)
            }
            Err(err) => {
                self.nodes.remove(id);
                self.slots.remove(id);
                Err(err)
            }
        }
    }

    /// Remove a widget and all its descendants.
    ///
    /// Handles to removed widgets resolve to `None` from then on.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        self.detach(id);

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed = None;
        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.slots.remove(current) {
                to_remove.extend(kids.iter().map(|slot| slot.child));
            }
            self.parent.remove(current);
            let node = self.nodes.remove(current);
            if current == id {
                removed = node.map(|n| n.widget);
            }
        }
        removed
    }

    /// Ordered slots of a container. Empty for leaves and unknown handles.
    pub fn slots(&self, id: WidgetId) -> &[Slot] {
        self.slots.get(id).map(Vec::as_slice).unwrap_or(EMPTY_SLOTS)
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    pub fn get(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id)
    }

    pub fn state(&self, id: WidgetId) -> Option<&NodeState> {
        self.nodes.get(id).map(|n| &n.state)
    }

    pub fn state_mut(&mut self, id: WidgetId) -> Option<&mut NodeState> {
        self.nodes.get_mut(id).map(|n| &mut n.state)
    }

    /// Borrow a widget as its concrete type.
    pub fn widget<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        self.nodes.get(id)?.widget.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow a widget as its concrete type.
    pub fn widget_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.nodes.get_mut(id)?.widget.as_any_mut().downcast_mut::<T>()
    }

    /// Show or collapse a widget. Returns `false` for an unknown handle.
    pub fn set_visibility(&mut self, id: WidgetId, visibility: Visibility) -> bool {
        match self.state_mut(id) {
            Some(state) => {
                state.visibility = visibility;
                true
            }
            None => false,
        }
    }

    pub fn is_leaf(&self, id: WidgetId) -> bool {
        !self.slots.contains_key(id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order depth-first traversal starting from `start`, in slot order.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.slots(current).iter().rev().map(|slot| slot.child));
        }
        result
    }

    fn detach(&mut self, id: WidgetId) {
        if let Some(old_parent) = self.parent.remove(id) {
            if let Some(siblings) = self.slots.get_mut(old_parent) {
                siblings.retain(|slot| slot.child != id);
            }
        }
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}
