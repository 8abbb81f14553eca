//! Widget arena: handles, per-node state, slots, and tree operations.

pub mod node;
pub mod tree;

pub use node::{NodeState, Slot, Visibility, WidgetId};
pub use tree::{WidgetNode, WidgetTree};
