//! The draw pass: render a laid-out subtree onto a canvas.

use crate::dom::{WidgetId, WidgetTree};
use crate::render::Canvas;

use super::traits::DrawContext;

/// Draw the subtree at `root`, parents before children, in slot order.
///
/// Collapsed nodes and everything beneath them are skipped. `focused` marks
/// the input that draws its focus ring and cursor.
pub fn draw_tree(
    tree: &WidgetTree,
    root: WidgetId,
    canvas: &mut dyn Canvas,
    focused: Option<WidgetId>,
) {
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        if node.state.is_collapsed() {
            continue;
        }
        node.widget.draw(&mut DrawContext {
            canvas: &mut *canvas,
            state: &node.state,
            focused: focused == Some(id),
        });
        stack.extend(tree.slots(id).iter().rev().map(|slot| slot.child));
    }
}
