//! Snapshot rendering helpers.
//!
//! Lay out and draw a widget tree onto a [`Compositor`] cell grid and read it
//! back as plain text, for `insta` snapshots and plain assertions.

use crate::color::Color;
use crate::dom::{WidgetId, WidgetTree};
use crate::geometry::Rect;
use crate::layout::LayoutEngine;
use crate::render::{Compositor, MonospaceMetrics};
use crate::widget::draw_tree;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the subtree at `root` onto `columns` x `rows` cells of 8x16 pixels.
///
/// Each row becomes one line with trailing spaces trimmed; lines are joined
/// with `'\n'` and the last has no newline.
///
/// # Examples
///
/// ```ignore
/// let mut tree = WidgetTree::new();
/// let root = tree.insert(Label::new("Hello"));
/// assert_eq!(render_to_string(&mut tree, root, 10, 1), "Hello");
/// ```
pub fn render_to_string(
    tree: &mut WidgetTree,
    root: WidgetId,
    columns: u16,
    rows: u16,
) -> String {
    let mut screen = Compositor::new(columns, rows, MonospaceMetrics::default());
    screen.clear(Color::WHITE);
    let bounds = Rect::from_size(screen.pixel_size());
    LayoutEngine::new().compute(tree, root, bounds, &screen);
    draw_tree(tree, root, &mut screen, None);
    compositor_to_string(&screen)
}

/// Convert a full compositor screen to a plain text string.
pub fn compositor_to_string(compositor: &Compositor) -> String {
    if compositor.width == 0 || compositor.height == 0 {
        return String::new();
    }
    (0..compositor.height)
        .map(|y| compositor.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Button, HorizontalBox, Label, VerticalBox};

    #[test]
    fn empty_screen_is_empty_string() {
        let screen = Compositor::new(0, 0, MonospaceMetrics::default());
        assert_eq!(compositor_to_string(&screen), "");
    }

    #[test]
    fn label_text_lands_on_its_cell() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Label::new("Hello").with_padding(crate::geometry::Margin::ZERO));
        assert_eq!(render_to_string(&mut tree, root, 10, 1), "Hello");
    }

    #[test]
    fn toolbar_snapshot() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(VerticalBox::new());
        let row = tree.add_child(root, HorizontalBox::new(), 0.0).unwrap();
        tree.add_child(row, Button::new("Open"), 0.0).unwrap();
        tree.add_child(row, Label::new("notes.txt").transparent(), 1.0).unwrap();
        let output = render_to_string(&mut tree, root, 24, 2);
        insta::assert_snapshot!(output.lines().find(|l| l.contains("Open")).unwrap_or(""), @"┌Open┐ notes.txt");
    }
}
