//! Integration tests for quill-ui.
//!
//! These exercise the public API from outside the crate: layout and hit
//! testing on hand-built trees, text buffer editing, and whole editor
//! sessions driven through the headless Pilot.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use quill_ui::app::DialogKind;
use quill_ui::dom::{Visibility, WidgetTree};
use quill_ui::event::{FrameInput, InteractionState, Key, Modifiers};
use quill_ui::geometry::{Margin, Point, Rect};
use quill_ui::layout::{HitTester, LayoutEngine};
use quill_ui::render::MonospaceMetrics;
use quill_ui::testing::{render_to_string, Pilot};
use quill_ui::widget::TextBuffer;
use quill_ui::widgets::*;

const CELL: MonospaceMetrics = MonospaceMetrics::new(8.0, 16.0);

fn scratch_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quill-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn fixed_and_expanding_slot_share_a_row() {
    let mut tree = WidgetTree::new();
    let row = tree.insert(HorizontalBox::new());
    // "ab" is 16 wide; 2 px padding each side makes 20.
    let fixed = tree
        .add_child(row, Label::new("ab").with_padding(Margin::all(2.0)), 0.0)
        .unwrap();
    let grow = tree.add_child(row, NullWidget, 1.0).unwrap();

    LayoutEngine::new().compute(&mut tree, row, Rect::new(0.0, 0.0, 100.0, 20.0), &CELL);

    assert_eq!(tree.state(fixed).unwrap().bounds, Rect::new(0.0, 0.0, 20.0, 20.0));
    assert_eq!(tree.state(grow).unwrap().bounds, Rect::new(20.0, 0.0, 80.0, 20.0));
}

#[test]
fn children_tile_the_container_main_axis() {
    let ratio_sets: &[&[f32]] = &[
        &[0.0, 1.0],
        &[0.5, 0.0, 0.5],
        &[0.0, 0.0, 1.0, 0.0],
        &[0.25, 0.5, 0.25],
    ];
    for ratios in ratio_sets {
        for height in [120.0, 200.0, 333.0] {
            let mut tree = WidgetTree::new();
            let column = tree.insert(VerticalBox::new());
            let children: Vec<_> = ratios
                .iter()
                .map(|&r| tree.add_child(column, Label::new("x"), r).unwrap())
                .collect();
            let mut engine = LayoutEngine::new();
            engine.compute(&mut tree, column, Rect::new(0.0, 0.0, 50.0, height), &CELL);
            assert!(height >= engine.min_size(column).height);

            let total: f32 = children
                .iter()
                .map(|&id| tree.state(id).unwrap().bounds.height)
                .sum();
            assert!((total - height).abs() < 1e-3, "{ratios:?} in {height}: {total}");
        }
    }
}

#[test]
fn collapsed_child_takes_no_space() {
    let mut tree = WidgetTree::new();
    let column = tree.insert(VerticalBox::new());
    let a = tree.add_child(column, Label::new("a"), 0.0).unwrap();
    let b = tree.add_child(column, Label::new("b"), 0.0).unwrap();
    let c = tree.add_child(column, Label::new("c"), 0.0).unwrap();
    tree.set_visibility(b, Visibility::Collapsed);

    let mut engine = LayoutEngine::new();
    engine.compute(&mut tree, column, Rect::new(0.0, 0.0, 40.0, 100.0), &CELL);
    assert_eq!(engine.min_size(column).height, 52.0);
    assert_eq!(tree.state(a).unwrap().bounds.y, 0.0);
    assert_eq!(tree.state(c).unwrap().bounds.y, 26.0);
    assert_eq!(tree.state(b).unwrap().bounds.height, 0.0);
}

// ---------------------------------------------------------------------------
// Hit testing
// ---------------------------------------------------------------------------

#[test]
fn hit_test_finds_leaf_and_misses_outside() {
    let mut tree = WidgetTree::new();
    let column = tree.insert(VerticalBox::new());
    let row = tree.add_child(column, HorizontalBox::new(), 0.0).unwrap();
    let left = tree.add_child(row, Button::new("L"), 0.0).unwrap();
    let right = tree.add_child(row, Button::new("R"), 1.0).unwrap();
    LayoutEngine::new().compute(&mut tree, column, Rect::new(10.0, 10.0, 100.0, 50.0), &CELL);

    let mut hit = HitTester::new();
    assert_eq!(hit.leaf_at(&tree, column, Point::new(12.0, 12.0)), Some(left));
    // Shared edge belongs to the right-hand sibling.
    let edge = tree.state(right).unwrap().bounds.x;
    assert_eq!(hit.leaf_at(&tree, column, Point::new(edge, 12.0)), Some(right));
    assert_eq!(hit.leaf_at(&tree, column, Point::new(5.0, 5.0)), None);
    assert_eq!(hit.leaf_at(&tree, column, Point::new(110.0, 30.0)), None);
    // Below the row but inside the column: no leaf there.
    assert_eq!(hit.leaf_at(&tree, column, Point::new(20.0, 55.0)), None);
}

// ---------------------------------------------------------------------------
// Text buffer
// ---------------------------------------------------------------------------

#[test]
fn enter_splits_at_cursor() {
    let mut buffer = TextBuffer::from_lines(vec!["abc".into(), "de".into()]);
    buffer.set_cursor(0, 3);
    assert!(buffer.enter());
    assert_eq!(buffer.lines(), &["abc", "", "de"]);
    assert_eq!((buffer.cursor_line(), buffer.cursor_column()), (1, 0));
}

#[test]
fn insert_then_backspace_restores() {
    let mut buffer = TextBuffer::from_lines(vec!["héllo".into(), "wörld".into()]);
    for (line, column) in [(0, 0), (0, 2), (0, 5), (1, 3)] {
        buffer.set_cursor(line, column);
        let before = buffer.clone();
        assert!(buffer.insert_char('x'));
        assert!(buffer.backspace());
        assert_eq!(buffer, before);
    }
}

#[test]
fn enter_then_backspace_restores() {
    for column in 0..=4 {
        let mut buffer = TextBuffer::from_text("line");
        buffer.set_cursor(0, column);
        let before = buffer.clone();
        buffer.enter();
        buffer.backspace();
        assert_eq!(buffer.lines(), before.lines());
        assert_eq!(buffer.cursor_column(), column);
        assert_eq!(buffer.cursor_line(), 0);
    }
}

#[test]
fn random_edits_keep_cursor_in_bounds() {
    let mut buffer = TextBuffer::new();
    let mut seed: u32 = 0x5eed;
    for _ in 0..2000 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        match (seed >> 16) % 9 {
            0 => buffer.insert_char('a'),
            1 => buffer.backspace(),
            2 => buffer.enter(),
            3 => buffer.move_left(),
            4 => buffer.move_right(),
            5 => buffer.move_up(),
            6 => buffer.move_down(),
            7 => buffer.tab(),
            _ => buffer.set_cursor((seed % 7) as usize, (seed % 13) as usize),
        };
        assert!(buffer.line_count() >= 1);
        assert!(buffer.cursor_line() < buffer.line_count());
        assert!(buffer.cursor_column() <= buffer.current_line().chars().count());
    }
}

// ---------------------------------------------------------------------------
// Interaction on a hand-built tree
// ---------------------------------------------------------------------------

#[test]
fn explicit_state_allows_independent_trees() {
    let clicks = Rc::new(Cell::new(0));
    let mut trees = Vec::new();
    for _ in 0..2 {
        let counter = Rc::clone(&clicks);
        let mut tree = WidgetTree::new();
        let root = tree.insert(Button::new("b").on_click(move || counter.set(counter.get() + 1)));
        LayoutEngine::new().compute(&mut tree, root, Rect::new(0.0, 0.0, 40.0, 40.0), &CELL);
        trees.push((tree, root, InteractionState::new()));
    }

    let mut input = FrameInput::new();
    input.move_to(Point::new(5.0, 5.0)).press().release();
    let (tree, root, state) = &mut trees[0];
    assert!(state.tick(tree, *root, &mut input, &CELL));
    assert_eq!(clicks.get(), 1);
    assert_eq!(trees[1].2.hovered(), None);
}

// ---------------------------------------------------------------------------
// Editor sessions
// ---------------------------------------------------------------------------

fn pilot() -> Pilot {
    let mut pilot = Pilot::new(80, 30).unwrap();
    pilot.frame();
    pilot
}

#[test]
fn click_below_last_line_clamps_cursor() {
    let mut pilot = pilot();
    let editor = &pilot.app().editor;
    let (text_area, text) = (editor.text_area, Rc::clone(&editor.text));
    text.borrow_mut()
        .replace_lines(vec!["first".into(), "second".into(), "third".into()]);

    // Focus, then click far below the three lines at column 2.
    pilot.click(text_area);
    let bounds = pilot.bounds(text_area).unwrap();
    pilot.click_at(Point::new(bounds.x + 10.0 + 20.0, bounds.bottom() - 5.0));

    let buffer = text.borrow();
    assert_eq!(buffer.cursor_line(), 2);
    assert_eq!(buffer.cursor_column(), 2);
}

#[test]
fn button_press_then_hover_loss_does_not_click() {
    let mut pilot = pilot();
    let editor = &pilot.app().editor;
    let (text_area, open) = (editor.text_area, editor.tree.slots(editor.tree.slots(editor.window)[0].child)[0].child);
    let on_open = pilot.bounds(open).unwrap();
    let on_text = pilot.bounds(text_area).unwrap();

    pilot.move_to(Point::new(on_open.x + 2.0, on_open.y + 2.0)).press();
    pilot.frame();
    pilot.move_to(Point::new(on_text.x + 50.0, on_text.y + 50.0));
    pilot.frame();
    pilot.release();
    pilot.frame();
    assert!(!pilot.app().editor.is_dialog_open());

    // Sanity: a real click on the same button does open the dialog.
    pilot.click(open);
    assert_eq!(pilot.app().editor.dialog_kind(), Some(DialogKind::Open));
}

#[test]
fn typing_updates_status_and_modified_title() {
    let mut pilot = pilot();
    let text_area = pilot.app().editor.text_area;
    pilot.click(text_area);
    // Characters are applied before keys within a frame.
    pilot.type_text("hi").frame();
    pilot.key(Key::Enter).frame();
    pilot.type_text("there");
    assert!(pilot.frame());

    assert_eq!(pilot.app().editor.text.borrow().text(), "hi\nthere");
    assert!(pilot.texts().contains(&"Line 2/2 : Column 6"));
    assert!(pilot.texts().contains(&"<New File> (modified)"));
}

#[test]
fn save_as_then_open_round_trips_through_the_dialog() {
    let path = scratch_file("session.txt");
    let _ = fs::remove_file(&path);
    let mut pilot = pilot();
    let text_area = pilot.app().editor.text_area;

    pilot.click(text_area);
    pilot.type_text("alpha").frame();
    pilot.key(Key::Enter).frame();
    pilot.type_text("beta").frame();

    // Save As: the dialog opens with the path input focused.
    let save_as = {
        let editor = &pilot.app().editor;
        editor.tree.slots(editor.tree.slots(editor.window)[0].child)[1].child
    };
    pilot.click(save_as);
    assert_eq!(pilot.app().editor.dialog_kind(), Some(DialogKind::SaveAs));
    assert_eq!(pilot.app().interaction.focused(), Some(pilot.app().editor.path_input));
    pilot.type_text(&path.display().to_string());
    pilot.frame();
    assert!(pilot.texts().contains(&"Save"));

    let confirm = pilot.app().editor.confirm_button;
    pilot.click(confirm);
    assert!(!pilot.app().editor.is_dialog_open());
    assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta\n");
    assert!(pilot.texts().contains(&path.display().to_string().as_str()));

    // Edit, then reload from disk through Open.
    pilot.click(text_area);
    pilot.type_text("!");
    pilot.frame();
    assert!(pilot.app().editor.document.borrow().is_modified());

    let open = {
        let editor = &pilot.app().editor;
        editor.tree.slots(editor.tree.slots(editor.window)[0].child)[0].child
    };
    pilot.click(open);
    assert_eq!(
        pilot.app().editor.path.borrow().current_line(),
        path.display().to_string()
    );
    pilot.click(confirm);
    assert!(!pilot.app().editor.is_dialog_open());
    assert_eq!(pilot.app().editor.text.borrow().text(), "alpha\nbeta");
    assert!(!pilot.app().editor.document.borrow().is_modified());
}

#[test]
fn failed_open_keeps_dialog_and_text() {
    let mut pilot = pilot();
    let text = Rc::clone(&pilot.app().editor.text);
    text.borrow_mut().replace_lines(vec!["kept".into()]);

    pilot.app_mut().editor.show_dialog(DialogKind::Open);
    pilot.frame();
    let path_input = pilot.app().editor.path_input;
    pilot.app_mut().interaction.set_focus(Some(path_input));
    pilot.type_text("/no/such/dir/file.txt");
    pilot.frame();
    let confirm = pilot.app().editor.confirm_button;
    pilot.click(confirm);

    assert_eq!(pilot.app().editor.dialog_kind(), Some(DialogKind::Open));
    assert_eq!(text.borrow().lines(), &["kept"]);
}

#[test]
fn escape_closes_dialog_and_drops_its_focus() {
    let mut pilot = pilot();
    let editor = &pilot.app().editor;
    let open = editor.tree.slots(editor.tree.slots(editor.window)[0].child)[0].child;
    pilot.click(open);
    assert!(pilot.app().editor.is_dialog_open());

    pilot.press_key_with(Key::Escape, Modifiers::NONE);
    pilot.frame();
    assert!(!pilot.app().editor.is_dialog_open());
    assert_eq!(pilot.app().interaction.focused(), None);
    assert!(pilot.is_running());

    pilot.type_text("ignored");
    pilot.frame();
    assert_eq!(pilot.app().editor.text.borrow().text(), "");
}

#[test]
fn wheel_scrolls_the_text_area() {
    let mut pilot = pilot();
    let text_area = pilot.app().editor.text_area;
    let lines: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
    pilot.app().editor.text.borrow_mut().replace_lines(lines);

    let bounds = pilot.bounds(text_area).unwrap();
    pilot.move_to(Point::new(bounds.x + 40.0, bounds.y + 40.0)).scroll(-3.0);
    assert!(pilot.frame());
    assert_eq!(pilot.app().editor.text.borrow().scroll_offset(), 60.0);
    // Line 3 is now drawn at the content top minus 60 plus 48.
    assert_eq!(
        pilot.canvas().text_position("line 3"),
        Some(Point::new(bounds.x + 10.0, bounds.y + 10.0 - 60.0 + 48.0))
    );
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn button_row_renders_on_cells() {
    let mut tree = WidgetTree::new();
    let root = tree.insert(VerticalBox::new());
    let row = tree.add_child(root, HorizontalBox::new(), 0.0).unwrap();
    tree.add_child(row, Button::new("Load"), 0.0).unwrap();
    tree.add_child(row, Button::new("Cancel"), 0.0).unwrap();

    let output = render_to_string(&mut tree, root, 40, 2);
    insta::assert_snapshot!(output, @r"
┌Load┐┌─Cancel┐
└────┘└───────┘
");
}
