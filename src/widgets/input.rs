//! Input widget: an editable multi-line text area over a shared buffer.
//!
//! The widget never owns the text. It edits the [`TextBuffer`] behind a
//! [`SharedBuffer`] handle and reports content changes through an optional
//! callback.

use std::any::Any;
use std::fmt;

use crate::color::Color;
use crate::event::Key;
use crate::geometry::{Margin, Point, Rect, Size};
use crate::render::{GlyphMetrics, TextMeasurer};
use crate::widget::{DrawContext, SharedBuffer, SlotMeasure, TextBuffer, Widget};

/// Pixels scrolled per wheel notch.
pub const WHEEL_SCROLL_STEP: f32 = 20.0;

const FOCUS_OUTLINE: f32 = 2.0;
const CURSOR_WIDTH: f32 = 2.0;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// An editable text area.
///
/// The change callback runs while the buffer is borrowed; it may read the
/// buffer it is given but must not borrow the shared handle mutably.
///
/// # Examples
///
/// ```ignore
/// let buffer = TextBuffer::from_text("hello").into_shared();
/// let input = Input::new(Rc::clone(&buffer)).on_change(|b| println!("{} lines", b.line_count()));
/// ```
pub struct Input {
    buffer: SharedBuffer,
    color: Color,
    padding: Margin,
    on_change: Option<Box<dyn FnMut(&TextBuffer)>>,
}

impl Input {
    pub const DEFAULT_PADDING: Margin = Margin::all(5.0);

    pub fn new(buffer: SharedBuffer) -> Self {
        Self {
            buffer,
            color: Color::BLACK,
            padding: Self::DEFAULT_PADDING,
            on_change: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_padding(mut self, padding: Margin) -> Self {
        self.padding = padding;
        self
    }

    /// Set the change callback (builder pattern).
    pub fn on_change(mut self, f: impl FnMut(&TextBuffer) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn buffer(&self) -> &SharedBuffer {
        &self.buffer
    }

    pub fn padding(&self) -> Margin {
        self.padding
    }

    /// Insert a typed character at the cursor.
    pub fn handle_char(&mut self, c: char) -> bool {
        let changed = self.buffer.borrow_mut().insert_char(c);
        if changed {
            self.notify();
        }
        changed
    }

    /// Apply an editing or navigation key. Unhandled keys report no change.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let (changed, edits) = {
            let mut buffer = self.buffer.borrow_mut();
            match key {
                Key::Left => (buffer.move_left(), false),
                Key::Right => (buffer.move_right(), false),
                Key::Up => (buffer.move_up(), false),
                Key::Down => (buffer.move_down(), false),
                Key::Backspace => (buffer.backspace(), true),
                Key::Enter => (buffer.enter(), true),
                Key::Tab => (buffer.tab(), true),
                _ => (false, false),
            }
        };
        if changed && edits {
            self.notify();
        }
        changed
    }

    /// Move the cursor to the glyph under `point`, given the widget's bounds.
    pub fn place_cursor(&mut self, point: Point, bounds: Rect, metrics: GlyphMetrics) -> bool {
        let origin = Point::new(bounds.x + self.padding.left, bounds.y + self.padding.top);
        self.buffer
            .borrow_mut()
            .cursor_from_point(point - origin, metrics)
    }

    /// Scroll by wheel notches; positive moves toward the top.
    pub fn scroll(&mut self, notches: f32, metrics: GlyphMetrics) -> bool {
        self.buffer.borrow_mut().scroll_by(
            -notches * WHEEL_SCROLL_STEP,
            metrics.line_height,
            self.padding.height(),
        )
    }

    fn notify(&mut self) {
        if let Some(f) = self.on_change.as_mut() {
            f(&self.buffer.borrow());
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("buffer", &self.buffer)
            .field("padding", &self.padding)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Light markers under the text: `.` for whitespace, `\n` after every line but the last.
fn whitespace_markers(line: &str, last: bool) -> String {
    let mut markers: String = line
        .chars()
        .map(|c| if c.is_whitespace() { '.' } else { ' ' })
        .collect();
    if !last {
        markers.push_str("\\n");
    }
    markers
}

impl Widget for Input {
    fn widget_type(&self) -> &'static str {
        "Input"
    }

    fn min_size(&self, measurer: &dyn TextMeasurer, _: &[SlotMeasure]) -> Size {
        let line_height = GlyphMetrics::sample(measurer).line_height;
        let buffer = self.buffer.borrow();
        let width = buffer
            .lines()
            .iter()
            .map(|line| measurer.measure_text(line).width)
            .fold(0.0f32, f32::max);
        let height = (buffer.line_count() as f32 * line_height).max(line_height);
        Size::new(width, height).expand(self.padding)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let bounds = ctx.bounds();
        let metrics = GlyphMetrics::sample(&*ctx.canvas);
        let buffer = self.buffer.borrow();

        ctx.canvas.draw_rectangle(bounds, Color::WHITE);
        if ctx.focused {
            ctx.canvas.draw_rectangle_outline(bounds, FOCUS_OUTLINE, Color::BLUE);
        }
        ctx.canvas.draw_rectangle_outline(bounds, 1.0, Color::BLACK.fade(0.25));

        ctx.canvas.begin_clip(bounds);
        let left = bounds.x + self.padding.left;
        let top = bounds.y + self.padding.top - buffer.scroll_offset();
        let last = buffer.line_count() - 1;
        for (i, line) in buffer.lines().iter().enumerate() {
            let y = top + i as f32 * metrics.line_height;
            if y + metrics.line_height < bounds.y || y > bounds.bottom() {
                continue;
            }
            let position = Point::new(left, y);
            ctx.canvas
                .draw_text(&whitespace_markers(line, i == last), position, Color::LIGHT_GRAY);
            ctx.canvas.draw_text(line, position, self.color);
        }

        if ctx.focused {
            let cursor = Rect::new(
                left + metrics.glyph_width * buffer.cursor_column() as f32,
                top + metrics.line_height * buffer.cursor_line() as f32,
                CURSOR_WIDTH,
                metrics.line_height,
            );
            ctx.canvas.draw_rectangle(cursor, Color::BLACK);
        }
        ctx.canvas.end_clip();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::dom::NodeState;
    use crate::render::{DrawCommand, MonospaceMetrics, RecordingCanvas};

    const CELL: MonospaceMetrics = MonospaceMetrics::new(8.0, 16.0);
    const GLYPH: GlyphMetrics = GlyphMetrics { glyph_width: 8.0, line_height: 16.0 };

    fn input(lines: &[&str]) -> Input {
        let buffer =
            TextBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect()).into_shared();
        Input::new(buffer)
    }

    fn draw(input: &Input, bounds: Rect, focused: bool) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new(CELL);
        let state = NodeState { bounds, ..NodeState::default() };
        input.draw(&mut DrawContext { canvas: &mut canvas, state: &state, focused });
        canvas
    }

    // -----------------------------------------------------------------------
    // Measuring
    // -----------------------------------------------------------------------

    #[test]
    fn min_size_covers_longest_line_and_all_lines() {
        let w = input(&["ab", "abcd", ""]);
        assert_eq!(w.min_size(&CELL, &[]), Size::new(42.0, 58.0));
    }

    #[test]
    fn min_size_is_at_least_one_line() {
        let w = input(&[""]).with_padding(Margin::ZERO);
        assert_eq!(w.min_size(&CELL, &[]), Size::new(0.0, 16.0));
    }

    // -----------------------------------------------------------------------
    // Editing and change notification
    // -----------------------------------------------------------------------

    #[test]
    fn edits_notify_but_navigation_does_not() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut w = input(&["ab"]).on_change(move |b| log.borrow_mut().push(b.text()));

        assert!(w.handle_char('c'));
        assert!(w.handle_key(Key::Left));
        assert!(w.handle_key(Key::Enter));
        assert!(w.handle_key(Key::Backspace));
        assert!(!w.handle_char('\u{1b}'));
        assert!(!w.handle_key(Key::Unsupported));

        assert_eq!(*seen.borrow(), vec!["cab", "\ncab", "cab"]);
    }

    #[test]
    fn unchanged_edit_does_not_notify() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut w = input(&["x"]).on_change(move |_| *counter.borrow_mut() += 1);
        assert!(!w.handle_key(Key::Backspace));
        assert!(!w.handle_key(Key::Up));
        assert_eq!(*calls.borrow(), 0);
        assert!(w.handle_key(Key::Tab));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn buffer_is_shared_not_copied() {
        let buffer = TextBuffer::new().into_shared();
        let mut w = Input::new(Rc::clone(&buffer));
        w.handle_char('z');
        assert_eq!(buffer.borrow().lines(), &["z"]);
        buffer.borrow_mut().replace_lines(vec!["from app".into()]);
        assert_eq!(w.buffer().borrow().lines(), &["from app"]);
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    #[test]
    fn place_cursor_is_relative_to_padded_origin() {
        let mut w = input(&["hello", "world"]);
        let bounds = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert!(w.place_cursor(Point::new(100.0 + 5.0 + 17.0, 50.0 + 5.0 + 20.0), bounds, GLYPH));
        let b = w.buffer().borrow();
        assert_eq!((b.cursor_line(), b.cursor_column()), (1, 2));
    }

    #[test]
    fn wheel_up_scrolls_toward_top() {
        let mut w = input(&["1", "2", "3", "4", "5", "6"]);
        assert!(w.scroll(-2.0, GLYPH));
        assert_eq!(w.buffer().borrow().scroll_offset(), 40.0);
        assert!(w.scroll(1.0, GLYPH));
        assert_eq!(w.buffer().borrow().scroll_offset(), 20.0);
        assert!(w.scroll(5.0, GLYPH));
        assert!(!w.scroll(1.0, GLYPH));
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    #[test]
    fn whitespace_markers_render_under_text() {
        assert_eq!(whitespace_markers("a b\t", false), " . .\\n");
        assert_eq!(whitespace_markers("ab", true), "  ");
    }

    #[test]
    fn unfocused_input_has_no_cursor_or_focus_ring() {
        let canvas = draw(&input(&["hi"]), Rect::new(0.0, 0.0, 100.0, 40.0), false);
        assert!(!canvas.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Outline { color, .. } if *color == Color::BLUE
        )));
        assert_eq!(canvas.texts(), vec!["  ", "hi"]);
    }

    #[test]
    fn focused_input_draws_ring_and_cursor() {
        let w = input(&["abc", "de"]);
        w.buffer().borrow_mut().set_cursor(1, 1);
        let canvas = draw(&w, Rect::new(0.0, 0.0, 100.0, 60.0), true);
        assert!(canvas.commands().contains(&DrawCommand::Outline {
            rect: Rect::new(0.0, 0.0, 100.0, 60.0),
            thickness: 2.0,
            color: Color::BLUE,
            clip: None,
        }));
        assert_eq!(
            canvas.commands().last(),
            Some(&DrawCommand::Rectangle {
                rect: Rect::new(13.0, 21.0, 2.0, 16.0),
                color: Color::BLACK,
                clip: Some(Rect::new(0.0, 0.0, 100.0, 60.0)),
            })
        );
    }

    #[test]
    fn scrolled_content_is_drawn_higher() {
        let w = input(&["0", "1", "2", "3"]);
        w.buffer().borrow_mut().scroll_by(16.0, 16.0, 0.0);
        let canvas = draw(&w, Rect::new(0.0, 0.0, 100.0, 100.0), false);
        assert_eq!(canvas.text_position("1"), Some(Point::new(5.0, 5.0)));
    }
}
