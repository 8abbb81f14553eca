//! Pilot: drive a headless App frame by frame.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) with a
//! [`RecordingCanvas`](crate::render::RecordingCanvas) and accumulates input
//! for the next frame, so tests read like a user session.

use crate::app::{App, AppConfig};
use crate::dom::WidgetId;
use crate::error::AppError;
use crate::event::{FrameInput, InputEvent, Key, KeyEvent, Modifiers};
use crate::geometry::{Point, Rect, Size};
use crate::render::{Compositor, RecordingCanvas};

use super::snapshot::compositor_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// Input methods queue into the pending frame; [`frame`](Self::frame) runs it.
/// The convenience methods [`click_at`](Self::click_at) and
/// [`click`](Self::click) run a frame of their own.
///
/// # Examples
///
/// ```ignore
/// use quill_ui::testing::Pilot;
///
/// let mut pilot = Pilot::new(80, 30)?;
/// pilot.frame();
/// pilot.click(pilot.app().editor.text_area);
/// pilot.type_text("hello").frame();
/// ```
pub struct Pilot {
    app: App,
    canvas: RecordingCanvas,
    pending: FrameInput,
    size: Size,
}

impl Pilot {
    /// A default editor on a screen of `columns` x `rows` cells.
    pub fn new(columns: u16, rows: u16) -> Result<Self, AppError> {
        Self::with_config(AppConfig::default(), columns, rows)
    }

    /// An editor built from `config` on a screen of `columns` x `rows` cells.
    pub fn with_config(config: AppConfig, columns: u16, rows: u16) -> Result<Self, AppError> {
        let cell = config.cell;
        let size = Size::new(
            columns as f32 * cell.glyph_width,
            rows as f32 * cell.line_height,
        );
        Ok(Self {
            app: App::new(config)?,
            canvas: RecordingCanvas::new(cell),
            pending: FrameInput::new(),
            size,
        })
    }

    // ── Input simulation ─────────────────────────────────────────────

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.pending.move_to(point);
        self
    }

    pub fn press(&mut self) -> &mut Self {
        self.pending.press();
        self
    }

    pub fn release(&mut self) -> &mut Self {
        self.pending.release();
        self
    }

    /// Queue wheel notches; positive scrolls toward the top.
    pub fn scroll(&mut self, notches: f32) -> &mut Self {
        self.pending.scroll(notches);
        self
    }

    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.pending.type_text(text);
        self
    }

    /// Queue a symbolic key without going through the app's shortcuts.
    pub fn key(&mut self, key: Key) -> &mut Self {
        self.pending.key(key);
        self
    }

    /// Send a terminal event through the app's shortcut handling.
    pub fn send(&mut self, event: &InputEvent) -> &mut Self {
        self.app.handle_input(event, &mut self.pending);
        self
    }

    /// Send a key press with the given modifiers through the app.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> &mut Self {
        self.send(&InputEvent::Key(KeyEvent::new(key, modifiers)))
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Run one frame with the pending input. Returns the app's change signal.
    pub fn frame(&mut self) -> bool {
        self.canvas.clear();
        let mut input = std::mem::take(&mut self.pending);
        self.app.frame(&mut input, &mut self.canvas, self.size)
    }

    /// Press and release at `point` in a single frame.
    pub fn click_at(&mut self, point: Point) -> bool {
        self.move_to(point).press().release();
        self.frame()
    }

    /// Click the centre of a widget's last laid-out bounds.
    ///
    /// Returns `false` without running a frame if the widget is unknown.
    pub fn click(&mut self, id: WidgetId) -> bool {
        match self.bounds(id) {
            Some(bounds) => self.click_at(centre(bounds)),
            None => false,
        }
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    /// Draw commands of the last frame.
    pub fn canvas(&self) -> &RecordingCanvas {
        &self.canvas
    }

    /// Texts drawn in the last frame, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.canvas.texts()
    }

    pub fn bounds(&self, id: WidgetId) -> Option<Rect> {
        self.app.editor.tree.state(id).map(|s| s.bounds)
    }

    /// Run a frame onto a cell grid and return its rows as text.
    pub fn render_screen(&mut self) -> String {
        let cell = self.app.config.cell;
        let mut screen = Compositor::new(
            (self.size.width / cell.glyph_width) as u16,
            (self.size.height / cell.line_height) as u16,
            cell,
        );
        screen.clear(crate::color::Color::RAY_WHITE);
        let mut input = std::mem::take(&mut self.pending);
        self.app.frame(&mut input, &mut screen, self.size);
        compositor_to_string(&screen)
    }
}

fn centre(rect: Rect) -> Point {
    Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pilot() -> Pilot {
        let mut pilot = Pilot::new(80, 30).unwrap();
        pilot.frame();
        pilot
    }

    #[test]
    fn new_pilot_is_running_with_window_active() {
        let pilot = Pilot::new(80, 30).unwrap();
        assert!(pilot.is_running());
        assert_eq!(pilot.app().editor.active_root(), pilot.app().editor.window);
    }

    #[test]
    fn first_frame_lays_out_the_window() {
        let pilot = pilot();
        assert_eq!(
            pilot.bounds(pilot.app().editor.window),
            Some(Rect::new(0.0, 0.0, 640.0, 480.0))
        );
        assert!(pilot.texts().contains(&"Line 1/1 : Column 1"));
    }

    #[test]
    fn click_unknown_widget_is_a_no_op() {
        let mut pilot = pilot();
        let status = pilot.app().editor.status;
        pilot.app_mut().editor.tree.remove(status);
        assert!(!pilot.click(status));
    }

    #[test]
    fn ctrl_q_stops_the_app() {
        let mut pilot = pilot();
        pilot.press_key_with(Key::Char('q'), Modifiers::CTRL);
        assert!(!pilot.is_running());
    }

    #[test]
    fn render_screen_shows_toolbar() {
        let mut pilot = pilot();
        let screen = pilot.render_screen();
        let first_rows: Vec<&str> = screen.lines().take(2).collect();
        assert!(first_rows.iter().any(|row| row.contains("Open")));
        assert!(first_rows.iter().any(|row| row.contains("<New File>")));
    }
}
