//! App struct: configuration, frame sequencing, terminal event loop.
//!
//! [`App`] owns the editor's widget trees, the layout engine and the
//! interaction state. [`App::frame`] runs one tick, layout and draw against
//! any canvas, so tests drive it headlessly; [`App::run`] wires it to a
//! crossterm terminal.

pub mod document;
pub mod editor;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::color::Color;
use crate::error::AppError;
use crate::event::{FrameInput, InputEvent, InteractionState, Key};
use crate::geometry::{Rect, Size};
use crate::layout::LayoutEngine;
use crate::render::{Canvas, Compositor, Driver, MonospaceMetrics};
use crate::widget::draw_tree;

pub use document::Document;
pub use editor::{DialogKind, Editor, EditorAction};

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the editor.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Terminal window title.
    pub title: String,
    /// Target frames per second for the event loop.
    pub fps: u32,
    /// Pixel size of one terminal cell.
    pub cell: MonospaceMetrics,
    /// Document to load at startup.
    pub path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "TextEd".to_string(),
            fps: 60,
            cell: MonospaceMetrics::default(),
            path: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with the first command-line argument as document path.
    pub fn from_args() -> Self {
        let config = Self::new();
        match std::env::args_os().nth(1) {
            Some(path) => config.with_path(path),
            None => config,
        }
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the target FPS (builder).
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set the cell size in pixels (builder).
    pub fn with_cell_size(mut self, width: f32, height: f32) -> Self {
        self.cell = MonospaceMetrics::new(width, height);
        self
    }

    /// Set the startup document (builder).
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The editor application.
pub struct App {
    pub editor: Editor,
    pub interaction: InteractionState,
    pub config: AppConfig,
    layout: LayoutEngine,
    running: bool,
}

impl App {
    /// Build the editor and load the configured document, if any.
    ///
    /// A document that fails to load is logged and the editor starts empty.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let mut editor = Editor::new()?;
        if let Some(path) = &config.path {
            if let Err(err) = editor.load(path) {
                log::error!("{err}");
            }
        }
        Ok(Self {
            editor,
            interaction: InteractionState::new(),
            config,
            layout: LayoutEngine::new(),
            running: true,
        })
    }

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    /// Request the app to quit.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Handle application shortcuts; everything else goes into `input`.
    ///
    /// Ctrl+Q quits. Escape closes the dialog, or quits when none is open.
    pub fn handle_input(&mut self, event: &InputEvent, input: &mut FrameInput) {
        if let InputEvent::Key(ke) = event {
            if ke.is_ctrl('q') {
                self.request_quit();
                return;
            }
            if ke.code == Key::Escape {
                if self.editor.is_dialog_open() {
                    self.editor.close_dialog();
                    self.interaction.set_focus(None);
                } else {
                    self.request_quit();
                }
                return;
            }
        }
        input.push(event, self.config.cell);
    }

    /// Run one frame: tick the active root, apply queued actions, then lay
    /// out and draw the window and, when open, the dialog over a fade.
    ///
    /// Returns whether anything changed.
    pub fn frame<C: Canvas>(&mut self, input: &mut FrameInput, canvas: &mut C, size: Size) -> bool {
        let root = self.editor.active_root();
        let mut changed = self
            .interaction
            .tick(&mut self.editor.tree, root, input, &*canvas);

        let dialog_was_open = self.editor.is_dialog_open();
        if self.editor.apply_actions() {
            changed = true;
            match (dialog_was_open, self.editor.is_dialog_open()) {
                (false, true) => self.interaction.set_focus(Some(self.editor.path_input)),
                (true, false) => self.interaction.set_focus(None),
                _ => {}
            }
        }

        let screen = Rect::from_size(size);
        let focused = self.interaction.focused();
        let window = self.editor.window;
        self.layout.compute(&mut self.editor.tree, window, screen, &*canvas);
        draw_tree(&self.editor.tree, window, &mut *canvas, focused);

        if self.editor.is_dialog_open() {
            canvas.draw_rectangle(screen, Color::BLACK.fade(0.25));
            let dialog = self.editor.dialog;
            self.layout.compute(&mut self.editor.tree, dialog, screen, &*canvas);
            draw_tree(&self.editor.tree, dialog, &mut *canvas, focused);
        }
        changed
    }

    /// Run the editor in the terminal until the user quits.
    pub fn run(&mut self) -> Result<(), AppError> {
        let mut driver = Driver::new()?;
        driver.enter_alt_screen()?;
        driver.hide_cursor()?;
        driver.set_title(&self.config.title)?;

        let result = self.event_loop(&mut driver);

        driver.show_cursor()?;
        driver.leave_alt_screen()?;
        result
    }

    fn event_loop(&mut self, driver: &mut Driver) -> Result<(), AppError> {
        let (width, height) = Driver::terminal_size()?;
        let mut screen = Compositor::new(width, height, self.config.cell);
        let mut previous = Compositor::new(0, 0, self.config.cell);
        let frame_time = self.config.frame_duration();

        while self.running {
            let mut input = FrameInput::new();
            if event::poll(frame_time)? {
                loop {
                    let ct = event::read()?;
                    if !matches!(&ct, Event::Key(ke) if ke.kind == KeyEventKind::Release) {
                        let ev = InputEvent::from(ct);
                        if let InputEvent::Resize { width, height } = ev {
                            screen.resize(width, height);
                            previous = Compositor::new(0, 0, self.config.cell);
                        }
                        self.handle_input(&ev, &mut input);
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
            if !self.running {
                break;
            }

            screen.clear(Color::RAY_WHITE);
            let size = screen.pixel_size();
            self.frame(&mut input, &mut screen, size);

            driver.apply_updates(&screen.diff(&previous))?;
            driver.flush()?;
            std::mem::swap(&mut screen, &mut previous);
            if screen.width != previous.width || screen.height != previous.height {
                screen.resize(previous.width, previous.height);
            }
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
