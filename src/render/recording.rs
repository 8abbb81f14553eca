//! A canvas that records draw calls instead of rasterizing them.

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};

use super::canvas::{Canvas, MonospaceMetrics, TextMeasurer};

/// One recorded drawing primitive, with the clip that was active when issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rectangle { rect: Rect, color: Color, clip: Option<Rect> },
    Outline { rect: Rect, thickness: f32, color: Color, clip: Option<Rect> },
    Text { text: String, position: Point, color: Color, clip: Option<Rect> },
}

/// Headless canvas with monospace metrics.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub metrics: MonospaceMetrics,
    commands: Vec<DrawCommand>,
    clips: Vec<Rect>,
    max_clip_depth: usize,
}

impl RecordingCanvas {
    pub fn new(metrics: MonospaceMetrics) -> Self {
        Self { metrics, ..Self::default() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping metrics.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clips.clear();
        self.max_clip_depth = 0;
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position of the first text command equal to `text`.
    pub fn text_position(&self, text: &str) -> Option<Point> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text: t, position, .. } if t == text => Some(*position),
            _ => None,
        })
    }

    /// Whether any clip is still open.
    pub fn clip_depth(&self) -> usize {
        self.clips.len()
    }

    pub fn max_clip_depth(&self) -> usize {
        self.max_clip_depth
    }

    fn current_clip(&self) -> Option<Rect> {
        self.clips.last().copied()
    }
}

impl TextMeasurer for RecordingCanvas {
    fn measure_text(&self, text: &str) -> Size {
        self.metrics.measure_text(text)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        let clip = self.current_clip();
        self.commands.push(DrawCommand::Rectangle { rect, color, clip });
    }

    fn draw_rectangle_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        let clip = self.current_clip();
        self.commands.push(DrawCommand::Outline { rect, thickness, color, clip });
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        let clip = self.current_clip();
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
            clip,
        });
    }

    fn begin_clip(&mut self, rect: Rect) {
        let clip = self.clips.last().map_or(rect, |outer| outer.intersection(rect));
        self.clips.push(clip);
        self.max_clip_depth = self.max_clip_depth.max(self.clips.len());
    }

    fn end_clip(&mut self) {
        self.clips.pop();
    }
}
