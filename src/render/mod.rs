//! Rendering: backend capabilities, a recording canvas, and the terminal compositor and driver.

pub mod canvas;
pub mod compositor;
pub mod driver;
pub mod recording;

pub use canvas::{Canvas, GlyphMetrics, MonospaceMetrics, TextMeasurer};
pub use compositor::{Cell, CellUpdate, Compositor};
pub use driver::Driver;
pub use recording::{DrawCommand, RecordingCanvas};
