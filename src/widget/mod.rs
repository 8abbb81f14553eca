//! Widget system: trait, draw pass, text buffer, scrolling.

pub mod buffer;
pub mod paint;
pub mod scroll;
pub mod traits;

pub use buffer::{SharedBuffer, TextBuffer, TAB_WIDTH};
pub use paint::draw_tree;
pub use scroll::ScrollState;
pub use traits::{DrawContext, SlotMeasure, Widget};
