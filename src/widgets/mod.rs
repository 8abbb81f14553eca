//! Built-in widgets: Label, Button, Input, NullWidget and the stack boxes.

pub mod button;
pub mod input;
pub mod label;
pub mod null;
pub mod stack;

pub use button::Button;
pub use input::{Input, WHEEL_SCROLL_STEP};
pub use label::{Label, LabelText};
pub use null::NullWidget;
pub use stack::{HorizontalBox, VerticalBox};
