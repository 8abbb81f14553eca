//! Event system: terminal input conversion and the interaction controller.

pub mod input;
pub mod interaction;

pub use input::{
    FrameInput, InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent,
};
pub use interaction::InteractionState;
