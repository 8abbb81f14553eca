//! Input event types and the per-frame input snapshot.
//!
//! Crossterm events are converted into [`InputEvent`] via `From` impls so the
//! rest of the toolkit never depends on crossterm directly. A frame's worth of
//! events is then folded into a [`FrameInput`], which is what the interaction
//! controller consumes.

use std::collections::VecDeque;
use std::ops::{BitAnd, BitOr};

use crate::geometry::Point;
use crate::render::MonospaceMetrics;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    /// A key crossterm reports that the toolkit has no use for.
    Unsupported,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent / MouseEvent / InputEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Whether this is `Ctrl+<c>`.
    pub fn is_ctrl(&self, c: char) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
            && matches!(self.code, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseBtn),
    Up(MouseBtn),
    Drag(MouseBtn),
    Moved,
    ScrollUp,
    ScrollDown,
    /// Horizontal wheel motion; ignored by the toolkit.
    ScrollSideways,
}

/// A mouse event at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseAction,
    pub column: u16,
    pub row: u16,
    pub modifiers: Modifiers,
}

/// Top-level input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    Paste(String),
    FocusGained,
    FocusLost,
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;
    let mut out = Modifiers::NONE;
    if m.contains(KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyCode;
        let code = match ct.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => Key::Unsupported,
        };
        KeyEvent {
            code,
            modifiers: convert_modifiers(ct.modifiers),
        }
    }
}

fn convert_mouse_button(b: crossterm::event::MouseButton) -> MouseBtn {
    use crossterm::event::MouseButton;
    match b {
        MouseButton::Left => MouseBtn::Left,
        MouseButton::Right => MouseBtn::Right,
        MouseButton::Middle => MouseBtn::Middle,
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind;
        let kind = match me.kind {
            MouseEventKind::Down(b) => MouseAction::Down(convert_mouse_button(b)),
            MouseEventKind::Up(b) => MouseAction::Up(convert_mouse_button(b)),
            MouseEventKind::Drag(b) => MouseAction::Drag(convert_mouse_button(b)),
            MouseEventKind::Moved => MouseAction::Moved,
            MouseEventKind::ScrollUp => MouseAction::ScrollUp,
            MouseEventKind::ScrollDown => MouseAction::ScrollDown,
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => MouseAction::ScrollSideways,
        };
        MouseEvent {
            kind,
            column: me.column,
            row: me.row,
            modifiers: convert_modifiers(me.modifiers),
        }
    }
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(ct: crossterm::event::Event) -> Self {
        use crossterm::event::Event;
        match ct {
            Event::Key(ke) => InputEvent::Key(KeyEvent::from(ke)),
            Event::Mouse(me) => InputEvent::Mouse(MouseEvent::from(me)),
            Event::Resize(width, height) => InputEvent::Resize { width, height },
            Event::Paste(s) => InputEvent::Paste(s),
            Event::FocusGained => InputEvent::FocusGained,
            Event::FocusLost => InputEvent::FocusLost,
        }
    }
}

// ---------------------------------------------------------------------------
// FrameInput
// ---------------------------------------------------------------------------

/// Everything the interaction controller consumes in one frame.
///
/// Pointer coordinates are logical pixels. The keyboard queues are drained by
/// the controller; anything left over is dropped with the frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Latest pointer position reported this frame, if the pointer moved.
    pub pointer: Option<Point>,
    /// The primary button went down this frame.
    pub pressed: bool,
    /// The primary button went up this frame.
    pub released: bool,
    /// Wheel notches; positive scrolls toward the top.
    pub wheel: f32,
    /// Typed characters in arrival order.
    pub chars: VecDeque<char>,
    /// Symbolic key presses in arrival order.
    pub keys: VecDeque<Key>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.pointer = Some(point);
        self
    }

    pub fn press(&mut self) -> &mut Self {
        self.pressed = true;
        self
    }

    pub fn release(&mut self) -> &mut Self {
        self.released = true;
        self
    }

    pub fn scroll(&mut self, notches: f32) -> &mut Self {
        self.wheel += notches;
        self
    }

    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.chars.extend(text.chars());
        self
    }

    pub fn key(&mut self, key: Key) -> &mut Self {
        self.keys.push_back(key);
        self
    }

    /// Fold one terminal event into this frame.
    ///
    /// Mouse cells map to the pixel centre of the cell. Plain and shifted
    /// character keys go to the character queue; everything else that is a
    /// key press goes to the key queue.
    pub fn push(&mut self, event: &InputEvent, cell: MonospaceMetrics) {
        match event {
            InputEvent::Key(ke) => match ke.code {
                Key::Char(c)
                    if !ke.modifiers.contains(Modifiers::CTRL)
                        && !ke.modifiers.contains(Modifiers::ALT) =>
                {
                    self.chars.push_back(c);
                }
                Key::Char(_) | Key::Unsupported => {}
                code => self.keys.push_back(code),
            },
            InputEvent::Mouse(me) => {
                self.pointer = Some(Point::new(
                    (me.column as f32 + 0.5) * cell.glyph_width,
                    (me.row as f32 + 0.5) * cell.line_height,
                ));
                match me.kind {
                    MouseAction::Down(MouseBtn::Left) => self.pressed = true,
                    MouseAction::Up(MouseBtn::Left) => self.released = true,
                    MouseAction::ScrollUp => self.wheel += 1.0,
                    MouseAction::ScrollDown => self.wheel -= 1.0,
                    _ => {}
                }
            }
            InputEvent::Paste(text) => {
                self.chars.extend(text.chars().filter(|c| !c.is_control()));
            }
            InputEvent::Resize { .. } | InputEvent::FocusGained | InputEvent::FocusLost => {}
        }
    }

    /// Whether nothing at all happened this frame.
    pub fn is_idle(&self) -> bool {
        self.pointer.is_none()
            && !self.pressed
            && !self.released
            && self.wheel == 0.0
            && self.chars.is_empty()
            && self.keys.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
