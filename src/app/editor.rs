//! The editor's two widget trees and the actions their buttons raise.
//!
//! The window holds a toolbar, the text area and a status line. The file
//! dialog is a separate root drawn over a faded window; while it is open it
//! is the active root and receives all input.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::color::Color;
use crate::dom::{WidgetId, WidgetTree};
use crate::error::{DocumentError, UiError};
use crate::geometry::Margin;
use crate::widget::{SharedBuffer, TextBuffer};
use crate::widgets::{Button, HorizontalBox, Input, Label, NullWidget, VerticalBox};

use super::document::{self, Document};

/// Which file operation the dialog performs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Open,
    SaveAs,
}

impl DialogKind {
    /// Caption of the dialog's confirm button.
    pub fn confirm_label(self) -> &'static str {
        match self {
            DialogKind::Open => "Load",
            DialogKind::SaveAs => "Save",
        }
    }
}

/// Something a button asked the editor to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorAction {
    ShowDialog(DialogKind),
    Confirm,
    Cancel,
}

type ActionQueue = Rc<RefCell<Vec<EditorAction>>>;

/// Widget handles and shared state of the editor.
pub struct Editor {
    pub tree: WidgetTree,
    pub window: WidgetId,
    pub dialog: WidgetId,
    pub text_area: WidgetId,
    pub path_input: WidgetId,
    pub confirm_button: WidgetId,
    pub status: WidgetId,
    pub text: SharedBuffer,
    pub path: SharedBuffer,
    pub document: Rc<RefCell<Document>>,
    actions: ActionQueue,
    dialog_kind: Option<DialogKind>,
}

impl Editor {
    pub const TEXT_AREA_PADDING: Margin = Margin::all(10.0);

    /// Build both trees around an empty, untitled document.
    pub fn new() -> Result<Self, UiError> {
        let mut tree = WidgetTree::new();
        let actions: ActionQueue = Rc::default();
        let text = TextBuffer::new().into_shared();
        let path = TextBuffer::new().into_shared();
        let document = Rc::new(RefCell::new(Document::new()));

        // Window: toolbar, text area, status line.
        let window = tree.insert(VerticalBox::new());
        let toolbar = tree.add_child(window, HorizontalBox::new(), 0.0)?;
        tree.add_child(
            toolbar,
            Button::new("Open").on_click(push(&actions, EditorAction::ShowDialog(DialogKind::Open))),
            0.0,
        )?;
        tree.add_child(
            toolbar,
            Button::new("Save As...")
                .on_click(push(&actions, EditorAction::ShowDialog(DialogKind::SaveAs))),
            0.0,
        )?;
        let title_source = Rc::clone(&document);
        tree.add_child(
            toolbar,
            Label::dynamic(move || title_source.borrow().title()).with_background(Color::RAY_WHITE),
            1.0,
        )?;

        let change_target = Rc::clone(&document);
        let text_area = tree.add_child(
            window,
            Input::new(Rc::clone(&text))
                .with_padding(Self::TEXT_AREA_PADDING)
                .on_change(move |buffer| change_target.borrow_mut().refresh(buffer)),
            1.0,
        )?;
        let status_source = Rc::clone(&text);
        let status = tree.add_child(
            window,
            Label::dynamic(move || status_line(&status_source.borrow())),
            0.0,
        )?;

        // Dialog: a centred row of path input and two buttons.
        let dialog = tree.insert(VerticalBox::new());
        tree.add_child(dialog, NullWidget, 0.5)?;
        let middle = tree.add_child(dialog, HorizontalBox::new(), 0.0)?;
        tree.add_child(middle, NullWidget, 0.25)?;
        let row = tree.add_child(middle, HorizontalBox::new(), 0.5)?;
        tree.add_child(middle, NullWidget, 0.25)?;
        tree.add_child(dialog, NullWidget, 0.5)?;

        let path_input = tree.add_child(row, Input::new(Rc::clone(&path)), 1.0)?;
        let confirm_button = tree.add_child(
            row,
            Button::new("Load/Save").on_click(push(&actions, EditorAction::Confirm)),
            0.0,
        )?;
        tree.add_child(
            row,
            Button::new("Cancel").on_click(push(&actions, EditorAction::Cancel)),
            0.0,
        )?;

        Ok(Self {
            tree,
            window,
            dialog,
            text_area,
            path_input,
            confirm_button,
            status,
            text,
            path,
            document,
            actions,
            dialog_kind: None,
        })
    }

    /// The root receiving input this frame.
    pub fn active_root(&self) -> WidgetId {
        if self.dialog_kind.is_some() {
            self.dialog
        } else {
            self.window
        }
    }

    pub fn dialog_kind(&self) -> Option<DialogKind> {
        self.dialog_kind
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_kind.is_some()
    }

    /// Show the file dialog, pre-filled with the current document path.
    pub fn show_dialog(&mut self, kind: DialogKind) {
        if let Some(button) = self.tree.widget_mut::<Button>(self.confirm_button) {
            button.set_text(kind.confirm_label());
        }
        let current = self
            .document
            .borrow()
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.path.borrow_mut().replace_lines(vec![current]);
        log::debug!("dialog {:?} opened", kind);
        self.dialog_kind = Some(kind);
    }

    pub fn close_dialog(&mut self) {
        if self.dialog_kind.take().is_some() {
            log::debug!("dialog closed");
        }
    }

    /// Load or save through the dialog's path. Closes the dialog on success.
    ///
    /// Only the first line of the path input counts; anything typed after an
    /// Enter is ignored.
    pub fn confirm_dialog(&mut self) -> Result<(), DocumentError> {
        let Some(kind) = self.dialog_kind else {
            return Ok(());
        };
        let path = document::parse_path(&self.path.borrow().lines()[0])?;
        match kind {
            DialogKind::Open => self.load(&path)?,
            DialogKind::SaveAs => self.save(&path)?,
        }
        self.close_dialog();
        Ok(())
    }

    /// Replace the text area's contents with the file at `path`.
    pub fn load(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.document
            .borrow_mut()
            .load(path, &mut self.text.borrow_mut())
    }

    pub fn save(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.document.borrow_mut().save(path, &self.text.borrow())
    }

    /// Apply every action queued by button clicks since the last call.
    ///
    /// Returns whether any action ran. Failed loads and saves are logged and
    /// leave the dialog open.
    pub fn apply_actions(&mut self) -> bool {
        let pending: Vec<EditorAction> = self.actions.borrow_mut().drain(..).collect();
        for action in &pending {
            match *action {
                EditorAction::ShowDialog(kind) => self.show_dialog(kind),
                EditorAction::Confirm => {
                    if let Err(err) = self.confirm_dialog() {
                        log::error!("{err}");
                    }
                }
                EditorAction::Cancel => self.close_dialog(),
            }
        }
        !pending.is_empty()
    }

    /// Queue an action as if a button had raised it.
    pub fn queue(&self, action: EditorAction) {
        self.actions.borrow_mut().push(action);
    }
}

/// `Line {l}/{n} : Column {c}`, one-based.
pub fn status_line(buffer: &TextBuffer) -> String {
    format!(
        "Line {}/{} : Column {}",
        buffer.cursor_line() + 1,
        buffer.line_count(),
        buffer.cursor_column() + 1
    )
}

fn push(actions: &ActionQueue, action: EditorAction) -> impl FnMut() + 'static {
    let actions = Rc::clone(actions);
    move || actions.borrow_mut().push(action)
}
