//! The document being edited: its path, saved contents and modified flag.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::DocumentError;
use crate::widget::TextBuffer;

/// Shown in place of a path for a document that was never saved.
pub const UNTITLED: &str = "<New File>";

/// File state behind the text area.
///
/// The lines themselves live in the text area's buffer; the document keeps
/// the last loaded or saved copy to derive the modified flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: Option<PathBuf>,
    original: Vec<String>,
    modified: bool,
}

impl Document {
    /// An unsaved, empty document.
    pub fn new() -> Self {
        Self {
            path: None,
            original: vec![String::new()],
            modified: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// The path (or [`UNTITLED`]) with a ` (modified)` suffix when dirty.
    pub fn title(&self) -> String {
        let name = match &self.path {
            Some(path) => path.display().to_string(),
            None => UNTITLED.to_string(),
        };
        if self.modified {
            format!("{name} (modified)")
        } else {
            name
        }
    }

    /// Recompute the modified flag against the last loaded or saved lines.
    pub fn refresh(&mut self, buffer: &TextBuffer) {
        self.modified = buffer.lines() != self.original.as_slice();
    }

    /// Read `path` into `buffer`. On failure both are left untouched.
    pub fn load(&mut self, path: &Path, buffer: &mut TextBuffer) -> Result<(), DocumentError> {
        let lines = read_lines(path)?;
        log::debug!("loaded {} lines from {}", lines.len(), path.display());
        buffer.replace_lines(lines);
        self.original = buffer.lines().to_vec();
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Write `buffer` to `path`, each line terminated by `\n`.
    pub fn save(&mut self, path: &Path, buffer: &TextBuffer) -> Result<(), DocumentError> {
        write_lines(path, buffer.lines()).map_err(|source| DocumentError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved {} lines to {}", buffer.line_count(), path.display());
        self.original = buffer.lines().to_vec();
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn dialog text into a path, rejecting blank input.
pub fn parse_path(text: &str) -> Result<PathBuf, DocumentError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DocumentError::EmptyPath);
    }
    Ok(PathBuf::from(text))
}

fn read_lines(path: &Path) -> Result<Vec<String>, DocumentError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
