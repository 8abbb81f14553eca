//! Error types.
//!
//! Core editing, layout and interaction never fail; they clamp. Errors only
//! arise while assembling a widget tree and at the application's I/O edges.

use std::io;
use std::path::PathBuf;

use crate::dom::WidgetId;

/// Errors raised while building or editing a [`WidgetTree`](crate::dom::WidgetTree).
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no widget with handle {0:?}")]
    UnknownWidget(WidgetId),

    #[error("{widget_type} {id:?} is a leaf and cannot hold slots")]
    NotAContainer { id: WidgetId, widget_type: &'static str },

    #[error("adding {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: WidgetId, child: WidgetId },
}

/// Errors from loading or saving a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no file path given")]
    EmptyPath,
}

/// Top-level error of the editor binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Ui(#[from] UiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_error_mentions_path() {
        let err = DocumentError::Open {
            path: PathBuf::from("/tmp/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn app_error_wraps_io() {
        let err: AppError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
