//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive the editor [`App`](crate::app::App) frame by
//! frame without a terminal. Use [`render_to_string`] to capture a widget
//! tree as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{compositor_to_string, render_to_string};
