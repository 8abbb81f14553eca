//! `quill`: a minimal terminal text editor.
//!
//! Usage: `quill [FILE]`. Ctrl+Q quits; Escape closes the file dialog.
//! Set `RUST_LOG=debug` and redirect stderr to see what the editor is doing.

use quill_ui::app::{App, AppConfig};
use quill_ui::error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::init();
    let config = AppConfig::from_args();
    log::info!("starting {} ({:?})", config.title, config.path);
    App::new(config)?.run()
}
