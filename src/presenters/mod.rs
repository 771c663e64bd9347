//! Output adapters: image files for finished frames, console progress.

pub mod file;
pub mod progress;
