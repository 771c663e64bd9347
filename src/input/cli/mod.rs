pub mod args;
pub mod run_zoom;
