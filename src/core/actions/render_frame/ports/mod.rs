pub mod progress_reporter;
